use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use passgate_application::RegisterUseCase;
use passgate_core::{Email, Password, PasswordHasher, TokenService, UserStore};
use secrecy::Secret;
use serde::Deserialize;

use super::{AuthState, error::AuthApiError};

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U, H, T>(
    State(state): State<AuthState<U, H, T>>,
    request: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    T: TokenService + Clone + 'static,
{
    let Json(request) = request?;

    let email = Email::try_from(request.email)?;
    let password = Password::try_from(request.password)?;

    let response = RegisterUseCase::new(
        &state.user_store,
        &state.password_hasher,
        &state.token_service,
    )
    .execute(email, password)
    .await?;

    Ok((StatusCode::CREATED, Json(response)))
}
