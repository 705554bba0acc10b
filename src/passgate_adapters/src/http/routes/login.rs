use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use passgate_application::LoginUseCase;
use passgate_core::{Email, PasswordCandidate, PasswordHasher, TokenService, UserStore};
use secrecy::Secret;
use serde::Deserialize;

use super::{AuthState, error::AuthApiError};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U, H, T>(
    State(state): State<AuthState<U, H, T>>,
    request: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AuthApiError>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    T: TokenService + Clone + 'static,
{
    let Json(request) = request?;

    let email = Email::try_from(request.email)?;
    // Length policy applies to registration only; a short guess is just wrong.
    let password = PasswordCandidate::try_from(request.password)?;

    let response = LoginUseCase::new(
        &state.user_store,
        &state.password_hasher,
        &state.token_service,
    )
    .execute(email, password)
    .await?;

    Ok(Json(response))
}
