use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use passgate_core::{TokenService, UserId};
use serde::{Deserialize, Serialize};

use super::error::AuthApiError;

#[derive(Debug, Deserialize)]
pub struct VerifyTokenRequest {
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VerifiedTokenResponse {
    pub user_id: UserId,
}

#[tracing::instrument(name = "Verify Token", skip_all)]
pub async fn verify_token<T>(
    State(token_service): State<T>,
    request: Result<Json<VerifyTokenRequest>, JsonRejection>,
) -> Result<Json<VerifiedTokenResponse>, AuthApiError>
where
    T: TokenService + Clone + 'static,
{
    let Json(request) = request?;

    let user_id = token_service.verify(&request.token)?;

    Ok(Json(VerifiedTokenResponse { user_id }))
}
