use axum::Json;

use super::verify_token::VerifiedTokenResponse;
use crate::auth_validation::AuthenticatedUser;

#[tracing::instrument(name = "Me", skip_all)]
pub async fn me(AuthenticatedUser(user_id): AuthenticatedUser) -> Json<VerifiedTokenResponse> {
    Json(VerifiedTokenResponse { user_id })
}
