use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use passgate_core::{TokenService, UserId};

use crate::http::routes::AuthApiError;

/// Extractor for routes that require a valid bearer token.
///
/// The router state must be the token service itself.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser(pub UserId);

impl<T> FromRequestParts<T> for AuthenticatedUser
where
    T: TokenService + Send + Sync,
{
    type Rejection = AuthApiError;

    async fn from_request_parts(parts: &mut Parts, token_service: &T) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, token_service)
                .await
                .map_err(|rejection| {
                    if rejection.is_missing() {
                        AuthApiError::MissingToken
                    } else {
                        AuthApiError::InvalidToken
                    }
                })?;

        let user_id = token_service.verify(bearer.token())?;
        Ok(Self(user_id))
    }
}
