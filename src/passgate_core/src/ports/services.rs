use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    auth_token::AuthToken,
    hashed_password::HashedPassword,
    password::{Password, PasswordCandidate},
    user_id::UserId,
};

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Password does not match")]
    Mismatch,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// One-way, salted, deliberately slow password hashing.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: Password) -> Result<HashedPassword, PasswordHasherError>;

    /// Returns `Mismatch` when the candidate does not produce `expected`.
    async fn verify(
        &self,
        candidate: PasswordCandidate,
        expected: HashedPassword,
    ) -> Result<(), PasswordHasherError>;
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Invalid token")]
    Invalid,
    #[error("Token expired")]
    Expired,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Stateless bearer token issuance and verification.
pub trait TokenService: Send + Sync {
    fn issue(&self, user_id: &UserId) -> Result<AuthToken, TokenError>;

    /// Checks signature, algorithm and expiry before trusting any claim.
    fn verify(&self, token: &str) -> Result<UserId, TokenError>;
}
