use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{email::Email, user::User};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Persistent credential storage.
///
/// Implementations must enforce email uniqueness atomically: two concurrent
/// `create` calls for the same email may not both succeed, and a failed
/// `create` leaves nothing behind.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user. The identifier is assigned by the caller.
    async fn create(&self, user: User) -> Result<(), UserStoreError>;

    /// Exact-match lookup by email.
    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError>;
}
