pub mod hashmap_user_store;
pub mod postgres_user_store;
pub mod sqlite_user_store;

pub use hashmap_user_store::HashMapUserStore;
pub use postgres_user_store::{POSTGRES_MIGRATOR, PostgresUserStore};
pub use sqlite_user_store::{SQLITE_MIGRATOR, SqliteUserStore};

use passgate_core::{Email, HashedPassword, User, UserId, UserStoreError};
use secrecy::Secret;

// A violated unique index on insert means the email is taken.
fn map_insert_error(error: sqlx::Error) -> UserStoreError {
    if let Some(db_err) = error.as_database_error() {
        if db_err.is_unique_violation() {
            return UserStoreError::UserAlreadyExists;
        }
    }
    UserStoreError::UnexpectedError(error.to_string())
}

fn unexpected(error: impl std::fmt::Display) -> UserStoreError {
    UserStoreError::UnexpectedError(error.to_string())
}

fn user_from_columns(
    id: UserId,
    email: String,
    password_hash: String,
) -> Result<User, UserStoreError> {
    let email = Email::try_from(Secret::from(email)).map_err(unexpected)?;
    Ok(User::new(id, email, HashedPassword::new(Secret::from(password_hash))))
}
