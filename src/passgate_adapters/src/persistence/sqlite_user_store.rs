use passgate_core::{Email, User, UserId, UserStore, UserStoreError};
use secrecy::ExposeSecret;
use sqlx::{Row, SqlitePool, migrate::Migrator};

use super::{map_insert_error, unexpected, user_from_columns};

pub static SQLITE_MIGRATOR: Migrator = sqlx::migrate!("./migrations/sqlite");

#[derive(Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        SqliteUserStore { pool }
    }

    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        SQLITE_MIGRATOR.run(&self.pool).await
    }
}

#[async_trait::async_trait]
impl UserStore for SqliteUserStore {
    #[tracing::instrument(name = "Adding user to SQLite", skip_all)]
    async fn create(&self, user: User) -> Result<(), UserStoreError> {
        sqlx::query(
            r#"
                INSERT INTO users (id, email, password_hash)
                VALUES (?, ?, ?)
            "#,
        )
        .bind(user.id().to_string())
        .bind(user.email().as_str())
        .bind(user.password_hash().as_ref().expose_secret().as_str())
        .execute(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(())
    }

    #[tracing::instrument(name = "Retrieving user from SQLite", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        let row = sqlx::query(
            r#"
                SELECT id, email, password_hash
                FROM users
                WHERE email = ?
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        let id: String = row.try_get("id").map_err(unexpected)?;
        let id = UserId::parse_str(&id).map_err(unexpected)?;
        user_from_columns(
            id,
            row.try_get("email").map_err(unexpected)?,
            row.try_get("password_hash").map_err(unexpected)?,
        )
    }
}
