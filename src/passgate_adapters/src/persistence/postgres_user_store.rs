use passgate_core::{Email, User, UserId, UserStore, UserStoreError};
use secrecy::ExposeSecret;
use sqlx::{PgPool, Row, migrate::Migrator};
use uuid::Uuid;

use super::{map_insert_error, unexpected, user_from_columns};

pub static POSTGRES_MIGRATOR: Migrator = sqlx::migrate!("./migrations/postgres");

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresUserStore { pool }
    }

    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        POSTGRES_MIGRATOR.run(&self.pool).await
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn create(&self, user: User) -> Result<(), UserStoreError> {
        sqlx::query(
            r#"
                INSERT INTO users (id, email, password_hash)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(*user.id().as_uuid())
        .bind(user.email().as_str())
        .bind(user.password_hash().as_ref().expose_secret().as_str())
        .execute(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(())
    }

    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        let row = sqlx::query(
            r#"
                SELECT id, email, password_hash
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        let id: Uuid = row.try_get("id").map_err(unexpected)?;
        user_from_columns(
            UserId::from(id),
            row.try_get("email").map_err(unexpected)?,
            row.try_get("password_hash").map_err(unexpected)?,
        )
    }
}
