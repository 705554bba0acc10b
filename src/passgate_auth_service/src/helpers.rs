use std::str::FromStr;

use passgate_adapters::persistence::{POSTGRES_MIGRATOR, SQLITE_MIGRATOR};
use sqlx::{
    PgPool, SqlitePool,
    postgres::PgPoolOptions,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

/// Connect to SQLite and run pending migrations.
///
/// The database file is created if it does not exist.
pub async fn configure_sqlite(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let pool = get_sqlite_pool(url).await?;
    SQLITE_MIGRATOR.run(&pool).await?;
    Ok(pool)
}

/// Connect to PostgreSQL and run pending migrations.
pub async fn configure_postgresql(url: &str) -> Result<PgPool, sqlx::Error> {
    let pool = get_postgres_pool(url).await?;
    POSTGRES_MIGRATOR.run(&pool).await?;
    Ok(pool)
}

pub async fn get_sqlite_pool(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

    // Each connection to an in-memory database sees its own empty database,
    // so those get a single connection that is never recycled.
    if url.contains(":memory:") || url.contains("mode=memory") {
        return SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await;
    }

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

pub async fn get_postgres_pool(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(5).connect(url).await
}
