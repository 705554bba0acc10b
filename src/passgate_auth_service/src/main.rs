use color_eyre::eyre::WrapErr;
use passgate_adapters::{
    auth_validation::{JwtAuthConfig, JwtTokenService},
    config::{AuthServiceSetting, DatabaseBackend},
    hashing::Argon2PasswordHasher,
    persistence::{PostgresUserStore, SqliteUserStore},
};
use passgate_auth_service::{AuthService, configure_postgresql, configure_sqlite, telemetry};
use secrecy::ExposeSecret;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    telemetry::init_tracing()?;

    let settings = AuthServiceSetting::load().wrap_err("Failed to load settings")?;
    let allowed_origins = settings.allowed_origins()?;

    let token_service = JwtTokenService::new(JwtAuthConfig::from(&settings.auth.jwt))
        .wrap_err("Invalid token configuration")?;
    let password_hasher = Argon2PasswordHasher::default();

    let listener = TcpListener::bind(&settings.app.address)
        .await
        .wrap_err_with(|| format!("Failed to bind {}", settings.app.address))?;

    let database_url = settings.database.url.expose_secret();
    let service = match settings.database.backend()? {
        DatabaseBackend::Sqlite => {
            let pool = configure_sqlite(database_url)
                .await
                .wrap_err("Failed to set up SQLite")?;
            AuthService::new(SqliteUserStore::new(pool), password_hasher, token_service)
        }
        DatabaseBackend::Postgres => {
            let pool = configure_postgresql(database_url)
                .await
                .wrap_err("Failed to set up PostgreSQL")?;
            AuthService::new(PostgresUserStore::new(pool), password_hasher, token_service)
        }
    };

    service.run_standalone(listener, allowed_origins).await?;

    Ok(())
}
