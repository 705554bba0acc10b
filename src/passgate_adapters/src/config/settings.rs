use axum::http::HeaderValue;
use config::{
    Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, Map, builder::DefaultState,
};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use thiserror::Error;

use super::constants::{DEFAULT_CONFIG_PATH, DEFAULT_TOKEN_TTL_SECONDS, env, prod};
use crate::auth_validation::JwtAuthConfig;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("JWT secret must be configured and non-empty")]
    MissingJwtSecret,
    #[error("Token time to live must be positive and representable, got {0}")]
    InvalidTokenTtl(i64),
    #[error("Unsupported database scheme: {0}")]
    UnsupportedDatabase(String),
    #[error("Invalid allowed origin: {0}")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthServiceSetting {
    pub app: AppSetting,
    pub database: DatabaseSetting,
    pub auth: AuthSetting,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSetting {
    pub address: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSetting {
    pub url: Secret<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSetting {
    pub jwt: JwtSetting,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSetting {
    pub secret: Secret<String>,
    /// Seconds.
    pub time_to_live: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackend {
    Sqlite,
    Postgres,
}

impl DatabaseSetting {
    pub fn backend(&self) -> Result<DatabaseBackend, SettingsError> {
        let url = self.url.expose_secret();
        if url.starts_with("sqlite:") {
            Ok(DatabaseBackend::Sqlite)
        } else if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(DatabaseBackend::Postgres)
        } else {
            // Only the scheme; the rest may hold credentials.
            let scheme = url.split(':').next().unwrap_or_default();
            Err(SettingsError::UnsupportedDatabase(scheme.to_owned()))
        }
    }
}

impl From<&JwtSetting> for JwtAuthConfig {
    fn from(setting: &JwtSetting) -> Self {
        JwtAuthConfig {
            jwt_secret: setting.secret.clone(),
            token_ttl_in_seconds: setting.time_to_live,
        }
    }
}

/// CORS origins allowed to call the service.
#[derive(Debug, Clone, Default)]
pub struct AllowedOrigins(Vec<HeaderValue>);

impl AllowedOrigins {
    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.0.contains(origin)
    }
}

impl TryFrom<&[String]> for AllowedOrigins {
    type Error = SettingsError;

    fn try_from(origins: &[String]) -> Result<Self, Self::Error> {
        origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| SettingsError::InvalidOrigin(origin.clone()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl AuthServiceSetting {
    /// Load settings from defaults, an optional JSON file, `PASSGATE__*`
    /// variables and the conventional `JWT_SECRET`/`DATABASE_URL`/... variables,
    /// in increasing precedence. A `.env` file is read first if present.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();
        Self::load_from_env(std::env::vars().collect())
    }

    /// Same as [`AuthServiceSetting::load`], reading variables from `vars`
    /// instead of the process environment.
    pub fn load_from_env(vars: Map<String, String>) -> Result<Self, SettingsError> {
        let var = |key: &str| vars.get(key).cloned();
        let path = var(env::CONFIG_PATH_ENV_VAR).unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_owned());

        let builder = Self::defaults()?
            .add_source(File::with_name(&path).required(false))
            .add_source(
                Environment::with_prefix(env::PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars.clone())),
            )
            .set_override_option("auth.jwt.secret", var(env::JWT_SECRET_ENV_VAR))?
            .set_override_option("database.url", var(env::DATABASE_URL_ENV_VAR))?
            .set_override_option("app.address", var(env::APP_ADDRESS_ENV_VAR))?
            .set_override_option(
                "allowed_origins",
                var(env::AUTH_SERVICE_ALLOWED_ORIGINS_ENV_VAR).map(|raw| split_origins(&raw)),
            )?;

        Self::from_builder(builder)
    }

    /// Defaults overlaid with a JSON document.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Self::from_builder(Self::defaults()?.add_source(File::from_str(json, FileFormat::Json)))
    }

    pub fn allowed_origins(&self) -> Result<Option<AllowedOrigins>, SettingsError> {
        if self.allowed_origins.is_empty() {
            return Ok(None);
        }
        AllowedOrigins::try_from(self.allowed_origins.as_slice()).map(Some)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.address", prod::APP_ADDRESS)?
            .set_default("database.url", prod::DATABASE_URL)?
            .set_default("auth.jwt.time_to_live", DEFAULT_TOKEN_TTL_SECONDS)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, SettingsError> {
        let config = builder.build()?;
        // No default exists for the secret; report it by name.
        if config.get_string("auth.jwt.secret").is_err() {
            return Err(SettingsError::MissingJwtSecret);
        }
        let settings: Self = config.try_deserialize()?;
        settings.validate()
    }

    fn validate(self) -> Result<Self, SettingsError> {
        if self.auth.jwt.secret.expose_secret().trim().is_empty() {
            return Err(SettingsError::MissingJwtSecret);
        }
        let ttl = self.auth.jwt.time_to_live;
        if ttl <= 0 || JwtAuthConfig::from(&self.auth.jwt).validate().is_err() {
            return Err(SettingsError::InvalidTokenTtl(ttl));
        }
        self.database.backend()?;
        self.allowed_origins()?;
        Ok(self)
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_owned)
        .collect()
}
