pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const APP_ADDRESS_ENV_VAR: &str = "APP_ADDRESS";
    pub const AUTH_SERVICE_ALLOWED_ORIGINS_ENV_VAR: &str = "AUTH_SERVICE_ALLOWED_ORIGINS";
    pub const CONFIG_PATH_ENV_VAR: &str = "PASSGATE_CONFIG";
    pub const PREFIX: &str = "PASSGATE";
}

pub const DEFAULT_CONFIG_PATH: &str = "config/settings";

/// 72 hours.
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 72 * 60 * 60;

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const DATABASE_URL: &str = "sqlite:database.db";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub const DATABASE_URL: &str = "sqlite::memory:";
}
