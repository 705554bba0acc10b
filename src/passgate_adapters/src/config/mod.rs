pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    AllowedOrigins, AppSetting, AuthServiceSetting, AuthSetting, DatabaseBackend,
    DatabaseSetting, JwtSetting, SettingsError,
};
