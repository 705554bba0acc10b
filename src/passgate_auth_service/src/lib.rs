mod auth_service;
mod helpers;
pub mod telemetry;

pub use auth_service::AuthService;
pub use helpers::{configure_postgresql, configure_sqlite, get_postgres_pool, get_sqlite_pool};
