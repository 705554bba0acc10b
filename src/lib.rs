//! # Passgate - Email and Password Authentication Library
//!
//! Facade crate re-exporting the public APIs of the passgate components.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! passgate = { path = "../passgate" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `User`, `AuthToken`, etc.
//! - **Ports**: `UserStore`, `PasswordHasher`, `TokenService`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`
//! - **Adapters**: `SqliteUserStore`, `PostgresUserStore`, `Argon2PasswordHasher`, `JwtTokenService`
//! - **Service**: `AuthService`, the HTTP entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use passgate_core::*;
}

pub use passgate_core::{
    AuthResponse, AuthToken, Email, HashedPassword, Password, PasswordCandidate, PublicUser, User,
    UserError, UserId,
};

// ============================================================================
// Ports
// ============================================================================

/// Repository and service trait definitions
pub mod ports {
    pub use passgate_core::{
        PasswordHasher, PasswordHasherError, TokenError, TokenService, UserStore, UserStoreError,
    };
}

pub use ports::{
    PasswordHasher, PasswordHasherError, TokenError, TokenService, UserStore, UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use passgate_application::*;
}

pub use passgate_application::{LoginError, LoginUseCase, RegisterError, RegisterUseCase};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use passgate_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use passgate_adapters::persistence::*;
    }

    /// Password hashing
    pub mod hashing {
        pub use passgate_adapters::hashing::*;
    }

    /// JWT issuing and validation
    pub mod auth {
        pub use passgate_adapters::auth_validation::*;
    }

    /// Configuration
    pub mod config {
        pub use passgate_adapters::config::*;
    }
}

pub use passgate_adapters::{
    auth_validation::{JwtAuthConfig, JwtAuthConfigError, JwtTokenService},
    hashing::Argon2PasswordHasher,
    persistence::{HashMapUserStore, PostgresUserStore, SqliteUserStore},
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

pub use passgate_auth_service::{AuthService, configure_postgresql, configure_sqlite};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
