pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    auth_token::{AuthResponse, AuthToken},
    email::Email,
    hashed_password::HashedPassword,
    password::{MIN_PASSWORD_LENGTH, Password, PasswordCandidate},
    user::{PublicUser, User, UserError},
    user_id::UserId,
};

pub use ports::{
    repositories::{UserStore, UserStoreError},
    services::{PasswordHasher, PasswordHasherError, TokenError, TokenService},
};
