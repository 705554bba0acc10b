pub mod error;
pub mod login;
pub mod me;
pub mod register;
pub mod root;
pub mod verify_token;

pub use error::{AuthApiError, ErrorResponse};
pub use login::{LoginRequest, login};
pub use me::me;
pub use register::{RegisterRequest, register};
pub use root::root;
pub use verify_token::{VerifiedTokenResponse, VerifyTokenRequest, verify_token};

/// Shared state of the register and login routes.
#[derive(Clone)]
pub struct AuthState<U, H, T> {
    pub user_store: U,
    pub password_hasher: H,
    pub token_service: T,
}
