pub mod authenticated_user;
pub mod jwt_token_service;

pub use authenticated_user::AuthenticatedUser;
pub use jwt_token_service::{Claims, JwtAuthConfig, JwtAuthConfigError, JwtTokenService};
