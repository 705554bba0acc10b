pub mod auth_token;
pub mod email;
pub mod hashed_password;
pub mod password;
pub mod user;
pub mod user_id;
