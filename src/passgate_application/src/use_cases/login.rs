use passgate_core::{
    AuthResponse, Email, PasswordCandidate, PasswordHasher, PasswordHasherError, TokenError,
    TokenService, UserStore, UserStoreError,
};

/// Error types specific to login use case
///
/// An unknown email and a wrong password both become `InvalidCredentials`.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(PasswordHasherError),
    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl From<UserStoreError> for LoginError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserNotFound => Self::InvalidCredentials,
            other => Self::UserStoreError(other),
        }
    }
}

impl From<PasswordHasherError> for LoginError {
    fn from(error: PasswordHasherError) -> Self {
        match error {
            PasswordHasherError::Mismatch => Self::InvalidCredentials,
            other => Self::PasswordHasherError(other),
        }
    }
}

/// Login use case - handles user authentication
pub struct LoginUseCase<'a, U, H, T>
where
    U: UserStore,
    H: PasswordHasher,
    T: TokenService,
{
    user_store: &'a U,
    password_hasher: &'a H,
    token_service: &'a T,
}

impl<'a, U, H, T> LoginUseCase<'a, U, H, T>
where
    U: UserStore,
    H: PasswordHasher,
    T: TokenService,
{
    pub fn new(user_store: &'a U, password_hasher: &'a H, token_service: &'a T) -> Self {
        Self {
            user_store,
            password_hasher,
            token_service,
        }
    }

    /// Execute the login use case
    ///
    /// # Arguments
    /// * `email` - User's email address
    /// * `password` - Password candidate
    ///
    /// # Returns
    /// A fresh token and the public view of the user. Read-only on the store.
    #[tracing::instrument(name = "LoginUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: Email,
        password: PasswordCandidate,
    ) -> Result<AuthResponse, LoginError> {
        let user = self.user_store.find_by_email(&email).await?;

        self.password_hasher
            .verify(password, user.password_hash().clone())
            .await?;

        let token = self.token_service.issue(user.id())?;
        tracing::info!(user_id = %user.id(), "User logged in");

        Ok(AuthResponse {
            token,
            user: user.to_public(),
        })
    }
}
