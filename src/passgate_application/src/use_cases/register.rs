use passgate_core::{
    AuthResponse, Email, Password, PasswordHasher, PasswordHasherError, TokenError, TokenService,
    User, UserId, UserStore, UserStoreError,
};

/// Error types specific to register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl From<UserStoreError> for RegisterError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => Self::UserAlreadyExists,
            other => Self::UserStoreError(other),
        }
    }
}

/// Register use case - hashes the password, issues a token and persists the user
pub struct RegisterUseCase<'a, U, H, T>
where
    U: UserStore,
    H: PasswordHasher,
    T: TokenService,
{
    user_store: &'a U,
    password_hasher: &'a H,
    token_service: &'a T,
}

impl<'a, U, H, T> RegisterUseCase<'a, U, H, T>
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

    /// Execute the register use case
    ///
    /// # Arguments
    /// * `email` - Validated email address
    /// * `password` - Password that passed the registration policy
    ///
    /// # Returns
    /// A fresh token and the public view of the new user. Nothing is stored
    /// unless every step succeeds.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
    ) -> Result<AuthResponse, RegisterError> {
        let password_hash = self.password_hasher.hash(password).await?;
        let user = User::new(UserId::new(), email, password_hash);

        // Signed before the insert, which must be the last fallible step.
        let token = self.token_service.issue(user.id())?;

        let public_user = user.to_public();

        // The store's uniqueness constraint is the only duplicate check.
        self.user_store.create(user).await?;
        tracing::info!(user_id = %public_user.id, "User registered");

        Ok(AuthResponse {
            token,
            user: public_user,
        })
    }
}
