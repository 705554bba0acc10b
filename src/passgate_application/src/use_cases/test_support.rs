use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use passgate_core::{
    AuthToken, Email, HashedPassword, MIN_PASSWORD_LENGTH, Password, PasswordCandidate,
    PasswordHasher, PasswordHasherError, TokenError, TokenService, User, UserId, UserStore,
    UserStoreError,
};
use quickcheck::{Arbitrary, Gen};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

pub fn email(raw: &str) -> Email {
    Email::try_from(Secret::from(raw.to_owned())).unwrap()
}

pub fn password(raw: &str) -> Password {
    Password::try_from(Secret::from(raw.to_owned())).unwrap()
}

pub fn candidate(raw: &str) -> PasswordCandidate {
    PasswordCandidate::try_from(Secret::from(raw.to_owned())).unwrap()
}

/// Runs an async property body on a fresh runtime.
pub fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}

fn fake_password() -> String {
    fake::faker::internet::en::Password(MIN_PASSWORD_LENGTH..32).fake()
}

#[derive(Debug, Clone)]
pub struct ValidPassword(pub String);

impl ValidPassword {
    pub fn password(&self) -> Password {
        password(&self.0)
    }

    pub fn candidate(&self) -> PasswordCandidate {
        candidate(&self.0)
    }
}

impl Arbitrary for ValidPassword {
    fn arbitrary(_g: &mut Gen) -> Self {
        Self(fake_password())
    }
}

#[derive(Debug, Clone)]
pub struct ValidCredentials {
    pub email: String,
    pub password: ValidPassword,
}

impl ValidCredentials {
    pub fn email(&self) -> Email {
        email(&self.email)
    }

    pub fn password(&self) -> Password {
        self.password.password()
    }

    pub fn candidate(&self) -> PasswordCandidate {
        self.password.candidate()
    }
}

impl Arbitrary for ValidCredentials {
    fn arbitrary(g: &mut Gen) -> Self {
        Self {
            email: SafeEmail().fake(),
            password: ValidPassword::arbitrary(g),
        }
    }
}

#[derive(Default, Clone)]
pub struct MockUserStore {
    users: Arc<RwLock<HashMap<Email, User>>>,
}

impl MockUserStore {
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait::async_trait]
impl UserStore for MockUserStore {
    async fn create(&self, user: User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.email()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.insert(user.email().clone(), user);
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
            .get(email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }
}

pub struct BrokenUserStore;

#[async_trait::async_trait]
impl UserStore for BrokenUserStore {
    async fn create(&self, _: User) -> Result<(), UserStoreError> {
        Err(UserStoreError::UnexpectedError("disk full".to_owned()))
    }

    async fn find_by_email(&self, _: &Email) -> Result<User, UserStoreError> {
        Err(UserStoreError::UnexpectedError("connection reset".to_owned()))
    }
}

/// Reversible stand-in for a real hash; only for exercising control flow.
#[derive(Default, Clone)]
pub struct MockPasswordHasher;

#[async_trait::async_trait]
impl PasswordHasher for MockPasswordHasher {
    async fn hash(&self, password: Password) -> Result<HashedPassword, PasswordHasherError> {
        let encoded = format!("hashed:{}", password.as_ref().expose_secret());
        Ok(HashedPassword::new(Secret::from(encoded)))
    }

    async fn verify(
        &self,
        candidate: PasswordCandidate,
        expected: HashedPassword,
    ) -> Result<(), PasswordHasherError> {
        let encoded = format!("hashed:{}", candidate.as_ref().expose_secret());
        if &encoded == expected.as_ref().expose_secret() {
            Ok(())
        } else {
            Err(PasswordHasherError::Mismatch)
        }
    }
}

pub struct BrokenPasswordHasher;

#[async_trait::async_trait]
impl PasswordHasher for BrokenPasswordHasher {
    async fn hash(&self, _: Password) -> Result<HashedPassword, PasswordHasherError> {
        Err(PasswordHasherError::UnexpectedError("out of memory".to_owned()))
    }

    async fn verify(
        &self,
        _: PasswordCandidate,
        _: HashedPassword,
    ) -> Result<(), PasswordHasherError> {
        Err(PasswordHasherError::UnexpectedError("out of memory".to_owned()))
    }
}

#[derive(Default, Clone)]
pub struct MockTokenService;

impl TokenService for MockTokenService {
    fn issue(&self, user_id: &UserId) -> Result<AuthToken, TokenError> {
        Ok(AuthToken::new(format!("token:{user_id}")))
    }

    fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        let raw = token.strip_prefix("token:").ok_or(TokenError::Invalid)?;
        UserId::parse_str(raw).map_err(|_| TokenError::Invalid)
    }
}

pub struct BrokenTokenService;

impl TokenService for BrokenTokenService {
    fn issue(&self, _: &UserId) -> Result<AuthToken, TokenError> {
        Err(TokenError::UnexpectedError("signing key unavailable".to_owned()))
    }

    fn verify(&self, _: &str) -> Result<UserId, TokenError> {
        Err(TokenError::Invalid)
    }
}
