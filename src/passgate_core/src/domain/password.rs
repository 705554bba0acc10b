use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// A new account password that satisfies the registration policy.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().chars().count() < MIN_PASSWORD_LENGTH {
            return Err(UserError::PasswordTooShort(MIN_PASSWORD_LENGTH));
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// A password submitted at login.
///
/// Only empty input is rejected, so a guess shorter than the registration
/// minimum fails as bad credentials rather than as malformed input.
#[derive(Debug, Clone)]
pub struct PasswordCandidate(Secret<String>);

impl TryFrom<Secret<String>> for PasswordCandidate {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().is_empty() {
            return Err(UserError::EmptyPassword);
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for PasswordCandidate {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
