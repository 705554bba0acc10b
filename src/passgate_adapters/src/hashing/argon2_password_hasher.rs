use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher as _, SaltString, rand_core},
};
use passgate_core::{
    HashedPassword, Password, PasswordCandidate, PasswordHasher, PasswordHasherError,
};
use secrecy::{ExposeSecret, Secret};

/// Argon2id with a fixed work factor. The encoded PHC string carries the
/// per-password salt and the parameters used.
#[derive(Debug, Clone, Copy)]
pub struct Argon2PasswordHasher {
    memory_cost_kib: u32,
    iterations: u32,
    parallelism: u32,
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self {
            memory_cost_kib: 15000,
            iterations: 2,
            parallelism: 1,
        }
    }
}

impl Argon2PasswordHasher {
    fn argon2(&self) -> Result<Argon2<'static>, PasswordHasherError> {
        let params = Params::new(
            self.memory_cost_kib,
            self.iterations,
            self.parallelism,
            None,
        )
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: Password) -> Result<HashedPassword, PasswordHasherError> {
        let hasher = self.argon2()?;
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                hasher
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| HashedPassword::new(Secret::from(h.to_string())))
                    .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))
            })
        })
        .await
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        candidate: PasswordCandidate,
        expected: HashedPassword,
    ) -> Result<(), PasswordHasherError> {
        let verifier = self.argon2()?;
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected_password_hash = PasswordHash::new(expected.as_ref().expose_secret())
                    .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?;

                verifier
                    .verify_password(
                        candidate.as_ref().expose_secret().as_bytes(),
                        &expected_password_hash,
                    )
                    .map_err(|e| match e {
                        password_hash::Error::Password => PasswordHasherError::Mismatch,
                        other => PasswordHasherError::UnexpectedError(other.to_string()),
                    })
            })
        })
        .await
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?
    }
}
