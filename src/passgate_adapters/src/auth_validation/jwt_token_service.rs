use chrono::{DateTime, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use passgate_core::{AuthToken, TokenError, TokenService, UserId};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Clone)]
pub struct JwtAuthConfig {
    pub jwt_secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
}

#[derive(Debug, Error)]
pub enum JwtAuthConfigError {
    #[error("Token time to live of {0} seconds cannot be represented as an expiry")]
    TokenTtlOutOfRange(i64),
}

impl JwtAuthConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }

    /// Fails when a token issued now could not carry a valid `exp` claim.
    pub fn validate(&self) -> Result<(), JwtAuthConfigError> {
        expiry(Utc::now(), self.token_ttl_in_seconds)
            .map(|_| ())
            .ok_or(JwtAuthConfigError::TokenTtlOutOfRange(self.token_ttl_in_seconds))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

/// HS256 JWTs signed with a process-wide secret.
#[derive(Clone)]
pub struct JwtTokenService {
    token_ttl_in_seconds: i64,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenService {
    pub fn new(config: JwtAuthConfig) -> Result<Self, JwtAuthConfigError> {
        config.validate()?;

        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            token_ttl_in_seconds: config.token_ttl_in_seconds,
            encoding_key: EncodingKey::from_secret(config.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.as_bytes()),
            validation,
        })
    }
}

impl TokenService for JwtTokenService {
    #[tracing::instrument(name = "Issuing auth token", skip_all)]
    fn issue(&self, user_id: &UserId) -> Result<AuthToken, TokenError> {
        generate_auth_token(user_id, self.token_ttl_in_seconds, &self.encoding_key)
            .map(AuthToken::new)
    }

    #[tracing::instrument(name = "Validating auth token", skip_all)]
    fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })?;

        UserId::parse_str(&claims.sub).map_err(|_| TokenError::Invalid)
    }
}

fn expiry(issued_at: DateTime<Utc>, token_ttl_seconds: i64) -> Option<usize> {
    let delta = chrono::Duration::try_seconds(token_ttl_seconds)?;
    issued_at
        .checked_add_signed(delta)?
        .timestamp()
        .try_into()
        .ok()
}

// Create JWT auth token
fn generate_auth_token(
    user_id: &UserId,
    token_ttl_seconds: i64,
    key: &EncodingKey,
) -> Result<String, TokenError> {
    let now = Utc::now();
    let exp = expiry(now, token_ttl_seconds).ok_or(TokenError::UnexpectedError(
        "Token expiry out of range".to_string(),
    ))?;
    let iat: usize = now
        .timestamp()
        .try_into()
        .map_err(|_| TokenError::UnexpectedError("Failed to cast i64 to usize".to_string()))?;

    let claims = Claims {
        sub: user_id.to_string(),
        iat,
        exp,
    };

    encode(&Header::new(ALGORITHM), &claims, key)
        .map_err(|e| TokenError::UnexpectedError(e.to_string()))
}
