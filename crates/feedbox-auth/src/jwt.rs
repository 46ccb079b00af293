use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Value of the `token_use` claim on admin session tokens.
pub const SESSION_TOKEN_USE: &str = "admin_session";

/// Claims carried by an admin session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub token_use: String,
    pub iat: u64,
    pub exp: u64,
}

/// A freshly issued session token.
#[derive(Debug, Clone, Serialize)]
pub struct SessionToken {
    pub token: String,
    pub expires_at: jiff::Timestamp,
}

/// HS256 signing material plus the session lifetime.
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: jiff::SignedDuration,
}

impl SessionKeys {
    pub fn new(secret: &[u8], ttl: jiff::SignedDuration) -> Result<Self, AuthError> {
        if secret.is_empty() {
            return Err(AuthError::Config("session secret is empty".to_string()));
        }
        if !ttl.is_positive() {
            return Err(AuthError::Config("session ttl must be positive".to_string()));
        }
        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        })
    }

    /// Sign a session token for `subject`, valid from `now` for the configured ttl.
    pub fn issue(&self, subject: &str, now: jiff::Timestamp) -> Result<SessionToken, AuthError> {
        let expires_at = now
            .checked_add(self.ttl)
            .map_err(|e| AuthError::Config(format!("session expiry out of range: {e}")))?;

        let claims = SessionClaims {
            sub: subject.to_string(),
            token_use: SESSION_TOKEN_USE.to_string(),
            iat: unix_seconds(now),
            exp: unix_seconds(expires_at),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;

        Ok(SessionToken { token, expires_at })
    }

    /// Verify signature, expiry and `token_use` of a session token.
    pub fn validate(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        let token_data = decode::<SessionClaims>(token, &self.decoding, &validation)
            .map_err(|e| {
                if matches!(e.kind(), ErrorKind::ExpiredSignature) {
                    AuthError::TokenExpired
                } else {
                    AuthError::Jwt(e)
                }
            })?;

        let token_use = &token_data.claims.token_use;
        if token_use != SESSION_TOKEN_USE {
            return Err(AuthError::InvalidToken(format!(
                "unexpected token_use: {token_use}"
            )));
        }

        Ok(token_data.claims)
    }
}

fn unix_seconds(ts: jiff::Timestamp) -> u64 {
    ts.as_second().max(0) as u64
}
