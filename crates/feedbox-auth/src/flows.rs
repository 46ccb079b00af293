use serde::Serialize;
use tracing::info;

use crate::credentials::{CredentialVerifier, Credentials};
use crate::error::AuthError;
use crate::jwt::{SessionKeys, SessionToken};

/// Outcome of an admin login attempt.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum AuthResult {
    /// Credentials accepted, session token issued.
    Authenticated { session: SessionToken },
    /// Credentials did not match.
    Rejected,
}

impl AuthResult {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthResult::Authenticated { .. })
    }
}

/// Check credentials and, on success, issue a session token.
pub fn login(
    verifier: &dyn CredentialVerifier,
    keys: &SessionKeys,
    credentials: &Credentials,
    now: jiff::Timestamp,
) -> Result<AuthResult, AuthError> {
    if credentials.username.trim().is_empty() {
        return Err(AuthError::MissingCredentials("username".to_string()));
    }
    if credentials.password.is_empty() {
        return Err(AuthError::MissingCredentials("password".to_string()));
    }

    if !verifier.verify(credentials)? {
        info!(username = %credentials.username, "admin login rejected");
        return Ok(AuthResult::Rejected);
    }

    let session = keys.issue(&credentials.username, now)?;
    info!(username = %credentials.username, "admin login succeeded");
    Ok(AuthResult::Authenticated { session })
}
