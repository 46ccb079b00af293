use std::fmt;

use serde::Deserialize;

use crate::error::AuthError;

/// Username and password as submitted to the admin login.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"****")
            .finish()
    }
}

/// Anything that can decide whether a set of admin credentials is valid.
///
/// `Ok(false)` means "wrong credentials". `Err` is reserved for the
/// verifier itself failing.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, credentials: &Credentials) -> Result<bool, AuthError>;
}

/// A single admin account taken from configuration.
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, AuthError> {
        let username = username.into();
        let password = password.into();
        if username.is_empty() {
            return Err(AuthError::Config("admin username is empty".to_string()));
        }
        if password.is_empty() {
            return Err(AuthError::Config("admin password is empty".to_string()));
        }
        Ok(Self { username, password })
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, credentials: &Credentials) -> Result<bool, AuthError> {
        // Evaluate both comparisons so timing doesn't reveal which one failed.
        let user_ok = constant_time_eq(credentials.username.as_bytes(), self.username.as_bytes());
        let pass_ok = constant_time_eq(credentials.password.as_bytes(), self.password.as_bytes());
        Ok(user_ok & pass_ok)
    }
}

/// Byte comparison whose running time depends only on the lengths.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
