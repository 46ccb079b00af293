//! feedbox-auth
//!
//! Admin authentication: the credential-verification contract, a static
//! config-backed verifier, and signed session tokens.

pub mod credentials;
pub mod error;
pub mod flows;
pub mod jwt;
