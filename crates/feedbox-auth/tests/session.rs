use feedbox_auth::credentials::{CredentialVerifier, Credentials, StaticCredentials};
use feedbox_auth::error::AuthError;
use feedbox_auth::flows::{login, AuthResult};
use feedbox_auth::jwt::{SessionKeys, SESSION_TOKEN_USE};

fn keys() -> SessionKeys {
    SessionKeys::new(b"test-secret", jiff::SignedDuration::from_hours(1)).unwrap()
}

fn creds(username: &str, password: &str) -> Credentials {
    Credentials {
        username: username.to_string(),
        password: password.to_string(),
    }
}

#[test]
fn static_credentials_match_exactly() {
    let verifier = StaticCredentials::new("admin", "hunter22").unwrap();
    assert!(verifier.verify(&creds("admin", "hunter22")).unwrap());
    assert!(!verifier.verify(&creds("admin", "hunter2")).unwrap());
    assert!(!verifier.verify(&creds("Admin", "hunter22")).unwrap());
    assert!(!verifier.verify(&creds("admin", "")).unwrap());
}

#[test]
fn static_credentials_reject_empty_config() {
    assert!(matches!(
        StaticCredentials::new("admin", ""),
        Err(AuthError::Config(_))
    ));
    assert!(matches!(
        StaticCredentials::new("", "pw"),
        Err(AuthError::Config(_))
    ));
}

#[test]
fn debug_output_hides_password() {
    let rendered = format!("{:?}", creds("admin", "topsecret"));
    assert!(rendered.contains("admin"));
    assert!(!rendered.contains("topsecret"));
}

#[test]
fn issued_token_validates() {
    let keys = keys();
    let now = jiff::Timestamp::now();
    let session = keys.issue("admin", now).unwrap();

    let claims = keys.validate(&session.token).unwrap();
    assert_eq!(claims.sub, "admin");
    assert_eq!(claims.token_use, SESSION_TOKEN_USE);
    assert_eq!(claims.exp - claims.iat, 3600);
    assert_eq!(session.expires_at.as_second() as u64, claims.exp);
}

#[test]
fn expired_token_is_rejected() {
    let keys = keys();
    let two_hours_ago = jiff::Timestamp::now() - jiff::SignedDuration::from_hours(2);
    let session = keys.issue("admin", two_hours_ago).unwrap();

    assert!(matches!(keys.validate(&session.token), Err(AuthError::TokenExpired)));
}

#[test]
fn token_from_another_secret_is_rejected() {
    let other = SessionKeys::new(b"other-secret", jiff::SignedDuration::from_hours(1)).unwrap();
    let session = other.issue("admin", jiff::Timestamp::now()).unwrap();

    assert!(matches!(keys().validate(&session.token), Err(AuthError::Jwt(_))));
    assert!(keys().validate("not-a-jwt").is_err());
}

#[test]
fn session_keys_reject_bad_config() {
    assert!(SessionKeys::new(b"", jiff::SignedDuration::from_hours(1)).is_err());
    assert!(SessionKeys::new(b"secret", jiff::SignedDuration::ZERO).is_err());
}

#[test]
fn login_issues_token_for_valid_credentials() {
    let verifier = StaticCredentials::new("admin", "hunter22").unwrap();
    let keys = keys();

    let result = login(&verifier, &keys, &creds("admin", "hunter22"), jiff::Timestamp::now()).unwrap();
    assert!(result.is_authenticated());
    let AuthResult::Authenticated { session } = result else {
        panic!("expected authenticated result");
    };
    assert_eq!(keys.validate(&session.token).unwrap().sub, "admin");
}

#[test]
fn login_rejects_wrong_password() {
    let verifier = StaticCredentials::new("admin", "hunter22").unwrap();
    let result = login(&verifier, &keys(), &creds("admin", "guess"), jiff::Timestamp::now()).unwrap();
    assert!(!result.is_authenticated());
}

#[test]
fn login_requires_both_fields() {
    let verifier = StaticCredentials::new("admin", "hunter22").unwrap();
    let now = jiff::Timestamp::now();
    assert!(matches!(
        login(&verifier, &keys(), &creds("  ", "hunter22"), now),
        Err(AuthError::MissingCredentials(_))
    ));
    assert!(matches!(
        login(&verifier, &keys(), &creds("admin", ""), now),
        Err(AuthError::MissingCredentials(_))
    ));
}
