use std::env;
use std::fmt;
use std::net::SocketAddr;

use feedbox_core::intake::{DEFAULT_MAX_MESSAGE_CHARS, MIN_MESSAGE_CHARS, SubmissionPolicy};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_SESSION_TTL_SECS: i64 = 3600;

/// Runtime configuration, read from `FEEDBOX_*` environment variables.
#[derive(Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub admin_username: String,
    pub admin_password: String,
    /// `None` means a random secret is generated at startup, so sessions do
    /// not survive a restart.
    pub session_secret: Option<String>,
    pub session_ttl: jiff::SignedDuration,
    pub submissions: SubmissionPolicy,
    pub max_message_chars: usize,
    pub seed_fixture: bool,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = get("FEEDBOX_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| eyre::eyre!("invalid FEEDBOX_BIND_ADDR: {e}"))?;

        let admin_username =
            get("FEEDBOX_ADMIN_USERNAME").unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.to_string());

        let admin_password = get("FEEDBOX_ADMIN_PASSWORD")
            .ok_or_else(|| eyre::eyre!("FEEDBOX_ADMIN_PASSWORD must be set"))?;

        let session_secret = get("FEEDBOX_SESSION_SECRET");

        let ttl_secs = match get("FEEDBOX_SESSION_TTL_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|e| eyre::eyre!("invalid FEEDBOX_SESSION_TTL_SECS: {e}"))?,
            None => DEFAULT_SESSION_TTL_SECS,
        };
        if ttl_secs <= 0 {
            return Err(eyre::eyre!("FEEDBOX_SESSION_TTL_SECS must be positive"));
        }

        let submissions = match get("FEEDBOX_SUBMISSIONS") {
            Some(raw) => raw.parse::<SubmissionPolicy>()?,
            None => SubmissionPolicy::default(),
        };

        let max_message_chars = match get("FEEDBOX_MAX_MESSAGE_CHARS") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| eyre::eyre!("invalid FEEDBOX_MAX_MESSAGE_CHARS: {e}"))?,
            None => DEFAULT_MAX_MESSAGE_CHARS,
        };
        if max_message_chars < MIN_MESSAGE_CHARS {
            return Err(eyre::eyre!(
                "FEEDBOX_MAX_MESSAGE_CHARS must be at least {MIN_MESSAGE_CHARS}"
            ));
        }

        let seed_fixture = match get("FEEDBOX_SEED_FIXTURE") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| eyre::eyre!("invalid FEEDBOX_SEED_FIXTURE: {raw}"))?,
            None => true,
        };

        Ok(Self {
            bind_addr,
            admin_username,
            admin_password,
            session_secret,
            session_ttl: jiff::SignedDuration::from_secs(ttl_secs),
            submissions,
            max_message_chars,
            seed_fixture,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("bind_addr", &self.bind_addr)
            .field("admin_username", &self.admin_username)
            .field("admin_password", &"****")
            .field(
                "session_secret",
                &self.session_secret.as_ref().map(|_| "****"),
            )
            .field("session_ttl", &self.session_ttl)
            .field("submissions", &self.submissions)
            .field("max_message_chars", &self.max_message_chars)
            .field("seed_fixture", &self.seed_fixture)
            .finish()
    }
}
