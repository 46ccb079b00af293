use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use feedbox_auth::credentials::{CredentialVerifier, StaticCredentials};
use feedbox_auth::jwt::SessionKeys;
use feedbox_core::fixture;
use feedbox_core::intake::{IntakeLimits, SubmissionPolicy};
use feedbox_core::store::{FeedbackStore, Snapshot};

use crate::config::ServerConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<FeedbackStore>>,
    pub verifier: Arc<dyn CredentialVerifier>,
    pub keys: Arc<SessionKeys>,
    pub submissions: SubmissionPolicy,
    pub limits: IntakeLimits,
}

impl AppState {
    pub fn new(
        store: FeedbackStore,
        verifier: Arc<dyn CredentialVerifier>,
        keys: SessionKeys,
        submissions: SubmissionPolicy,
    ) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            verifier,
            keys: Arc::new(keys),
            submissions,
            limits: IntakeLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: IntakeLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn from_config(config: &ServerConfig) -> eyre::Result<Self> {
        let store = if config.seed_fixture {
            FeedbackStore::seeded(fixture::seed_records())?
        } else {
            FeedbackStore::empty()
        };
        tracing::info!(
            records = store.snapshot().records.len(),
            submissions = %config.submissions,
            "feedback store ready"
        );

        let verifier =
            StaticCredentials::new(config.admin_username.clone(), config.admin_password.clone())?;

        let secret = match &config.session_secret {
            Some(secret) => secret.clone(),
            None => {
                tracing::warn!(
                    "FEEDBOX_SESSION_SECRET not set; using a random secret, sessions end on restart"
                );
                format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
            }
        };
        let keys = SessionKeys::new(secret.as_bytes(), config.session_ttl)?;

        Ok(
            Self::new(store, Arc::new(verifier), keys, config.submissions).with_limits(IntakeLimits {
                max_message_chars: config.max_message_chars,
            }),
        )
    }

    /// Current snapshot. The read lock is held only for the clone.
    pub async fn snapshot(&self) -> Arc<Snapshot> {
        self.store.read().await.snapshot()
    }
}
