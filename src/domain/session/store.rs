use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::credentials::{CredentialStore, Credentials};
use crate::domain::auth::TokenInspector;
use crate::domain::entitlement::EntitlementSnapshot;
use crate::domain::user::{Feature, User, UserType};
use crate::error::{AppError, AppResult};
use crate::infrastructure::api::HireeasyApi;

#[derive(Debug, Default)]
struct SessionState {
    user: Option<User>,
    last_error: Option<String>,
}

/// What the UI sees of the session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub user: Option<User>,
    pub entitlements: EntitlementSnapshot,
    pub last_error: Option<String>,
}

/// Process-wide session: the stored credentials, the current user with its
/// subscription, and the last refresh error.
///
/// Cloning is cheap and every clone sees the same state.
#[derive(Clone)]
pub struct SessionStore {
    api: Arc<dyn HireeasyApi>,
    credentials: Arc<CredentialStore>,
    inspector: Arc<TokenInspector>,
    state: Arc<RwLock<SessionState>>,
}

impl SessionStore {
    pub fn new(api: Arc<dyn HireeasyApi>, credentials: CredentialStore) -> Self {
        Self {
            api,
            credentials: Arc::new(credentials),
            inspector: Arc::new(TokenInspector::new()),
            state: Arc::new(RwLock::new(SessionState::default())),
        }
    }

    /// Pick up persisted credentials at startup and load the user behind them
    pub async fn restore(&self) -> Option<User> {
        match self.credentials.load().await {
            Some(credentials) => {
                tracing::info!(user_id = %credentials.user_id, "Restoring persisted session");
                self.refresh_user_data().await
            }
            None => None,
        }
    }

    /// Store new credentials and load the user they belong to
    pub async fn login(&self, credentials: Credentials) -> AppResult<Option<User>> {
        if credentials.user_id.trim().is_empty() || credentials.token.trim().is_empty() {
            return Err(AppError::BadRequest(
                "User id and token are required".to_string(),
            ));
        }

        tracing::info!(user_id = %credentials.user_id, "Session login");
        self.credentials.store(credentials).await?;
        Ok(self.refresh_user_data().await)
    }

    pub async fn logout(&self) {
        self.credentials.clear().await;
        let mut state = self.state.write().await;
        state.user = None;
        state.last_error = None;
        tracing::info!("Session cleared");
    }

    pub async fn current_user(&self) -> Option<User> {
        self.state.read().await.user.clone()
    }

    pub async fn last_error(&self) -> Option<String> {
        self.state.read().await.last_error.clone()
    }

    /// Credentials for a backend call; fails when nobody is logged in
    pub async fn require_credentials(&self) -> AppResult<Credentials> {
        self.credentials
            .current()
            .await
            .ok_or_else(|| AppError::Unauthorized("No active session".to_string()))
    }

    pub async fn entitlements(&self, now: DateTime<Utc>) -> EntitlementSnapshot {
        let state = self.state.read().await;
        EntitlementSnapshot::evaluate(state.user.as_ref(), now)
    }

    pub async fn snapshot(&self, now: DateTime<Utc>) -> SessionSnapshot {
        let state = self.state.read().await;
        SessionSnapshot {
            user: state.user.clone(),
            entitlements: EntitlementSnapshot::evaluate(state.user.as_ref(), now),
            last_error: state.last_error.clone(),
        }
    }

    /// Re-fetch the user (and, for employers, the subscription) and replace the
    /// held state. Never fails: on error the user becomes `None` and the error
    /// message is kept for the UI.
    pub async fn refresh_user_data(&self) -> Option<User> {
        let Some(credentials) = self.credentials.current().await else {
            let mut state = self.state.write().await;
            state.user = None;
            state.last_error = Some("No active session".to_string());
            return None;
        };

        let result = self.load_user(&credentials).await;

        // Checked under the state lock so a logout or re-login that raced this
        // refresh wins.
        let mut state = self.state.write().await;
        if self.credentials.current().await.as_ref() != Some(&credentials) {
            tracing::debug!(user_id = %credentials.user_id, "Discarding refresh for stale credentials");
            return state.user.clone();
        }

        match result {
            Ok(user) => {
                tracing::debug!(
                    user_id = %user.id,
                    user_type = %user.user_type,
                    has_subscription = user.subscription.is_some(),
                    "Session refreshed"
                );
                state.user = Some(user);
                state.last_error = None;
            }
            Err(e) => {
                tracing::warn!(user_id = %credentials.user_id, error = %e, "Session refresh failed");
                state.user = None;
                state.last_error = Some(e.to_string());
            }
        }
        state.user.clone()
    }

    async fn load_user(&self, credentials: &Credentials) -> AppResult<User> {
        let user_type = self.inspector.user_type(&credentials.token)?;
        let record = self.api.fetch_user(credentials).await?;
        let mut user = record.into_user(user_type);

        if user_type == UserType::Employer {
            user.subscription = self.api.fetch_subscription(credentials).await?;
        }

        Ok(user)
    }

    /// Count a job post locally, then reconcile with the backend
    pub async fn increment_job_post_count(&self) {
        self.record_local_use(Feature::JobPosting).await;
        self.refresh_user_data().await;
    }

    /// Count a resume download locally and report it to the backend. A failed
    /// report rolls the local count back through a refresh.
    pub async fn increment_resume_download_count(&self) -> AppResult<()> {
        let credentials = self.require_credentials().await?;
        self.record_local_use(Feature::ResumeViews).await;

        match self.api.record_resume_download(&credentials).await {
            Ok(()) => {
                self.reconcile_in_background();
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Resume download not recorded, discarding local count");
                self.refresh_user_data().await;
                Err(e)
            }
        }
    }

    /// Optimistic `used += 1` on the held subscription, if any
    async fn record_local_use(&self, feature: Feature) {
        let mut state = self.state.write().await;
        if let Some(subscription) = state.user.as_mut().and_then(|u| u.subscription.as_mut()) {
            let usage = subscription.features.usage_mut(feature);
            usage.record_use();
            tracing::debug!(
                feature = %feature,
                used = usage.used,
                limit = usage.limit,
                "Recorded local feature use"
            );
        }
    }

    fn reconcile_in_background(&self) {
        let session = self.clone();
        tokio::spawn(async move {
            session.refresh_user_data().await;
        });
    }
}
