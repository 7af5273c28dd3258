use super::error::ResumeServiceError;
use super::model::ResumeLink;
use crate::domain::entitlement::{can_download_resume, is_subscription_active};
use crate::domain::session::SessionStore;
use crate::domain::user::{Feature, User};
use crate::infrastructure::api::HireeasyApi;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

type InFlight = Arc<Mutex<HashSet<String>>>;

pub struct ResumeService {
    api: Arc<dyn HireeasyApi>,
    session: SessionStore,
    in_flight: InFlight,
}

impl ResumeService {
    pub fn new(api: Arc<dyn HireeasyApi>, session: SessionStore) -> Self {
        Self {
            api,
            session,
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        }
    }
}

/// Marks one candidate's download as in flight until dropped
struct DownloadGuard {
    in_flight: InFlight,
    candidate_id: String,
}

impl DownloadGuard {
    fn acquire(in_flight: &InFlight, candidate_id: &str) -> Option<Self> {
        let mut set = in_flight.lock().unwrap_or_else(|e| e.into_inner());
        if !set.insert(candidate_id.to_string()) {
            return None;
        }
        Some(Self {
            in_flight: in_flight.clone(),
            candidate_id: candidate_id.to_string(),
        })
    }
}

impl Drop for DownloadGuard {
    fn drop(&mut self) {
        let mut set = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        set.remove(&self.candidate_id);
    }
}

#[async_trait]
pub trait ResumeServiceApi: Send + Sync {
    /// Download a candidate's resume on behalf of the session user
    ///
    /// This operation:
    /// - Refuses a second concurrent download of the same candidate
    /// - Requires an active plan with resume views left
    /// - Fetches the resume link and counts one resume view
    ///
    /// The link is only returned once the view is counted. When the backend
    /// refuses to count it, the link is dropped and that error is returned.
    async fn download(
        &self,
        candidate_id: &str,
        now: DateTime<Utc>,
    ) -> Result<ResumeLink, ResumeServiceError>;
}

#[async_trait]
impl ResumeServiceApi for ResumeService {
    async fn download(
        &self,
        candidate_id: &str,
        now: DateTime<Utc>,
    ) -> Result<ResumeLink, ResumeServiceError> {
        let _guard = DownloadGuard::acquire(&self.in_flight, candidate_id)
            .ok_or(ResumeServiceError::InProgress)?;

        let user = self
            .session
            .current_user()
            .await
            .ok_or_else(|| ResumeServiceError::Unauthorized("No active session".to_string()))?;
        self.guard_quota(&user, now)?;

        let credentials = self.session.require_credentials().await?;
        let link = self.api.candidate_resume(&credentials, candidate_id).await?;

        self.session.increment_resume_download_count().await?;

        tracing::info!(
            user_id = %user.id,
            candidate_id = %candidate_id,
            "Resume download granted"
        );

        Ok(link)
    }
}

impl ResumeService {
    fn guard_quota(&self, user: &User, now: DateTime<Utc>) -> Result<(), ResumeServiceError> {
        if !is_subscription_active(Some(user), now) {
            return Err(ResumeServiceError::PaymentRequired(
                "An active subscription is required to download resumes".to_string(),
            ));
        }
        if !can_download_resume(Some(user), now) {
            let usage = user.feature_usage(Feature::ResumeViews).copied().unwrap_or_default();
            return Err(ResumeServiceError::PaymentRequired(format!(
                "Resume view limit reached. Used: {}, Limit: {}",
                usage.used, usage.limit
            )));
        }
        Ok(())
    }
}
