use super::error::JobServiceError;
use super::model::{CreateJobPostingRequest, JobPosting};
use crate::domain::entitlement::{can_post_job, is_subscription_active};
use crate::domain::session::SessionStore;
use crate::domain::user::{Feature, User};
use crate::infrastructure::api::HireeasyApi;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub struct JobService {
    api: Arc<dyn HireeasyApi>,
    session: SessionStore,
}

impl JobService {
    pub fn new(api: Arc<dyn HireeasyApi>, session: SessionStore) -> Self {
        Self { api, session }
    }
}

#[async_trait]
pub trait JobServiceApi: Send + Sync {
    async fn create_posting(
        &self,
        request: CreateJobPostingRequest,
        now: DateTime<Utc>,
    ) -> Result<JobPosting, JobServiceError>;
}

#[async_trait]
impl JobServiceApi for JobService {
    async fn create_posting(
        &self,
        request: CreateJobPostingRequest,
        now: DateTime<Utc>,
    ) -> Result<JobPosting, JobServiceError> {
        request.validate().map_err(JobServiceError::Invalid)?;

        let user = self
            .session
            .current_user()
            .await
            .ok_or_else(|| JobServiceError::Unauthorized("No active session".to_string()))?;
        self.guard_posting(&user, now)?;

        let credentials = self.session.require_credentials().await?;
        let posting = self.api.create_job_posting(&credentials, &request).await?;

        self.session.increment_job_post_count().await;

        tracing::info!(
            user_id = %user.id,
            job_id = %posting.id,
            title = %posting.title,
            "Job posting created"
        );

        Ok(posting)
    }
}

impl JobService {
    fn guard_posting(&self, user: &User, now: DateTime<Utc>) -> Result<(), JobServiceError> {
        if !user.is_employer() {
            return Err(JobServiceError::Unauthorized(
                "Only employers can post jobs".to_string(),
            ));
        }
        if !is_subscription_active(Some(user), now) {
            return Err(JobServiceError::PaymentRequired(
                "An active subscription is required to post jobs".to_string(),
            ));
        }
        if !can_post_job(Some(user), now) {
            let usage = user.feature_usage(Feature::JobPosting).copied().unwrap_or_default();
            return Err(JobServiceError::PaymentRequired(format!(
                "Job posting limit reached. Used: {}, Limit: {}",
                usage.used, usage.limit
            )));
        }
        Ok(())
    }
}
