use async_trait::async_trait;

use crate::domain::candidate::{CandidateProfile, CandidateQuery};
use crate::domain::job::{CreateJobPostingRequest, JobPosting};
use crate::domain::profile::{
    CreateProfileRequest, CreatedRecord, EducationEntry, EmploymentEntry, SkillEntry,
};
use crate::domain::resume::ResumeLink;
use crate::domain::session::Credentials;
use crate::domain::subscription::{ActivationRequest, CheckoutRequest, CheckoutSession};
use crate::domain::upload::{UploadPayload, UploadedFile};
use crate::domain::user::Subscription;
use crate::error::AppResult;

use super::records::UserRecord;

/// The Hireeasy REST backend, as consumed by the gateway.
///
/// Every call carries the session's bearer token. The backend performs the
/// authoritative permission and quota checks; implementations map its
/// non-success statuses onto `AppError`.
#[async_trait]
pub trait HireeasyApi: Send + Sync {
    /// `GET /users/:id`
    async fn fetch_user(&self, credentials: &Credentials) -> AppResult<UserRecord>;

    /// `GET /subscription/user/:id`; `None` when the user has no plan
    async fn fetch_subscription(&self, credentials: &Credentials)
        -> AppResult<Option<Subscription>>;

    /// `GET /subscription/download-resume`, consumes one resume view
    async fn record_resume_download(&self, credentials: &Credentials) -> AppResult<()>;

    /// `GET /subscription/candidate-resume/:id`
    async fn candidate_resume(
        &self,
        credentials: &Credentials,
        candidate_id: &str,
    ) -> AppResult<ResumeLink>;

    /// `GET /jobSeeker/candidates`
    async fn list_candidates(
        &self,
        credentials: &Credentials,
        query: &CandidateQuery,
    ) -> AppResult<Vec<CandidateProfile>>;

    /// `GET /jobSeeker/candidates/:id`
    async fn fetch_candidate(
        &self,
        credentials: &Credentials,
        candidate_id: &str,
    ) -> AppResult<CandidateProfile>;

    /// `POST /job/createJobPosting`
    async fn create_job_posting(
        &self,
        credentials: &Credentials,
        request: &CreateJobPostingRequest,
    ) -> AppResult<JobPosting>;

    /// `POST /jobSeeker/createProfile`
    async fn create_profile(
        &self,
        credentials: &Credentials,
        request: &CreateProfileRequest,
    ) -> AppResult<CreatedRecord>;

    /// `POST /jobSeeker/createEducation`
    async fn create_education(
        &self,
        credentials: &Credentials,
        entry: &EducationEntry,
    ) -> AppResult<CreatedRecord>;

    /// `POST /jobSeeker/createSkill`
    async fn create_skill(
        &self,
        credentials: &Credentials,
        entry: &SkillEntry,
    ) -> AppResult<CreatedRecord>;

    /// `POST /jobSeeker/createEmployment`
    async fn create_employment(
        &self,
        credentials: &Credentials,
        entry: &EmploymentEntry,
    ) -> AppResult<CreatedRecord>;

    /// `POST /subscription/create-checkout-session`
    async fn create_checkout_session(
        &self,
        credentials: &Credentials,
        request: &CheckoutRequest,
    ) -> AppResult<CheckoutSession>;

    /// `POST /subscription/activate`
    async fn activate_subscription(
        &self,
        credentials: &Credentials,
        request: &ActivationRequest,
    ) -> AppResult<()>;

    /// `POST /uploadFile` on the storage service
    async fn upload_file(
        &self,
        credentials: &Credentials,
        payload: UploadPayload,
    ) -> AppResult<UploadedFile>;
}
