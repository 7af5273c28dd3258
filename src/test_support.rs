//! In-memory Hireeasy backend used by the unit tests.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;
use std::sync::{Mutex, MutexGuard};

use crate::domain::candidate::{CandidateProfile, CandidateQuery};
use crate::domain::job::{CreateJobPostingRequest, JobPosting};
use crate::domain::profile::{
    CreateProfileRequest, CreatedRecord, EducationEntry, EmploymentEntry, SkillEntry,
};
use crate::domain::resume::ResumeLink;
use crate::domain::session::Credentials;
use crate::domain::subscription::{ActivationRequest, CheckoutRequest, CheckoutSession};
use crate::domain::upload::{UploadPayload, UploadedFile};
use crate::domain::user::{FeatureUsage, Features, Subscription};
use crate::error::{AppError, AppResult};
use crate::infrastructure::api::{HireeasyApi, UserRecord};

pub fn token_for(user_id: &str, user_type: &str) -> String {
    encode(
        &Header::default(),
        &json!({ "id": user_id, "userType": user_type }),
        &EncodingKey::from_secret(b"backend-secret"),
    )
    .unwrap()
}

pub fn employer_token(user_id: &str) -> String {
    token_for(user_id, "Employer")
}

pub fn sample_candidates() -> Vec<CandidateProfile> {
    vec![
        CandidateProfile {
            id: "cand-1".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: Some("+1 555 0100".to_string()),
            headline: Some("ServiceNow ITSM Developer".to_string()),
            location: Some("Austin, TX".to_string()),
            years_of_experience: Some(6),
            summary: None,
            skills: vec!["ITSM".to_string()],
            certifications: vec!["CSA".to_string()],
            resume_url: Some("https://files.test/jane.pdf".to_string()),
        },
        CandidateProfile {
            id: "cand-2".to_string(),
            first_name: "Omar".to_string(),
            last_name: "Haddad".to_string(),
            email: "omar@example.com".to_string(),
            phone: None,
            headline: Some("HRSD Consultant".to_string()),
            location: None,
            years_of_experience: Some(3),
            summary: None,
            skills: vec!["HRSD".to_string()],
            certifications: vec![],
            resume_url: None,
        },
    ]
}

struct FakeState {
    plan_id: String,
    expiry: DateTime<Utc>,
    resume: FeatureUsage,
    jobs: FeatureUsage,
    candidates: Vec<CandidateProfile>,
    fail_user_fetch: bool,
    fail_resume_record: bool,
    resume_delay: Option<std::time::Duration>,
    user_fetch_delay: Option<std::time::Duration>,
    subscription_fetches: usize,
    candidate_fetches: usize,
    resume_fetches: usize,
    job_postings: usize,
    wizard_records: usize,
}

pub struct FakeHireeasyApi {
    state: Mutex<FakeState>,
}

impl FakeHireeasyApi {
    /// Backend with an active 30-day employer plan
    pub fn with_employer(resume: FeatureUsage) -> Self {
        Self {
            state: Mutex::new(FakeState {
                plan_id: "price_basic".to_string(),
                expiry: Utc::now() + Duration::days(30),
                resume,
                jobs: FeatureUsage::new(5, 0),
                candidates: sample_candidates(),
                fail_user_fetch: false,
                fail_resume_record: false,
                resume_delay: None,
                user_fetch_delay: None,
                subscription_fetches: 0,
                candidate_fetches: 0,
                resume_fetches: 0,
                job_postings: 0,
                wizard_records: 0,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    pub fn set_expiry(&self, expiry: DateTime<Utc>) {
        self.state().expiry = expiry;
    }

    pub fn set_job_posting_usage(&self, usage: FeatureUsage) {
        self.state().jobs = usage;
    }

    pub fn set_resume_delay(&self, delay: std::time::Duration) {
        self.state().resume_delay = Some(delay);
    }

    pub fn set_user_fetch_delay(&self, delay: std::time::Duration) {
        self.state().user_fetch_delay = Some(delay);
    }

    pub fn fail_user_fetch(&self, fail: bool) {
        self.state().fail_user_fetch = fail;
    }

    pub fn fail_resume_record(&self, fail: bool) {
        self.state().fail_resume_record = fail;
    }

    pub fn resume_usage(&self) -> FeatureUsage {
        self.state().resume
    }

    pub fn subscription_fetches(&self) -> usize {
        self.state().subscription_fetches
    }

    pub fn candidate_fetches(&self) -> usize {
        self.state().candidate_fetches
    }

    pub fn resume_fetches(&self) -> usize {
        self.state().resume_fetches
    }

    pub fn job_postings(&self) -> usize {
        self.state().job_postings
    }

    pub fn wizard_records(&self) -> usize {
        self.state().wizard_records
    }

    fn next_record(&self) -> CreatedRecord {
        let mut state = self.state();
        state.wizard_records += 1;
        CreatedRecord {
            id: format!("rec-{}", state.wizard_records),
        }
    }
}

#[async_trait]
impl HireeasyApi for FakeHireeasyApi {
    async fn fetch_user(&self, credentials: &Credentials) -> AppResult<UserRecord> {
        let delay = self.state().user_fetch_delay;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.state().fail_user_fetch {
            return Err(AppError::ExternalService("backend down".to_string()));
        }
        Ok(UserRecord {
            id: credentials.user_id.clone(),
            email: format!("{}@example.com", credentials.user_id),
            name: Some("Test User".to_string()),
            first_name: None,
            last_name: None,
            user_type: None,
        })
    }

    async fn fetch_subscription(
        &self,
        _credentials: &Credentials,
    ) -> AppResult<Option<Subscription>> {
        let mut state = self.state();
        state.subscription_fetches += 1;
        Ok(Some(Subscription {
            plan_id: state.plan_id.clone(),
            plan_name: "Plan".to_string(),
            expiry_date: state.expiry,
            features: Features {
                resume_views: state.resume,
                job_posting: state.jobs,
            },
        }))
    }

    async fn record_resume_download(&self, _credentials: &Credentials) -> AppResult<()> {
        let mut state = self.state();
        if state.fail_resume_record {
            return Err(AppError::PaymentRequired(
                "Resume view limit reached".to_string(),
            ));
        }
        state.resume.record_use();
        Ok(())
    }

    async fn candidate_resume(
        &self,
        _credentials: &Credentials,
        candidate_id: &str,
    ) -> AppResult<ResumeLink> {
        let (delay, url) = {
            let mut state = self.state();
            state.resume_fetches += 1;
            let url = state
                .candidates
                .iter()
                .find(|c| c.id == candidate_id)
                .and_then(|c| c.resume_url.clone());
            (state.resume_delay, url)
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        url.map(|resume_url| ResumeLink {
            resume_url,
            file_name: None,
        })
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))
    }

    async fn list_candidates(
        &self,
        _credentials: &Credentials,
        _query: &CandidateQuery,
    ) -> AppResult<Vec<CandidateProfile>> {
        Ok(self.state().candidates.clone())
    }

    async fn fetch_candidate(
        &self,
        _credentials: &Credentials,
        candidate_id: &str,
    ) -> AppResult<CandidateProfile> {
        let mut state = self.state();
        state.candidate_fetches += 1;
        state
            .candidates
            .iter()
            .find(|c| c.id == candidate_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Candidate not found".to_string()))
    }

    async fn create_job_posting(
        &self,
        _credentials: &Credentials,
        request: &CreateJobPostingRequest,
    ) -> AppResult<JobPosting> {
        let mut state = self.state();
        state.job_postings += 1;
        state.jobs.record_use();
        Ok(JobPosting {
            id: format!("job-{}", state.job_postings),
            title: request.title.clone(),
        })
    }

    async fn create_profile(
        &self,
        _credentials: &Credentials,
        _request: &CreateProfileRequest,
    ) -> AppResult<CreatedRecord> {
        Ok(self.next_record())
    }

    async fn create_education(
        &self,
        _credentials: &Credentials,
        _entry: &EducationEntry,
    ) -> AppResult<CreatedRecord> {
        Ok(self.next_record())
    }

    async fn create_skill(
        &self,
        _credentials: &Credentials,
        _entry: &SkillEntry,
    ) -> AppResult<CreatedRecord> {
        Ok(self.next_record())
    }

    async fn create_employment(
        &self,
        _credentials: &Credentials,
        _entry: &EmploymentEntry,
    ) -> AppResult<CreatedRecord> {
        Ok(self.next_record())
    }

    async fn create_checkout_session(
        &self,
        _credentials: &Credentials,
        request: &CheckoutRequest,
    ) -> AppResult<CheckoutSession> {
        Ok(CheckoutSession {
            session_id: format!("cs_test_{}", request.plan_id),
            url: "https://checkout.stripe.test/pay".to_string(),
        })
    }

    async fn activate_subscription(
        &self,
        _credentials: &Credentials,
        request: &ActivationRequest,
    ) -> AppResult<()> {
        let mut state = self.state();
        state.plan_id = request.plan_id.clone();
        state.expiry = Utc::now() + Duration::days(30);
        Ok(())
    }

    async fn upload_file(
        &self,
        _credentials: &Credentials,
        payload: UploadPayload,
    ) -> AppResult<UploadedFile> {
        Ok(UploadedFile {
            url: format!("https://files.test/{}", payload.file_name),
        })
    }
}
