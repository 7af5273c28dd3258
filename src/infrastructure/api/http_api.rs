use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

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
use crate::error::{AppError, AppResult};

use super::hireeasy_api::HireeasyApi;
use super::records::{BackendErrorBody, CandidatesEnvelope, SubscriptionEnvelope, UserRecord};

const USER_AGENT: &str = "Hireeasy-Gateway";

/// `reqwest` client for the Hireeasy backend and the file storage service
pub struct HttpHireeasyApi {
    api_url: String,
    upload_url: String,
    http_client: reqwest::Client,
}

impl HttpHireeasyApi {
    pub fn new(api_url: String, upload_url: String, timeout_secs: u64) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            upload_url: upload_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    fn authorized(&self, builder: RequestBuilder, credentials: &Credentials) -> RequestBuilder {
        builder.bearer_auth(&credentials.token)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        credentials: &Credentials,
    ) -> AppResult<T> {
        let request = self.authorized(self.http_client.get(self.url(path)), credentials);
        let response = send(request, path).await?;
        parse(response, path).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        credentials: &Credentials,
        body: &B,
    ) -> AppResult<T> {
        let request = self
            .authorized(self.http_client.post(self.url(path)), credentials)
            .json(body);
        let response = send(request, path).await?;
        parse(response, path).await
    }
}

async fn send(request: RequestBuilder, path: &str) -> AppResult<Response> {
    let response = request.send().await?;
    let status = response.status();

    tracing::debug!(path = %path, status = %status.as_u16(), "Hireeasy backend responded");

    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    let message = serde_json::from_str::<BackendErrorBody>(&body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or(body);

    tracing::warn!(path = %path, status = %status.as_u16(), message = %message, "Hireeasy backend call failed");

    Err(AppError::from_backend_status(status.as_u16(), message))
}

async fn parse<T: DeserializeOwned>(response: Response, path: &str) -> AppResult<T> {
    response.json::<T>().await.map_err(|e| {
        AppError::ExternalService(format!("Unexpected response from {}: {}", path, e))
    })
}

fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

#[async_trait]
impl HireeasyApi for HttpHireeasyApi {
    async fn fetch_user(&self, credentials: &Credentials) -> AppResult<UserRecord> {
        let path = format!("/users/{}", segment(&credentials.user_id));
        self.get_json(&path, credentials).await
    }

    async fn fetch_subscription(
        &self,
        credentials: &Credentials,
    ) -> AppResult<Option<Subscription>> {
        let path = format!("/subscription/user/{}", segment(&credentials.user_id));
        match self.get_json::<SubscriptionEnvelope>(&path, credentials).await {
            Ok(envelope) => Ok(envelope.subscription.map(Subscription::from)),
            Err(AppError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn record_resume_download(&self, credentials: &Credentials) -> AppResult<()> {
        let path = "/subscription/download-resume";
        let request = self.authorized(self.http_client.get(self.url(path)), credentials);
        send(request, path).await?;
        Ok(())
    }

    async fn candidate_resume(
        &self,
        credentials: &Credentials,
        candidate_id: &str,
    ) -> AppResult<ResumeLink> {
        let path = format!("/subscription/candidate-resume/{}", segment(candidate_id));
        self.get_json(&path, credentials).await
    }

    async fn list_candidates(
        &self,
        credentials: &Credentials,
        query: &CandidateQuery,
    ) -> AppResult<Vec<CandidateProfile>> {
        let path = "/jobSeeker/candidates";
        let request = self
            .authorized(self.http_client.get(self.url(path)), credentials)
            .query(query);
        let response = send(request, path).await?;
        let envelope: CandidatesEnvelope = parse(response, path).await?;
        Ok(envelope.candidates)
    }

    async fn fetch_candidate(
        &self,
        credentials: &Credentials,
        candidate_id: &str,
    ) -> AppResult<CandidateProfile> {
        let path = format!("/jobSeeker/candidates/{}", segment(candidate_id));
        self.get_json(&path, credentials).await
    }

    async fn create_job_posting(
        &self,
        credentials: &Credentials,
        request: &CreateJobPostingRequest,
    ) -> AppResult<JobPosting> {
        self.post_json("/job/createJobPosting", credentials, request)
            .await
    }

    async fn create_profile(
        &self,
        credentials: &Credentials,
        request: &CreateProfileRequest,
    ) -> AppResult<CreatedRecord> {
        self.post_json("/jobSeeker/createProfile", credentials, request)
            .await
    }

    async fn create_education(
        &self,
        credentials: &Credentials,
        entry: &EducationEntry,
    ) -> AppResult<CreatedRecord> {
        self.post_json("/jobSeeker/createEducation", credentials, entry)
            .await
    }

    async fn create_skill(
        &self,
        credentials: &Credentials,
        entry: &SkillEntry,
    ) -> AppResult<CreatedRecord> {
        self.post_json("/jobSeeker/createSkill", credentials, entry)
            .await
    }

    async fn create_employment(
        &self,
        credentials: &Credentials,
        entry: &EmploymentEntry,
    ) -> AppResult<CreatedRecord> {
        self.post_json("/jobSeeker/createEmployment", credentials, entry)
            .await
    }

    async fn create_checkout_session(
        &self,
        credentials: &Credentials,
        request: &CheckoutRequest,
    ) -> AppResult<CheckoutSession> {
        self.post_json("/subscription/create-checkout-session", credentials, request)
            .await
    }

    async fn activate_subscription(
        &self,
        credentials: &Credentials,
        request: &ActivationRequest,
    ) -> AppResult<()> {
        let path = "/subscription/activate";
        let request = self
            .authorized(self.http_client.post(self.url(path)), credentials)
            .json(request);
        send(request, path).await?;
        Ok(())
    }

    async fn upload_file(
        &self,
        credentials: &Credentials,
        payload: UploadPayload,
    ) -> AppResult<UploadedFile> {
        let path = "/uploadFile";
        let size = payload.bytes.len();
        let part = Part::bytes(payload.bytes)
            .file_name(payload.file_name.clone())
            .mime_str(&payload.content_type)
            .map_err(|e| AppError::BadRequest(format!("Invalid content type: {}", e)))?;
        let form = Form::new().part("file", part);

        tracing::info!(file_name = %payload.file_name, size_bytes = size, "Uploading file to storage service");

        let request = self
            .authorized(
                self.http_client.post(format!("{}{}", self.upload_url, path)),
                credentials,
            )
            .multipart(form);
        let response = send(request, path).await?;
        parse(response, path).await
    }
}
