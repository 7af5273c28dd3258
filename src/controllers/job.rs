use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::{
    domain::job::{CreateJobPostingRequest, JobPosting, JobServiceApi},
    error::AppResult,
};

pub struct JobController {
    job_service: Arc<dyn JobServiceApi>,
}

impl JobController {
    pub fn new(job_service: Arc<dyn JobServiceApi>) -> Self {
        Self { job_service }
    }

    /// POST /api/jobs - Publish a job posting against the plan's quota
    pub async fn create_job(
        State(controller): State<Arc<JobController>>,
        Json(request): Json<CreateJobPostingRequest>,
    ) -> AppResult<(StatusCode, Json<JobPosting>)> {
        let posting = controller
            .job_service
            .create_posting(request, Utc::now())
            .await?;
        Ok((StatusCode::CREATED, Json(posting)))
    }
}
