use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use chrono::Utc;
use std::sync::Arc;

use crate::{
    domain::candidate::{CandidateListResponse, CandidateQuery, CandidateServiceApi, CandidateView},
    domain::resume::{ResumeLink, ResumeServiceApi},
    error::AppResult,
    infrastructure::auth::SessionUser,
};

pub struct CandidateController {
    candidate_service: Arc<dyn CandidateServiceApi>,
    resume_service: Arc<dyn ResumeServiceApi>,
}

impl CandidateController {
    pub fn new(
        candidate_service: Arc<dyn CandidateServiceApi>,
        resume_service: Arc<dyn ResumeServiceApi>,
    ) -> Self {
        Self {
            candidate_service,
            resume_service,
        }
    }

    /// GET /api/candidates - Search candidates, masked unless the plan allows details
    pub async fn list_candidates(
        State(controller): State<Arc<CandidateController>>,
        Query(query): Query<CandidateQuery>,
    ) -> AppResult<Json<CandidateListResponse>> {
        let response = controller
            .candidate_service
            .list_candidates(query, Utc::now())
            .await?;
        Ok(Json(response))
    }

    /// GET /api/candidates/:candidateId
    pub async fn get_candidate(
        State(controller): State<Arc<CandidateController>>,
        Path(candidate_id): Path<String>,
    ) -> AppResult<Json<CandidateView>> {
        let view = controller
            .candidate_service
            .get_candidate(&candidate_id, Utc::now())
            .await?;
        Ok(Json(view))
    }

    /// POST /api/candidates/:candidateId/resume - Spend one resume view
    pub async fn download_resume(
        State(controller): State<Arc<CandidateController>>,
        Extension(session_user): Extension<SessionUser>,
        Path(candidate_id): Path<String>,
    ) -> AppResult<Json<ResumeLink>> {
        tracing::debug!(
            user_id = %session_user.user_id,
            candidate_id = %candidate_id,
            "Resume download requested"
        );
        let link = controller
            .resume_service
            .download(&candidate_id, Utc::now())
            .await?;
        Ok(Json(link))
    }
}
