use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::{
    domain::profile::{
        CreateProfileRequest, CreatedRecord, EducationEntry, EmploymentEntry, ProfileService,
        SkillEntry,
    },
    error::AppResult,
};

pub struct ProfileController {
    profile_service: Arc<ProfileService>,
}

impl ProfileController {
    pub fn new(profile_service: Arc<ProfileService>) -> Self {
        Self { profile_service }
    }

    /// POST /api/profile
    pub async fn create_profile(
        State(controller): State<Arc<ProfileController>>,
        Json(request): Json<CreateProfileRequest>,
    ) -> AppResult<(StatusCode, Json<CreatedRecord>)> {
        let record = controller.profile_service.create_profile(request).await?;
        Ok((StatusCode::CREATED, Json(record)))
    }

    /// POST /api/profile/education
    pub async fn add_education(
        State(controller): State<Arc<ProfileController>>,
        Json(entry): Json<EducationEntry>,
    ) -> AppResult<(StatusCode, Json<CreatedRecord>)> {
        let record = controller.profile_service.add_education(entry).await?;
        Ok((StatusCode::CREATED, Json(record)))
    }

    /// POST /api/profile/skills
    pub async fn add_skill(
        State(controller): State<Arc<ProfileController>>,
        Json(entry): Json<SkillEntry>,
    ) -> AppResult<(StatusCode, Json<CreatedRecord>)> {
        let record = controller.profile_service.add_skill(entry).await?;
        Ok((StatusCode::CREATED, Json(record)))
    }

    /// POST /api/profile/employment
    pub async fn add_employment(
        State(controller): State<Arc<ProfileController>>,
        Json(entry): Json<EmploymentEntry>,
    ) -> AppResult<(StatusCode, Json<CreatedRecord>)> {
        let record = controller.profile_service.add_employment(entry).await?;
        Ok((StatusCode::CREATED, Json(record)))
    }
}
