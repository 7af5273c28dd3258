use super::error::ProfileServiceError;
use super::model::{
    CreateProfileRequest, CreatedRecord, EducationEntry, EmploymentEntry, SkillEntry,
};
use crate::domain::session::{Credentials, SessionStore};
use crate::infrastructure::api::HireeasyApi;
use std::sync::Arc;

/// Candidate profile wizard: each step is validated locally, then forwarded
pub struct ProfileService {
    api: Arc<dyn HireeasyApi>,
    session: SessionStore,
}

impl ProfileService {
    pub fn new(api: Arc<dyn HireeasyApi>, session: SessionStore) -> Self {
        Self { api, session }
    }

    pub async fn create_profile(
        &self,
        request: CreateProfileRequest,
    ) -> Result<CreatedRecord, ProfileServiceError> {
        request.validate().map_err(ProfileServiceError::Invalid)?;
        let credentials = self.credentials().await?;

        let record = self.api.create_profile(&credentials, &request).await?;
        tracing::info!(user_id = %credentials.user_id, profile_id = %record.id, "Candidate profile created");
        Ok(record)
    }

    pub async fn add_education(
        &self,
        entry: EducationEntry,
    ) -> Result<CreatedRecord, ProfileServiceError> {
        entry.validate().map_err(ProfileServiceError::Invalid)?;
        let credentials = self.credentials().await?;

        let record = self.api.create_education(&credentials, &entry).await?;
        tracing::info!(user_id = %credentials.user_id, institution = %entry.institution, "Education added");
        Ok(record)
    }

    pub async fn add_skill(&self, entry: SkillEntry) -> Result<CreatedRecord, ProfileServiceError> {
        entry.validate().map_err(ProfileServiceError::Invalid)?;
        let credentials = self.credentials().await?;

        let record = self.api.create_skill(&credentials, &entry).await?;
        tracing::info!(user_id = %credentials.user_id, skill = %entry.name, "Skill added");
        Ok(record)
    }

    pub async fn add_employment(
        &self,
        entry: EmploymentEntry,
    ) -> Result<CreatedRecord, ProfileServiceError> {
        entry.validate().map_err(ProfileServiceError::Invalid)?;
        let credentials = self.credentials().await?;

        let record = self.api.create_employment(&credentials, &entry).await?;
        tracing::info!(user_id = %credentials.user_id, company = %entry.company, "Employment added");
        Ok(record)
    }

    async fn credentials(&self) -> Result<Credentials, ProfileServiceError> {
        if self.session.current_user().await.is_none() {
            return Err(ProfileServiceError::Unauthorized(
                "No active session".to_string(),
            ));
        }
        Ok(self.session.require_credentials().await?)
    }
}
