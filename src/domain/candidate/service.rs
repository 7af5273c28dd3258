use super::error::CandidateServiceError;
use super::model::{CandidateListResponse, CandidateProfile, CandidateQuery, CandidateView};
use crate::domain::entitlement::{
    can_view_candidate_details, has_reached_candidate_view_limit, resume_views_remaining,
};
use crate::domain::session::SessionStore;
use crate::infrastructure::api::HireeasyApi;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

const CACHE_CAPACITY: u64 = 500;

pub struct CandidateService {
    api: Arc<dyn HireeasyApi>,
    session: SessionStore,
    cache: Option<Cache<String, CandidateProfile>>,
}

impl CandidateService {
    /// `cache_ttl` enables a profile cache; masking is still decided per read
    pub fn new(
        api: Arc<dyn HireeasyApi>,
        session: SessionStore,
        cache_ttl: Option<Duration>,
    ) -> Self {
        let cache = cache_ttl.map(|ttl| {
            Cache::builder()
                .max_capacity(CACHE_CAPACITY)
                .time_to_live(ttl)
                .build()
        });

        Self {
            api,
            session,
            cache,
        }
    }
}

#[async_trait]
pub trait CandidateServiceApi: Send + Sync {
    /// Search candidates, each rendered full or masked for the session user
    async fn list_candidates(
        &self,
        query: CandidateQuery,
        now: DateTime<Utc>,
    ) -> Result<CandidateListResponse, CandidateServiceError>;

    async fn get_candidate(
        &self,
        candidate_id: &str,
        now: DateTime<Utc>,
    ) -> Result<CandidateView, CandidateServiceError>;
}

#[async_trait]
impl CandidateServiceApi for CandidateService {
    async fn list_candidates(
        &self,
        query: CandidateQuery,
        now: DateTime<Utc>,
    ) -> Result<CandidateListResponse, CandidateServiceError> {
        let credentials = self.session.require_credentials().await?;
        let profiles = self.api.list_candidates(&credentials, &query).await?;

        if let Some(cache) = &self.cache {
            for profile in &profiles {
                cache.insert(profile.id.clone(), profile.clone()).await;
            }
        }

        let user = self.session.current_user().await;
        let full_access = can_view_candidate_details(user.as_ref(), now);

        tracing::info!(
            count = profiles.len(),
            full_access = full_access,
            "Candidate list rendered"
        );

        Ok(CandidateListResponse {
            candidates: profiles.iter().map(|p| p.view(full_access)).collect(),
            limit_reached: has_reached_candidate_view_limit(user.as_ref(), now),
            resume_views_remaining: resume_views_remaining(user.as_ref()),
        })
    }

    async fn get_candidate(
        &self,
        candidate_id: &str,
        now: DateTime<Utc>,
    ) -> Result<CandidateView, CandidateServiceError> {
        let profile = self.find_profile(candidate_id).await?;

        let user = self.session.current_user().await;
        let full_access = can_view_candidate_details(user.as_ref(), now);

        tracing::info!(
            candidate_id = %candidate_id,
            full_access = full_access,
            "Candidate profile rendered"
        );

        Ok(profile.view(full_access))
    }
}

impl CandidateService {
    async fn find_profile(
        &self,
        candidate_id: &str,
    ) -> Result<CandidateProfile, CandidateServiceError> {
        let credentials = self.session.require_credentials().await?;

        if let Some(cache) = &self.cache {
            if let Some(profile) = cache.get(candidate_id).await {
                tracing::debug!(candidate_id = %candidate_id, "Candidate cache hit");
                return Ok(profile);
            }
        }

        let profile = self.api.fetch_candidate(&credentials, candidate_id).await?;

        if let Some(cache) = &self.cache {
            cache.insert(profile.id.clone(), profile.clone()).await;
        }

        Ok(profile)
    }
}
