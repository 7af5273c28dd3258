use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::candidate::CandidateProfile;
use crate::domain::user::{FeatureUsage, Features, Subscription, User, UserType};

/// `GET /users/:id`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub user_type: Option<String>,
}

/// `GET /subscription/user/:id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionEnvelope {
    #[serde(default)]
    pub subscription: Option<SubscriptionRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionRecord {
    pub plan_id: String,
    #[serde(default)]
    pub plan_name: Option<String>,
    pub expiry_date: DateTime<Utc>,
    #[serde(default)]
    pub limits: PlanCounters,
    #[serde(default)]
    pub usage: PlanCounters,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanCounters {
    #[serde(default)]
    pub resume_views: u32,
    #[serde(default)]
    pub job_postings: u32,
}

/// `GET /jobSeeker/candidates`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidatesEnvelope {
    #[serde(default)]
    pub candidates: Vec<CandidateProfile>,
}

/// Error body the backend sends alongside non-2xx statuses
#[derive(Debug, Deserialize)]
pub struct BackendErrorBody {
    #[serde(default, alias = "error")]
    pub message: Option<String>,
}

impl UserRecord {
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name.trim().to_string();
        }
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Build a session user; `user_type` comes from the token when known
    pub fn into_user(self, user_type: UserType) -> User {
        let user_type = match user_type {
            UserType::Unknown => self
                .user_type
                .as_deref()
                .map(UserType::from_claim)
                .unwrap_or(UserType::Unknown),
            known => known,
        };

        User {
            name: self.display_name(),
            id: self.id,
            email: self.email,
            user_type,
            subscription: None,
        }
    }
}

impl From<SubscriptionRecord> for Subscription {
    fn from(record: SubscriptionRecord) -> Self {
        let plan_name = record
            .plan_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| record.plan_id.clone());

        Subscription {
            plan_id: record.plan_id,
            plan_name,
            expiry_date: record.expiry_date,
            features: Features {
                resume_views: FeatureUsage::new(
                    record.limits.resume_views,
                    record.usage.resume_views,
                ),
                job_posting: FeatureUsage::new(
                    record.limits.job_postings,
                    record.usage.job_postings,
                ),
            },
        }
    }
}
