use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated user as held by the session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub user_type: UserType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Subscription>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UserType {
    Employer,
    JobSeeker,
    Unknown,
}

impl UserType {
    /// Parse the `userType` value carried by the backend token and user records
    pub fn from_claim(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "employer" => UserType::Employer,
            "jobseeker" | "job_seeker" | "job-seeker" | "candidate" => UserType::JobSeeker,
            _ => UserType::Unknown,
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserType::Employer => write!(f, "Employer"),
            UserType::JobSeeker => write!(f, "JobSeeker"),
            UserType::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub plan_id: String,
    pub plan_name: String,
    pub expiry_date: DateTime<Utc>,
    pub features: Features,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    #[serde(default)]
    pub resume_views: FeatureUsage,
    #[serde(default)]
    pub job_posting: FeatureUsage,
}

/// A metered plan feature. `used <= limit` is expected but the backend owns it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureUsage {
    pub limit: u32,
    pub used: u32,
}

impl FeatureUsage {
    pub fn new(limit: u32, used: u32) -> Self {
        Self { limit, used }
    }

    pub fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.used)
    }

    pub fn has_quota(&self) -> bool {
        self.used < self.limit
    }

    pub fn record_use(&mut self) {
        self.used = self.used.saturating_add(1);
    }
}

/// Metered features a local action can consume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    ResumeViews,
    JobPosting,
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feature::ResumeViews => write!(f, "resumeViews"),
            Feature::JobPosting => write!(f, "jobPosting"),
        }
    }
}

impl Features {
    pub fn usage(&self, feature: Feature) -> &FeatureUsage {
        match feature {
            Feature::ResumeViews => &self.resume_views,
            Feature::JobPosting => &self.job_posting,
        }
    }

    pub fn usage_mut(&mut self, feature: Feature) -> &mut FeatureUsage {
        match feature {
            Feature::ResumeViews => &mut self.resume_views,
            Feature::JobPosting => &mut self.job_posting,
        }
    }
}

impl User {
    pub fn is_employer(&self) -> bool {
        self.user_type == UserType::Employer
    }

    /// Usage counters for a feature, if the user holds a subscription
    pub fn feature_usage(&self, feature: Feature) -> Option<&FeatureUsage> {
        self.subscription.as_ref().map(|s| s.features.usage(feature))
    }
}
