//! Entitlement rules over the session user.
//!
//! Every function is total: an absent user or subscription simply means no
//! entitlement. `now` is passed in so callers and tests control the clock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::user::{Feature, User};

/// True iff the user holds a subscription whose expiry is strictly in the future
pub fn is_subscription_active(user: Option<&User>, now: DateTime<Utc>) -> bool {
    user.and_then(|u| u.subscription.as_ref())
        .map(|s| s.expiry_date > now)
        .unwrap_or(false)
}

fn has_quota(user: Option<&User>, feature: Feature, now: DateTime<Utc>) -> bool {
    if !is_subscription_active(user, now) {
        return false;
    }
    user.and_then(|u| u.feature_usage(feature))
        .map(|usage| usage.has_quota())
        .unwrap_or(false)
}

fn remaining(user: Option<&User>, feature: Feature) -> u32 {
    user.and_then(|u| u.feature_usage(feature))
        .map(|usage| usage.remaining())
        .unwrap_or(0)
}

pub fn can_post_job(user: Option<&User>, now: DateTime<Utc>) -> bool {
    has_quota(user, Feature::JobPosting, now)
}

pub fn can_download_resume(user: Option<&User>, now: DateTime<Utc>) -> bool {
    has_quota(user, Feature::ResumeViews, now)
}

pub fn job_posts_remaining(user: Option<&User>) -> u32 {
    remaining(user, Feature::JobPosting)
}

pub fn resume_views_remaining(user: Option<&User>) -> u32 {
    remaining(user, Feature::ResumeViews)
}

/// Full candidate details are gated on the same quota as resume downloads
pub fn can_view_candidate_details(user: Option<&User>, now: DateTime<Utc>) -> bool {
    can_download_resume(user, now)
}

pub fn has_reached_candidate_view_limit(user: Option<&User>, now: DateTime<Utc>) -> bool {
    if !is_subscription_active(user, now) {
        return true;
    }
    user.and_then(|u| u.feature_usage(Feature::ResumeViews))
        .map(|usage| usage.used >= usage.limit)
        .unwrap_or(true)
}

/// All entitlement answers for one user at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitlementSnapshot {
    pub subscription_active: bool,
    pub can_post_job: bool,
    pub can_download_resume: bool,
    pub can_view_candidate_details: bool,
    pub candidate_view_limit_reached: bool,
    pub job_posts_remaining: u32,
    pub resume_views_remaining: u32,
}

impl EntitlementSnapshot {
    pub fn evaluate(user: Option<&User>, now: DateTime<Utc>) -> Self {
        Self {
            subscription_active: is_subscription_active(user, now),
            can_post_job: can_post_job(user, now),
            can_download_resume: can_download_resume(user, now),
            can_view_candidate_details: can_view_candidate_details(user, now),
            candidate_view_limit_reached: has_reached_candidate_view_limit(user, now),
            job_posts_remaining: job_posts_remaining(user),
            resume_views_remaining: resume_views_remaining(user),
        }
    }
}
