pub mod evaluator;

pub use evaluator::{
    can_download_resume, can_post_job, can_view_candidate_details,
    has_reached_candidate_view_limit, is_subscription_active, job_posts_remaining,
    resume_views_remaining, EntitlementSnapshot,
};
