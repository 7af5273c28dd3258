pub mod error;
pub mod model;
pub mod service;

pub use error::JobServiceError;
pub use model::{CreateJobPostingRequest, EmploymentType, JobPosting, WorkMode};
pub use service::{JobService, JobServiceApi};
