pub mod error;
pub mod model;
pub mod service;

pub use error::ResumeServiceError;
pub use model::ResumeLink;
pub use service::{ResumeService, ResumeServiceApi};
