pub mod error;
pub mod model;
pub mod service;

pub use error::ProfileServiceError;
pub use model::{
    CreateProfileRequest, CreatedRecord, EducationEntry, EmploymentEntry, Proficiency, SkillEntry,
};
pub use service::ProfileService;
