pub mod model;
pub mod service;

pub use model::{UploadPayload, UploadedFile};
pub use service::UploadService;
