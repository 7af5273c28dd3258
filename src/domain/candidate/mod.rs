pub mod error;
pub mod model;
pub mod service;

pub use error::CandidateServiceError;
pub use model::{
    CandidateListResponse, CandidateProfile, CandidateQuery, CandidateView, FullCandidate,
    MaskedCandidate,
};
pub use service::{CandidateService, CandidateServiceApi};
