use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum CandidateServiceError {
    #[error(transparent)]
    Backend(AppError),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("candidate not found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for CandidateServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::NotFound(_) => CandidateServiceError::NotFound,
            AppError::Unauthorized(msg) => CandidateServiceError::Unauthorized(msg),
            other => CandidateServiceError::Backend(other),
        }
    }
}

impl From<CandidateServiceError> for AppError {
    fn from(err: CandidateServiceError) -> Self {
        match err {
            CandidateServiceError::NotFound => AppError::NotFound("Candidate not found".to_string()),
            CandidateServiceError::Unauthorized(msg) => AppError::Unauthorized(msg),
            CandidateServiceError::Backend(e) => e,
            CandidateServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
