use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ResumeServiceError {
    #[error(transparent)]
    Backend(AppError),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("payment required: {0}")]
    PaymentRequired(String),
    #[error("resume not found")]
    NotFound,
    #[error("a download for this candidate is already in progress")]
    InProgress,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for ResumeServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::PaymentRequired(msg) => ResumeServiceError::PaymentRequired(msg),
            AppError::Unauthorized(msg) => ResumeServiceError::Unauthorized(msg),
            AppError::NotFound(_) => ResumeServiceError::NotFound,
            other => ResumeServiceError::Backend(other),
        }
    }
}

impl From<ResumeServiceError> for AppError {
    fn from(err: ResumeServiceError) -> Self {
        match err {
            ResumeServiceError::PaymentRequired(msg) => AppError::PaymentRequired(msg),
            ResumeServiceError::Unauthorized(msg) => AppError::Unauthorized(msg),
            ResumeServiceError::NotFound => AppError::NotFound("Resume not found".to_string()),
            ResumeServiceError::InProgress => AppError::Conflict(
                "A download for this candidate is already in progress".to_string(),
            ),
            ResumeServiceError::Backend(e) => e,
            ResumeServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
