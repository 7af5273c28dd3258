use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum JobServiceError {
    #[error(transparent)]
    Backend(AppError),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("payment required: {0}")]
    PaymentRequired(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for JobServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => JobServiceError::Invalid(msg),
            AppError::Unauthorized(msg) => JobServiceError::Unauthorized(msg),
            AppError::PaymentRequired(msg) => JobServiceError::PaymentRequired(msg),
            other => JobServiceError::Backend(other),
        }
    }
}

impl From<JobServiceError> for AppError {
    fn from(err: JobServiceError) -> Self {
        match err {
            JobServiceError::Invalid(msg) => AppError::BadRequest(msg),
            JobServiceError::Unauthorized(msg) => AppError::Unauthorized(msg),
            JobServiceError::PaymentRequired(msg) => AppError::PaymentRequired(msg),
            JobServiceError::Backend(e) => e,
            JobServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
