use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ProfileServiceError {
    #[error(transparent)]
    Backend(AppError),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("profile already exists")]
    Conflict,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<AppError> for ProfileServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::BadRequest(msg) => ProfileServiceError::Invalid(msg),
            AppError::Unauthorized(msg) => ProfileServiceError::Unauthorized(msg),
            AppError::Conflict(_) => ProfileServiceError::Conflict,
            other => ProfileServiceError::Backend(other),
        }
    }
}

impl From<ProfileServiceError> for AppError {
    fn from(err: ProfileServiceError) -> Self {
        match err {
            ProfileServiceError::Invalid(msg) => AppError::BadRequest(msg),
            ProfileServiceError::Unauthorized(msg) => AppError::Unauthorized(msg),
            ProfileServiceError::Conflict => {
                AppError::Conflict("Profile already exists".to_string())
            }
            ProfileServiceError::Backend(e) => e,
            ProfileServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
