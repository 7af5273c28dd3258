use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::{
    domain::upload::{UploadService, UploadedFile},
    error::{AppError, AppResult},
};

const FILE_FIELD: &str = "file";

pub struct UploadController {
    upload_service: Arc<UploadService>,
}

impl UploadController {
    pub fn new(upload_service: Arc<UploadService>) -> Self {
        Self { upload_service }
    }

    /// POST /api/uploads - Multipart upload with a single `file` field
    pub async fn upload(
        State(controller): State<Arc<UploadController>>,
        mut multipart: Multipart,
    ) -> AppResult<(StatusCode, Json<UploadedFile>)> {
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
        {
            if field.name() != Some(FILE_FIELD) {
                continue;
            }

            let file_name = field
                .file_name()
                .map(str::to_string)
                .ok_or_else(|| AppError::BadRequest("File name is required".to_string()))?;
            let bytes = field.bytes().await.map_err(|e| {
                AppError::PayloadTooLarge(format!("Could not read uploaded file: {}", e))
            })?;

            let uploaded = controller
                .upload_service
                .upload(file_name, bytes.to_vec())
                .await?;
            return Ok((StatusCode::CREATED, Json(uploaded)));
        }

        Err(AppError::BadRequest(format!(
            "Multipart field '{}' is required",
            FILE_FIELD
        )))
    }
}
