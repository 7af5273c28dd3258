use super::model::{UploadPayload, UploadedFile};
use crate::domain::session::SessionStore;
use crate::error::{AppError, AppResult};
use crate::infrastructure::api::HireeasyApi;
use std::sync::Arc;

const ALLOWED_EXTENSIONS: [(&str, &str); 3] = [
    ("pdf", "application/pdf"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
];

/// Resume uploads, forwarded to the external storage service
pub struct UploadService {
    api: Arc<dyn HireeasyApi>,
    session: SessionStore,
    max_upload_bytes: usize,
}

impl UploadService {
    pub fn new(api: Arc<dyn HireeasyApi>, session: SessionStore, max_upload_bytes: usize) -> Self {
        Self {
            api,
            session,
            max_upload_bytes,
        }
    }

    pub async fn upload(&self, file_name: String, bytes: Vec<u8>) -> AppResult<UploadedFile> {
        let content_type = content_type_for(&file_name)?;
        if bytes.is_empty() {
            return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
        }
        if bytes.len() > self.max_upload_bytes {
            return Err(AppError::PayloadTooLarge(format!(
                "File must be {} bytes or less",
                self.max_upload_bytes
            )));
        }

        let credentials = self.session.require_credentials().await?;
        let uploaded = self
            .api
            .upload_file(
                &credentials,
                UploadPayload {
                    file_name: file_name.clone(),
                    content_type: content_type.to_string(),
                    bytes,
                },
            )
            .await?;

        tracing::info!(file_name = %file_name, url = %uploaded.url, "File uploaded");
        Ok(uploaded)
    }
}

/// Content type for an accepted resume file name
pub fn content_type_for(file_name: &str) -> AppResult<&'static str> {
    let extension = std::path::Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .ok_or_else(|| AppError::BadRequest(format!("File has no extension: {}", file_name)))?;

    ALLOWED_EXTENSIONS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, content_type)| *content_type)
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "Unsupported file type '.{}'; expected PDF, DOC or DOCX",
                extension
            ))
        })
}
