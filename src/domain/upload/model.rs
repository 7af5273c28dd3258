use serde::{Deserialize, Serialize};

/// A file received from the UI, on its way to the storage service
#[derive(Debug, Clone)]
pub struct UploadPayload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadedFile {
    pub url: String,
}
