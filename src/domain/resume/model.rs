use serde::{Deserialize, Serialize};

/// Where the backend serves a candidate's resume from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeLink {
    pub resume_url: String,
    #[serde(default)]
    pub file_name: Option<String>,
}
