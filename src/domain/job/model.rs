use serde::{Deserialize, Serialize};

const MAX_TITLE_LENGTH: usize = 150;
const MAX_SKILLS: usize = 25;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Freelance,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum WorkMode {
    Remote,
    Onsite,
    Hybrid,
}

/// Job posting form, forwarded to `POST /job/createJobPosting`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobPostingRequest {
    pub title: String,
    /// Rich-text HTML from the editor, passed through untouched
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    pub employment_type: EmploymentType,
    pub work_mode: WorkMode,
    #[serde(default)]
    pub salary_min: Option<u32>,
    #[serde(default)]
    pub salary_max: Option<u32>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
}

impl CreateJobPostingRequest {
    /// Check the form before any quota is consumed
    pub fn validate(&self) -> Result<(), String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Job title is required".to_string());
        }
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(format!(
                "Job title must be {} characters or less",
                MAX_TITLE_LENGTH
            ));
        }
        if self.description.trim().is_empty() {
            return Err("Job description is required".to_string());
        }
        if let (Some(min), Some(max)) = (self.salary_min, self.salary_max) {
            if min > max {
                return Err(format!(
                    "Salary minimum ({}) exceeds maximum ({})",
                    min, max
                ));
            }
        }
        if self.skills.len() > MAX_SKILLS {
            return Err(format!("At most {} skills can be listed", MAX_SKILLS));
        }
        if self.skills.iter().any(|s| s.trim().is_empty()) {
            return Err("Skills cannot be blank".to_string());
        }
        Ok(())
    }
}
