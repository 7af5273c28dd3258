use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\+?[0-9][0-9\s\-().]{6,19}$").expect("phone pattern is valid")
    })
}

fn require(value: &str, field: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} is required", field));
    }
    Ok(())
}

fn check_range(start: NaiveDate, end: Option<NaiveDate>) -> Result<(), String> {
    match end {
        Some(end) if end < start => Err(format!(
            "End date {} is before start date {}",
            end, start
        )),
        _ => Ok(()),
    }
}

/// Wizard step 1: personal details
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub years_of_experience: Option<u32>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    #[serde(default)]
    pub field_of_study: Option<String>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillEntry {
    pub name: String,
    pub proficiency: Proficiency,
    #[serde(default)]
    pub years_of_experience: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentEntry {
    pub company: String,
    pub title: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
}

/// Identifier the backend assigns to a newly created wizard record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedRecord {
    #[serde(alias = "_id")]
    pub id: String,
}

impl CreateProfileRequest {
    pub fn validate(&self) -> Result<(), String> {
        require(&self.first_name, "First name")?;
        require(&self.last_name, "Last name")?;
        if !email_pattern().is_match(self.email.trim()) {
            return Err(format!("Invalid email address: {}", self.email));
        }
        if let Some(phone) = self.phone.as_deref().filter(|p| !p.trim().is_empty()) {
            if !phone_pattern().is_match(phone.trim()) {
                return Err(format!("Invalid phone number: {}", phone));
            }
        }
        if let Some(years) = self.years_of_experience {
            if years > 60 {
                return Err("Years of experience must be 60 or less".to_string());
            }
        }
        Ok(())
    }
}

impl EducationEntry {
    pub fn validate(&self) -> Result<(), String> {
        require(&self.institution, "Institution")?;
        require(&self.degree, "Degree")?;
        check_range(self.start_date, self.end_date)
    }
}

impl SkillEntry {
    pub fn validate(&self) -> Result<(), String> {
        require(&self.name, "Skill name")?;
        if let Some(years) = self.years_of_experience {
            if years > 60 {
                return Err("Years of experience must be 60 or less".to_string());
            }
        }
        Ok(())
    }
}

impl EmploymentEntry {
    pub fn validate(&self) -> Result<(), String> {
        require(&self.company, "Company")?;
        require(&self.title, "Job title")?;
        if self.current && self.end_date.is_some() {
            return Err("A current position cannot have an end date".to_string());
        }
        check_range(self.start_date, self.end_date)
    }
}
