use serde::{Deserialize, Serialize};

/// Job-seeker profile as returned by the Hireeasy backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    #[serde(alias = "_id")]
    pub id: String,
    pub first_name: String,
    #[serde(default)]
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
    pub skills: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
}

/// Filters forwarded to the candidate search endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FullCandidate {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub headline: Option<String>,
    pub location: Option<String>,
    pub years_of_experience: Option<u32>,
    pub summary: Option<String>,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub has_resume: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MaskedCandidate {
    pub id: String,
    pub initials: String,
    pub headline: Option<String>,
    pub location: Option<String>,
    pub years_of_experience: Option<u32>,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub has_resume: bool,
}

/// A candidate as the viewer is entitled to see it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "visibility", rename_all = "lowercase")]
pub enum CandidateView {
    Full(FullCandidate),
    Masked(MaskedCandidate),
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateListResponse {
    pub candidates: Vec<CandidateView>,
    pub limit_reached: bool,
    pub resume_views_remaining: u32,
}

impl CandidateProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    fn has_resume(&self) -> bool {
        self.resume_url
            .as_deref()
            .map(|url| !url.trim().is_empty())
            .unwrap_or(false)
    }

    pub fn to_full(&self) -> FullCandidate {
        FullCandidate {
            id: self.id.clone(),
            full_name: self.full_name(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            headline: self.headline.clone(),
            location: self.location.clone(),
            years_of_experience: self.years_of_experience,
            summary: self.summary.clone(),
            skills: self.skills.clone(),
            certifications: self.certifications.clone(),
            has_resume: self.has_resume(),
        }
    }

    pub fn to_masked(&self) -> MaskedCandidate {
        MaskedCandidate {
            id: self.id.clone(),
            initials: initials(&self.full_name()),
            headline: self.headline.clone(),
            location: self.location.clone(),
            years_of_experience: self.years_of_experience,
            skills: self.skills.clone(),
            certifications: self.certifications.clone(),
            has_resume: self.has_resume(),
        }
    }

    pub fn view(&self, full_access: bool) -> CandidateView {
        if full_access {
            CandidateView::Full(self.to_full())
        } else {
            CandidateView::Masked(self.to_masked())
        }
    }
}

/// "Jane van Doe" -> "J.V.D."
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(|c| c.to_uppercase())
        .map(|c| format!("{}.", c))
        .collect()
}
