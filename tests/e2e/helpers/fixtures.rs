use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Value};

// The gateway never checks signatures; any key will do
const BACKEND_SIGNING_KEY: &[u8] = b"hireeasy-backend-secret";

pub const EMPLOYER_ID: &str = "emp-1";
pub const JOB_SEEKER_ID: &str = "js-1";

/// Backend-issued token carrying the user id and type
pub fn backend_token(user_id: &str, user_type: &str) -> String {
    let claims = json!({
        "id": user_id,
        "userType": user_type,
        "exp": (chrono::Utc::now() + chrono::Duration::hours(1)).timestamp(),
    });

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(BACKEND_SIGNING_KEY),
    )
    .unwrap()
}

pub fn employer_login() -> Value {
    json!({ "userId": EMPLOYER_ID, "token": backend_token(EMPLOYER_ID, "Employer") })
}

pub fn job_seeker_login() -> Value {
    json!({ "userId": JOB_SEEKER_ID, "token": backend_token(JOB_SEEKER_ID, "JobSeeker") })
}

pub fn candidates() -> Vec<Value> {
    vec![
        json!({
            "_id": "cand-1",
            "firstName": "Priya",
            "lastName": "Raman",
            "email": "priya@example.com",
            "phone": "+1 555 0101",
            "headline": "ServiceNow ITOM Architect",
            "location": "Chicago, IL",
            "yearsOfExperience": 9,
            "skills": ["ITOM", "Discovery"],
            "certifications": ["CIS-Discovery"],
            "resumeUrl": "https://files.hireeasy.test/priya.pdf",
        }),
        json!({
            "_id": "cand-2",
            "firstName": "Lucas",
            "lastName": "Moreau",
            "email": "lucas@example.com",
            "headline": "ServiceNow Developer",
            "yearsOfExperience": 2,
            "skills": ["Flow Designer"],
        }),
    ]
}

pub fn job_posting() -> Value {
    json!({
        "title": "Senior ServiceNow Developer",
        "description": "<p>Own our ITSM platform.</p>",
        "location": "Remote",
        "employmentType": "full-time",
        "workMode": "remote",
        "salaryMin": 120000,
        "salaryMax": 150000,
        "skills": ["ITSM", "Glide"],
    })
}
