use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Hireeasy backend
    pub api_url: String,
    pub upload_service_url: String,
    pub http_timeout_secs: u64,
    // Session persistence
    pub session_file: Option<PathBuf>,
    // Candidate cache
    pub candidate_cache_enabled: bool,
    pub candidate_cache_ttl_secs: u64,
    // Uploads
    pub max_upload_bytes: usize,
    pub cors_allowed_origin: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

const DEFAULT_UPLOAD_SERVICE_URL: &str = "https://now-edge-six.vercel.app";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
            api_url: env::var("HIREEASY_API_URL")?,
            upload_service_url: env::var("UPLOAD_SERVICE_URL")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_SERVICE_URL.to_string()),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
            session_file: env::var("SESSION_FILE")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            candidate_cache_enabled: env::var("CANDIDATE_CACHE_ENABLED")
                .unwrap_or_else(|_| "false".to_string())
                .parse::<String>()
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(false),
            candidate_cache_ttl_secs: env::var("CANDIDATE_CACHE_TTL_SECS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()?,
            max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                .map(|s| s.parse())
                .unwrap_or(Ok(DEFAULT_MAX_UPLOAD_BYTES))?,
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|s| !s.trim().is_empty()),
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    /// Profile cache lifetime, when the cache is enabled
    pub fn candidate_cache_ttl(&self) -> Option<std::time::Duration> {
        self.candidate_cache_enabled
            .then(|| std::time::Duration::from_secs(self.candidate_cache_ttl_secs))
    }
}
