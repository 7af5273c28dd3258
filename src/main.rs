use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use hireeasy_gateway::controllers::{
    candidate::CandidateController, job::JobController, profile::ProfileController,
    session::SessionController, subscription::SubscriptionController, upload::UploadController,
};
use hireeasy_gateway::domain::{
    candidate::CandidateService,
    job::JobService,
    profile::ProfileService,
    resume::ResumeService,
    session::{CredentialStore, SessionStore},
    subscription::SubscriptionService,
    upload::UploadService,
};
use hireeasy_gateway::infrastructure::api::{HireeasyApi, HttpHireeasyApi};
use hireeasy_gateway::infrastructure::config::{Config, LogFormat};
use hireeasy_gateway::infrastructure::http::{start_http_server, Controllers};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Hireeasy gateway on {}:{}",
        config.host,
        config.port
    );

    // Backend client
    let api: Arc<dyn HireeasyApi> = Arc::new(HttpHireeasyApi::new(
        config.api_url.clone(),
        config.upload_service_url.clone(),
        config.http_timeout_secs,
    )?);
    tracing::info!(
        api_url = %config.api_url,
        upload_service_url = %config.upload_service_url,
        "Hireeasy API client initialized"
    );

    // Session holder, picking up any persisted login
    let credentials = match &config.session_file {
        Some(path) => {
            tracing::info!(path = %path.display(), "Persisting session credentials to file");
            CredentialStore::with_file(path.clone())
        }
        None => CredentialStore::in_memory(),
    };
    let session = SessionStore::new(api.clone(), credentials);
    if let Some(user) = session.restore().await {
        tracing::info!(user_id = %user.id, user_type = %user.user_type, "Session restored");
    }

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate services (inject backend client and session)
    tracing::info!("Instantiating services...");
    let candidate_service = Arc::new(CandidateService::new(
        api.clone(),
        session.clone(),
        config.candidate_cache_ttl(),
    ));
    let resume_service = Arc::new(ResumeService::new(api.clone(), session.clone()));
    let job_service = Arc::new(JobService::new(api.clone(), session.clone()));
    let profile_service = Arc::new(ProfileService::new(api.clone(), session.clone()));
    let subscription_service = Arc::new(SubscriptionService::new(api.clone(), session.clone()));
    let upload_service = Arc::new(UploadService::new(
        api.clone(),
        session.clone(),
        config.max_upload_bytes,
    ));

    // 2. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let controllers = Controllers {
        session: Arc::new(SessionController::new(session.clone())),
        candidate: Arc::new(CandidateController::new(candidate_service, resume_service)),
        job: Arc::new(JobController::new(job_service)),
        profile: Arc::new(ProfileController::new(profile_service)),
        subscription: Arc::new(SubscriptionController::new(subscription_service)),
        upload: Arc::new(UploadController::new(upload_service)),
    };

    // Start HTTP server with all routes
    start_http_server(config, session, controllers).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "hireeasy_gateway=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "hireeasy_gateway=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
