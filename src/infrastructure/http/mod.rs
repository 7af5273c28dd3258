use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::infrastructure::config::Config;
use crate::{
    controllers::{
        candidate::CandidateController, health, job::JobController, profile::ProfileController,
        session::SessionController, subscription::SubscriptionController,
        upload::UploadController,
    },
    domain::session::SessionStore,
    infrastructure::auth::{request_id_middleware, session_middleware},
};

// Multipart framing on top of the file itself
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Controllers wired into the router
pub struct Controllers {
    pub session: Arc<SessionController>,
    pub candidate: Arc<CandidateController>,
    pub job: Arc<JobController>,
    pub profile: Arc<ProfileController>,
    pub subscription: Arc<SubscriptionController>,
    pub upload: Arc<UploadController>,
}

/// Build the gateway router with all routes and layers configured
pub fn build_router(
    config: &Config,
    session: SessionStore,
    controllers: Controllers,
) -> anyhow::Result<Router> {
    // Session routes (public - report or change the session)
    let session_routes = Router::new()
        .route(
            "/api/session",
            get(SessionController::get_session)
                .post(SessionController::login)
                .delete(SessionController::logout),
        )
        .route("/api/session/refresh", post(SessionController::refresh))
        .with_state(controllers.session.clone());

    // Candidate routes (require a logged-in user)
    let candidate_routes = Router::new()
        .route("/api/candidates", get(CandidateController::list_candidates))
        .route(
            "/api/candidates/:candidateId",
            get(CandidateController::get_candidate),
        )
        .route(
            "/api/candidates/:candidateId/resume",
            post(CandidateController::download_resume),
        )
        .with_state(controllers.candidate.clone())
        .layer(middleware::from_fn_with_state(
            session.clone(),
            session_middleware,
        ));

    // Job routes (require a logged-in user)
    let job_routes = Router::new()
        .route("/api/jobs", post(JobController::create_job))
        .with_state(controllers.job.clone())
        .layer(middleware::from_fn_with_state(
            session.clone(),
            session_middleware,
        ));

    // Profile wizard routes (require a logged-in user)
    let profile_routes = Router::new()
        .route("/api/profile", post(ProfileController::create_profile))
        .route(
            "/api/profile/education",
            post(ProfileController::add_education),
        )
        .route("/api/profile/skills", post(ProfileController::add_skill))
        .route(
            "/api/profile/employment",
            post(ProfileController::add_employment),
        )
        .with_state(controllers.profile.clone())
        .layer(middleware::from_fn_with_state(
            session.clone(),
            session_middleware,
        ));

    // Subscription routes (require a logged-in user)
    let subscription_routes = Router::new()
        .route(
            "/api/subscription/checkout",
            post(SubscriptionController::checkout),
        )
        .route(
            "/api/subscription/activate",
            post(SubscriptionController::activate),
        )
        .with_state(controllers.subscription.clone())
        .layer(middleware::from_fn_with_state(
            session.clone(),
            session_middleware,
        ));

    // Upload routes (require a logged-in user)
    let upload_routes = Router::new()
        .route("/api/uploads", post(UploadController::upload))
        .with_state(controllers.upload.clone())
        .layer(DefaultBodyLimit::max(
            config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES,
        ))
        .layer(middleware::from_fn_with_state(
            session.clone(),
            session_middleware,
        ));

    let app = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(session)
        .merge(session_routes)
        .merge(candidate_routes)
        .merge(job_routes)
        .merge(profile_routes)
        .merge(subscription_routes)
        .merge(upload_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_id_middleware))
                .layer(cors_layer(config)?),
        );

    Ok(app)
}

fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    Ok(match &config.cors_allowed_origin {
        Some(origin) => layer.allow_origin(AllowOrigin::exact(origin.parse::<HeaderValue>()?)),
        None if config.is_development() => layer.allow_origin(Any),
        None => layer,
    })
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    session: SessionStore,
    controllers: Controllers,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(&config, session, controllers)?;

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
