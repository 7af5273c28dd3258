use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{
    domain::{session::SessionStore, user::UserType},
    error::AppError,
};

/// Session user injected into request extensions by the session gate
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user_id: String,
    pub user_type: UserType,
}

/// Reject requests while the gateway holds no logged-in user
pub async fn session_middleware(
    State(session): State<SessionStore>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = session.current_user().await.ok_or_else(|| {
        AppError::Unauthorized("No active session; log in first".to_string())
    })?;

    request.extensions_mut().insert(SessionUser {
        user_id: user.id,
        user_type: user.user_type,
    });

    Ok(next.run(request).await)
}
