use axum::{extract::State, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::{
    domain::session::{Credentials, SessionSnapshot, SessionStore},
    error::AppResult,
};

pub struct SessionController {
    session: SessionStore,
}

impl SessionController {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }

    /// GET /api/session - Current user, entitlements and last refresh error
    pub async fn get_session(
        State(controller): State<Arc<SessionController>>,
    ) -> Json<SessionSnapshot> {
        Json(controller.session.snapshot(Utc::now()).await)
    }

    /// POST /api/session - Log in with a user id and backend token
    pub async fn login(
        State(controller): State<Arc<SessionController>>,
        Json(credentials): Json<Credentials>,
    ) -> AppResult<Json<SessionSnapshot>> {
        controller.session.login(credentials).await?;
        Ok(Json(controller.session.snapshot(Utc::now()).await))
    }

    /// DELETE /api/session
    pub async fn logout(
        State(controller): State<Arc<SessionController>>,
    ) -> Json<SessionSnapshot> {
        controller.session.logout().await;
        Json(controller.session.snapshot(Utc::now()).await)
    }

    /// POST /api/session/refresh - Re-fetch user and subscription
    pub async fn refresh(
        State(controller): State<Arc<SessionController>>,
    ) -> Json<SessionSnapshot> {
        controller.session.refresh_user_data().await;
        Json(controller.session.snapshot(Utc::now()).await)
    }
}
