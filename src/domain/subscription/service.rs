use super::model::{ActivationRequest, CheckoutRequest, CheckoutSession};
use crate::domain::session::{SessionSnapshot, SessionStore};
use crate::error::{AppError, AppResult};
use crate::infrastructure::api::HireeasyApi;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Plan purchase; the payment itself happens in the backend's Stripe checkout
pub struct SubscriptionService {
    api: Arc<dyn HireeasyApi>,
    session: SessionStore,
}

impl SubscriptionService {
    pub fn new(api: Arc<dyn HireeasyApi>, session: SessionStore) -> Self {
        Self { api, session }
    }

    pub async fn start_checkout(&self, request: CheckoutRequest) -> AppResult<CheckoutSession> {
        if request.plan_id.trim().is_empty() {
            return Err(AppError::BadRequest("Plan id is required".to_string()));
        }
        let credentials = self.session.require_credentials().await?;

        let checkout = self
            .api
            .create_checkout_session(&credentials, &request)
            .await?;

        tracing::info!(
            user_id = %credentials.user_id,
            plan_id = %request.plan_id,
            session_id = %checkout.session_id,
            "Checkout session created"
        );

        Ok(checkout)
    }

    /// Activate a paid plan and return the refreshed session
    pub async fn activate(
        &self,
        request: ActivationRequest,
        now: DateTime<Utc>,
    ) -> AppResult<SessionSnapshot> {
        if request.plan_id.trim().is_empty() || request.session_id.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Plan id and checkout session id are required".to_string(),
            ));
        }
        let credentials = self.session.require_credentials().await?;

        self.api
            .activate_subscription(&credentials, &request)
            .await?;
        self.session.refresh_user_data().await;

        tracing::info!(
            user_id = %credentials.user_id,
            plan_id = %request.plan_id,
            "Subscription activated"
        );

        Ok(self.session.snapshot(now).await)
    }
}
