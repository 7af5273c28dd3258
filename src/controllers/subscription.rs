use axum::{extract::State, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::{
    domain::session::SessionSnapshot,
    domain::subscription::{ActivationRequest, CheckoutRequest, CheckoutSession, SubscriptionService},
    error::AppResult,
};

pub struct SubscriptionController {
    subscription_service: Arc<SubscriptionService>,
}

impl SubscriptionController {
    pub fn new(subscription_service: Arc<SubscriptionService>) -> Self {
        Self {
            subscription_service,
        }
    }

    /// POST /api/subscription/checkout - Start a hosted checkout for a plan
    pub async fn checkout(
        State(controller): State<Arc<SubscriptionController>>,
        Json(request): Json<CheckoutRequest>,
    ) -> AppResult<Json<CheckoutSession>> {
        let session = controller.subscription_service.start_checkout(request).await?;
        Ok(Json(session))
    }

    /// POST /api/subscription/activate - Confirm a paid checkout
    pub async fn activate(
        State(controller): State<Arc<SubscriptionController>>,
        Json(request): Json<ActivationRequest>,
    ) -> AppResult<Json<SessionSnapshot>> {
        let snapshot = controller
            .subscription_service
            .activate(request, Utc::now())
            .await?;
        Ok(Json(snapshot))
    }
}
