pub mod model;
pub mod service;

pub use model::{ActivationRequest, CheckoutRequest, CheckoutSession};
pub use service::SubscriptionService;
