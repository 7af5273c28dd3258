pub mod model;

pub use model::{Feature, FeatureUsage, Features, Subscription, User, UserType};
