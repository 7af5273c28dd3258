pub mod hireeasy_api;
pub mod http_api;
pub mod records;

pub use hireeasy_api::HireeasyApi;
pub use http_api::HttpHireeasyApi;
pub use records::{SubscriptionRecord, UserRecord};
