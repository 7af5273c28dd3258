pub mod auth;
pub mod candidate;
pub mod entitlement;
pub mod job;
pub mod profile;
pub mod resume;
pub mod session;
pub mod subscription;
pub mod upload;
pub mod user;
