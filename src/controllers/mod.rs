pub mod candidate;
pub mod health;
pub mod job;
pub mod profile;
pub mod session;
pub mod subscription;
pub mod upload;
