pub mod credentials;
pub mod store;

pub use credentials::{CredentialStore, Credentials};
pub use store::{SessionSnapshot, SessionStore};
