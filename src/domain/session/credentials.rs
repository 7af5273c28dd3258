use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::sync::RwLock;

/// The stored user identifier and bearer token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub user_id: String,
    pub token: String,
}

/// Holds the session credentials, optionally mirrored to a JSON file so a
/// restarted gateway picks the session back up.
pub struct CredentialStore {
    current: RwLock<Option<Credentials>>,
    path: Option<PathBuf>,
}

impl CredentialStore {
    pub fn in_memory() -> Self {
        Self {
            current: RwLock::new(None),
            path: None,
        }
    }

    pub fn with_file(path: PathBuf) -> Self {
        Self {
            current: RwLock::new(None),
            path: Some(path),
        }
    }

    pub async fn current(&self) -> Option<Credentials> {
        self.current.read().await.clone()
    }

    /// Load persisted credentials. A missing or unreadable file means no session.
    pub async fn load(&self) -> Option<Credentials> {
        let path = self.path.as_ref()?;
        let contents = match tokio::fs::read(path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read session file");
                return None;
            }
        };

        match serde_json::from_slice::<Credentials>(&contents) {
            Ok(credentials) => {
                *self.current.write().await = Some(credentials.clone());
                Some(credentials)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring malformed session file");
                None
            }
        }
    }

    pub async fn store(&self, credentials: Credentials) -> AppResult<()> {
        if let Some(path) = &self.path {
            let contents = serde_json::to_vec_pretty(&credentials)
                .map_err(|e| AppError::Internal(format!("Failed to encode session: {}", e)))?;
            tokio::fs::write(path, contents)
                .await
                .map_err(|e| AppError::Internal(format!("Failed to write session file: {}", e)))?;
        }

        *self.current.write().await = Some(credentials);
        Ok(())
    }

    pub async fn clear(&self) {
        *self.current.write().await = None;

        if let Some(path) = &self.path {
            if let Err(e) = tokio::fs::remove_file(path).await {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to remove session file");
                }
            }
        }
    }
}
