//! Runtime configuration for the API client.
//!
//! Values come from the environment (optionally seeded from a `.env` file by
//! the binary). Base URL resolution: MARKETPLACE_API_URL > VITE_API_BASE_URL >
//! localhost default.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::session::{FileStore, MemoryStore, TokenStore};

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid MARKETPLACE_API_TIMEOUT_SECS value: {0}")]
    InvalidTimeout(String),
    #[error("Unknown token store kind: {0} (expected file, keyring or memory)")]
    UnknownStore(String),
    #[error("No config directory available for the session file; set MARKETPLACE_SESSION_FILE")]
    NoConfigDir,
    #[error("Token store '{0}' is not compiled into this build")]
    StoreUnavailable(&'static str),
}

/// Where session credentials are persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreKind {
    File(Option<PathBuf>),
    Keyring,
    Memory,
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "file" => Ok(StoreKind::File(None)),
            "keyring" | "keychain" => Ok(StoreKind::Keyring),
            "memory" => Ok(StoreKind::Memory),
            other => Err(ConfigError::UnknownStore(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    /// `None` leaves request timeouts to the transport default.
    pub timeout: Option<Duration>,
    pub store: StoreKind,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: None,
            store: StoreKind::File(None),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("MARKETPLACE_API_URL")
            .or_else(|| lookup("VITE_API_BASE_URL"))
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout = match lookup("MARKETPLACE_API_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
                if secs == 0 {
                    return Err(ConfigError::InvalidTimeout(raw));
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let mut store = match lookup("MARKETPLACE_TOKEN_STORE") {
            Some(kind) => kind.parse()?,
            None => StoreKind::File(None),
        };
        if let StoreKind::File(ref mut path) = store {
            *path = lookup("MARKETPLACE_SESSION_FILE").map(PathBuf::from);
        }

        Ok(Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            timeout,
            store,
        })
    }

    /// Open the configured token store.
    pub fn open_store(&self) -> Result<Arc<dyn TokenStore>, ConfigError> {
        match &self.store {
            StoreKind::File(Some(path)) => Ok(Arc::new(FileStore::new(path))),
            StoreKind::File(None) => {
                let path = FileStore::default_path().ok_or(ConfigError::NoConfigDir)?;
                Ok(Arc::new(FileStore::new(path)))
            }
            StoreKind::Memory => Ok(Arc::new(MemoryStore::new())),
            #[cfg(feature = "keyring-store")]
            StoreKind::Keyring => Ok(Arc::new(crate::session::KeyringStore::default())),
            #[cfg(not(feature = "keyring-store"))]
            StoreKind::Keyring => Err(ConfigError::StoreUnavailable("keyring")),
        }
    }
}
