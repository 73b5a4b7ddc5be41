//! Session credentials for the marketplace API.
//!
//! Credentials live in a persisted key-value store behind the `TokenStore`
//! trait and are read at call time, never cached, so a token written by a
//! refresh (or by another process sharing the same store) is picked up by
//! the next request.

pub mod file;
#[cfg(feature = "keyring-store")]
pub mod keychain;
pub mod memory;


use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

pub use file::FileStore;
#[cfg(feature = "keyring-store")]
pub use keychain::KeyringStore;
pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Token store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Token store is corrupt: {0}")]
    Corrupt(String),
    #[error("Token store operation failed: {0}")]
    OperationFailed(String),
}

/// Persisted key-value storage for session credentials.
///
/// Implementations must be safe to share between tasks; every method is
/// expected to hit the backing store rather than a private cache.
pub trait TokenStore: Send + Sync {
    /// Read a value. Returns `None` when the key was never written or was removed.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, overwriting any previous value under the same key.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a value. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Which side of the marketplace the session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Vendor,
}

impl Role {
    /// Prefix used for every storage key and for the role's login routes.
    pub fn prefix(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Vendor => "vendor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "vendor" | "seller" => Ok(Role::Vendor),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// The credential slots stored per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKey {
    AccessToken,
    RefreshToken,
    Role,
    RoleId,
}

impl SessionKey {
    pub const ALL: [SessionKey; 4] = [
        SessionKey::AccessToken,
        SessionKey::RefreshToken,
        SessionKey::Role,
        SessionKey::RoleId,
    ];

    fn suffix(&self) -> &'static str {
        match self {
            SessionKey::AccessToken => "AccessToken",
            SessionKey::RefreshToken => "RefreshToken",
            SessionKey::Role => "Role",
            SessionKey::RoleId => "RoleId",
        }
    }

    /// Role-prefixed storage key, e.g. `adminAccessToken`.
    pub fn storage_key(&self, role: Role) -> String {
        format!("{}{}", role.prefix(), self.suffix())
    }
}

/// Everything written to the store after a successful login.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Credentials {
    pub access_token: String,
    pub refresh_token: Option<String>,
    /// Raw role payload as returned by the backend.
    pub role: Option<String>,
    pub role_id: Option<String>,
}

/// Injected session context shared by every endpoint function.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
    role: Role,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>, role: Role) -> Self {
        Self { store, role }
    }

    /// An ephemeral session backed by a fresh `MemoryStore`.
    pub fn in_memory(role: Role) -> Self {
        Self::new(Arc::new(MemoryStore::new()), role)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    fn read(&self, key: SessionKey) -> Option<String> {
        let storage_key = key.storage_key(self.role);
        match self.store.get(&storage_key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(e) => {
                log::warn!("Failed to read {} from token store: {}", storage_key, e);
                None
            }
        }
    }

    /// Current access token, read from the store on every call.
    pub fn access_token(&self) -> Option<String> {
        self.read(SessionKey::AccessToken)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.read(SessionKey::RefreshToken)
    }

    pub fn stored_role(&self) -> Option<String> {
        self.read(SessionKey::Role)
    }

    pub fn role_id(&self) -> Option<String> {
        self.read(SessionKey::RoleId)
    }

    /// Overwrite the access token only (used by token refresh).
    pub fn set_access_token(&self, token: &str) -> Result<(), StoreError> {
        self.store
            .set(&SessionKey::AccessToken.storage_key(self.role), token)
    }

    /// Replace every credential of this role with the ones from a fresh login.
    ///
    /// Stale keys are removed first so a login that returns fewer fields
    /// never leaves the previous user's values behind.
    pub fn store_login(&self, credentials: &Credentials) -> Result<(), StoreError> {
        self.clear()?;
        self.store.set(
            &SessionKey::AccessToken.storage_key(self.role),
            &credentials.access_token,
        )?;
        let optional = [
            (SessionKey::RefreshToken, &credentials.refresh_token),
            (SessionKey::Role, &credentials.role),
            (SessionKey::RoleId, &credentials.role_id),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                self.store.set(&key.storage_key(self.role), value)?;
            }
        }
        Ok(())
    }

    /// Remove every credential of this role (logout).
    pub fn clear(&self) -> Result<(), StoreError> {
        for key in SessionKey::ALL {
            self.store.remove(&key.storage_key(self.role))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("role", &self.role).finish()
    }
}
