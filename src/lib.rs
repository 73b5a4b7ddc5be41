//! Access layer for the marketplace admin and vendor panels.
//!
//! Every backend call goes through an endpoint function that reads the
//! access token from the injected session, attaches it as a bearer header,
//! and hands the request to the executor, which folds every outcome into an
//! `ApiResponse` envelope.

pub mod api;
pub mod config;
pub mod session;

pub use api::auth::RefreshOutcome;
pub use api::{ApiClient, ApiResponse};
pub use config::{ApiConfig, ConfigError};
pub use session::{Role, Session, TokenStore};
