//! Marketplace API access layer.
//!
//! Request executor with response normalization, the transport seam, the
//! endpoint catalog, auth/token refresh, and the payload types matching the
//! backend's JSON and multipart formats.

pub mod auth;
pub mod catalog;
pub mod client;
pub mod envelope;
pub mod executor;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::ApiClient;
pub use envelope::ApiResponse;
pub use transport::{HttpMethod, HttpTransport, RequestBody, Transport};
