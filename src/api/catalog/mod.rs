//! Endpoint catalog: one function per backend operation.
//!
//! Every function here is authenticated. Each reads the access token at call
//! time through the client's session and returns the executor's envelope
//! unchanged; without a token it returns "No token provided" and sends nothing.

pub mod carousel;
pub mod categories;
pub mod coupons;
pub mod customers;
pub mod dashboard;
pub mod notifications;
pub mod orders;
pub mod products;
pub mod reviews;
pub mod vendors;

#[cfg(test)]
mod tests;
