//! Typed REST client.
//!
//! [`client::ApiClient`] owns the transport-independent request pipeline
//! (base URL, bearer token, CSRF mirror, error normalization); the sibling
//! modules add one method per backend endpoint.

mod account;
mod admin;
mod analytics;
mod auth;
mod cancel;
mod client;
mod error;

pub use cancel::CancelToken;
pub use client::{ApiClient, use_api};
pub use error::{ApiError, ApiErrorKind};

#[cfg(test)]
mod tests;
