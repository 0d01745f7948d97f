//! Wire-level domain layer shared by the dashboard frontend.
//!
//! Everything here is plain data: request/response payloads, endpoint
//! descriptors and the analytics DTOs. No DOM or browser dependency, so the
//! whole crate is testable on the host.

pub mod analytics;
pub mod models;
pub mod protocol;

// =========================================================
// Wire constants
// =========================================================

/// Cookie set by the backend carrying the CSRF secret.
pub const CSRF_COOKIE_NAME: &str = "csrftoken";
/// Header the CSRF cookie value is mirrored into on mutating requests.
pub const HEADER_CSRF: &str = "X-CSRFToken";
/// Scheme used for the session token in the Authorization header.
pub const AUTH_SCHEME: &str = "Bearer";

pub use analytics::{DateRange, Interval};
pub use models::UserProfile;
pub use protocol::{ApiRequest, HttpMethod};
