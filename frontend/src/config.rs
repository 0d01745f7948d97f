//! Frontend configuration.

/// Base path every API call is issued against. The backend is expected to be
/// reverse-proxied under the same origin, so cookies flow without CORS.
pub const API_BASE_URL: &str = "/api";
