//! Client-side error type.
//!
//! One error for the whole API surface: a kind carrying the semantics, the
//! message shown to the user, and the HTTP status when the server answered.

use std::fmt;

use crate::web::HttpError;

/// Error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The request never produced a response.
    Network,
    /// The calling page cancelled the request; the result was discarded.
    Aborted,
    /// 401: missing or expired credentials.
    Unauthorized,
    /// 403: authenticated but not allowed.
    Forbidden,
    /// 400: the server rejected the payload.
    Validation,
    /// 404: resource unknown.
    NotFound,
    /// 5xx or any other status the server answered with.
    Server,
    /// The response body did not match its schema.
    Parse,
}

impl ApiErrorKind {
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiErrorKind::Network => "NETWORK",
            ApiErrorKind::Aborted => "ABORTED",
            ApiErrorKind::Unauthorized => "UNAUTHORIZED",
            ApiErrorKind::Forbidden => "FORBIDDEN",
            ApiErrorKind::Validation => "VALIDATION",
            ApiErrorKind::NotFound => "NOT_FOUND",
            ApiErrorKind::Server => "SERVER",
            ApiErrorKind::Parse => "PARSE",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiError {
    kind: ApiErrorKind,
    message: String,
    status: Option<u16>,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
        }
    }

    // --- Convenience constructors ---

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, message)
    }

    pub fn aborted() -> Self {
        Self::new(ApiErrorKind::Aborted, "request cancelled")
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Parse, message)
    }

    /// Classifies a non-2xx response by status.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let kind = match status {
            400 => ApiErrorKind::Validation,
            401 => ApiErrorKind::Unauthorized,
            403 => ApiErrorKind::Forbidden,
            404 => ApiErrorKind::NotFound,
            _ => ApiErrorKind::Server,
        };
        Self {
            kind,
            message: message.into(),
            status: Some(status),
        }
    }

    // --- Accessors ---

    pub fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    /// The user-facing message (server-provided when available).
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn is_aborted(&self) -> bool {
        self.kind == ApiErrorKind::Aborted
    }

    /// Whether this failure means the credentials themselves were rejected,
    /// as opposed to the request not getting through.
    pub fn is_auth_rejection(&self) -> bool {
        matches!(
            self.kind,
            ApiErrorKind::Unauthorized | ApiErrorKind::Forbidden | ApiErrorKind::NotFound
        )
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.error_code(), self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        ApiError::network(err.to_string())
    }
}

/// Pulls a human-readable message out of a backend error payload.
///
/// The backend answers `{"error": ...}` for most failures; DRF serializers
/// use `message`/`detail` or a per-field map of error lists.
pub(crate) fn error_message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;

    for key in ["error", "message", "detail"] {
        if let Some(message) = object.get(key).and_then(|v| v.as_str()) {
            return Some(message.to_string());
        }
    }

    // Field-error map: {"email": ["Enter a valid email address."]}
    let mut parts = Vec::new();
    for (field, errors) in object {
        if let Some(list) = errors.as_array() {
            let messages: Vec<&str> = list.iter().filter_map(|e| e.as_str()).collect();
            if !messages.is_empty() {
                parts.push(format!("{}: {}", field, messages.join(" ")));
            }
        }
    }

    (!parts.is_empty()).then(|| parts.join("; "))
}
