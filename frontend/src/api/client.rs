//! The request pipeline.

use std::sync::Arc;

use leptos::prelude::use_context;
use thrive_shared::{ApiRequest, AUTH_SCHEME, HEADER_CSRF};

use crate::session::Session;
use crate::web::{HttpRequest, HttpTransport};

use super::cancel::CancelToken;
use super::error::{ApiError, error_message_from_body};

/// Typed client over one backend base URL.
///
/// Every dependency is injected: the transport (mockable), the session (the
/// bearer-token source) and the CSRF cookie reader.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn HttpTransport + Send + Sync>,
    session: Session,
    csrf_source: fn() -> Option<String>,
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        transport: Arc<dyn HttpTransport + Send + Sync>,
        session: Session,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            session,
            csrf_source: crate::web::csrf_token,
        }
    }

    /// Replaces the cookie reader; tests have no `document`.
    #[cfg(test)]
    pub(crate) fn with_csrf_source(mut self, source: fn() -> Option<String>) -> Self {
        self.csrf_source = source;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str, query: &[(&'static str, String)]) -> String {
        let mut url = if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        };

        for (i, (key, value)) in query.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&encode_query_component(value));
        }

        url
    }

    /// Builds the outgoing descriptor: JSON body and the mirrored CSRF cookie
    /// on mutating methods, bearer token whenever the session holds one.
    fn build<R: ApiRequest>(&self, req: &R) -> Result<HttpRequest, ApiError> {
        let url = self.url(&req.path(), &req.query());
        let mut request = HttpRequest::new(url, R::METHOD);

        if R::METHOD.is_mutating() {
            let body = serde_json::to_string(req)
                .map_err(|e| ApiError::parse(format!("encoding request body: {}", e)))?;
            request = request
                .with_header("Content-Type", "application/json")
                .with_body(body);

            // Absent cookie: send without the header and let the server
            // answer; this is not a client-side failure.
            if let Some(token) = (self.csrf_source)() {
                request = request.with_header(HEADER_CSRF, &token);
            }
        }

        if let Some(token) = self.session.token() {
            request = request.with_header("Authorization", &format!("{} {}", AUTH_SCHEME, token));
        }

        Ok(request)
    }

    /// Issues exactly one request and normalizes the outcome.
    ///
    /// No retries and no timeout override: failures surface immediately for
    /// page-level handling.
    pub async fn send<R: ApiRequest>(
        &self,
        req: &R,
        cancel: Option<&CancelToken>,
    ) -> Result<R::Response, ApiError> {
        if cancel.is_some_and(CancelToken::is_cancelled) {
            return Err(ApiError::aborted());
        }

        let request = self.build(req)?;
        let response = self.transport.send(request).await.map_err(ApiError::from)?;

        // The page has moved on; never commit this result.
        if cancel.is_some_and(CancelToken::is_cancelled) {
            return Err(ApiError::aborted());
        }

        if response.ok() {
            response
                .json::<R::Response>()
                .map_err(|e| ApiError::parse(format!("decoding response: {}", e)))
        } else {
            let message = error_message_from_body(&response.body)
                .unwrap_or_else(|| format!("request failed with status {}", response.status));
            Err(ApiError::from_status(response.status, message))
        }
    }
}

/// Fetch the API client from Context.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient should be provided")
}

/// Minimal query-component encoder covering the characters our parameters
/// can carry (dates, ids, free-text search).
pub(crate) fn encode_query_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
