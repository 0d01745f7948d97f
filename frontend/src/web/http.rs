//! HTTP transport.
//!
//! Request/response descriptors and the transport trait the API client is
//! generic over. The production implementation rides on `window.fetch` with
//! credentials included; tests substitute an in-memory transport.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use thrive_shared::HttpMethod;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Outgoing request descriptor. Built per call, discarded after the response.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(url: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            url: url.into(),
            method,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    /// First value set for a header, case-insensitive.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response: status plus the body text.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Transport-level failures. Anything the server answered, even a 500, is a
/// response, not an `HttpError`.
#[derive(Debug)]
pub enum HttpError {
    /// The request could not be constructed.
    BuildFailed(String),
    /// The request never produced a response.
    Network(String),
    /// A response arrived but its body could not be read.
    ReadFailed(String),
}

impl core::fmt::Display for HttpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HttpError::BuildFailed(msg) => write!(f, "request build failed: {}", msg),
            HttpError::Network(msg) => write!(f, "network error: {}", msg),
            HttpError::ReadFailed(msg) => write!(f, "response read failed: {}", msg),
        }
    }
}

impl std::error::Error for HttpError {}

/// The seam between the API client and the wire.
#[async_trait::async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError>;
}

/// Production transport over `window.fetch`.
///
/// Credentials are always included so the backend's session and CSRF cookies
/// travel with every request.
pub struct FetchTransport;

impl FetchTransport {
    pub fn shared() -> Arc<dyn HttpTransport + Send + Sync> {
        Arc::new(FetchTransport)
    }
}

fn js_error_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[async_trait::async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let headers = web_sys::Headers::new()
            .map_err(|e| HttpError::BuildFailed(format!("creating headers: {:?}", e)))?;

        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| HttpError::BuildFailed(format!("setting header {}: {:?}", key, e)))?;
        }

        let opts = web_sys::RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());
        opts.set_credentials(web_sys::RequestCredentials::Include);

        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = web_sys::Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| HttpError::BuildFailed(format!("{:?}", e)))?;

        let window = web_sys::window()
            .ok_or_else(|| HttpError::Network("no window object".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| HttpError::Network(js_error_message(&e)))?;

        let response: web_sys::Response = resp_value
            .dyn_into()
            .map_err(|e| HttpError::ReadFailed(format!("not a Response: {:?}", e)))?;

        let status = response.status();

        let text_promise = response
            .text()
            .map_err(|e| HttpError::ReadFailed(format!("{:?}", e)))?;
        let text = JsFuture::from(text_promise)
            .await
            .map_err(|e| HttpError::ReadFailed(js_error_message(&e)))?;

        Ok(HttpResponse {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}
