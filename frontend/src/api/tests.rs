use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use thrive_shared::analytics::{Interval, VisitTrendsRequest};
use thrive_shared::models::{
    AdminUsersRequest, LoginRequest, UpdateAdminUserRequest, UpdateProfileRequest,
};
use thrive_shared::{DateRange, HEADER_CSRF};

use crate::auth::commit_login;
use crate::session::{Session, SessionBackend};
use crate::web::{HttpError, HttpRequest, HttpResponse, HttpTransport};

use super::client::encode_query_component;
use super::*;

// =========================================================
// Shared mock components
// =========================================================

/// Transport double: records every outgoing request and plays back a queue
/// of canned outcomes.
#[derive(Default)]
struct MockTransport {
    log: Mutex<Vec<HttpRequest>>,
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    /// When set, the token is cancelled while the request is "in flight",
    /// emulating a page unmounting before its response lands.
    cancel_mid_flight: Mutex<Option<CancelToken>>,
}

impl MockTransport {
    fn push_response(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(HttpResponse {
                status,
                body: body.to_string(),
            }));
    }

    fn push_ok(&self, body: &str) {
        self.push_response(200, body);
    }

    fn push_network_error(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(HttpError::Network(message.to_string())));
    }

    fn cancel_mid_flight(&self, token: &CancelToken) {
        *self.cancel_mid_flight.lock().unwrap() = Some(token.clone());
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.log.lock().unwrap().clone()
    }

    fn last_request(&self) -> HttpRequest {
        self.requests().last().expect("no request issued").clone()
    }
}

#[async_trait::async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.log.lock().unwrap().push(req);
        if let Some(token) = self.cancel_mid_flight.lock().unwrap().take() {
            token.cancel();
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no canned response queued")
    }
}

#[derive(Default)]
struct MemoryStore(Mutex<HashMap<String, String>>);

impl SessionBackend for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.0
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&self, key: &str) -> bool {
        self.0.lock().unwrap().remove(key).is_some()
    }
}

struct TestApi {
    transport: Arc<MockTransport>,
    session: Session,
    api: ApiClient,
}

fn no_csrf() -> Option<String> {
    None
}

fn with_csrf() -> Option<String> {
    Some("csrf-tok".to_string())
}

fn setup(csrf: fn() -> Option<String>) -> TestApi {
    let transport = Arc::new(MockTransport::default());
    let session = Session::new(MemoryStore::default());
    let api =
        ApiClient::new("/api", transport.clone(), session.clone()).with_csrf_source(csrf);
    TestApi {
        transport,
        session,
        api,
    }
}

fn login_request() -> LoginRequest {
    LoginRequest {
        username: "a@b.com".into(),
        password: "secret".into(),
    }
}

const LOGIN_OK: &str = r#"{
    "message": "Login successful",
    "token": "abc123",
    "user": {"id": 1, "name": "a", "email": "a@b.com", "role": "Researcher"}
}"#;

// =========================================================
// Request construction
// =========================================================

#[tokio::test]
async fn post_carries_json_body_and_content_type() {
    let t = setup(no_csrf);
    t.transport.push_ok(LOGIN_OK);

    t.api.login(&login_request()).await.unwrap();

    let req = t.transport.last_request();
    assert_eq!(req.url, "/api/login/");
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["username"], "a@b.com");
    assert_eq!(body["password"], "secret");
}

#[tokio::test]
async fn get_has_neither_body_nor_content_type() {
    let t = setup(with_csrf);
    t.transport.push_ok("[]");

    t.api.visit_duration(None).await.unwrap();

    let req = t.transport.last_request();
    assert_eq!(req.url, "/api/analytics/visit-duration/");
    assert!(req.body.is_none());
    assert_eq!(req.header("Content-Type"), None);
}

#[tokio::test]
async fn query_parameters_are_appended_and_encoded() {
    let t = setup(no_csrf);
    t.transport.push_ok("[]");

    let range = DateRange::new(
        chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        chrono::NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
    );
    t.api
        .visit_trends(
            &VisitTrendsRequest {
                interval: Interval::Day,
                range: Some(range),
            },
            None,
        )
        .await
        .unwrap();

    assert_eq!(
        t.transport.last_request().url,
        "/api/analytics/visit-trends?interval=day&start_date=2025-01-01&end_date=2025-01-31"
    );
}

#[tokio::test]
async fn search_text_is_percent_encoded() {
    let t = setup(no_csrf);
    t.transport.push_ok(
        r#"{"users": [], "total": 0, "page": 1, "page_size": 10, "total_pages": 0}"#,
    );

    t.api
        .admin_users(
            &AdminUsersRequest {
                search: Some("carol b&w".into()),
                ..AdminUsersRequest::default()
            },
            None,
        )
        .await
        .unwrap();

    let url = t.transport.last_request().url;
    assert!(url.ends_with("search=carol%20b%26w"), "url was {url}");
}

#[test]
fn query_encoder_leaves_unreserved_characters() {
    assert_eq!(encode_query_component("2025-01-01"), "2025-01-01");
    assert_eq!(encode_query_component("a b&c=d"), "a%20b%26c%3Dd");
    assert_eq!(encode_query_component("naïve"), "na%C3%AFve");
}

#[tokio::test]
async fn admin_update_hits_the_user_specific_path() {
    let t = setup(no_csrf);
    t.transport.push_ok(r#"{"message": "User updated successfully"}"#);

    t.api
        .update_admin_user(&UpdateAdminUserRequest {
            user_id: 42,
            is_active: Some(false),
            ..UpdateAdminUserRequest::default()
        })
        .await
        .unwrap();

    let req = t.transport.last_request();
    assert_eq!(req.url, "/api/admin/users/42/");
    assert_eq!(req.body.as_deref(), Some(r#"{"is_active":false}"#));
}

// =========================================================
// Bearer token
// =========================================================

#[tokio::test]
async fn no_bearer_header_without_a_token() {
    let t = setup(no_csrf);
    t.transport.push_ok("[]");

    t.api.visit_duration(None).await.unwrap();
    assert_eq!(t.transport.last_request().header("Authorization"), None);
}

#[tokio::test]
async fn login_scenario_stores_token_and_later_requests_carry_it() {
    let t = setup(no_csrf);
    t.transport.push_ok(LOGIN_OK);

    let response = t.api.login(&login_request()).await.unwrap();
    commit_login(t.api.session(), &response);

    assert_eq!(t.session.token().as_deref(), Some("abc123"));
    assert!(t.session.has_token());
    assert_eq!(t.session.user().unwrap().email, "a@b.com");

    t.transport.push_ok("[]");
    t.api.visit_duration(None).await.unwrap();
    assert_eq!(
        t.transport.last_request().header("Authorization"),
        Some("Bearer abc123")
    );
}

#[tokio::test]
async fn failed_login_stores_nothing() {
    let t = setup(no_csrf);
    t.transport
        .push_response(401, r#"{"error": "Invalid email or password"}"#);

    let err = t.api.login(&login_request()).await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Unauthorized);
    assert_eq!(err.message(), "Invalid email or password");
    assert!(!t.session.has_token());
}

// =========================================================
// CSRF mirroring
// =========================================================

#[tokio::test]
async fn mutating_request_mirrors_the_csrf_cookie() {
    let t = setup(with_csrf);
    t.transport.push_ok(LOGIN_OK);

    t.api.login(&login_request()).await.unwrap();
    assert_eq!(
        t.transport.last_request().header(HEADER_CSRF),
        Some("csrf-tok")
    );
}

#[tokio::test]
async fn missing_csrf_cookie_omits_the_header() {
    let t = setup(no_csrf);
    t.transport.push_ok(LOGIN_OK);

    t.api.login(&login_request()).await.unwrap();
    assert_eq!(t.transport.last_request().header(HEADER_CSRF), None);
}

#[tokio::test]
async fn get_never_carries_the_csrf_header() {
    let t = setup(with_csrf);
    t.transport.push_ok("[]");

    t.api.visit_duration(None).await.unwrap();
    assert_eq!(t.transport.last_request().header(HEADER_CSRF), None);
}

// =========================================================
// Outcome normalization
// =========================================================

#[tokio::test]
async fn status_codes_map_to_error_kinds() {
    let cases = [
        (400, ApiErrorKind::Validation),
        (401, ApiErrorKind::Unauthorized),
        (403, ApiErrorKind::Forbidden),
        (404, ApiErrorKind::NotFound),
        (500, ApiErrorKind::Server),
        (502, ApiErrorKind::Server),
    ];
    for (status, kind) in cases {
        let t = setup(no_csrf);
        t.transport.push_response(status, r#"{"error": "nope"}"#);
        let err = t.api.visit_duration(None).await.unwrap_err();
        assert_eq!(err.kind(), kind, "status {status}");
        assert_eq!(err.status(), Some(status));
        assert_eq!(err.message(), "nope");
    }
}

#[tokio::test]
async fn field_error_maps_are_flattened_into_the_message() {
    let t = setup(no_csrf);
    t.transport.push_response(
        400,
        r#"{"email": ["Enter a valid email address."], "password": ["Too short."]}"#,
    );

    let err = t
        .api
        .update_profile(&UpdateProfileRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Validation);
    assert!(err.message().contains("email: Enter a valid email address."));
    assert!(err.message().contains("password: Too short."));
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_a_generic_message() {
    let t = setup(no_csrf);
    t.transport.push_response(500, "<html>Internal Server Error</html>");

    let err = t.api.visit_duration(None).await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Server);
    assert_eq!(err.message(), "request failed with status 500");
}

#[tokio::test]
async fn malformed_success_body_is_a_parse_error_not_a_default() {
    let t = setup(no_csrf);
    t.transport.push_ok(r#"{"unexpected": "shape"}"#);

    let err = t.api.visit_duration(None).await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Parse);
}

#[tokio::test]
async fn transport_failure_maps_to_network() {
    let t = setup(no_csrf);
    t.transport.push_network_error("connection refused");

    let err = t.api.visit_duration(None).await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Network);
    assert!(!err.is_auth_rejection());
}

// =========================================================
// Cancellation
// =========================================================

#[tokio::test]
async fn cancelled_token_skips_the_request_entirely() {
    let t = setup(no_csrf);
    let token = CancelToken::new();
    token.cancel();

    let err = t.api.visit_duration(Some(&token)).await.unwrap_err();
    assert!(err.is_aborted());
    assert!(t.transport.requests().is_empty());
}

#[tokio::test]
async fn cancellation_during_flight_discards_the_response() {
    let t = setup(no_csrf);
    let token = CancelToken::new();
    t.transport.cancel_mid_flight(&token);
    t.transport.push_ok("[]");

    // The response arrived, but the page is gone: nothing is committed.
    let err = t.api.visit_duration(Some(&token)).await.unwrap_err();
    assert!(err.is_aborted());
    assert_eq!(t.transport.requests().len(), 1);
}

// =========================================================
// Safe-default counters
// =========================================================

#[tokio::test]
async fn counters_parse_their_payload() {
    let t = setup(no_csrf);
    t.transport.push_ok(r#"{"active_users": 7}"#);
    assert_eq!(t.api.fetch_active_users(None).await, 7);

    t.transport.push_ok(r#"{"average_usage_time": 12.5}"#);
    assert_eq!(t.api.fetch_average_usage_time(None).await, 12.5);

    t.transport.push_ok(r#"{"feedback_count": 3}"#);
    assert_eq!(t.api.fetch_feedback_count(None).await, 3);
}

#[tokio::test]
async fn counters_degrade_to_zero_on_failure() {
    let t = setup(no_csrf);
    t.transport.push_network_error("offline");
    assert_eq!(t.api.fetch_active_users(None).await, 0);

    t.transport.push_response(500, r#"{"error": "boom"}"#);
    assert_eq!(t.api.fetch_average_usage_time(None).await, 0.0);

    t.transport.push_ok("not json");
    assert_eq!(t.api.fetch_feedback_count(None).await, 0);
}
