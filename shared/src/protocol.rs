//! Endpoint descriptors.
//!
//! Each REST endpoint is described by an [`ApiRequest`] impl tying a request
//! payload to its response type, method, path and query parameters. The HTTP
//! client is generic over this trait, so adding an endpoint never touches the
//! transport code.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::analytics::*;
use crate::models::*;

/// HTTP methods used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Mutating methods carry a JSON body and the CSRF header.
    pub fn is_mutating(&self) -> bool {
        !matches!(self, HttpMethod::Get)
    }
}

/// Request → response relationship and routing metadata for one endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Path relative to the API base URL.
    fn path(&self) -> String;
    /// Query parameters, appended percent-encoded by the client.
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

// =========================================================
// Session & account endpoints
// =========================================================

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "login/".into()
    }
}

impl ApiRequest for SignupRequest {
    type Response = ApiMessage;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "signup/".into()
    }
}

impl ApiRequest for LogoutRequest {
    type Response = ApiMessage;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "logout/".into()
    }
}

impl ApiRequest for CheckAuthRequest {
    type Response = CheckAuthResponse;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "check-auth/".into()
    }
}

impl ApiRequest for UserInfoRequest {
    type Response = UserProfile;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "user-info/".into()
    }
}

impl ApiRequest for SendResetCodeRequest {
    type Response = ResetFlowResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "password-reset/send-code/".into()
    }
}

impl ApiRequest for VerifyResetCodeRequest {
    type Response = ResetFlowResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "password-reset/verify-code/".into()
    }
}

impl ApiRequest for ResetPasswordRequest {
    type Response = ResetFlowResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "password-reset/reset/".into()
    }
}

impl ApiRequest for ProfileRequest {
    type Response = ProfileSettings;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "user/profile/".into()
    }
}

impl ApiRequest for UpdateProfileRequest {
    type Response = ApiMessage;
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        "user/profile/".into()
    }
}

impl ApiRequest for ChangePasswordRequest {
    type Response = ApiMessage;
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        "user/change-password/".into()
    }
}

impl ApiRequest for SecurityQuestionsRequest {
    type Response = Vec<SecurityQuestion>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "user/security-questions/".into()
    }
}

impl ApiRequest for UpdateSecurityQuestionsRequest {
    type Response = ApiMessage;
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        "user/security-questions/".into()
    }
}

impl ApiRequest for PreferencesRequest {
    type Response = InterfacePreferences;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "user/preferences/".into()
    }
}

// The preferences payload is its own update request.
impl ApiRequest for InterfacePreferences {
    type Response = ApiMessage;
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        "user/preferences/".into()
    }
}

// =========================================================
// Admin endpoints
// =========================================================

impl ApiRequest for AdminUsersRequest {
    type Response = AdminUserPage;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "admin/users/".into()
    }
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}

impl ApiRequest for CreateAdminUserRequest {
    type Response = ApiMessage;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "admin/users/create/".into()
    }
}

impl ApiRequest for UpdateAdminUserRequest {
    type Response = ApiMessage;
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        format!("admin/users/{}/", self.user_id)
    }
}

// =========================================================
// Analytics endpoints
// =========================================================

impl ApiRequest for ActiveUsersRequest {
    type Response = ActiveUsersResponse;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "active-users/".into()
    }
}

impl ApiRequest for AverageUsageTimeRequest {
    type Response = AverageUsageTimeResponse;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "average-usage-time/".into()
    }
}

impl ApiRequest for FeedbackCountRequest {
    type Response = FeedbackCountResponse;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "feedback-count/".into()
    }
}

impl ApiRequest for VisitTrendsRequest {
    type Response = Vec<VisitTrendPoint>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "analytics/visit-trends".into()
    }
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("interval", self.interval.as_str().to_string())];
        if let Some(range) = &self.range {
            pairs.extend(range.query_pairs());
        }
        pairs
    }
}

impl ApiRequest for PopularContentRequest {
    type Response = Vec<PopularPage>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "analytics/popular-content".into()
    }
    fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("metric", self.metric.as_str().to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

impl ApiRequest for VisitDurationRequest {
    type Response = Vec<DurationBucket>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "analytics/visit-duration/".into()
    }
}

impl ApiRequest for CommentSourcesRequest {
    type Response = Vec<NavigationPath>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "analytics/comment-sources/".into()
    }
}

impl ApiRequest for CourseSourcesRequest {
    type Response = Vec<NavigationPath>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "analytics/course-sources/".into()
    }
}

impl ApiRequest for CommentTimeDistributionRequest {
    type Response = Vec<HeatmapCell>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "analytics/comment-time-distribution/".into()
    }
}

impl ApiRequest for SessionActivityRequest {
    type Response = Vec<SessionActivityDay>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "session-activity/".into()
    }
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(user_id) = self.user_id {
            pairs.push(("user_id", user_id.to_string()));
        }
        if let Some(range) = &self.range {
            pairs.extend(range.query_pairs());
        }
        pairs
    }
}

impl ApiRequest for ModuleCompletionRequest {
    type Response = Vec<ModuleStatus>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "module-completion-status/".into()
    }
    fn query(&self) -> Vec<(&'static str, String)> {
        match self.user_id {
            Some(user_id) => vec![("user_id", user_id.to_string())],
            None => Vec::new(),
        }
    }
}

impl ApiRequest for UserFavoritesRequest {
    type Response = UserFavoritesResponse;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "user-favorites/".into()
    }
    fn query(&self) -> Vec<(&'static str, String)> {
        match self.user_id {
            Some(user_id) => vec![("user_id", user_id.to_string())],
            None => Vec::new(),
        }
    }
}

impl ApiRequest for UserPostsAnalysisRequest {
    type Response = Vec<CountPoint>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "user-posts-analysis/".into()
    }
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("interval", self.interval.as_str().to_string())];
        if let Some(user_id) = self.user_id {
            pairs.push(("user_id", user_id.to_string()));
        }
        if let Some(range) = &self.range {
            pairs.extend(range.query_pairs());
        }
        pairs
    }
}

impl ApiRequest for NoteUploadTrendsRequest {
    type Response = NoteUploadTrendsResponse;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "note-upload-trends/".into()
    }
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("interval", self.interval.as_str().to_string())];
        if let Some(range) = &self.range {
            pairs.extend(range.query_pairs());
        }
        pairs
    }
}

impl ApiRequest for CourseProgressRequest {
    type Response = CourseProgressReport;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "analytics/course-progress/".into()
    }
}

#[cfg(test)]
mod tests;
