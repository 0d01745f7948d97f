//! Account, session and administration payloads.
//!
//! Field names follow the backend's JSON exactly; renames are applied where
//! the backend uses camelCase.

use serde::{Deserialize, Serialize};

// =========================================================
// Identity
// =========================================================

/// The authenticated identity as the backend reports it.
///
/// `login/` includes the numeric id; `user-info/` and `check-auth/` omit it,
/// and older deployments omit the staff flags, so all of those default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

/// Generic `{"message": ...}` acknowledgement used by most mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

// =========================================================
// Login / signup / logout
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    // The backend reads the email address from the `username` field.
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub fullname: String,
    pub email: String,
    pub password: String,
    pub security_question_1: String,
    pub security_answer_1: String,
    pub security_question_2: String,
    pub security_answer_2: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckAuthRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckAuthResponse {
    #[serde(rename = "isAuthenticated")]
    pub is_authenticated: bool,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfoRequest;

// =========================================================
// Password reset (three-step flow)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendResetCodeRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResetCodeRequest {
    pub email: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub code: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetFlowResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

// =========================================================
// Profile & credentials
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSettings {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub date_joined: String,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

/// Partial update; `None` fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

// =========================================================
// Security questions
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityQuestionsRequest;

/// Question on file; answers are never returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityQuestion {
    #[serde(default)]
    pub id: Option<i64>,
    pub question_number: u8,
    pub question_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityQuestionUpdate {
    pub question_number: u8,
    pub question_text: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSecurityQuestionsRequest {
    pub questions: Vec<SecurityQuestionUpdate>,
}

// =========================================================
// Interface preferences
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    #[default]
    Default,
    Compact,
    Spacious,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartStyle {
    #[default]
    Default,
    Minimal,
    Colorful,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesRequest;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfacePreferences {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub chart_style: ChartStyle,
    #[serde(default)]
    pub sidebar_collapsed: bool,
    #[serde(default = "default_true")]
    pub notifications_enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for InterfacePreferences {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            layout: Layout::default(),
            chart_style: ChartStyle::default(),
            sidebar_collapsed: false,
            notifications_enabled: true,
        }
    }
}

// =========================================================
// Admin user management
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub date_joined: String,
    #[serde(default)]
    pub last_login: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUsersRequest {
    pub page: u32,
    pub page_size: u32,
    #[serde(default)]
    pub search: Option<String>,
}

impl Default for AdminUsersRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            search: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUserPage {
    pub users: Vec<AdminUser>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAdminUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub is_active: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
}

/// Partial admin-side update of an existing user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAdminUserRequest {
    #[serde(skip)]
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_staff: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_superuser: Option<bool>,
}

#[cfg(test)]
mod tests;
