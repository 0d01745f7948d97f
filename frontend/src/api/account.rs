//! Account settings endpoints.

use thrive_shared::models::{
    ApiMessage, ChangePasswordRequest, InterfacePreferences, PreferencesRequest, ProfileRequest,
    ProfileSettings, SecurityQuestion, SecurityQuestionsRequest, UpdateProfileRequest,
    UpdateSecurityQuestionsRequest,
};

use super::cancel::CancelToken;
use super::client::ApiClient;
use super::error::ApiError;

impl ApiClient {
    /// GET `user/profile/`.
    pub async fn profile(&self, cancel: Option<&CancelToken>) -> Result<ProfileSettings, ApiError> {
        self.send(&ProfileRequest, cancel).await
    }

    /// PUT `user/profile/`.
    pub async fn update_profile(
        &self,
        request: &UpdateProfileRequest,
    ) -> Result<ApiMessage, ApiError> {
        self.send(request, None).await
    }

    /// PUT `user/change-password/`. A success invalidates the server-side
    /// session; callers are expected to log out afterwards.
    pub async fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> Result<ApiMessage, ApiError> {
        self.send(request, None).await
    }

    /// GET `user/security-questions/` (questions only, never answers).
    pub async fn security_questions(
        &self,
        cancel: Option<&CancelToken>,
    ) -> Result<Vec<SecurityQuestion>, ApiError> {
        self.send(&SecurityQuestionsRequest, cancel).await
    }

    /// PUT `user/security-questions/`.
    pub async fn update_security_questions(
        &self,
        request: &UpdateSecurityQuestionsRequest,
    ) -> Result<ApiMessage, ApiError> {
        self.send(request, None).await
    }

    /// GET `user/preferences/`.
    pub async fn preferences(
        &self,
        cancel: Option<&CancelToken>,
    ) -> Result<InterfacePreferences, ApiError> {
        self.send(&PreferencesRequest, cancel).await
    }

    /// PUT `user/preferences/`.
    pub async fn update_preferences(
        &self,
        preferences: &InterfacePreferences,
    ) -> Result<ApiMessage, ApiError> {
        self.send(preferences, None).await
    }
}
