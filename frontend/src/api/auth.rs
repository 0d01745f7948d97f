//! Session endpoints.

use thrive_shared::UserProfile;
use thrive_shared::models::{
    ApiMessage, CheckAuthRequest, CheckAuthResponse, LoginRequest, LoginResponse, LogoutRequest,
    ResetFlowResponse, ResetPasswordRequest, SendResetCodeRequest, SignupRequest, UserInfoRequest,
    VerifyResetCodeRequest,
};

use super::cancel::CancelToken;
use super::client::ApiClient;
use super::error::ApiError;

impl ApiClient {
    /// POST `login/`. Failures surface to the form unchanged.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.send(request, None).await
    }

    /// POST `signup/`.
    pub async fn signup(&self, request: &SignupRequest) -> Result<ApiMessage, ApiError> {
        self.send(request, None).await
    }

    /// POST `logout/`. Best effort; local session teardown never waits on it.
    pub async fn logout(&self) -> Result<ApiMessage, ApiError> {
        self.send(&LogoutRequest, None).await
    }

    /// GET `check-auth/`, the cookie-session probe used by public pages.
    pub async fn check_auth(
        &self,
        cancel: Option<&CancelToken>,
    ) -> Result<CheckAuthResponse, ApiError> {
        self.send(&CheckAuthRequest, cancel).await
    }

    /// GET `user-info/`, the who-am-I behind the startup validation.
    pub async fn user_info(&self, cancel: Option<&CancelToken>) -> Result<UserProfile, ApiError> {
        self.send(&UserInfoRequest, cancel).await
    }

    /// POST `password-reset/send-code/`.
    pub async fn send_reset_code(
        &self,
        request: &SendResetCodeRequest,
    ) -> Result<ResetFlowResponse, ApiError> {
        self.send(request, None).await
    }

    /// POST `password-reset/verify-code/`.
    pub async fn verify_reset_code(
        &self,
        request: &VerifyResetCodeRequest,
    ) -> Result<ResetFlowResponse, ApiError> {
        self.send(request, None).await
    }

    /// POST `password-reset/reset/`.
    pub async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<ResetFlowResponse, ApiError> {
        self.send(request, None).await
    }
}
