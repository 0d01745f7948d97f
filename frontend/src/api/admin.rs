//! Admin user-management endpoints. All require a staff account; a 403 for
//! anyone else is surfaced unchanged.

use thrive_shared::models::{
    AdminUserPage, AdminUsersRequest, ApiMessage, CreateAdminUserRequest, UpdateAdminUserRequest,
};

use super::cancel::CancelToken;
use super::client::ApiClient;
use super::error::ApiError;

impl ApiClient {
    /// GET `admin/users/` with pagination and search.
    pub async fn admin_users(
        &self,
        request: &AdminUsersRequest,
        cancel: Option<&CancelToken>,
    ) -> Result<AdminUserPage, ApiError> {
        self.send(request, cancel).await
    }

    /// POST `admin/users/create/`.
    pub async fn create_admin_user(
        &self,
        request: &CreateAdminUserRequest,
    ) -> Result<ApiMessage, ApiError> {
        self.send(request, None).await
    }

    /// PUT `admin/users/{id}/`.
    pub async fn update_admin_user(
        &self,
        request: &UpdateAdminUserRequest,
    ) -> Result<ApiMessage, ApiError> {
        self.send(request, None).await
    }
}
