//! Analytics endpoints.
//!
//! The three dashboard counters degrade to zero on failure so their stat
//! cards always render; every dataset endpoint returns `Result` and lets the
//! consuming widget show its banner and empty default.

use thrive_shared::analytics::{
    ActiveUsersRequest, AverageUsageTimeRequest, CommentSourcesRequest,
    CommentTimeDistributionRequest, CountPoint, CourseProgressReport, CourseProgressRequest,
    CourseSourcesRequest, DurationBucket, FeedbackCountRequest, HeatmapCell,
    ModuleCompletionRequest, ModuleStatus, NavigationPath, NoteUploadTrendsRequest,
    NoteUploadTrendsResponse, PopularContentRequest, PopularPage, SessionActivityDay,
    SessionActivityRequest, UserFavoritesRequest, UserFavoritesResponse, UserPostsAnalysisRequest,
    VisitDurationRequest, VisitTrendPoint, VisitTrendsRequest,
};

use super::cancel::CancelToken;
use super::client::ApiClient;
use super::error::ApiError;

impl ApiClient {
    /// GET `active-users/`. Degrades to 0.
    pub async fn fetch_active_users(&self, cancel: Option<&CancelToken>) -> u64 {
        match self.send(&ActiveUsersRequest, cancel).await {
            Ok(resp) => resp.active_users,
            Err(err) => {
                if !err.is_aborted() {
                    leptos::logging::error!("fetching active users: {err}");
                }
                0
            }
        }
    }

    /// GET `average-usage-time/`. Degrades to 0.0.
    pub async fn fetch_average_usage_time(&self, cancel: Option<&CancelToken>) -> f64 {
        match self.send(&AverageUsageTimeRequest, cancel).await {
            Ok(resp) => resp.average_usage_time,
            Err(err) => {
                if !err.is_aborted() {
                    leptos::logging::error!("fetching average usage time: {err}");
                }
                0.0
            }
        }
    }

    /// GET `feedback-count/`. Degrades to 0.
    pub async fn fetch_feedback_count(&self, cancel: Option<&CancelToken>) -> u64 {
        match self.send(&FeedbackCountRequest, cancel).await {
            Ok(resp) => resp.feedback_count,
            Err(err) => {
                if !err.is_aborted() {
                    leptos::logging::error!("fetching feedback count: {err}");
                }
                0
            }
        }
    }

    /// GET `analytics/visit-trends`.
    pub async fn visit_trends(
        &self,
        request: &VisitTrendsRequest,
        cancel: Option<&CancelToken>,
    ) -> Result<Vec<VisitTrendPoint>, ApiError> {
        self.send(request, cancel).await
    }

    /// GET `analytics/popular-content`.
    pub async fn popular_content(
        &self,
        request: &PopularContentRequest,
        cancel: Option<&CancelToken>,
    ) -> Result<Vec<PopularPage>, ApiError> {
        self.send(request, cancel).await
    }

    /// GET `analytics/visit-duration/`.
    pub async fn visit_duration(
        &self,
        cancel: Option<&CancelToken>,
    ) -> Result<Vec<DurationBucket>, ApiError> {
        self.send(&VisitDurationRequest, cancel).await
    }

    /// GET `analytics/comment-sources/`.
    pub async fn comment_sources(
        &self,
        cancel: Option<&CancelToken>,
    ) -> Result<Vec<NavigationPath>, ApiError> {
        self.send(&CommentSourcesRequest, cancel).await
    }

    /// GET `analytics/course-sources/`.
    pub async fn course_sources(
        &self,
        cancel: Option<&CancelToken>,
    ) -> Result<Vec<NavigationPath>, ApiError> {
        self.send(&CourseSourcesRequest, cancel).await
    }

    /// GET `analytics/comment-time-distribution/`.
    pub async fn comment_time_distribution(
        &self,
        cancel: Option<&CancelToken>,
    ) -> Result<Vec<HeatmapCell>, ApiError> {
        self.send(&CommentTimeDistributionRequest, cancel).await
    }

    /// GET `session-activity/`.
    pub async fn session_activity(
        &self,
        request: &SessionActivityRequest,
        cancel: Option<&CancelToken>,
    ) -> Result<Vec<SessionActivityDay>, ApiError> {
        self.send(request, cancel).await
    }

    /// GET `module-completion-status/`.
    pub async fn module_completion(
        &self,
        request: &ModuleCompletionRequest,
        cancel: Option<&CancelToken>,
    ) -> Result<Vec<ModuleStatus>, ApiError> {
        self.send(request, cancel).await
    }

    /// GET `user-favorites/`.
    pub async fn user_favorites(
        &self,
        request: &UserFavoritesRequest,
        cancel: Option<&CancelToken>,
    ) -> Result<UserFavoritesResponse, ApiError> {
        self.send(request, cancel).await
    }

    /// GET `user-posts-analysis/`.
    pub async fn user_posts_analysis(
        &self,
        request: &UserPostsAnalysisRequest,
        cancel: Option<&CancelToken>,
    ) -> Result<Vec<CountPoint>, ApiError> {
        self.send(request, cancel).await
    }

    /// GET `note-upload-trends/`.
    pub async fn note_upload_trends(
        &self,
        request: &NoteUploadTrendsRequest,
        cancel: Option<&CancelToken>,
    ) -> Result<NoteUploadTrendsResponse, ApiError> {
        self.send(request, cancel).await
    }

    /// GET `analytics/course-progress/`.
    pub async fn course_progress_report(
        &self,
        cancel: Option<&CancelToken>,
    ) -> Result<CourseProgressReport, ApiError> {
        self.send(&CourseProgressRequest, cancel).await
    }
}
