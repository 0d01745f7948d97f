//! Analytics query parameters and response DTOs.
//!
//! Every endpoint's response is parsed into one of these shapes at the API
//! boundary; a payload that does not match produces a parse error instead of
//! leaking missing fields into the views.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =========================================================
// Query parameter types
// =========================================================

/// Aggregation bucket for trend endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    #[default]
    Day,
    Week,
    Month,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Day => "day",
            Interval::Week => "week",
            Interval::Month => "month",
        }
    }
}

/// Inclusive date window, serialized as `YYYY-MM-DD` query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        // The backend swaps a reversed range; do the same up front.
        if start > end {
            Self {
                start: end,
                end: start,
            }
        } else {
            Self { start, end }
        }
    }

    pub fn start_param(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn end_param(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }

    /// The `(start_date, end_date)` pairs every trend endpoint takes.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("start_date", self.start_param()),
            ("end_date", self.end_param()),
        ]
    }
}

/// Ranking metric for the popular-content endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopularMetric {
    #[default]
    Views,
    TimeSpent,
}

impl PopularMetric {
    pub fn as_str(&self) -> &'static str {
        match self {
            PopularMetric::Views => "views",
            PopularMetric::TimeSpent => "timeSpent",
        }
    }
}

// =========================================================
// Dashboard counters
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveUsersRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveUsersResponse {
    pub active_users: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AverageUsageTimeRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AverageUsageTimeResponse {
    pub average_usage_time: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackCountRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackCountResponse {
    pub feedback_count: u64,
}

// =========================================================
// Visit analytics
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitTrendsRequest {
    #[serde(skip)]
    pub interval: Interval,
    #[serde(skip)]
    pub range: Option<DateRange>,
}

/// One bucket of the visit-trend series; zero-filled by the backend for
/// buckets without traffic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitTrendPoint {
    pub date: String,
    pub visits: u64,
    #[serde(rename = "uniqueVisitors")]
    pub unique_visitors: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopularContentRequest {
    #[serde(skip)]
    pub metric: PopularMetric,
    #[serde(skip)]
    pub limit: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopularPage {
    #[serde(rename = "pageName")]
    pub page_name: String,
    pub value: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitDurationRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationBucket {
    pub duration_range: String,
    pub count: u64,
}

// =========================================================
// Comment & course navigation analytics
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentSourcesRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseSourcesRequest;

/// Aggregated source → target navigation edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationPath {
    pub source: String,
    pub target: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentTimeDistributionRequest;

/// One cell of the 7×24 comment-activity heatmap. `day` 0 is Sunday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub day: u8,
    pub hour: u8,
    pub count: u64,
}

// =========================================================
// Per-user progress analytics
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionActivityRequest {
    #[serde(skip)]
    pub user_id: Option<i64>,
    #[serde(skip)]
    pub range: Option<DateRange>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourActivity {
    pub hour: u8,
    pub session_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionActivityDay {
    pub date: String,
    pub hours: Vec<HourActivity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleCompletionRequest {
    #[serde(skip)]
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleState {
    NotStarted,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleStatus {
    pub id: u32,
    pub name: String,
    pub status: ModuleState,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub complete_time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserFavoritesRequest {
    #[serde(skip)]
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteItem {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleCount {
    pub module: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserFavoritesResponse {
    pub favorites: Vec<FavoriteItem>,
    pub stats: Vec<ModuleCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPostsAnalysisRequest {
    #[serde(skip)]
    pub user_id: Option<i64>,
    #[serde(skip)]
    pub interval: Interval,
    #[serde(skip)]
    pub range: Option<DateRange>,
}

/// Date-bucketed count, shared by the post and note-upload series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountPoint {
    pub date: String,
    pub count: u64,
}

// =========================================================
// Note-upload trends
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteUploadTrendsRequest {
    #[serde(skip)]
    pub interval: Interval,
    #[serde(skip)]
    pub range: Option<DateRange>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleTrend {
    pub module: String,
    pub data: Vec<CountPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteUploadTrendsResponse {
    pub overall_trend: Vec<CountPoint>,
    pub module_trends: Vec<ModuleTrend>,
    pub interval: Interval,
    pub start_date: String,
    pub end_date: String,
}

// =========================================================
// Course progress report
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseProgressRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseSummary {
    pub total_courses: u64,
    pub total_user_enrollments: u64,
    pub completed_enrollments: u64,
    pub in_progress_enrollments: u64,
    pub overall_completion_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseProgress {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub date_created: Option<String>,
    #[serde(default)]
    pub date_modified: Option<String>,
    pub total_users: u64,
    pub completed_users: u64,
    pub in_progress_users: u64,
    pub not_started_users: u64,
    pub completion_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseGroup {
    pub name: String,
    pub courses: Vec<CourseProgress>,
    pub total_courses: u64,
    pub total_users: u64,
    pub completed_users: u64,
    pub completion_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseProgressReport {
    pub summary: CourseSummary,
    pub courses: Vec<CourseProgress>,
    pub groups: Vec<CourseGroup>,
}
