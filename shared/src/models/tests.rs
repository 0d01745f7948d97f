use super::*;
use crate::analytics::{HeatmapCell, ModuleState, ModuleStatus, VisitTrendPoint};

#[test]
fn login_response_parses_backend_payload() {
    let body = r#"{
        "message": "Login successful",
        "token": "abc123",
        "user": {"id": 1, "name": "a", "email": "a@b.com", "role": "Researcher"}
    }"#;
    let resp: LoginResponse = serde_json::from_str(body).unwrap();
    assert_eq!(resp.token, "abc123");
    assert_eq!(resp.user.id, Some(1));
    assert_eq!(resp.user.role, "Researcher");
    // Flags absent from the payload default to false.
    assert!(!resp.user.is_staff);
    assert!(!resp.user.is_superuser);
}

#[test]
fn user_profile_without_id_still_parses() {
    // user-info/ omits the id but carries the staff flags.
    let body = r#"{
        "name": "Dana",
        "email": "dana@example.org",
        "role": "Admin",
        "is_superuser": true,
        "is_staff": true
    }"#;
    let user: UserProfile = serde_json::from_str(body).unwrap();
    assert_eq!(user.id, None);
    assert!(user.is_superuser);
}

#[test]
fn check_auth_uses_camel_case_flag() {
    let body = r#"{"isAuthenticated": false}"#;
    let resp: CheckAuthResponse = serde_json::from_str(body).unwrap();
    assert!(!resp.is_authenticated);
    assert!(resp.user.is_none());

    let body = r#"{
        "isAuthenticated": true,
        "user": {"name": "a", "email": "a@b.com", "role": "Researcher"}
    }"#;
    let resp: CheckAuthResponse = serde_json::from_str(body).unwrap();
    assert!(resp.is_authenticated);
    assert_eq!(resp.user.unwrap().name, "a");
}

#[test]
fn partial_profile_update_skips_unset_fields() {
    let req = UpdateProfileRequest {
        email: Some("new@example.org".into()),
        ..UpdateProfileRequest::default()
    };
    let body = serde_json::to_string(&req).unwrap();
    assert_eq!(body, r#"{"email":"new@example.org"}"#);
}

#[test]
fn admin_update_body_excludes_the_path_id() {
    let req = UpdateAdminUserRequest {
        user_id: 9,
        is_staff: Some(true),
        ..UpdateAdminUserRequest::default()
    };
    let body = serde_json::to_string(&req).unwrap();
    assert_eq!(body, r#"{"is_staff":true}"#);
}

#[test]
fn preferences_default_when_fields_missing() {
    let prefs: InterfacePreferences = serde_json::from_str("{}").unwrap();
    assert_eq!(prefs, InterfacePreferences::default());
    assert_eq!(prefs.theme, Theme::Light);
    assert!(prefs.notifications_enabled);
}

#[test]
fn preference_enums_round_trip_snake_case() {
    let prefs = InterfacePreferences {
        theme: Theme::Dark,
        chart_style: ChartStyle::Colorful,
        ..InterfacePreferences::default()
    };
    let body = serde_json::to_string(&prefs).unwrap();
    assert!(body.contains(r#""theme":"dark""#));
    assert!(body.contains(r#""chart_style":"colorful""#));
    let back: InterfacePreferences = serde_json::from_str(&body).unwrap();
    assert_eq!(back, prefs);
}

#[test]
fn visit_trend_point_uses_camel_case_visitors() {
    let body = r#"{"date": "2025-01-01", "visits": 12, "uniqueVisitors": 5}"#;
    let point: VisitTrendPoint = serde_json::from_str(body).unwrap();
    assert_eq!(point.unique_visitors, 5);
}

#[test]
fn module_status_states_parse_snake_case() {
    let body = r#"[
        {"id": 1, "name": "Sleep", "status": "not_started"},
        {"id": 2, "name": "Stress", "status": "in_progress",
         "start_time": "2025-05-01T10:00:00"},
        {"id": 3, "name": "Focus", "status": "completed",
         "start_time": "2025-04-01T10:00:00",
         "complete_time": "2025-04-20T18:30:00"}
    ]"#;
    let modules: Vec<ModuleStatus> = serde_json::from_str(body).unwrap();
    assert_eq!(modules[0].status, ModuleState::NotStarted);
    assert_eq!(modules[1].status, ModuleState::InProgress);
    assert!(modules[1].complete_time.is_none());
    assert_eq!(modules[2].status, ModuleState::Completed);
}

#[test]
fn heatmap_cells_parse() {
    let body = r#"[{"day": 0, "hour": 23, "count": 4}]"#;
    let cells: Vec<HeatmapCell> = serde_json::from_str(body).unwrap();
    assert_eq!(cells[0].hour, 23);
}
