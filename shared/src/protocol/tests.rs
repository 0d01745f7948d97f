use super::*;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn methods_map_to_wire_names() {
    assert_eq!(HttpMethod::Get.as_str(), "GET");
    assert_eq!(HttpMethod::Post.as_str(), "POST");
    assert_eq!(HttpMethod::Put.as_str(), "PUT");
    assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
}

#[test]
fn only_get_is_non_mutating() {
    assert!(!HttpMethod::Get.is_mutating());
    assert!(HttpMethod::Post.is_mutating());
    assert!(HttpMethod::Put.is_mutating());
    assert!(HttpMethod::Delete.is_mutating());
}

#[test]
fn login_descriptor() {
    let req = LoginRequest {
        username: "a@b.com".into(),
        password: "secret".into(),
    };
    assert_eq!(LoginRequest::METHOD, HttpMethod::Post);
    assert_eq!(req.path(), "login/");
    assert!(req.query().is_empty());
}

#[test]
fn visit_trends_query_includes_interval_and_range() {
    let req = VisitTrendsRequest {
        interval: Interval::Week,
        range: Some(DateRange::new(date(2025, 1, 1), date(2025, 1, 31))),
    };
    let query = req.query();
    assert_eq!(
        query,
        vec![
            ("interval", "week".to_string()),
            ("start_date", "2025-01-01".to_string()),
            ("end_date", "2025-01-31".to_string()),
        ]
    );
}

#[test]
fn visit_trends_query_without_range() {
    let req = VisitTrendsRequest {
        interval: Interval::Day,
        range: None,
    };
    assert_eq!(req.query(), vec![("interval", "day".to_string())]);
}

#[test]
fn reversed_date_range_is_swapped() {
    let range = DateRange::new(date(2025, 3, 10), date(2025, 3, 1));
    assert_eq!(range.start_param(), "2025-03-01");
    assert_eq!(range.end_param(), "2025-03-10");
}

#[test]
fn admin_users_query_omits_empty_search() {
    let req = AdminUsersRequest {
        page: 2,
        page_size: 25,
        search: None,
    };
    assert_eq!(
        req.query(),
        vec![("page", "2".to_string()), ("page_size", "25".to_string())]
    );

    let req = AdminUsersRequest {
        search: Some("carol".into()),
        ..AdminUsersRequest::default()
    };
    assert!(req.query().contains(&("search", "carol".to_string())));
}

#[test]
fn admin_update_path_embeds_user_id() {
    let req = UpdateAdminUserRequest {
        user_id: 42,
        is_active: Some(false),
        ..UpdateAdminUserRequest::default()
    };
    assert_eq!(req.path(), "admin/users/42/");
    assert_eq!(UpdateAdminUserRequest::METHOD, HttpMethod::Put);
}

#[test]
fn session_activity_query_for_anonymous_defaults() {
    let req = SessionActivityRequest {
        user_id: None,
        range: None,
    };
    assert!(req.query().is_empty());

    let req = SessionActivityRequest {
        user_id: Some(7),
        range: Some(DateRange::new(date(2025, 6, 1), date(2025, 6, 30))),
    };
    let query = req.query();
    assert_eq!(query[0], ("user_id", "7".to_string()));
    assert_eq!(query.len(), 3);
}

#[test]
fn popular_content_metric_names_match_backend() {
    let req = PopularContentRequest {
        metric: PopularMetric::TimeSpent,
        limit: 10,
    };
    assert_eq!(
        req.query(),
        vec![
            ("metric", "timeSpent".to_string()),
            ("limit", "10".to_string()),
        ]
    );
}
