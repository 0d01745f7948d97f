use super::*;

const PROTECTED: [AppRoute; 5] = [
    AppRoute::Dashboard,
    AppRoute::UserProgress,
    AppRoute::CourseProgress,
    AppRoute::Comments,
    AppRoute::Settings,
];

const PUBLIC: [AppRoute; 4] = [
    AppRoute::Index,
    AppRoute::Login,
    AppRoute::Signup,
    AppRoute::PasswordReset,
];

#[test]
fn paths_round_trip() {
    for route in PROTECTED.iter().chain(PUBLIC.iter()) {
        assert_eq!(AppRoute::from_path(route.to_path()), *route);
    }
}

#[test]
fn unknown_path_is_not_found() {
    assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path("/dashboard/extra"), AppRoute::NotFound);
}

#[test]
fn guard_attributes() {
    for route in PROTECTED {
        assert!(route.requires_auth(), "{route} should require auth");
    }
    for route in PUBLIC {
        assert!(!route.requires_auth(), "{route} should be public");
    }
    assert!(AppRoute::Login.should_redirect_when_authenticated());
    assert!(AppRoute::Signup.should_redirect_when_authenticated());
    assert!(!AppRoute::Index.should_redirect_when_authenticated());
}

#[test]
fn anonymous_user_is_redirected_from_every_protected_route() {
    for route in PROTECTED {
        assert_eq!(
            resolve(route, AuthStatus::Anonymous),
            Resolution::RedirectToLogin,
            "{route}"
        );
    }
}

#[test]
fn protected_routes_hold_while_validation_is_in_flight() {
    // No flash-redirect and no mounted view (so no API side effects) until
    // the startup validation settles.
    for route in PROTECTED {
        assert_eq!(resolve(route, AuthStatus::Loading), Resolution::Hold, "{route}");
    }
}

#[test]
fn authenticated_user_renders_protected_routes() {
    for route in PROTECTED {
        assert_eq!(resolve(route, AuthStatus::Authenticated), Resolution::Render);
    }
}

#[test]
fn authenticated_user_leaves_the_login_form() {
    assert_eq!(
        resolve(AppRoute::Login, AuthStatus::Authenticated),
        Resolution::RedirectToDashboard
    );
    assert_eq!(
        resolve(AppRoute::Signup, AuthStatus::Authenticated),
        Resolution::RedirectToDashboard
    );
    // The landing page stays reachable either way.
    assert_eq!(
        resolve(AppRoute::Index, AuthStatus::Authenticated),
        Resolution::Render
    );
}

#[test]
fn public_routes_render_for_everyone_else() {
    for route in PUBLIC {
        assert_eq!(resolve(route, AuthStatus::Anonymous), Resolution::Render);
        assert_eq!(resolve(route, AuthStatus::Loading), Resolution::Render);
    }
}

#[test]
fn not_found_renders_regardless_of_auth() {
    for auth in [AuthStatus::Loading, AuthStatus::Authenticated, AuthStatus::Anonymous] {
        assert_eq!(resolve(AppRoute::NotFound, auth), Resolution::Render);
    }
}
