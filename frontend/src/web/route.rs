//! Route definitions - domain model.
//!
//! Pure business layer with no DOM or `web_sys` dependency: the route table,
//! its guard attributes, and the single authoritative guard decision every
//! navigation path goes through.

use std::fmt::Display;

/// Application routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Public landing page (default route).
    #[default]
    Index,
    /// Login form.
    Login,
    /// Account registration.
    Signup,
    /// Three-step password recovery.
    PasswordReset,
    /// Analytics overview (requires auth).
    Dashboard,
    /// Per-user progress analytics (requires auth).
    UserProgress,
    /// Course progress analytics (requires auth).
    CourseProgress,
    /// Comment analytics (requires auth).
    Comments,
    /// Account & admin settings (requires auth).
    Settings,
    /// Unknown path.
    NotFound,
}

impl AppRoute {
    /// Parses a URL path into a route.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Self::Index,
            "/login" => Self::Login,
            "/signup" => Self::Signup,
            "/password-reset" => Self::PasswordReset,
            "/dashboard" => Self::Dashboard,
            "/user-progress" => Self::UserProgress,
            "/course-progress" => Self::CourseProgress,
            "/comments" => Self::Comments,
            "/settings" => Self::Settings,
            _ => Self::NotFound,
        }
    }

    /// The URL path for this route.
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Index => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::PasswordReset => "/password-reset",
            Self::Dashboard => "/dashboard",
            Self::UserProgress => "/user-progress",
            Self::CourseProgress => "/course-progress",
            Self::Comments => "/comments",
            Self::Settings => "/settings",
            Self::NotFound => "/404",
        }
    }

    /// Whether this route is behind the session guard.
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Dashboard
                | Self::UserProgress
                | Self::CourseProgress
                | Self::Comments
                | Self::Settings
        )
    }

    /// Whether an authenticated user should be moved away from this route
    /// (the login and signup forms).
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Signup)
    }

    /// Redirect target when the guard denies access.
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// Redirect target for authenticated users leaving the login form.
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// Authentication state as the router sees it.
///
/// `Loading` covers the window between mount and the end of the one-shot
/// token validation; a token is present but not yet confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Loading,
    Authenticated,
    Anonymous,
}

/// Outcome of the guard decision for one (route, auth) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Render the route's view.
    Render,
    /// Keep the view unmounted while validation is in flight. Prevents both a
    /// flash-redirect and the protected view's side effects from firing.
    Hold,
    /// Access denied; go to the login form.
    RedirectToLogin,
    /// Already signed in; leave the login/signup form for the dashboard.
    RedirectToDashboard,
}

/// The guard. Every navigation path (initial load, `navigate`, popstate,
/// auth-state change) resolves through this one function.
pub fn resolve(route: AppRoute, auth: AuthStatus) -> Resolution {
    if route.requires_auth() {
        return match auth {
            AuthStatus::Loading => Resolution::Hold,
            AuthStatus::Authenticated => Resolution::Render,
            AuthStatus::Anonymous => Resolution::RedirectToLogin,
        };
    }

    if route.should_redirect_when_authenticated() && auth == AuthStatus::Authenticated {
        return Resolution::RedirectToDashboard;
    }

    Resolution::Render
}

#[cfg(test)]
mod tests;
