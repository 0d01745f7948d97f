//! Thrive dashboard frontend.
//!
//! Context-driven, high-cohesion layering:
//! - `web::route`: route table and the guard decision (domain model)
//! - `web::router`: routing service (core engine)
//! - `session`: durable token/profile storage behind an injectable backend
//! - `auth`: reactive authentication state
//! - `api`: typed REST client
//! - `components`: UI layer

mod api;
mod auth;
mod config;
mod session;

mod components {
    pub mod comments;
    pub mod course_progress;
    pub mod dashboard;
    pub mod home;
    mod icons;
    mod layout;
    pub mod login;
    pub mod password_reset;
    pub mod settings;
    pub mod signup;
    pub mod user_progress;
    mod widgets;
}

// Thin wrappers over the native browser APIs. Everything DOM-flavored lives
// here so the layers above stay testable on the host.
pub(crate) mod web {
    mod cookie;
    mod date;
    mod http;
    pub mod route;
    pub mod router;
    mod storage;

    pub use cookie::csrf_token;
    pub use date::last_days;
    pub use http::{FetchTransport, HttpError, HttpRequest, HttpResponse, HttpTransport};
    pub use storage::LocalStorage;
}

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::auth::{AuthContext, init_auth};
use crate::components::comments::CommentsPage;
use crate::components::course_progress::CourseProgressPage;
use crate::components::dashboard::DashboardPage;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::password_reset::PasswordResetPage;
use crate::components::settings::SettingsPage;
use crate::components::signup::SignupPage;
use crate::components::user_progress::UserProgressPage;
use crate::session::Session;
use crate::web::FetchTransport;
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

/// Maps the current route to its view.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Index => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Signup => view! { <SignupPage /> }.into_any(),
        AppRoute::PasswordReset => view! { <PasswordResetPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::UserProgress => view! { <UserProgressPage /> }.into_any(),
        AppRoute::CourseProgress => view! { <CourseProgressPage /> }.into_any(),
        AppRoute::Comments => view! { <CommentsPage /> }.into_any(),
        AppRoute::Settings => view! { <SettingsPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. Durable session and the API client on top of it, both injectable.
    let session = Session::browser();
    let api = ApiClient::new(config::API_BASE_URL, FetchTransport::shared(), session.clone());
    provide_context(session.clone());
    provide_context(api.clone());

    // 2. Auth context; one-shot token validation kicks off on mount.
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx, &api, &session);

    // 3. Router component: the injected auth status drives the guard.
    let auth_status = auth_ctx.status_signal();

    view! {
        <Router auth_status=auth_status>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
