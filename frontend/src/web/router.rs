//! Routing service - core engine.
//!
//! Wraps the `web_sys` History API with high cohesion: every touch of
//! `window.history` happens in this module, and every navigation path
//! (initial load, `navigate`, popstate, auth-state change) funnels through
//! the single guard decision in [`super::route::resolve`].

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, AuthStatus, Resolution, resolve};

/// Current browser path.
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Used for guard redirects so denied entries never land in history (no
/// back-navigation loop).
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Router service.
///
/// Signal-driven; the auth status is injected so the routing layer stays
/// decoupled from the auth implementation.
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    auth_status: Signal<AuthStatus>,
}

impl RouterService {
    fn new(auth_status: Signal<AuthStatus>) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            auth_status,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    pub fn auth_status(&self) -> Signal<AuthStatus> {
        self.auth_status
    }

    /// Navigate to a path, guard included.
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    fn navigate_to_route(&self, target: AppRoute, use_push: bool) {
        match resolve(target, self.auth_status.get_untracked()) {
            Resolution::RedirectToLogin => {
                web_sys::console::log_1(&"[Router] Access denied. Redirecting to login.".into());
                self.redirect(AppRoute::auth_failure_redirect());
            }
            Resolution::RedirectToDashboard => {
                web_sys::console::log_1(
                    &"[Router] Already authenticated. Redirecting to dashboard.".into(),
                );
                self.redirect(AppRoute::auth_success_redirect());
            }
            // Hold renders as a spinner in the outlet; the route itself is
            // accepted and re-resolved once validation settles.
            Resolution::Render | Resolution::Hold => {
                if use_push {
                    push_history_state(target.to_path());
                } else {
                    replace_history_state(target.to_path());
                }
                self.set_route.set(target);
            }
        }
    }

    fn redirect(&self, target: AppRoute) {
        replace_history_state(target.to_path());
        self.set_route.set(target);
    }

    /// Wire up the browser back/forward buttons.
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let auth_status = self.auth_status;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());

            // The guard applies on popstate too.
            match resolve(target, auth_status.get_untracked()) {
                Resolution::RedirectToLogin => {
                    let redirect = AppRoute::auth_failure_redirect();
                    replace_history_state(redirect.to_path());
                    set_route.set(redirect);
                }
                Resolution::RedirectToDashboard => {
                    let redirect = AppRoute::auth_success_redirect();
                    replace_history_state(redirect.to_path());
                    set_route.set(redirect);
                }
                Resolution::Render | Resolution::Hold => set_route.set(target),
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Leak the closure to keep the listener alive for the app's lifetime.
        closure.forget();
    }

    /// Re-run the guard whenever the auth status changes: logging out on a
    /// protected page or logging in on the login form both redirect here.
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let auth_status = self.auth_status;

        Effect::new(move |_| {
            let status = auth_status.get();
            let route = current_route.get_untracked();

            match resolve(route, status) {
                Resolution::RedirectToLogin => {
                    web_sys::console::log_1(
                        &"[Router] Session ended, redirecting to login.".into(),
                    );
                    let redirect = AppRoute::auth_failure_redirect();
                    replace_history_state(redirect.to_path());
                    set_route.set(redirect);
                }
                Resolution::RedirectToDashboard => {
                    web_sys::console::log_1(
                        &"[Router] Signed in, redirecting to dashboard.".into(),
                    );
                    let redirect = AppRoute::auth_success_redirect();
                    replace_history_state(redirect.to_path());
                    set_route.set(redirect);
                }
                Resolution::Render | Resolution::Hold => {}
            }
        });
    }
}

/// Create the router service, install its listeners, and provide it.
fn provide_router(auth_status: Signal<AuthStatus>) -> RouterService {
    let router = RouterService::new(auth_status);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// Fetch the router service from context.
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

/// Returns a callable navigation closure.
pub fn use_navigate() -> impl Fn(&str) + Clone {
    let router = use_router();
    move |to: &str| {
        router.navigate(to);
    }
}

// ============================================================================
// UI components
// ============================================================================

/// Router root component; provides the routing context. Use at the app root.
#[component]
pub fn Router(
    /// Injected authentication status signal.
    auth_status: Signal<AuthStatus>,
    /// Child components.
    children: Children,
) -> impl IntoView {
    provide_router(auth_status);

    children()
}

/// Renders the view for the current route, or the validation spinner while a
/// protected route is held.
#[component]
pub fn RouterOutlet(
    /// Route matcher: maps the current route to its view.
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        match resolve(current, router.auth_status().get()) {
            Resolution::Render => matcher(current),
            // Hold or a pending redirect: never mount the target view.
            _ => view! {
                <div class="flex items-center justify-center min-h-screen">
                    <span class="loading loading-spinner loading-lg text-primary"></span>
                </div>
            }
            .into_any(),
        }
    }
}
