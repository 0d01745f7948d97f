//! Authentication state.
//!
//! Reactive auth state, decoupled from the routing system: the router checks
//! an injected status signal, and the durable side lives in [`Session`].

use leptos::prelude::*;
use leptos::task::spawn_local;
use thrive_shared::UserProfile;
use thrive_shared::models::{LoginRequest, LoginResponse};

use crate::api::{ApiClient, ApiError};
use crate::session::Session;
use crate::web::route::AuthStatus;

/// Reactive authentication state.
#[derive(Clone, Default)]
pub struct AuthState {
    /// Profile of the signed-in user, once known.
    pub user: Option<UserProfile>,
    /// Token-presence flag; provisional until the startup check settles.
    pub is_authenticated: bool,
    /// True while the one-shot startup validation is in flight.
    pub is_loading: bool,
}

/// Auth context shared through the component tree.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// Status signal for the router guard.
    pub fn status_signal(&self) -> Signal<AuthStatus> {
        let state = self.state;
        Signal::derive(move || {
            let state = state.get();
            if state.is_loading {
                AuthStatus::Loading
            } else if state.is_authenticated {
                AuthStatus::Authenticated
            } else {
                AuthStatus::Anonymous
            }
        })
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the auth context from Context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// One-shot startup validation.
///
/// A stored token grants provisional access immediately (with the cached
/// profile), while a who-am-I request confirms it. A rejected token is
/// cleared; a transport failure keeps the token, and the next failing request
/// surfaces it. There is no periodic revalidation loop.
pub fn init_auth(ctx: &AuthContext, api: &ApiClient, session: &Session) {
    if !session.has_token() {
        ctx.set_state.update(|state| state.is_loading = false);
        return;
    }

    ctx.set_state.update(|state| {
        state.user = session.user();
        state.is_authenticated = true;
        state.is_loading = true;
    });

    let api = api.clone();
    let session = session.clone();
    let set_state = ctx.set_state;
    spawn_local(async move {
        match api.user_info(None).await {
            Ok(user) => {
                session.set_user(&user);
                set_state.update(|state| {
                    state.user = Some(user);
                    state.is_authenticated = true;
                    state.is_loading = false;
                });
            }
            Err(err) if err.is_auth_rejection() => {
                // Expired or revoked token: destroy the session.
                session.clear();
                set_state.update(|state| *state = AuthState::default());
            }
            Err(err) => {
                leptos::logging::warn!("startup session check failed: {err}");
                set_state.update(|state| state.is_loading = false);
            }
        }
    });
}

/// Authenticate and persist the session.
///
/// The token and profile are written to storage before the reactive state
/// flips, so a guard re-render always observes a fully written session.
pub async fn login(
    ctx: &AuthContext,
    api: &ApiClient,
    session: &Session,
    email: String,
    password: String,
) -> Result<(), ApiError> {
    let request = LoginRequest {
        username: email,
        password,
    };
    let response = api.login(&request).await?;

    commit_login(session, &response);

    ctx.set_state.update(|state| {
        state.user = Some(response.user);
        state.is_authenticated = true;
        state.is_loading = false;
    });

    Ok(())
}

/// Persists a successful login to the session store.
pub fn commit_login(session: &Session, response: &LoginResponse) {
    session.set_token(&response.token);
    session.set_user(&response.user);
}

/// End the session.
///
/// Local invalidation comes first and is unconditional; the server-side
/// logout is fired afterwards and its failure only gets logged. Calling this
/// twice is harmless. Navigation is handled by the router's auth-status
/// effect.
pub fn logout(ctx: &AuthContext, api: &ApiClient, session: &Session) {
    session.clear();
    ctx.set_state.update(|state| {
        state.user = None;
        state.is_authenticated = false;
        state.is_loading = false;
    });

    let api = api.clone();
    spawn_local(async move {
        if let Err(err) = api.logout().await {
            leptos::logging::warn!("server-side logout failed: {err}");
        }
    });
}
