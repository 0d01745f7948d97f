use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_api;
use crate::auth::{login, use_auth};
use crate::components::icons::ShieldCheck;
use crate::components::widgets::ErrorAlert;
use crate::session::Session;
use crate::web::router::use_router;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let api = use_api();
    let session = use_context::<Session>().expect("Session should be provided");
    let router = use_router();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        let session = session.clone();
        spawn_local(async move {
            // On success the router's auth effect moves us to the dashboard;
            // on failure the form stays populated for another attempt.
            let result = login(
                &auth_ctx,
                &api,
                &session,
                email.get_untracked(),
                password.get_untracked(),
            )
            .await;
            if let Err(err) = result {
                set_error_msg.set(Some(err.message().to_string()));
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <span class="h-8 w-8 block"><ShieldCheck /></span>
                        </div>
                        <h1 class="text-3xl font-bold">"Thrive Dashboard"</h1>
                        <p class="text-base-content/70">"Sign in to your analytics workspace"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <ErrorAlert message=error_msg />

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email address"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="example@gmail.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>

                        <div class="flex justify-end mt-1">
                            <a
                                class="link link-hover text-sm"
                                on:click=move |_| router.navigate("/password-reset")
                            >
                                "Reset password?"
                            </a>
                        </div>

                        <div class="form-control mt-4">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || {
                                    if is_submitting.get() {
                                        view! {
                                            <span class="loading loading-spinner"></span>
                                            "Signing in..."
                                        }
                                            .into_any()
                                    } else {
                                        "Log in".into_any()
                                    }
                                }}
                            </button>
                        </div>

                        <p class="text-center mt-3 text-sm">
                            "Don't have an account yet? "
                            <a class="link link-primary" on:click=move |_| router.navigate("/signup")>
                                "New account"
                            </a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
