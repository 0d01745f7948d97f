use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{CancelToken, use_api};
use crate::components::icons::{BookOpen, HeartPulse, MessageSquare, TrendingUp};
use crate::web::router::use_router;

/// Public landing page. Probes the cookie session so returning users get a
/// straight path to the dashboard.
#[component]
pub fn HomePage() -> impl IntoView {
    let api = use_api();
    let router = use_router();

    let (checking, set_checking) = signal(true);
    let (signed_in, set_signed_in) = signal(false);

    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    {
        let api = api.clone();
        let cancel = cancel.clone();
        spawn_local(async move {
            match api.check_auth(Some(&cancel)).await {
                Ok(resp) => {
                    set_signed_in.set(resp.is_authenticated);
                    set_checking.set(false);
                }
                Err(err) if err.is_aborted() => {}
                // An unreachable backend reads as signed out here.
                Err(_) => set_checking.set(false),
            }
        });
    }

    view! {
        <div class="min-h-screen bg-base-200">
            <div class="hero py-20">
                <div class="hero-content text-center">
                    <div class="max-w-xl">
                        <div class="flex justify-center mb-4">
                            <span class="h-14 w-14 text-primary"><HeartPulse /></span>
                        </div>
                        <h1 class="text-5xl font-bold">"Thrive Dashboard"</h1>
                        <p class="py-6 text-base-content/70">
                            "Engagement, wellbeing-module progress and feedback analytics for
                             your learning platform, in one place."
                        </p>
                        <Show
                            when=move || !checking.get()
                            fallback=|| {
                                view! { <span class="loading loading-spinner loading-lg"></span> }
                            }
                        >
                            {move || {
                                if signed_in.get() {
                                    view! {
                                        <button
                                            class="btn btn-primary btn-wide"
                                            on:click=move |_| router.navigate("/dashboard")
                                        >
                                            "Go to dashboard"
                                        </button>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <button
                                            class="btn btn-primary btn-wide"
                                            on:click=move |_| router.navigate("/login")
                                        >
                                            "Log in"
                                        </button>
                                    }
                                        .into_any()
                                }
                            }}
                        </Show>
                    </div>
                </div>
            </div>

            <div class="max-w-5xl mx-auto grid grid-cols-1 md:grid-cols-3 gap-6 px-6 pb-16">
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body items-center text-center">
                        <span class="h-8 w-8 text-primary"><TrendingUp /></span>
                        <h2 class="card-title">"Activity trends"</h2>
                        <p class="text-sm text-base-content/70">
                            "Visits, session activity and usage time across your platform."
                        </p>
                    </div>
                </div>
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body items-center text-center">
                        <span class="h-8 w-8 text-primary"><BookOpen /></span>
                        <h2 class="card-title">"Module progress"</h2>
                        <p class="text-sm text-base-content/70">
                            "Completion of wellbeing modules and courses, per user and overall."
                        </p>
                    </div>
                </div>
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body items-center text-center">
                        <span class="h-8 w-8 text-primary"><MessageSquare /></span>
                        <h2 class="card-title">"Comment insights"</h2>
                        <p class="text-sm text-base-content/70">
                            "Where feedback comes from and when your community is most active."
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
