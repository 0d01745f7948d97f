use leptos::prelude::*;
use leptos::task::spawn_local;
use thrive_shared::analytics::{
    CountPoint, Interval, ModuleCompletionRequest, ModuleState, ModuleStatus, SessionActivityDay,
    SessionActivityRequest, UserFavoritesRequest, UserFavoritesResponse, UserPostsAnalysisRequest,
};

use crate::api::{CancelToken, use_api};
use crate::components::layout::DashboardLayout;
use crate::components::widgets::SectionCard;
use crate::web::last_days;

fn state_badge(state: ModuleState) -> &'static str {
    match state {
        ModuleState::Completed => "badge badge-success",
        ModuleState::InProgress => "badge badge-warning",
        ModuleState::NotStarted => "badge badge-ghost",
    }
}

fn state_label(state: ModuleState) -> &'static str {
    match state {
        ModuleState::Completed => "Completed",
        ModuleState::InProgress => "In progress",
        ModuleState::NotStarted => "Not started",
    }
}

/// Per-user analytics. Without an explicit user id the backend resolves the
/// signed-in account.
#[component]
pub fn UserProgressPage() -> impl IntoView {
    let api = use_api();

    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    let (user_id_input, set_user_id_input) = signal(String::new());

    let (sessions, set_sessions) = signal(Vec::<SessionActivityDay>::new());
    let (sessions_loading, set_sessions_loading) = signal(true);
    let (sessions_error, set_sessions_error) = signal(Option::<String>::None);

    let (modules, set_modules) = signal(Vec::<ModuleStatus>::new());
    let (modules_loading, set_modules_loading) = signal(true);
    let (modules_error, set_modules_error) = signal(Option::<String>::None);

    let (favorites, set_favorites) = signal(Option::<UserFavoritesResponse>::None);
    let (favorites_loading, set_favorites_loading) = signal(true);
    let (favorites_error, set_favorites_error) = signal(Option::<String>::None);

    let (posts, set_posts) = signal(Vec::<CountPoint>::new());
    let (posts_loading, set_posts_loading) = signal(true);
    let (posts_error, set_posts_error) = signal(Option::<String>::None);

    let selected_user = move || user_id_input.get_untracked().trim().parse::<i64>().ok();

    let load_sessions = {
        let api = api.clone();
        let cancel = cancel.clone();
        move || {
            let api = api.clone();
            let cancel = cancel.clone();
            let user_id = selected_user();
            set_sessions_loading.set(true);
            spawn_local(async move {
                let request = SessionActivityRequest {
                    user_id,
                    range: Some(last_days(30)),
                };
                match api.session_activity(&request, Some(&cancel)).await {
                    Ok(data) => {
                        set_sessions.set(data);
                        set_sessions_error.set(None);
                    }
                    Err(err) if err.is_aborted() => return,
                    Err(err) => {
                        set_sessions.set(Vec::new());
                        set_sessions_error.set(Some(err.message().to_string()));
                    }
                }
                set_sessions_loading.set(false);
            });
        }
    };

    let load_modules = {
        let api = api.clone();
        let cancel = cancel.clone();
        move || {
            let api = api.clone();
            let cancel = cancel.clone();
            let user_id = selected_user();
            set_modules_loading.set(true);
            spawn_local(async move {
                let request = ModuleCompletionRequest { user_id };
                match api.module_completion(&request, Some(&cancel)).await {
                    Ok(data) => {
                        set_modules.set(data);
                        set_modules_error.set(None);
                    }
                    Err(err) if err.is_aborted() => return,
                    Err(err) => {
                        set_modules.set(Vec::new());
                        set_modules_error.set(Some(err.message().to_string()));
                    }
                }
                set_modules_loading.set(false);
            });
        }
    };

    let load_favorites = {
        let api = api.clone();
        let cancel = cancel.clone();
        move || {
            let api = api.clone();
            let cancel = cancel.clone();
            let user_id = selected_user();
            set_favorites_loading.set(true);
            spawn_local(async move {
                let request = UserFavoritesRequest { user_id };
                match api.user_favorites(&request, Some(&cancel)).await {
                    Ok(data) => {
                        set_favorites.set(Some(data));
                        set_favorites_error.set(None);
                    }
                    Err(err) if err.is_aborted() => return,
                    Err(err) => {
                        set_favorites.set(None);
                        set_favorites_error.set(Some(err.message().to_string()));
                    }
                }
                set_favorites_loading.set(false);
            });
        }
    };

    let load_posts = {
        let api = api.clone();
        let cancel = cancel.clone();
        move || {
            let api = api.clone();
            let cancel = cancel.clone();
            let user_id = selected_user();
            set_posts_loading.set(true);
            spawn_local(async move {
                let request = UserPostsAnalysisRequest {
                    user_id,
                    interval: Interval::Day,
                    range: Some(last_days(30)),
                };
                match api.user_posts_analysis(&request, Some(&cancel)).await {
                    Ok(data) => {
                        set_posts.set(data);
                        set_posts_error.set(None);
                    }
                    Err(err) if err.is_aborted() => return,
                    Err(err) => {
                        set_posts.set(Vec::new());
                        set_posts_error.set(Some(err.message().to_string()));
                    }
                }
                set_posts_loading.set(false);
            });
        }
    };

    let load_all = {
        let load_sessions = load_sessions.clone();
        let load_modules = load_modules.clone();
        let load_favorites = load_favorites.clone();
        let load_posts = load_posts.clone();
        move || {
            load_sessions();
            load_modules();
            load_favorites();
            load_posts();
        }
    };

    load_all();

    let on_apply = {
        let load_all = load_all.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            load_all();
        }
    };

    view! {
        <DashboardLayout title="User progress">
            <form class="flex items-end gap-3" on:submit=on_apply>
                <div class="form-control">
                    <label class="label">
                        <span class="label-text">"User ID (blank = you)"</span>
                    </label>
                    <input
                        type="text"
                        class="input input-bordered input-sm w-48"
                        placeholder="e.g. 42"
                        on:input=move |ev| set_user_id_input.set(event_target_value(&ev))
                        prop:value=user_id_input
                    />
                </div>
                <button class="btn btn-primary btn-sm">"Apply"</button>
            </form>

            <div class="grid grid-cols-1 xl:grid-cols-2 gap-6">
                <SectionCard
                    title="Session activity"
                    subtitle="Login sessions per day over the last 30 days."
                    loading=sessions_loading
                    error=sessions_error
                    on_retry=Callback::new({
                        let load_sessions = load_sessions.clone();
                        move |_| load_sessions()
                    })
                >
                    <div class="overflow-x-auto">
                        <table class="table table-sm w-full">
                            <thead>
                                <tr>
                                    <th>"Date"</th>
                                    <th class="text-right">"Sessions"</th>
                                    <th class="text-right">"Busiest hour"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || {
                                    sessions.with(Vec::is_empty) && !sessions_loading.get()
                                }>
                                    <tr>
                                        <td colspan="3" class="text-center py-6 text-base-content/50">
                                            "No session activity in this period."
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=move || sessions.get()
                                    key=|day| day.date.clone()
                                    children=move |day: SessionActivityDay| {
                                        let total: u64 =
                                            day.hours.iter().map(|h| h.session_count).sum();
                                        let peak = day
                                            .hours
                                            .iter()
                                            .max_by_key(|h| h.session_count)
                                            .filter(|h| h.session_count > 0)
                                            .map(|h| format!("{:02}:00", h.hour))
                                            .unwrap_or_else(|| "-".to_string());
                                        view! {
                                            <tr>
                                                <td class="font-mono text-xs">{day.date.clone()}</td>
                                                <td class="text-right">{total}</td>
                                                <td class="text-right">{peak}</td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </SectionCard>

                <SectionCard
                    title="Module completion"
                    subtitle="Wellbeing modules and their completion state."
                    loading=modules_loading
                    error=modules_error
                    on_retry=Callback::new({
                        let load_modules = load_modules.clone();
                        move |_| load_modules()
                    })
                >
                    <ul class="space-y-2">
                        <Show when=move || modules.with(Vec::is_empty) && !modules_loading.get()>
                            <li class="text-center py-6 text-base-content/50">
                                "No module data available."
                            </li>
                        </Show>
                        <For
                            each=move || modules.get()
                            key=|module| module.id
                            children=move |module: ModuleStatus| {
                                view! {
                                    <li class="flex items-center justify-between">
                                        <span class="text-sm">{module.name.clone()}</span>
                                        <span class=state_badge(module.status)>
                                            {state_label(module.status)}
                                        </span>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </SectionCard>

                <SectionCard
                    title="Favorites"
                    subtitle="Bookmarked content grouped by module."
                    loading=favorites_loading
                    error=favorites_error
                    on_retry=Callback::new({
                        let load_favorites = load_favorites.clone();
                        move |_| load_favorites()
                    })
                >
                    {move || match favorites.get() {
                        Some(data) => {
                            view! {
                                <div class="space-y-3">
                                    <div class="flex flex-wrap gap-2">
                                        {data
                                            .stats
                                            .iter()
                                            .map(|stat| {
                                                view! {
                                                    <span class="badge badge-outline">
                                                        {format!("{}: {}", stat.module, stat.count)}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    <ul class="space-y-1">
                                        {data
                                            .favorites
                                            .iter()
                                            .map(|item| {
                                                view! {
                                                    <li class="flex items-center justify-between text-sm">
                                                        <span class="truncate">{item.title.clone()}</span>
                                                        <span class="badge badge-ghost badge-sm">
                                                            {item.kind.clone()}
                                                        </span>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <p class="text-center py-6 text-base-content/50">
                                    "No favorites recorded."
                                </p>
                            }
                                .into_any()
                        }
                    }}
                </SectionCard>

                <SectionCard
                    title="Posts"
                    subtitle="Posts and notes written per day."
                    loading=posts_loading
                    error=posts_error
                    on_retry=Callback::new({
                        let load_posts = load_posts.clone();
                        move |_| load_posts()
                    })
                >
                    <div class="overflow-x-auto">
                        <table class="table table-sm w-full">
                            <thead>
                                <tr>
                                    <th>"Date"</th>
                                    <th class="text-right">"Posts"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || posts.with(Vec::is_empty) && !posts_loading.get()>
                                    <tr>
                                        <td colspan="2" class="text-center py-6 text-base-content/50">
                                            "No posts in this period."
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=move || posts.get()
                                    key=|point| point.date.clone()
                                    children=move |point: CountPoint| {
                                        view! {
                                            <tr>
                                                <td class="font-mono text-xs">{point.date}</td>
                                                <td class="text-right">{point.count}</td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </SectionCard>
            </div>
        </DashboardLayout>
    }
}
