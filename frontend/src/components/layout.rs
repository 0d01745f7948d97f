//! Shared chrome for the protected pages: sidebar navigation plus a top bar
//! with the signed-in identity and the logout action.

use leptos::prelude::*;

use crate::api::use_api;
use crate::auth::{logout, use_auth};
use crate::session::Session;
use crate::web::route::AppRoute;
use crate::web::router::use_router;

use super::icons::{BookOpen, Cog, HeartPulse, LogOut, MessageSquare, TrendingUp, Users};

const NAV_ITEMS: [(AppRoute, &str); 5] = [
    (AppRoute::Dashboard, "Overview"),
    (AppRoute::UserProgress, "User progress"),
    (AppRoute::CourseProgress, "Course progress"),
    (AppRoute::Comments, "Comments"),
    (AppRoute::Settings, "Settings"),
];

fn nav_icon(route: AppRoute) -> AnyView {
    match route {
        AppRoute::UserProgress => view! { <span class="h-5 w-5"><Users /></span> }.into_any(),
        AppRoute::CourseProgress => view! { <span class="h-5 w-5"><BookOpen /></span> }.into_any(),
        AppRoute::Comments => view! { <span class="h-5 w-5"><MessageSquare /></span> }.into_any(),
        AppRoute::Settings => view! { <span class="h-5 w-5"><Cog /></span> }.into_any(),
        _ => view! { <span class="h-5 w-5"><TrendingUp /></span> }.into_any(),
    }
}

#[component]
pub fn DashboardLayout(
    /// Page heading shown in the top bar.
    title: &'static str,
    children: Children,
) -> impl IntoView {
    let auth_ctx = use_auth();
    let api = use_api();
    let session = use_context::<Session>().expect("Session should be provided");
    let router = use_router();
    let current = router.current_route();

    let user_name = move || {
        auth_ctx
            .state
            .get()
            .user
            .map(|u| u.name)
            .unwrap_or_default()
    };
    let user_role = move || {
        auth_ctx
            .state
            .get()
            .user
            .map(|u| u.role)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        // Local invalidation plus redirect via the router's auth effect.
        logout(&auth_ctx, &api, &session);
    };

    view! {
        <div class="flex min-h-screen bg-base-200">
            <aside class="w-60 bg-base-100 shadow-xl flex flex-col">
                <div class="flex items-center gap-2 p-4 border-b border-base-200">
                    <span class="h-7 w-7 text-primary"><HeartPulse /></span>
                    <span class="text-lg font-bold">"Thrive Dashboard"</span>
                </div>
                <ul class="menu p-4 gap-1 flex-1">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(route, label)| {
                            view! {
                                <li>
                                    <a
                                        class=move || {
                                            if current.get() == route { "active" } else { "" }
                                        }
                                        on:click=move |_| router.navigate(route.to_path())
                                    >
                                        {nav_icon(route)}
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </aside>

            <div class="flex-1 flex flex-col">
                <header class="navbar bg-base-100 shadow-sm px-6">
                    <div class="flex-1">
                        <h1 class="text-xl font-bold">{title}</h1>
                    </div>
                    <div class="flex-none gap-3 flex items-center">
                        <div class="text-right hidden md:block">
                            <div class="font-semibold text-sm">{user_name}</div>
                            <div class="text-xs text-base-content/60">{user_role}</div>
                        </div>
                        <button on:click=on_logout class="btn btn-outline btn-error btn-sm gap-2">
                            <span class="h-4 w-4"><LogOut /></span>
                            "Log out"
                        </button>
                    </div>
                </header>

                <main class="p-4 md:p-8 space-y-6">{children()}</main>
            </div>
        </div>
    }
}
