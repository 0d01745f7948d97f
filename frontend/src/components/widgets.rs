//! Small presentational building blocks shared by the pages.

use leptos::prelude::*;

use crate::components::icons::RefreshCw;

/// Inline red banner; renders nothing while the message is `None`.
#[component]
pub fn ErrorAlert(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div role="alert" class="alert alert-error text-sm py-2">
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Green banner for completed mutations.
#[component]
pub fn SuccessAlert(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div role="alert" class="alert alert-success text-sm py-2">
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// One dashboard counter.
#[component]
pub fn StatCard(
    /// Card label.
    title: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] loading: Signal<bool>,
    /// Icon shown in the stat figure slot.
    children: Children,
) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat-figure text-primary">{children()}</div>
            <div class="stat-title">{title}</div>
            <div class="stat-value text-primary">
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <span class="loading loading-spinner loading-md"></span> }
                >
                    {move || value.get()}
                </Show>
            </div>
        </div>
    }
}

/// Card shell for one dataset widget: header, refresh button, inline error
/// with a manual retry, and the dataset body below. A failed load keeps the
/// body rendered with its empty default.
#[component]
pub fn SectionCard(
    title: &'static str,
    subtitle: &'static str,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    on_retry: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <div>
                        <h3 class="card-title">{title}</h3>
                        <p class="text-base-content/70 text-sm">{subtitle}</p>
                    </div>
                    <button
                        class="btn btn-ghost btn-circle"
                        disabled=move || loading.get()
                        on:click=move |_| on_retry.run(())
                    >
                        <span class=move || {
                            if loading.get() { "h-5 w-5 animate-spin" } else { "h-5 w-5" }
                        }>
                            <RefreshCw />
                        </span>
                    </button>
                </div>
                <Show when=move || error.get().is_some()>
                    <div role="alert" class="alert alert-error text-sm py-2">
                        <span>{move || error.get().unwrap_or_default()}</span>
                        <button class="btn btn-xs btn-outline" on:click=move |_| on_retry.run(())>
                            "Retry"
                        </button>
                    </div>
                </Show>
                {children()}
            </div>
        </div>
    }
}
