use leptos::prelude::*;
use leptos::task::spawn_local;
use thrive_shared::models::{ChartStyle, InterfacePreferences, Layout, Theme};

use crate::api::{CancelToken, use_api};
use crate::components::widgets::{ErrorAlert, SuccessAlert};

fn parse_theme(raw: &str) -> Theme {
    match raw {
        "dark" => Theme::Dark,
        "system" => Theme::System,
        _ => Theme::Light,
    }
}

fn parse_layout(raw: &str) -> Layout {
    match raw {
        "compact" => Layout::Compact,
        "spacious" => Layout::Spacious,
        _ => Layout::Default,
    }
}

fn parse_chart_style(raw: &str) -> ChartStyle {
    match raw {
        "minimal" => ChartStyle::Minimal,
        "colorful" => ChartStyle::Colorful,
        _ => ChartStyle::Default,
    }
}

#[component]
pub fn InterfacePreferencesForm() -> impl IntoView {
    let api = use_api();

    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    let (prefs, set_prefs) = signal(InterfacePreferences::default());
    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (success_msg, set_success_msg) = signal(Option::<String>::None);

    {
        let api = api.clone();
        let cancel = cancel.clone();
        spawn_local(async move {
            match api.preferences(Some(&cancel)).await {
                Ok(data) => {
                    set_prefs.set(data);
                    set_loading.set(false);
                }
                Err(err) if err.is_aborted() => {}
                Err(err) => {
                    // Defaults stay in place; the save path still works.
                    set_error_msg.set(Some(err.message().to_string()));
                    set_loading.set(false);
                }
            }
        });
    }

    let on_save = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);
        set_success_msg.set(None);
        set_saving.set(true);

        let api = api.clone();
        spawn_local(async move {
            match api.update_preferences(&prefs.get_untracked()).await {
                Ok(ack) => set_success_msg.set(Some(ack.message)),
                Err(err) => set_error_msg.set(Some(err.message().to_string())),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="card bg-base-100 shadow-xl max-w-xl">
            <form class="card-body" on:submit=on_save>
                <h3 class="card-title">"Interface preferences"</h3>
                <ErrorAlert message=error_msg />
                <SuccessAlert message=success_msg />

                <Show
                    when=move || !loading.get()
                    fallback=|| {
                        view! { <span class="loading loading-spinner loading-md"></span> }
                    }
                >
                    <div class="form-control">
                        <label class="label"><span class="label-text">"Theme"</span></label>
                        <select
                            class="select select-bordered"
                            on:change=move |ev| {
                                set_prefs
                                    .update(|p| p.theme = parse_theme(&event_target_value(&ev)))
                            }
                        >
                            <option value="light" selected=move || prefs.get().theme == Theme::Light>
                                "Light"
                            </option>
                            <option value="dark" selected=move || prefs.get().theme == Theme::Dark>
                                "Dark"
                            </option>
                            <option
                                value="system"
                                selected=move || prefs.get().theme == Theme::System
                            >
                                "System"
                            </option>
                        </select>
                    </div>

                    <div class="form-control">
                        <label class="label"><span class="label-text">"Layout"</span></label>
                        <select
                            class="select select-bordered"
                            on:change=move |ev| {
                                set_prefs
                                    .update(|p| p.layout = parse_layout(&event_target_value(&ev)))
                            }
                        >
                            <option
                                value="default"
                                selected=move || prefs.get().layout == Layout::Default
                            >
                                "Default"
                            </option>
                            <option
                                value="compact"
                                selected=move || prefs.get().layout == Layout::Compact
                            >
                                "Compact"
                            </option>
                            <option
                                value="spacious"
                                selected=move || prefs.get().layout == Layout::Spacious
                            >
                                "Spacious"
                            </option>
                        </select>
                    </div>

                    <div class="form-control">
                        <label class="label"><span class="label-text">"Chart style"</span></label>
                        <select
                            class="select select-bordered"
                            on:change=move |ev| {
                                set_prefs
                                    .update(|p| {
                                        p.chart_style = parse_chart_style(&event_target_value(&ev))
                                    })
                            }
                        >
                            <option
                                value="default"
                                selected=move || prefs.get().chart_style == ChartStyle::Default
                            >
                                "Default"
                            </option>
                            <option
                                value="minimal"
                                selected=move || prefs.get().chart_style == ChartStyle::Minimal
                            >
                                "Minimal"
                            </option>
                            <option
                                value="colorful"
                                selected=move || prefs.get().chart_style == ChartStyle::Colorful
                            >
                                "Colorful"
                            </option>
                        </select>
                    </div>

                    <div class="form-control">
                        <label class="label cursor-pointer">
                            <span class="label-text">"Collapse sidebar by default"</span>
                            <input
                                type="checkbox"
                                class="toggle"
                                prop:checked=move || prefs.get().sidebar_collapsed
                                on:change=move |ev| {
                                    set_prefs
                                        .update(|p| {
                                            p.sidebar_collapsed = event_target_checked(&ev)
                                        })
                                }
                            />
                        </label>
                    </div>
                    <div class="form-control">
                        <label class="label cursor-pointer">
                            <span class="label-text">"Email notifications"</span>
                            <input
                                type="checkbox"
                                class="toggle"
                                prop:checked=move || prefs.get().notifications_enabled
                                on:change=move |ev| {
                                    set_prefs
                                        .update(|p| {
                                            p.notifications_enabled = event_target_checked(&ev)
                                        })
                                }
                            />
                        </label>
                    </div>

                    <div class="card-actions justify-end mt-2">
                        <button class="btn btn-primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save preferences" }}
                        </button>
                    </div>
                </Show>
            </form>
        </div>
    }
}
