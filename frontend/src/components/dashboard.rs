use leptos::prelude::*;
use leptos::task::spawn_local;
use thrive_shared::analytics::{
    DurationBucket, Interval, NoteUploadTrendsRequest, NoteUploadTrendsResponse, PopularContentRequest,
    PopularMetric, PopularPage, VisitTrendPoint, VisitTrendsRequest,
};

use crate::api::{CancelToken, use_api};
use crate::components::icons::{Clock, MessageSquare, Users};
use crate::components::layout::DashboardLayout;
use crate::components::widgets::{SectionCard, StatCard};
use crate::web::last_days;

fn parse_interval(raw: &str) -> Interval {
    match raw {
        "week" => Interval::Week,
        "month" => Interval::Month,
        _ => Interval::Day,
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = use_api();

    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    // Counters (degrade to zero on failure).
    let (active_users, set_active_users) = signal(0u64);
    let (active_loading, set_active_loading) = signal(true);
    let (usage_time, set_usage_time) = signal(0.0f64);
    let (usage_loading, set_usage_loading) = signal(true);
    let (feedback_count, set_feedback_count) = signal(0u64);
    let (feedback_loading, set_feedback_loading) = signal(true);

    // Dataset widgets.
    let (interval, set_interval) = signal(Interval::Day);
    let (trends, set_trends) = signal(Vec::<VisitTrendPoint>::new());
    let (trends_loading, set_trends_loading) = signal(true);
    let (trends_error, set_trends_error) = signal(Option::<String>::None);

    let (popular, set_popular) = signal(Vec::<PopularPage>::new());
    let (popular_loading, set_popular_loading) = signal(true);
    let (popular_error, set_popular_error) = signal(Option::<String>::None);

    let (durations, set_durations) = signal(Vec::<DurationBucket>::new());
    let (durations_loading, set_durations_loading) = signal(true);
    let (durations_error, set_durations_error) = signal(Option::<String>::None);

    let (notes, set_notes) = signal(Option::<NoteUploadTrendsResponse>::None);
    let (notes_loading, set_notes_loading) = signal(true);
    let (notes_error, set_notes_error) = signal(Option::<String>::None);

    // Counters load once, independently of each other.
    {
        let api = api.clone();
        let cancel = cancel.clone();
        spawn_local(async move {
            let value = api.fetch_active_users(Some(&cancel)).await;
            if cancel.is_cancelled() {
                return;
            }
            set_active_users.set(value);
            set_active_loading.set(false);
        });
    }
    {
        let api = api.clone();
        let cancel = cancel.clone();
        spawn_local(async move {
            let value = api.fetch_average_usage_time(Some(&cancel)).await;
            if cancel.is_cancelled() {
                return;
            }
            set_usage_time.set(value);
            set_usage_loading.set(false);
        });
    }
    {
        let api = api.clone();
        let cancel = cancel.clone();
        spawn_local(async move {
            let value = api.fetch_feedback_count(Some(&cancel)).await;
            if cancel.is_cancelled() {
                return;
            }
            set_feedback_count.set(value);
            set_feedback_loading.set(false);
        });
    }

    let load_trends = {
        let api = api.clone();
        let cancel = cancel.clone();
        move || {
            let api = api.clone();
            let cancel = cancel.clone();
            set_trends_loading.set(true);
            spawn_local(async move {
                let request = VisitTrendsRequest {
                    interval: interval.get_untracked(),
                    range: Some(last_days(30)),
                };
                match api.visit_trends(&request, Some(&cancel)).await {
                    Ok(data) => {
                        set_trends.set(data);
                        set_trends_error.set(None);
                    }
                    Err(err) if err.is_aborted() => return,
                    Err(err) => {
                        set_trends.set(Vec::new());
                        set_trends_error.set(Some(err.message().to_string()));
                    }
                }
                set_trends_loading.set(false);
            });
        }
    };

    let load_popular = {
        let api = api.clone();
        let cancel = cancel.clone();
        move || {
            let api = api.clone();
            let cancel = cancel.clone();
            set_popular_loading.set(true);
            spawn_local(async move {
                let request = PopularContentRequest {
                    metric: PopularMetric::Views,
                    limit: 10,
                };
                match api.popular_content(&request, Some(&cancel)).await {
                    Ok(data) => {
                        set_popular.set(data);
                        set_popular_error.set(None);
                    }
                    Err(err) if err.is_aborted() => return,
                    Err(err) => {
                        set_popular.set(Vec::new());
                        set_popular_error.set(Some(err.message().to_string()));
                    }
                }
                set_popular_loading.set(false);
            });
        }
    };

    let load_durations = {
        let api = api.clone();
        let cancel = cancel.clone();
        move || {
            let api = api.clone();
            let cancel = cancel.clone();
            set_durations_loading.set(true);
            spawn_local(async move {
                match api.visit_duration(Some(&cancel)).await {
                    Ok(data) => {
                        set_durations.set(data);
                        set_durations_error.set(None);
                    }
                    Err(err) if err.is_aborted() => return,
                    Err(err) => {
                        set_durations.set(Vec::new());
                        set_durations_error.set(Some(err.message().to_string()));
                    }
                }
                set_durations_loading.set(false);
            });
        }
    };

    let load_notes = {
        let api = api.clone();
        let cancel = cancel.clone();
        move || {
            let api = api.clone();
            let cancel = cancel.clone();
            set_notes_loading.set(true);
            spawn_local(async move {
                let request = NoteUploadTrendsRequest {
                    interval: interval.get_untracked(),
                    range: Some(last_days(30)),
                };
                match api.note_upload_trends(&request, Some(&cancel)).await {
                    Ok(data) => {
                        set_notes.set(Some(data));
                        set_notes_error.set(None);
                    }
                    Err(err) if err.is_aborted() => return,
                    Err(err) => {
                        set_notes.set(None);
                        set_notes_error.set(Some(err.message().to_string()));
                    }
                }
                set_notes_loading.set(false);
            });
        }
    };

    // Initial load; sibling requests resolve independently.
    load_trends();
    load_popular();
    load_durations();
    load_notes();

    let on_interval_change = {
        let load_trends = load_trends.clone();
        let load_notes = load_notes.clone();
        move |ev: leptos::web_sys::Event| {
            set_interval.set(parse_interval(&event_target_value(&ev)));
            load_trends();
            load_notes();
        }
    };

    view! {
        <DashboardLayout title="Overview">
            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <StatCard
                    title="Active users"
                    value=Signal::derive(move || active_users.get().to_string())
                    loading=active_loading
                >
                    <span class="h-8 w-8"><Users /></span>
                </StatCard>
                <StatCard
                    title="Average usage time"
                    value=Signal::derive(move || format!("{:.1} min", usage_time.get() / 60.0))
                    loading=usage_loading
                >
                    <span class="h-8 w-8"><Clock /></span>
                </StatCard>
                <StatCard
                    title="Feedback messages"
                    value=Signal::derive(move || feedback_count.get().to_string())
                    loading=feedback_loading
                >
                    <span class="h-8 w-8"><MessageSquare /></span>
                </StatCard>
            </div>

            <div class="flex justify-end">
                <select class="select select-bordered select-sm" on:change=on_interval_change>
                    <option value="day" selected=true>"Daily"</option>
                    <option value="week">"Weekly"</option>
                    <option value="month">"Monthly"</option>
                </select>
            </div>

            <div class="grid grid-cols-1 xl:grid-cols-2 gap-6">
                <SectionCard
                    title="Visit trends"
                    subtitle="Visits and unique visitors over the last 30 days."
                    loading=trends_loading
                    error=trends_error
                    on_retry=Callback::new({
                        let load_trends = load_trends.clone();
                        move |_| load_trends()
                    })
                >
                    <div class="overflow-x-auto">
                        <table class="table table-zebra table-sm w-full">
                            <thead>
                                <tr>
                                    <th>"Date"</th>
                                    <th class="text-right">"Visits"</th>
                                    <th class="text-right">"Unique visitors"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || trends.with(Vec::is_empty) && !trends_loading.get()>
                                    <tr>
                                        <td colspan="3" class="text-center py-6 text-base-content/50">
                                            "No visit data for this period."
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=move || trends.get()
                                    key=|point| point.date.clone()
                                    children=move |point: VisitTrendPoint| {
                                        view! {
                                            <tr>
                                                <td class="font-mono text-xs">{point.date}</td>
                                                <td class="text-right">{point.visits}</td>
                                                <td class="text-right">{point.unique_visitors}</td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </SectionCard>

                <SectionCard
                    title="Popular content"
                    subtitle="Most viewed pages in the last 30 days."
                    loading=popular_loading
                    error=popular_error
                    on_retry=Callback::new({
                        let load_popular = load_popular.clone();
                        move |_| load_popular()
                    })
                >
                    <ul class="space-y-2">
                        <Show when=move || popular.with(Vec::is_empty) && !popular_loading.get()>
                            <li class="text-center py-6 text-base-content/50">
                                "No page views recorded."
                            </li>
                        </Show>
                        <For
                            each=move || popular.get()
                            key=|page| page.page_name.clone()
                            children=move |page: PopularPage| {
                                view! {
                                    <li class="flex items-center justify-between">
                                        <span class="truncate text-sm">{page.page_name}</span>
                                        <span class="badge badge-primary badge-outline">
                                            {page.value}
                                        </span>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </SectionCard>

                <SectionCard
                    title="Visit duration"
                    subtitle="How long sessions last."
                    loading=durations_loading
                    error=durations_error
                    on_retry=Callback::new({
                        let load_durations = load_durations.clone();
                        move |_| load_durations()
                    })
                >
                    <div class="overflow-x-auto">
                        <table class="table table-sm w-full">
                            <thead>
                                <tr>
                                    <th>"Duration"</th>
                                    <th class="text-right">"Sessions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || durations.get()
                                    key=|bucket| bucket.duration_range.clone()
                                    children=move |bucket: DurationBucket| {
                                        view! {
                                            <tr>
                                                <td>{bucket.duration_range}</td>
                                                <td class="text-right">{bucket.count}</td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </SectionCard>

                <SectionCard
                    title="Note uploads"
                    subtitle="Notes added across wellbeing modules."
                    loading=notes_loading
                    error=notes_error
                    on_retry=Callback::new({
                        let load_notes = load_notes.clone();
                        move |_| load_notes()
                    })
                >
                    {move || match notes.get() {
                        Some(report) => {
                            view! {
                                <div class="space-y-3">
                                    <div class="flex flex-wrap gap-2">
                                        {report
                                            .module_trends
                                            .iter()
                                            .map(|trend| {
                                                let total: u64 =
                                                    trend.data.iter().map(|p| p.count).sum();
                                                view! {
                                                    <span class="badge badge-outline">
                                                        {format!("{}: {}", trend.module, total)}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    <div class="overflow-x-auto">
                                        <table class="table table-sm w-full">
                                            <thead>
                                                <tr>
                                                    <th>"Date"</th>
                                                    <th class="text-right">"Notes"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {report
                                                    .overall_trend
                                                    .iter()
                                                    .map(|point| {
                                                        view! {
                                                            <tr>
                                                                <td class="font-mono text-xs">
                                                                    {point.date.clone()}
                                                                </td>
                                                                <td class="text-right">{point.count}</td>
                                                            </tr>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </tbody>
                                        </table>
                                    </div>
                                </div>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <p class="text-center py-6 text-base-content/50">
                                    "No note activity for this period."
                                </p>
                            }
                                .into_any()
                        }
                    }}
                </SectionCard>
            </div>
        </DashboardLayout>
    }
}
