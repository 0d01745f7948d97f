use leptos::prelude::*;
use leptos::task::spawn_local;
use thrive_shared::analytics::{CourseProgress, CourseProgressReport, NavigationPath};

use crate::api::{CancelToken, use_api};
use crate::components::layout::DashboardLayout;
use crate::components::widgets::SectionCard;

#[component]
pub fn CourseProgressPage() -> impl IntoView {
    let api = use_api();

    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    let (report, set_report) = signal(Option::<CourseProgressReport>::None);
    let (report_loading, set_report_loading) = signal(true);
    let (report_error, set_report_error) = signal(Option::<String>::None);

    let (sources, set_sources) = signal(Vec::<NavigationPath>::new());
    let (sources_loading, set_sources_loading) = signal(true);
    let (sources_error, set_sources_error) = signal(Option::<String>::None);

    let load_report = {
        let api = api.clone();
        let cancel = cancel.clone();
        move || {
            let api = api.clone();
            let cancel = cancel.clone();
            set_report_loading.set(true);
            spawn_local(async move {
                match api.course_progress_report(Some(&cancel)).await {
                    Ok(data) => {
                        set_report.set(Some(data));
                        set_report_error.set(None);
                    }
                    Err(err) if err.is_aborted() => return,
                    Err(err) => {
                        set_report.set(None);
                        set_report_error.set(Some(err.message().to_string()));
                    }
                }
                set_report_loading.set(false);
            });
        }
    };

    let load_sources = {
        let api = api.clone();
        let cancel = cancel.clone();
        move || {
            let api = api.clone();
            let cancel = cancel.clone();
            set_sources_loading.set(true);
            spawn_local(async move {
                match api.course_sources(Some(&cancel)).await {
                    Ok(data) => {
                        set_sources.set(data);
                        set_sources_error.set(None);
                    }
                    Err(err) if err.is_aborted() => return,
                    Err(err) => {
                        set_sources.set(Vec::new());
                        set_sources_error.set(Some(err.message().to_string()));
                    }
                }
                set_sources_loading.set(false);
            });
        }
    };

    load_report();
    load_sources();

    view! {
        <DashboardLayout title="Course progress">
            {move || {
                report
                    .get()
                    .map(|data| {
                        let summary = data.summary;
                        view! {
                            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                                <div class="stat">
                                    <div class="stat-title">"Courses"</div>
                                    <div class="stat-value text-primary">{summary.total_courses}</div>
                                </div>
                                <div class="stat">
                                    <div class="stat-title">"Enrollments"</div>
                                    <div class="stat-value">{summary.total_user_enrollments}</div>
                                </div>
                                <div class="stat">
                                    <div class="stat-title">"Completed"</div>
                                    <div class="stat-value text-success">
                                        {summary.completed_enrollments}
                                    </div>
                                </div>
                                <div class="stat">
                                    <div class="stat-title">"Completion rate"</div>
                                    <div class="stat-value text-secondary text-2xl">
                                        {format!("{:.1}%", summary.overall_completion_rate)}
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}

            <div class="grid grid-cols-1 xl:grid-cols-2 gap-6">
                <SectionCard
                    title="Courses"
                    subtitle="Enrollment and completion per course."
                    loading=report_loading
                    error=report_error
                    on_retry=Callback::new({
                        let load_report = load_report.clone();
                        move |_| load_report()
                    })
                >
                    <div class="overflow-x-auto">
                        <table class="table table-zebra table-sm w-full">
                            <thead>
                                <tr>
                                    <th>"Course"</th>
                                    <th class="text-right">"Users"</th>
                                    <th class="text-right">"Completed"</th>
                                    <th class="text-right">"Rate"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || report.get().is_none() && !report_loading.get()>
                                    <tr>
                                        <td colspan="4" class="text-center py-6 text-base-content/50">
                                            "No course data available."
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=move || {
                                        report.get().map(|r| r.courses).unwrap_or_default()
                                    }
                                    key=|course| course.id
                                    children=move |course: CourseProgress| {
                                        view! {
                                            <tr>
                                                <td class="truncate max-w-xs">{course.title.clone()}</td>
                                                <td class="text-right">{course.total_users}</td>
                                                <td class="text-right">{course.completed_users}</td>
                                                <td class="text-right">
                                                    {format!("{:.1}%", course.completion_rate)}
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>

                    {move || {
                        report
                            .get()
                            .filter(|data| !data.groups.is_empty())
                            .map(|data| {
                                view! {
                                    <div class="flex flex-wrap gap-2 mt-3">
                                        {data
                                            .groups
                                            .iter()
                                            .map(|group| {
                                                view! {
                                                    <span class="badge badge-outline">
                                                        {format!(
                                                            "{} · {} courses · {:.0}%",
                                                            group.name,
                                                            group.total_courses,
                                                            group.completion_rate,
                                                        )}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                            })
                    }}
                </SectionCard>

                <SectionCard
                    title="How users reach courses"
                    subtitle="Navigation paths that lead into course pages."
                    loading=sources_loading
                    error=sources_error
                    on_retry=Callback::new({
                        let load_sources = load_sources.clone();
                        move |_| load_sources()
                    })
                >
                    <div class="overflow-x-auto">
                        <table class="table table-sm w-full">
                            <thead>
                                <tr>
                                    <th>"From"</th>
                                    <th>"To"</th>
                                    <th class="text-right">"Count"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <Show when=move || {
                                    sources.with(Vec::is_empty) && !sources_loading.get()
                                }>
                                    <tr>
                                        <td colspan="3" class="text-center py-6 text-base-content/50">
                                            "No navigation paths recorded."
                                        </td>
                                    </tr>
                                </Show>
                                <For
                                    each=move || sources.get()
                                    key=|path| format!("{}|{}", path.source, path.target)
                                    children=move |path: NavigationPath| {
                                        view! {
                                            <tr>
                                                <td class="font-mono text-xs truncate">
                                                    {path.source.clone()}
                                                </td>
                                                <td class="font-mono text-xs truncate">
                                                    {path.target.clone()}
                                                </td>
                                                <td class="text-right">{path.count}</td>
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
