use leptos::prelude::*;
use leptos::task::spawn_local;
use thrive_shared::analytics::{HeatmapCell, NavigationPath};

use crate::api::{CancelToken, use_api};
use crate::components::layout::DashboardLayout;
use crate::components::widgets::SectionCard;

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Per-weekday rollup of the 7×24 heatmap cells.
fn day_summary(cells: &[HeatmapCell]) -> Vec<(usize, u64, Option<u8>)> {
    (0..7)
        .map(|day| {
            let day_cells: Vec<&HeatmapCell> =
                cells.iter().filter(|c| usize::from(c.day) == day).collect();
            let total = day_cells.iter().map(|c| c.count).sum();
            let peak = day_cells
                .iter()
                .max_by_key(|c| c.count)
                .filter(|c| c.count > 0)
                .map(|c| c.hour);
            (day, total, peak)
        })
        .collect()
}

#[component]
pub fn CommentsPage() -> impl IntoView {
    let api = use_api();

    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    let (sources, set_sources) = signal(Vec::<NavigationPath>::new());
    let (sources_loading, set_sources_loading) = signal(true);
    let (sources_error, set_sources_error) = signal(Option::<String>::None);

    let (heatmap, set_heatmap) = signal(Vec::<HeatmapCell>::new());
    let (heatmap_loading, set_heatmap_loading) = signal(true);
    let (heatmap_error, set_heatmap_error) = signal(Option::<String>::None);

    let load_sources = {
        let api = api.clone();
        let cancel = cancel.clone();
        move || {
            let api = api.clone();
            let cancel = cancel.clone();
            set_sources_loading.set(true);
            spawn_local(async move {
                match api.comment_sources(Some(&cancel)).await {
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

    let load_heatmap = {
        let api = api.clone();
        let cancel = cancel.clone();
        move || {
            let api = api.clone();
            let cancel = cancel.clone();
            set_heatmap_loading.set(true);
            spawn_local(async move {
                match api.comment_time_distribution(Some(&cancel)).await {
                    Ok(data) => {
                        set_heatmap.set(data);
                        set_heatmap_error.set(None);
                    }
                    Err(err) if err.is_aborted() => return,
                    Err(err) => {
                        set_heatmap.set(Vec::new());
                        set_heatmap_error.set(Some(err.message().to_string()));
                    }
                }
                set_heatmap_loading.set(false);
            });
        }
    };

    load_sources();
    load_heatmap();

    view! {
        <DashboardLayout title="Comments">
            <div class="grid grid-cols-1 xl:grid-cols-2 gap-6">
                <SectionCard
                    title="Where comments come from"
                    subtitle="Navigation paths that lead into comment pages."
                    loading=sources_loading
                    error=sources_error
                    on_retry=Callback::new({
                        let load_sources = load_sources.clone();
                        move |_| load_sources()
                    })
                >
                    <div class="overflow-x-auto">
                        <table class="table table-zebra table-sm w-full">
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

                <SectionCard
                    title="When comments happen"
                    subtitle="Comment activity by weekday and hour."
                    loading=heatmap_loading
                    error=heatmap_error
                    on_retry=Callback::new({
                        let load_heatmap = load_heatmap.clone();
                        move |_| load_heatmap()
                    })
                >
                    <div class="overflow-x-auto">
                        <table class="table table-sm w-full">
                            <thead>
                                <tr>
                                    <th>"Day"</th>
                                    <th class="text-right">"Comments"</th>
                                    <th class="text-right">"Peak hour"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    day_summary(&heatmap.get())
                                        .into_iter()
                                        .map(|(day, total, peak)| {
                                            let peak_label = peak
                                                .map(|hour| format!("{:02}:00", hour))
                                                .unwrap_or_else(|| "-".to_string());
                                            view! {
                                                <tr>
                                                    <td>{DAY_NAMES[day]}</td>
                                                    <td class="text-right">{total}</td>
                                                    <td class="text-right">{peak_label}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </tbody>
                        </table>
                    </div>
                </SectionCard>
            </div>
        </DashboardLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(day: u8, hour: u8, count: u64) -> HeatmapCell {
        HeatmapCell { day, hour, count }
    }

    #[test]
    fn day_summary_totals_and_peaks() {
        let cells = vec![cell(0, 9, 3), cell(0, 14, 7), cell(2, 20, 1)];
        let summary = day_summary(&cells);

        assert_eq!(summary.len(), 7);
        assert_eq!(summary[0], (0, 10, Some(14)));
        assert_eq!(summary[2], (2, 1, Some(20)));
        // Days without activity report no peak.
        assert_eq!(summary[1], (1, 0, None));
    }

    #[test]
    fn day_summary_of_empty_heatmap_is_all_zero() {
        for (_, total, peak) in day_summary(&[]) {
            assert_eq!(total, 0);
            assert_eq!(peak, None);
        }
    }
}
