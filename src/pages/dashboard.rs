//! Dashboard Page
//!
//! Aggregate analytics: total report count plus status and category
//! breakdowns fetched in one summary call.

use leptos::*;

use crate::api::{self, GroupCount, Summary};
use crate::components::{ErrorNotice, Loading};
use crate::state::remote::RemoteData;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let (summary, set_summary) = create_signal(RemoteData::<Summary>::Idle);

    // Fetch the summary on mount
    create_effect(move |_| {
        set_summary.set(RemoteData::Loading);
        spawn_local(async move {
            let result = api::fetch_summary().await;
            if let Err(e) = &result {
                log::error!("failed to fetch summary: {}", e);
            }
            set_summary.set(result.into());
        });
    });

    view! {
        <div class="max-w-6xl mx-auto px-6 py-12">
            <h1 class="text-3xl font-bold mb-4">"Dashboard"</h1>

            {move || match summary.get() {
                RemoteData::Idle | RemoteData::Loading => view! { <Loading /> }.into_view(),
                RemoteData::Failed(message) => view! {
                    <ErrorNotice message=message />
                }.into_view(),
                RemoteData::Loaded(summary) => view! {
                    <div class="grid md:grid-cols-3 gap-4">
                        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                            <p class="text-sm text-gray-400">"Total Reports"</p>
                            <p class="text-3xl font-extrabold mt-2">{summary.total.to_string()}</p>
                        </div>
                        <GroupPanel title="By Status" groups=summary.by_status />
                        <GroupPanel title="By Category" groups=summary.by_category />
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

/// One breakdown panel
#[component]
fn GroupPanel(
    title: &'static str,
    groups: Vec<GroupCount>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
            <p class="font-semibold">{title}</p>
            <ul class="mt-2 space-y-1 text-sm text-gray-300">
                {groups.into_iter().map(|group| view! {
                    <li>{format!("{}: {}", group_label(group.label.as_deref()), group.count)}</li>
                }).collect_view()}
            </ul>
        </div>
    }
}

/// Bucket label; null or empty labels collapse to "unknown"
fn group_label(label: Option<&str>) -> &str {
    match label {
        Some(label) if !label.is_empty() => label,
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_pass_through_when_present() {
        assert_eq!(group_label(Some("open")), "open");
        assert_eq!(group_label(Some("battery")), "battery");
    }

    #[test]
    fn null_and_empty_labels_become_unknown() {
        assert_eq!(group_label(None), "unknown");
        assert_eq!(group_label(Some("")), "unknown");
    }

    #[test]
    fn summary_scenario_renders_expected_rows() {
        let summary = Summary {
            total: 5,
            by_status: vec![
                GroupCount { label: Some("open".to_string()), count: 3 },
                GroupCount { label: None, count: 2 },
            ],
            by_category: vec![],
        };

        let rows: Vec<String> = summary
            .by_status
            .iter()
            .map(|group| format!("{}: {}", group_label(group.label.as_deref()), group.count))
            .collect();
        assert_eq!(rows, vec!["open: 3", "unknown: 2"]);
        assert!(summary.by_category.is_empty());
    }
}
