//! Map Page
//!
//! Simplified geospatial view: fetches the full report collection and
//! renders each entry as a card. No tiles, pagination, or filtering.

use leptos::*;

use crate::api::{self, GeoPoint, Report};
use crate::components::{ErrorNotice, ListSkeleton};
use crate::state::remote::RemoteData;

/// Map listing page component
#[component]
pub fn MapView() -> impl IntoView {
    let (reports, set_reports) = create_signal(RemoteData::<Vec<Report>>::Idle);

    // Fetch the collection on mount
    create_effect(move |_| {
        set_reports.set(RemoteData::Loading);
        spawn_local(async move {
            let result = api::fetch_reports().await;
            if let Err(e) = &result {
                log::error!("failed to fetch reports: {}", e);
            }
            set_reports.set(result.into());
        });
    });

    view! {
        <div class="container mx-auto px-6 py-12">
            <h1 class="text-3xl font-bold mb-4">"Map"</h1>
            <p class="text-gray-400 mb-6">
                "Interactive map is simplified in this environment. Below shows fetched reports."
            </p>

            {move || match reports.get() {
                RemoteData::Idle | RemoteData::Loading => view! {
                    <ListSkeleton count=6 />
                }.into_view(),
                RemoteData::Failed(message) => view! {
                    <ErrorNotice message=message />
                }.into_view(),
                RemoteData::Loaded(items) => {
                    if items.is_empty() {
                        view! {
                            <p class="text-gray-400">"No reports yet."</p>
                        }.into_view()
                    } else {
                        view! {
                            <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-4">
                                {items.into_iter().map(|report| view! {
                                    <ReportCard report=report />
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}

/// One report entry
#[component]
fn ReportCard(report: Report) -> impl IntoView {
    let category = report.category.unwrap_or_else(|| "Unknown".to_string());
    let description = report
        .description
        .unwrap_or_else(|| "No description".to_string());
    let coords = report.location.map(|location| format_coords(&location));

    view! {
        <div class="p-4 rounded-xl border border-gray-700 bg-gray-800">
            <p class="text-sm text-gray-400">{category}</p>
            <p class="font-semibold">{description}</p>
            {coords.map(|line| view! {
                <p class="text-xs text-gray-500 mt-1">{line}</p>
            })}
        </div>
    }
}

/// Coordinates line for cards with a resolved location
fn format_coords(location: &GeoPoint) -> String {
    format!("Lat: {:.4}, Lng: {:.4}", location.lat, location.lng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords_format_to_four_decimals() {
        let line = format_coords(&GeoPoint { lat: 12.34567, lng: -7.1 });
        assert_eq!(line, "Lat: 12.3457, Lng: -7.1000");
    }
}
