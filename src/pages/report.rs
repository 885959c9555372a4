//! Report Page
//!
//! Photo submission form. Device location is resolved once when the page
//! opens; submission needs both a selected image and resolved coordinates,
//! and renders the classifier verdict when the backend answers.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api::{self, GeoPoint, Prediction};
use crate::components::{ErrorNotice, InlineLoading, Loading};
use crate::geo;
use crate::state::remote::RemoteData;
use crate::state::session::use_session;

/// Report submission page component
#[component]
pub fn Report() -> impl IntoView {
    let session = use_session();

    let (file, set_file) = create_signal(None::<web_sys::File>);
    let (description, set_description) = create_signal(String::new());
    let (location, set_location) = create_signal(RemoteData::<GeoPoint>::Loading);
    let (result, set_result) = create_signal(RemoteData::<Prediction>::Idle);
    let (notice, set_notice) = create_signal(None::<&'static str>);

    // Resolve device location once when the page opens
    create_effect(move |_| {
        geo::request_current_position(move |position| {
            set_location.set(match position {
                Ok(coords) => RemoteData::Loaded(coords),
                Err(reason) => {
                    log::warn!("geolocation unavailable: {}", reason);
                    RemoteData::Failed(reason)
                }
            });
        });
    });

    let on_file_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();
        set_file.set(input.files().and_then(|files| files.get(0)));
    };

    let session_for_submit = session.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // Preconditions first; nothing is sent until both hold
        let selected = match file.get() {
            Some(selected) => selected,
            None => {
                set_notice.set(Some("Choose a photo of the e-waste first."));
                return;
            }
        };
        let coords = match location.get() {
            RemoteData::Loaded(coords) => coords,
            _ => {
                set_notice.set(Some("Submission needs your device location, which is not resolved."));
                return;
            }
        };

        set_notice.set(None);
        set_result.set(RemoteData::Loading);

        let description = description.get();
        let token = session_for_submit.token();
        spawn_local(async move {
            let outcome = api::submit_report(
                &selected,
                &description,
                coords.lat,
                coords.lng,
                token.as_deref(),
            )
            .await;
            if let Err(e) = &outcome {
                log::error!("report submission failed: {}", e);
            }
            set_result.set(outcome.into());
        });
    };

    view! {
        <div class="max-w-3xl mx-auto px-6 py-12">
            <h1 class="text-3xl font-bold mb-4">"Report E-waste"</h1>

            // Location status
            {move || match location.get() {
                RemoteData::Loaded(coords) => view! {
                    <p class="text-xs text-gray-400 mb-4">
                        {format!("Location locked: {:.4}, {:.4}", coords.lat, coords.lng)}
                    </p>
                }.into_view(),
                RemoteData::Failed(reason) => view! {
                    <p class="text-xs text-red-400 mb-4">
                        {format!("Location unavailable: {}", reason)}
                    </p>
                }.into_view(),
                _ => view! {
                    <p class="text-xs text-gray-400 mb-4 flex items-center gap-2">
                        <InlineLoading />
                        "Resolving your location..."
                    </p>
                }.into_view(),
            }}

            <form on:submit=on_submit class="space-y-4">
                <input
                    type="file"
                    accept="image/*"
                    on:change=on_file_change
                    class="w-full text-gray-300"
                />
                <textarea
                    placeholder="Describe the e-waste..."
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                    class="w-full bg-gray-800 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-green-500 focus:outline-none"
                />

                {move || notice.get().map(|message| view! {
                    <p class="text-amber-400 text-sm">{message}</p>
                })}

                <button
                    type="submit"
                    disabled=move || result.with(|r| r.is_loading())
                    class="px-4 py-2 bg-green-600 hover:bg-green-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if result.with(|r| r.is_loading()) { "Submitting..." } else { "Submit" }}
                </button>
            </form>

            // Classifier verdict
            {move || match result.get() {
                RemoteData::Idle => view! {}.into_view(),
                RemoteData::Loading => view! { <Loading /> }.into_view(),
                RemoteData::Failed(message) => view! {
                    <div class="mt-6">
                        <ErrorNotice message=message />
                    </div>
                }.into_view(),
                RemoteData::Loaded(prediction) => view! {
                    <PredictionCard prediction=prediction />
                }.into_view(),
            }}
        </div>
    }
}

/// Verdict card: predicted category, confidence, duplicate warning
#[component]
fn PredictionCard(prediction: Prediction) -> impl IntoView {
    let headline = format!(
        "Prediction: {} ({}%)",
        prediction.category,
        confidence_pct(prediction.confidence)
    );
    let duplicate = prediction.duplicate_of.is_some();

    view! {
        <div class="mt-6 p-4 rounded-xl border border-gray-700 bg-gray-800">
            <p class="font-semibold">{headline}</p>
            {duplicate.then(|| view! {
                <p class="text-amber-400 text-sm mt-1">"Possible duplicate detected."</p>
            })}
        </div>
    }
}

/// Confidence fraction to the nearest whole percent
fn confidence_pct(confidence: f64) -> i64 {
    (confidence * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_rounds_to_nearest_whole_percent() {
        assert_eq!(confidence_pct(0.0), 0);
        assert_eq!(confidence_pct(0.5), 50);
        assert_eq!(confidence_pct(0.875), 88);
        assert_eq!(confidence_pct(0.921), 92);
        assert_eq!(confidence_pct(1.0), 100);
    }
}
