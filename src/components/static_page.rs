//! Static Page Layout
//!
//! Shared title/prose frame for the informational pages.

use leptos::*;

/// Fixed-content page layout
#[component]
pub fn StaticPage(
    title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto px-6 py-12">
            <h1 class="text-3xl font-bold mb-4">{title}</h1>
            <div class="space-y-4 text-gray-300 leading-relaxed">
                {children()}
            </div>
        </div>
    }
}
