//! Home Page
//!
//! Hero section with calls to action and quick links into the
//! informational pages.

use leptos::*;
use leptos_router::*;

/// Landing page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div>
            <Hero />

            <section class="container mx-auto px-6 py-16 grid md:grid-cols-3 gap-6">
                <InfoCard href="/about" icon="ℹ️" title="About E-waste" />
                <InfoCard href="/how-it-works" icon="❓" title="How it works" />
                <InfoCard href="/privacy" icon="🛡️" title="Privacy" />
            </section>
        </div>
    }
}

/// Hero section
#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="relative min-h-[60vh] flex items-center bg-gradient-to-b from-green-900/40 to-gray-900">
            <div class="container mx-auto px-6 py-16 grid md:grid-cols-2 gap-8">
                <div class="bg-gray-900/60 backdrop-blur rounded-xl p-6">
                    <h1 class="text-4xl md:text-6xl font-extrabold leading-tight">
                        "Crowdsourced E-Waste Mapping"
                    </h1>
                    <p class="mt-4 text-lg text-gray-300">
                        "Report, track, and recycle e-waste responsibly. AI classifies items, flags duplicates, and predicts hotspots."
                    </p>
                    <div class="mt-6 flex gap-3">
                        <A
                            href="/report"
                            class="px-5 py-3 rounded-lg bg-green-600 hover:bg-green-700 text-white font-medium transition-colors"
                        >
                            "+ Report Waste"
                        </A>
                        <A
                            href="/map"
                            class="px-5 py-3 rounded-lg border border-gray-600 hover:border-gray-400 text-gray-200 font-medium transition-colors"
                        >
                            "Open Map"
                        </A>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Link card into an informational page
#[component]
fn InfoCard(
    href: &'static str,
    icon: &'static str,
    title: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="p-6 rounded-xl border border-gray-700 bg-gray-800 hover:border-gray-500 hover:shadow-lg transition"
        >
            <span class="text-2xl">{icon}</span>
            <h3 class="mt-3 font-bold text-lg">{title}</h3>
            <p class="text-sm text-gray-400">"Learn more"</p>
        </A>
    }
}
