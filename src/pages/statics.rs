//! Static Content Pages
//!
//! Fixed informational text under the shared title/prose layout.

use leptos::*;

use crate::components::StaticPage;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <StaticPage title="About E-waste">
            <p>
                "E-waste includes discarded electronics. Proper recycling prevents "
                "toxic leakage and enables circular economy."
            </p>
        </StaticPage>
    }
}

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <StaticPage title="How it works">
            <p>
                "Upload an image, auto-classification suggests a category. Your "
                "location helps route pickups and display hotspots. Admins review "
                "and coordinate with recyclers."
            </p>
        </StaticPage>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <StaticPage title="Contact">
            <p>"Email us at support@ewaste.example or use the form below."</p>
        </StaticPage>
    }
}

#[component]
pub fn Privacy() -> impl IntoView {
    view! {
        <StaticPage title="Privacy Policy">
            <p>
                "We store reports and metadata to improve recycling logistics. "
                "You can request deletion of your data anytime."
            </p>
        </StaticPage>
    }
}
