//! App Root Component
//!
//! Main application component with routing and the session provider.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::{About, Contact, Dashboard, Home, HowItWorks, Login, MapView, Privacy, Report};
use crate::state::session::provide_session;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide the session to all components
    provide_session();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/about" view=About />
                        <Route path="/how-it-works" view=HowItWorks />
                        <Route path="/map" view=MapView />
                        <Route path="/report" view=Report />
                        <Route path="/dashboard" view=Dashboard />
                        <Route path="/login" view=Login />
                        <Route path="/contact" view=Contact />
                        <Route path="/privacy" view=Privacy />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />
            </div>
        </Router>
    }
}

/// Site footer
#[component]
fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="border-t border-gray-800 mt-16 py-8 text-sm text-gray-400">
            <div class="container mx-auto px-6 flex flex-col md:flex-row justify-between items-center gap-3">
                <p>{format!("© {} E-Waste Mapper", year)}</p>
                <nav class="flex gap-4">
                    <A href="/privacy" class="hover:text-white">"Privacy"</A>
                    <A href="/contact" class="hover:text-white">"Contact"</A>
                </nav>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-green-600 hover:bg-green-700 rounded-lg font-medium transition-colors"
            >
                "Back to Home"
            </A>
        </div>
    }
}
