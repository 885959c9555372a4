//! Navigation Component
//!
//! Sticky header with brand link, primary navigation, session-conditioned
//! affordances, and a collapsible menu for narrow viewports.

use leptos::*;
use leptos_router::*;

use crate::state::session::use_session;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let (open, set_open) = create_signal(false);

    view! {
        <header class="sticky top-0 z-50 bg-gray-900/80 backdrop-blur border-b border-gray-800">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Collapsed-menu toggle (narrow viewports)
                    <button
                        on:click=move |_| set_open.update(|open| *open = !*open)
                        class="md:hidden p-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-800 transition-colors"
                    >
                        "☰"
                    </button>

                    // Logo and brand
                    <A href="/" class="flex items-center space-x-2">
                        <span class="text-2xl">"♻️"</span>
                        <span class="text-xl font-extrabold text-white">"E-Waste Mapper"</span>
                    </A>

                    // Primary links
                    <div class="hidden md:flex items-center space-x-1">
                        <NavLink href="/about" label="About" />
                        <NavLink href="/how-it-works" label="How it works" />
                        <NavLink href="/map" label="Map" />
                        <NavLink href="/report" label="Report" />
                        <NavLink href="/contact" label="Contact" />
                    </div>

                    <SessionLinks />
                </div>
            </div>

            // Collapsed menu
            {move || {
                if open.get() {
                    view! {
                        <div class="md:hidden px-4 pb-3 flex flex-col gap-2">
                            <MobileLink href="/about" label="About" on_select=move || set_open.set(false) />
                            <MobileLink href="/how-it-works" label="How it works" on_select=move || set_open.set(false) />
                            <MobileLink href="/map" label="Map" on_select=move || set_open.set(false) />
                            <MobileLink href="/report" label="Report" on_select=move || set_open.set(false) />
                            <MobileLink href="/contact" label="Contact" on_select=move || set_open.set(false) />
                        </div>
                    }
                    .into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </header>
    }
}

/// Dashboard/Logout when a token is present, Login otherwise
#[component]
fn SessionLinks() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let session_for_logout = session.clone();
    let on_logout = move |_| {
        session_for_logout.logout();
        navigate("/", Default::default());
    };

    view! {
        <div class="flex items-center space-x-2">
            {move || {
                let on_logout = on_logout.clone();
                if session.is_authenticated() {
                    view! {
                        <A
                            href="/dashboard"
                            class="px-3 py-1 rounded-lg bg-green-600 hover:bg-green-700 text-white font-medium transition-colors"
                        >
                            "Dashboard"
                        </A>
                        <button
                            on:click=on_logout
                            class="px-3 py-1 rounded-lg border border-gray-600 text-gray-300 hover:text-white hover:border-gray-400 transition-colors"
                        >
                            "Logout"
                        </button>
                    }
                    .into_view()
                } else {
                    view! {
                        <A
                            href="/login"
                            class="px-3 py-1 rounded-lg border border-gray-600 text-gray-300 hover:text-white hover:border-gray-400 transition-colors"
                        >
                            "Login"
                        </A>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-800 transition-colors"
            active_class="bg-gray-800 text-white"
        >
            {label}
        </A>
    }
}

/// Collapsed-menu link; closes the menu on selection
#[component]
fn MobileLink(
    href: &'static str,
    label: &'static str,
    on_select: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <div on:click=move |_| on_select()>
            <A href=href class="block py-1 text-gray-300 hover:text-white">
                {label}
            </A>
        </div>
    }
}
