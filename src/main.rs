//! E-Waste Mapper
//!
//! Crowdsourced e-waste reporting client built with Leptos (WASM).
//!
//! # Features
//!
//! - Photo reports with device geolocation and AI classification feedback
//! - Simplified map listing of submitted reports
//! - Aggregate analytics dashboard
//! - Token-based session persisted across reloads
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All business logic lives in the backend; this client is a
//! presentation and form-submission layer over its HTTP API.

use leptos::*;

mod api;
mod app;
mod components;
mod geo;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("E-Waste Mapper starting");

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
