//! Courtside Front End
//!
//! NBA win/loss ratio charts built with Leptos (WASM).
//!
//! # Features
//!
//! - Home view with "Predictions" and "Real" toggles (one chart at a time)
//! - Dedicated routes for each series
//! - Canvas line charts, one line per team
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It fetches both series from the Courtside data service over
//! HTTP and transforms them with the shared `courtside` core.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
