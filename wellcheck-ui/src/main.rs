//! Wellcheck Dashboard
//!
//! Wellness dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Stats header: total check-ins, average mood, journal entries, active goals
//! - Tabs for mood, journal, activities and goals
//! - Inline creation forms generated from each kind's field table
//! - Toast notifications
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Models, validation and view state come from the `wellcheck`
//! core crate; this crate only binds them to signals and the DOM and supplies
//! a `gloo-net` transport.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
