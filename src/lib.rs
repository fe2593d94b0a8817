//! Drawtab - Automated Flyer Campaigns
//!
//! Marketing site and admin dashboard for uploading flyer templates, marking
//! hotspots on them and managing the account session, built with Leptos and
//! WebAssembly. Storage, scheduling and delivery live on the hosted platform.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
