//! Browser client for the Keystone multi-tenant CRM.
//!
//! Presentation layer only: list views, forms, filter drawers, and a global
//! session context. All business rules live in the backend; the one stateful
//! mechanism owned here is the session & subscription lifecycle manager in
//! `state::session` / `net::session_sync`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for the hydrate build.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
