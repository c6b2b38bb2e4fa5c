//! # intel-client
//!
//! Leptos + WASM edit-mode layer for the intelligence record pages.
//!
//! The server renders the record listings; this crate mounts the create/edit
//! modals for gangs, members, incidents, case files and gang relationships,
//! talks to the `/api/{entity}/...` endpoints, and drives the Cropper.js
//! widget used for case-file images.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// Browser entry point: install logging and mount the edit-mode root.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
