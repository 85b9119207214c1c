//! # client
//!
//! Leptos + WASM frontend for the digit drawing pad.
//!
//! This crate contains the page, components, prediction state, and the REST
//! call to the prediction endpoint. It integrates with the `canvas` crate for
//! pixel rendering via the `DrawPad` bridge component.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // Only fails when a logger is already installed.
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
