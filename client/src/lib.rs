//! # roadsense-client
//!
//! Leptos + WASM front end for RoadSense: the marketing landing page, the
//! login and signup flows, and the dashboard shell.
//!
//! This crate contains pages, components, transient UI state, and the static
//! dashboard content table. The `server` crate renders it with the `ssr`
//! feature; the browser bundle is built with the `hydrate` feature.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
