//! # clubboard
//!
//! Leptos + WASM client for the club activity signup and project-idea board.
//!
//! The page markup is served separately; this crate mounts the activity and
//! idea lists into it, wires its forms, and keeps both lists in step with the
//! server by re-fetching after every successful change.

pub mod components;
pub mod config;
pub mod dispatch;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
pub mod app;

/// WASM entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    app::start(config::ClientConfig::default());
}
