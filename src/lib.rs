//! # item-browser
//!
//! Leptos + WASM client that lists items from the `/api/items` REST endpoint
//! and opens a detail dialog when a row is clicked.
//!
//! Browser-only pieces (HTTP, console logging, mounting) sit behind the `csr`
//! feature; state, config, and wire types build and test natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;

/// Install panic and log hooks, then mount the app on `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    let (config, rejected) = config::ClientConfig::from_build_env();
    let _ = console_log::init_with_level(config.log_level);
    for err in &rejected {
        log::warn!("{err}; using default");
    }
    log::info!("item browser starting (api base: {:?})", config.api_base);

    leptos::mount::mount_to_body(move || view! { <app::App config=config.clone()/> });
}
