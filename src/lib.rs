//! wandb.online - independent internet and TV comparison site
//!
//! Server-rendered with Leptos and axum, hydrated in the browser as
//! WebAssembly.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use std::sync::Arc;

    use leptos::prelude::*;

    use crate::app::*;
    use crate::core::SiteConfig;

    console_error_panic_hook::set_once();
    let site = Arc::new(SiteConfig::wandb_online());
    leptos::mount::hydrate_body(move || view! { <App site=site/> });
}
