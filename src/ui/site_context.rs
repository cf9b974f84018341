//! Access to the shared [`SiteConfig`] from inside the component tree

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::core::SiteConfig;

/// Make `site` available to every descendant component
pub fn provide_site_config(site: Arc<SiteConfig>) {
    provide_context(site);
}

/// Site configuration provided by `App`
pub fn use_site_config() -> Arc<SiteConfig> {
    use_context::<Arc<SiteConfig>>().expect("SiteConfig should be provided")
}

/// Reactive pathname of the current route
pub fn use_pathname() -> Memo<String> {
    let location = use_location();
    Memo::new(move |_| location.pathname.get())
}
