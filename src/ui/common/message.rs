//! Inline messages and notice banners

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Error message component
/// Displays an error message with an alert icon
#[component]
pub fn ErrorMessage(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <p class="mt-3 flex items-center gap-2 text-sm text-red-500 dark:text-red-400" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                <span>{move || error.get().unwrap_or_default()}</span>
            </p>
        </Show>
    }
}

/// Amber "examples only" notice with a bold lead-in
#[component]
pub fn WarningNotice(
    /// Bold prefix, e.g. `Note:`
    #[prop(optional)]
    lead: Option<&'static str>,
    #[prop(into)] message: String,
) -> impl IntoView {
    view! {
        <div class="p-4 rounded-xl bg-amber-50 dark:bg-amber-900/20 border border-amber-200 dark:border-amber-800">
            <p class="text-sm text-amber-800 dark:text-amber-200">
                {lead.map(|l| view! { <strong>{l}</strong>" " })}
                {message}
            </p>
        </div>
    }
}

/// Full-width banner with an alert icon, title and detail line
#[component]
pub fn WarningBanner(title: &'static str, detail: &'static str) -> impl IntoView {
    view! {
        <section class="py-6 bg-amber-50 dark:bg-amber-900/20 border-y border-amber-200 dark:border-amber-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-start gap-4">
                    <Icon name=icons::ALERT_CIRCLE class="w-6 h-6 flex-shrink-0 mt-0.5"/>
                    <div>
                        <p class="text-amber-800 dark:text-amber-200 font-medium">{title}</p>
                        <p class="text-amber-700 dark:text-amber-300 text-sm mt-1">{detail}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
