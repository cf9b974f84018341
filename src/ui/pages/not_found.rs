//! 404 page for unknown routes and unknown provider slugs

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};
use crate::ui::use_site_config;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let site = use_site_config();

    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(axum::http::StatusCode::NOT_FOUND);
    }

    view! {
        <leptos_meta::Title text=site.page_title("Page Not Found")/>

        <section class="min-h-[70vh] flex items-center justify-center pt-32 pb-16 px-4">
            <div class="text-center max-w-lg">
                <p class="font-display text-8xl font-bold bg-gradient-to-r from-brand-500 to-cyan-500 bg-clip-text text-transparent mb-4">
                    "404"
                </p>
                <h1 class="font-display text-3xl font-bold text-slate-900 dark:text-white mb-4">
                    "Page Not Found"
                </h1>
                <p class="text-lg text-slate-600 dark:text-slate-400 mb-8">
                    "Sorry, we couldn't find the page you're looking for. It might have been moved or doesn't exist."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href="/"
                        attr:class="inline-flex items-center gap-2 px-6 py-3 rounded-xl bg-brand-600 hover:bg-brand-700 text-white font-semibold transition-colors"
                    >
                        <Icon name=icons::HOME class="w-5 h-5"/>
                        "Go Home"
                    </A>
                    <a
                        href=site.phone_link
                        class="inline-flex items-center gap-2 px-6 py-3 rounded-xl border border-slate-200 dark:border-slate-700 text-slate-900 dark:text-white font-semibold hover:bg-slate-50 dark:hover:bg-slate-800 transition-colors"
                    >
                        <Icon name=icons::PHONE class="w-5 h-5"/>
                        {format!("Call {}", site.phone)}
                    </a>
                </div>
            </div>
        </section>
    }
}
