//! ZIP code availability widget

use leptos::prelude::*;

use crate::core::zip_search::ProviderAvailability;
use crate::core::{SearchPhase, ZipEvent, ZipSearch};
use crate::ui::common::{ErrorMessage, InfoTooltip};
use crate::ui::icon::{Icon, icons};
use crate::ui::use_site_config;

/// Layout variant of the widget
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ZipVariant {
    /// Full width, used in the home hero
    #[default]
    Default,
    /// Narrower form for secondary placements
    Compact,
}

impl ZipVariant {
    fn width_class(&self) -> &'static str {
        match self {
            ZipVariant::Default => "max-w-2xl",
            ZipVariant::Compact => "max-w-xl",
        }
    }
}

/// ZIP entry form with simulated provider lookup
#[component]
pub fn ZipSearchModule(#[prop(optional)] variant: ZipVariant) -> impl IntoView {
    let site = use_site_config();
    let search = RwSignal::new(ZipSearch::new());

    let zip = Memo::new(move |_| search.with(|s| s.zip.clone()));
    let phase = Memo::new(move |_| search.with(|s| s.phase));
    let searching = Memo::new(move |_| search.with(|s| s.is_searching()));
    let error = Signal::derive(move || search.with(|s| s.error.clone()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(request) = search.try_update(|s| s.apply(ZipEvent::Submit)).flatten() else {
            return;
        };

        #[cfg(not(feature = "ssr"))]
        leptos::task::spawn_local(async move {
            use crate::core::zip_search::{AvailabilityLookup, LOOKUP_DELAY_MS, SampleAvailability};

            gloo_timers::future::TimeoutFuture::new(LOOKUP_DELAY_MS).await;
            let results = SampleAvailability.lookup(&request.zip);
            leptos::logging::log!(
                "zip lookup {} finished with {} providers",
                request.zip,
                results.len()
            );
            // The widget may have been unmounted in the meantime
            search.try_update(|s| {
                s.apply(ZipEvent::LookupFinished {
                    generation: request.generation,
                    results,
                })
            });
        });

        // Submit handlers only run in the browser
        #[cfg(feature = "ssr")]
        let _ = request;
    };

    let phone = site.phone;
    let phone_link = site.phone_link;
    let hours = site.hours;

    view! {
        <div class=format!("w-full {} mx-auto", variant.width_class())>
            <form on:submit=on_submit class="relative">
                <div class="relative flex items-center gap-2 p-2 bg-white dark:bg-slate-800 rounded-2xl shadow-xl shadow-slate-200/50 dark:shadow-slate-900/50 border border-slate-200 dark:border-slate-700">
                    <div class="flex-1 flex items-center gap-3 px-4">
                        <Icon name=icons::MAP_PIN class="w-5 h-5 flex-shrink-0"/>
                        <input
                            type="text"
                            inputmode="numeric"
                            placeholder="Enter your ZIP code"
                            class="w-full py-3 bg-transparent text-lg text-slate-900 dark:text-white placeholder-slate-400 focus:outline-none"
                            aria-label="ZIP code"
                            prop:value=move || zip.get()
                            on:input=move |ev| {
                                search.update(|s| {
                                    s.apply(ZipEvent::Input(event_target_value(&ev)));
                                });
                            }
                        />
                    </div>

                    <div class="relative">
                        <InfoTooltip
                            title="Why ZIP matters:"
                            text="Availability and offers vary by address. Your ZIP helps us show typical options in your area."
                            label="Why ZIP matters"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || searching.get()
                        class="flex items-center gap-2 px-6 py-3 bg-gradient-to-r from-brand-600 to-brand-500 rounded-xl font-semibold text-white disabled:opacity-70 disabled:cursor-not-allowed"
                    >
                        {move || {
                            if searching.get() {
                                view! {
                                    <Icon name=icons::LOADER class="w-5 h-5 animate-spin"/>
                                    <span class="hidden sm:inline">"Checking..."</span>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <Icon name=icons::SEARCH class="w-5 h-5"/>
                                    <span class="hidden sm:inline">"Check Options"</span>
                                }
                                    .into_any()
                            }
                        }}
                    </button>
                </div>

                <ErrorMessage error=error/>
            </form>

            <Show when=move || phase.get() == SearchPhase::Searching>
                <div class="mt-8 text-center" aria-live="polite">
                    <div class="inline-flex items-center gap-3 px-6 py-4 bg-brand-50 dark:bg-brand-900/30 rounded-xl">
                        <Icon name=icons::LOADER class="w-5 h-5 animate-spin"/>
                        <span class="text-brand-700 dark:text-brand-300">
                            {move || format!("Checking typical options for {}...", zip.get())}
                        </span>
                    </div>
                </div>
            </Show>

            <Show when=move || phase.get() == SearchPhase::Results>
                <div class="mt-8 space-y-4" aria-live="polite">
                    <div class="flex items-center gap-2 text-slate-600 dark:text-slate-400">
                        <Icon name=icons::CHECK class="w-5 h-5"/>
                        <span>
                            {move || {
                                format!(
                                    "Found {} providers with typical service in your area",
                                    search.with(|s| s.results.len()),
                                )
                            }}
                        </span>
                    </div>

                    <div class="grid gap-4">
                        <For
                            each=move || search.with(|s| s.results.clone())
                            key=|provider| provider.name
                            children=move |provider| view! { <AvailabilityCard provider=provider/> }
                        />
                    </div>

                    <p class="text-xs text-slate-500 dark:text-slate-500 mt-4">
                        "*Example pricing. Call to confirm current availability and offers at your address."
                    </p>

                    <div class="mt-6 p-6 bg-gradient-to-br from-brand-50 to-cyan-50 dark:from-brand-900/30 dark:to-cyan-900/30 rounded-2xl border border-brand-100 dark:border-brand-800">
                        <p class="text-center text-slate-700 dark:text-slate-300 mb-4">
                            "Ready to confirm pricing and availability at your exact address?"
                        </p>
                        <a
                            href=phone_link
                            class="flex items-center justify-center gap-3 w-full py-4 bg-gradient-to-r from-brand-600 to-brand-500 rounded-xl font-semibold text-white text-lg"
                        >
                            <Icon name=icons::PHONE class="w-5 h-5"/>
                            {format!("Call {}", phone)}
                        </a>
                        <p class="text-center text-sm text-slate-500 dark:text-slate-400 mt-3">
                            {hours}
                        </p>
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// One provider row in the lookup results
#[component]
fn AvailabilityCard(provider: ProviderAvailability) -> impl IntoView {
    let site = use_site_config();

    let features = provider
        .features
        .iter()
        .map(|feature| {
            view! {
                <span class="inline-flex items-center gap-1 px-2 py-1 text-xs font-medium bg-slate-100 dark:bg-slate-700 text-slate-600 dark:text-slate-300 rounded-lg">
                    <Icon name=icons::CHECK class="w-3 h-3"/>
                    {*feature}
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="p-5 bg-white dark:bg-slate-800 rounded-xl border border-slate-200 dark:border-slate-700">
            <div class="flex flex-col sm:flex-row sm:items-center justify-between gap-4">
                <div class="flex items-center gap-4">
                    <div
                        class="w-12 h-12 rounded-xl flex items-center justify-center text-white font-bold text-lg"
                        style=format!("background-color: {}", provider.color)
                    >
                        {provider.name.chars().next().map(String::from).unwrap_or_default()}
                    </div>
                    <div>
                        <h3 class="font-semibold text-lg text-slate-900 dark:text-white">{provider.name}</h3>
                        <div class="flex items-center gap-2 text-sm text-slate-500 dark:text-slate-400">
                            <Icon name=icons::WIFI class="w-4 h-4"/>
                            {provider.speeds}
                        </div>
                    </div>
                </div>
                <div class="flex items-center gap-4">
                    <div class="text-right">
                        <div class="text-sm text-slate-500 dark:text-slate-400">"Example pricing*"</div>
                        <div class="font-semibold text-slate-900 dark:text-white">{provider.price}</div>
                    </div>
                    <a
                        href=site.phone_link
                        class="flex items-center gap-2 px-4 py-2 bg-brand-600 hover:bg-brand-700 rounded-lg text-white font-medium transition-colors"
                    >
                        <Icon name=icons::PHONE class="w-4 h-4"/>
                        <span class="hidden sm:inline">"Call Now"</span>
                    </a>
                </div>
            </div>
            <div class="flex flex-wrap gap-2 mt-4">{features}</div>
        </div>
    }
}
