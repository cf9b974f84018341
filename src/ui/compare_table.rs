//! Filterable, sortable plan comparison table

use leptos::prelude::*;

use crate::core::compare::{
    SPEED_HIGH_MAX, SPEED_HIGH_MIN, SPEED_LOW_MAX, SPEED_LOW_MIN, showing_summary,
};
use crate::core::{FilterState, PlanRecord, SortMode, UseCase, compute_visible_plans, sample_plans};
use crate::ui::common::WarningNotice;
use crate::ui::icon::{Icon, icons, use_case_icon};
use crate::ui::reveal::Reveal;
use crate::ui::use_site_config;

const SLIDER_CLASS: &str = "flex-1 h-2 rounded-full bg-slate-200 dark:bg-slate-700 appearance-none cursor-pointer accent-brand-500";

/// Parse a slider value, ignoring anything that is not a number
fn slider_value(ev: &leptos::ev::Event) -> Option<u32> {
    event_target_value(ev).parse().ok()
}

#[component]
pub fn ComparisonTable() -> impl IntoView {
    let plans = StoredValue::new(sample_plans());
    let filters = RwSignal::new(FilterState::new());
    // Only one plan is expanded at a time
    let expanded = RwSignal::new(None::<&'static str>);

    let visible = Memo::new(move |_| {
        filters.with(|state| plans.with_value(|records| compute_visible_plans(records, state)))
    });
    let total = plans.with_value(Vec::len);

    let chips = UseCase::ALL
        .into_iter()
        .map(|use_case| {
            let active = move || filters.with(|f| f.is_selected(use_case));
            view! {
                <button
                    type="button"
                    class="flex items-center gap-2 px-4 py-2 rounded-xl font-medium text-sm transition-colors"
                    class=("bg-brand-500", active)
                    class=("text-white", active)
                    class=("bg-slate-100", move || !active())
                    class=("dark:bg-slate-700", move || !active())
                    class=("text-slate-600", move || !active())
                    class=("dark:text-slate-300", move || !active())
                    aria-pressed=move || active().to_string()
                    on:click=move |_| filters.update(|f| f.toggle_use_case(use_case))
                >
                    <Icon name=use_case_icon(use_case) class="w-4 h-4"/>
                    {use_case.label()}
                </button>
            }
        })
        .collect_view();

    let sort_options = SortMode::ALL
        .into_iter()
        .map(|mode| {
            view! {
                <option value=mode.as_str() selected=move || filters.with(|f| f.sort == mode)>
                    {mode.label()}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-6">
            <Reveal>
                <div class="p-6 bg-white dark:bg-slate-800 rounded-2xl border border-slate-200 dark:border-slate-700">
                    <div class="mb-6">
                        <h3 class="text-sm font-semibold text-slate-500 dark:text-slate-400 mb-3">
                            "What do you need it for?"
                        </h3>
                        <div class="flex flex-wrap gap-2">{chips}</div>
                    </div>

                    <div class="mb-6">
                        <h3 class="text-sm font-semibold text-slate-500 dark:text-slate-400 mb-3">
                            "Speed range (Mbps)"
                        </h3>
                        <div class="flex items-center gap-4">
                            <span class="text-sm font-medium text-slate-600 dark:text-slate-400 w-20">
                                {move || format!("{} Mbps", filters.with(|f| f.speed_low))}
                            </span>
                            <input
                                type="range"
                                min=SPEED_LOW_MIN.to_string()
                                max=SPEED_LOW_MAX.to_string()
                                class=SLIDER_CLASS
                                aria-label="Minimum speed"
                                prop:value=move || filters.with(|f| f.speed_low).to_string()
                                on:input=move |ev| {
                                    if let Some(v) = slider_value(&ev) {
                                        filters.update(|f| f.set_speed_low(v));
                                    }
                                }
                            />
                            <span class="text-sm font-medium text-slate-600 dark:text-slate-400 w-8">"to"</span>
                            <input
                                type="range"
                                min=SPEED_HIGH_MIN.to_string()
                                max=SPEED_HIGH_MAX.to_string()
                                class=SLIDER_CLASS
                                aria-label="Maximum speed"
                                prop:value=move || filters.with(|f| f.speed_high).to_string()
                                on:input=move |ev| {
                                    if let Some(v) = slider_value(&ev) {
                                        filters.update(|f| f.set_speed_high(v));
                                    }
                                }
                            />
                            <span class="text-sm font-medium text-slate-600 dark:text-slate-400 w-24">
                                {move || format!("{} Mbps", filters.with(|f| f.speed_high))}
                            </span>
                        </div>
                    </div>

                    <div class="flex items-center justify-between">
                        <span class="text-sm text-slate-500 dark:text-slate-400">
                            {move || showing_summary(visible.with(Vec::len), total)}
                        </span>
                        <select
                            class="px-4 py-2 rounded-xl bg-slate-100 dark:bg-slate-700 text-slate-700 dark:text-slate-300 text-sm font-medium border-0 focus:ring-2 focus:ring-brand-500"
                            aria-label="Sort plans"
                            on:change=move |ev| {
                                if let Some(mode) = SortMode::parse(&event_target_value(&ev)) {
                                    filters.update(|f| f.set_sort(mode));
                                }
                            }
                        >
                            {sort_options}
                        </select>
                    </div>
                </div>
            </Reveal>

            <Reveal delay_ms=100>
                <WarningNotice
                    lead="Note:"
                    message="These are sample offers for illustration purposes. Actual pricing, speeds, and availability vary by location. Call to confirm current offers."
                />
            </Reveal>

            <div class="grid gap-4">
                <For
                    each=move || visible.get()
                    key=|plan| plan.id
                    children=move |plan| view! { <PlanCard plan=plan expanded=expanded/> }
                />
            </div>

            <Show when=move || visible.with(Vec::is_empty)>
                <div class="text-center py-12">
                    <p class="text-slate-500 dark:text-slate-400">
                        "No plans match your filters. Try adjusting your criteria."
                    </p>
                </div>
            </Show>
        </div>
    }
}

/// One row of the table with its expandable detail panel
#[component]
fn PlanCard(plan: PlanRecord, expanded: RwSignal<Option<&'static str>>) -> impl IntoView {
    let site = use_site_config();
    let id = plan.id;
    let is_open = move || expanded.get() == Some(id);

    let toggle = move |_| {
        expanded.update(|current| {
            *current = if *current == Some(id) { None } else { Some(id) };
        });
    };

    let phone = site.phone;
    let phone_link = site.phone_link;
    let features = plan.features;
    let best_for = plan.best_for;

    view! {
        <div class="bg-white dark:bg-slate-800 rounded-2xl border border-slate-200 dark:border-slate-700 overflow-hidden">
            <div class="p-6">
                <div class="flex flex-col lg:flex-row lg:items-center gap-4">
                    <div class="flex-1">
                        <div class="flex items-center gap-3 mb-2">
                            <div
                                class="w-3 h-3 rounded-full"
                                style=format!("background-color: {}", plan.provider_color)
                            ></div>
                            <span class="text-sm font-medium text-slate-500 dark:text-slate-400">
                                {plan.provider}
                            </span>
                        </div>
                        <h3 class="font-display font-bold text-xl text-slate-900 dark:text-white">
                            {plan.name}
                        </h3>
                    </div>

                    <div class="flex items-center gap-2 lg:w-40">
                        <Icon name=icons::ZAP class="w-5 h-5"/>
                        <div>
                            <p class="font-bold text-slate-900 dark:text-white">{plan.speed}</p>
                            <p class="text-xs text-slate-500">"download"</p>
                        </div>
                    </div>

                    <div class="lg:w-40">
                        <p class="font-display font-bold text-2xl text-slate-900 dark:text-white">
                            {plan.price}
                        </p>
                        <p class="text-xs text-slate-500">{plan.price_note}</p>
                    </div>

                    <div class="flex items-center gap-3">
                        <button
                            type="button"
                            class="p-2 rounded-xl bg-slate-100 dark:bg-slate-700 text-slate-600 dark:text-slate-400 hover:bg-slate-200 dark:hover:bg-slate-600 transition-colors"
                            aria-label=format!("Show details for {}", plan.name)
                            aria-expanded=move || is_open().to_string()
                            on:click=toggle
                        >
                            <span class="block transition-transform duration-200" class=("rotate-180", is_open)>
                                <Icon name=icons::CHEVRON_DOWN class="w-5 h-5"/>
                            </span>
                        </button>
                        <a
                            href=phone_link
                            class="flex items-center gap-2 px-5 py-2.5 rounded-xl bg-gradient-to-r from-brand-600 to-brand-500 font-semibold text-white"
                        >
                            <Icon name=icons::PHONE class="w-4 h-4"/>
                            <span>"Call Now"</span>
                        </a>
                    </div>
                </div>
            </div>

            <Show when=is_open>
                <div class="px-6 pb-6 pt-2 border-t border-slate-100 dark:border-slate-700">
                    <div class="grid md:grid-cols-2 gap-6">
                        <div>
                            <h4 class="font-semibold text-slate-900 dark:text-white mb-3">"Features"</h4>
                            <ul class="space-y-2">
                                {features
                                    .iter()
                                    .map(|feature| {
                                        view! {
                                            <li class="flex items-start gap-2">
                                                <Icon name=icons::CHECK class="w-5 h-5 mt-0.5 flex-shrink-0"/>
                                                <span class="text-slate-600 dark:text-slate-400">{*feature}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                        <div>
                            <h4 class="font-semibold text-slate-900 dark:text-white mb-3">"Best For"</h4>
                            <div class="flex flex-wrap gap-2">
                                {best_for
                                    .iter()
                                    .map(|use_case| {
                                        view! {
                                            <span class="px-3 py-1.5 text-sm font-medium rounded-lg bg-brand-50 dark:bg-brand-900/30 text-brand-600 dark:text-brand-400">
                                                {use_case.short_label()}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                    <div class="mt-6 p-4 rounded-xl bg-slate-50 dark:bg-slate-800/50">
                        <p class="text-sm text-slate-600 dark:text-slate-400">
                            "Call "
                            <a href=phone_link class="text-brand-500 font-semibold hover:underline">
                                {phone}
                            </a>
                            " to confirm this plan is available at your address and get the latest pricing."
                        </p>
                    </div>
                </div>
            </Show>
        </div>
    }
}
