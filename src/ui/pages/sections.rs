//! Section building blocks shared by the marketing pages

use leptos::prelude::*;

use crate::core::catalog::{InfoCard, Step};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::{Reveal, stagger};
use crate::ui::use_site_config;

/// Gradient hero with a small pill label above the heading
#[component]
pub fn PageHero(
    /// Pill label, e.g. `Sample Offers`
    eyebrow: &'static str,
    eyebrow_icon: &'static str,
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    /// Rendered below the subtitle (search box, buttons)
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <section class="relative pt-32 pb-16 bg-gradient-to-b from-brand-50 to-white dark:from-slate-900 dark:to-slate-950 overflow-hidden">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative">
                <Reveal class="text-center max-w-3xl mx-auto">
                    <span class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-brand-100 dark:bg-brand-900/50 text-brand-700 dark:text-brand-300 text-sm font-medium mb-6">
                        <Icon name=eyebrow_icon class="w-4 h-4"/>
                        {eyebrow}
                    </span>
                    <h1 class="font-display text-4xl sm:text-5xl font-bold text-slate-900 dark:text-white mb-6">
                        {title}
                    </h1>
                    <p class="text-xl text-slate-600 dark:text-slate-400 mb-8">{subtitle}</p>
                </Reveal>
                {children.map(|c| view! { <Reveal delay_ms=200>{c()}</Reveal> })}
            </div>
        </section>
    }
}

/// Centered section heading with optional subtitle
#[component]
pub fn SectionHeading(
    #[prop(into)] title: String,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <Reveal class="text-center mb-12">
            <h2 class="font-display text-3xl sm:text-4xl font-bold text-slate-900 dark:text-white mb-4">
                {title}
            </h2>
            {subtitle
                .map(|s| {
                    view! { <p class="text-lg text-slate-600 dark:text-slate-400 max-w-2xl mx-auto">{s}</p> }
                })}
        </Reveal>
    }
}

/// Grid of icon cards with staggered reveal
#[component]
pub fn InfoCardGrid(
    cards: &'static [InfoCard],
    /// Tailwind grid column classes
    #[prop(default = "md:grid-cols-2 lg:grid-cols-4")]
    columns: &'static str,
) -> impl IntoView {
    let items = cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            view! {
                <Reveal delay_ms=stagger(i)>
                    <div class="h-full p-6 bg-white dark:bg-slate-800 rounded-2xl border border-slate-200 dark:border-slate-700">
                        <div class="w-12 h-12 rounded-xl bg-brand-100 dark:bg-brand-900/50 flex items-center justify-center mb-4">
                            <Icon name=card.icon class="w-6 h-6"/>
                        </div>
                        <h3 class="font-display font-semibold text-lg text-slate-900 dark:text-white mb-2">
                            {card.title}
                        </h3>
                        <p class="text-slate-600 dark:text-slate-400">{card.description}</p>
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    view! { <div class=format!("grid gap-6 {}", columns)>{items}</div> }
}

/// Numbered process steps
#[component]
pub fn StepList(steps: &'static [Step]) -> impl IntoView {
    let items = steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            view! {
                <Reveal delay_ms=stagger(i) class="text-center">
                    <div class="text-5xl font-display font-bold text-brand-200 dark:text-brand-900 mb-4">
                        {step.number}
                    </div>
                    <h3 class="font-display font-semibold text-xl text-slate-900 dark:text-white mb-2">
                        {step.title}
                    </h3>
                    <p class="text-slate-600 dark:text-slate-400">{step.description}</p>
                </Reveal>
            }
        })
        .collect_view();

    view! { <div class="grid md:grid-cols-3 gap-8">{items}</div> }
}

/// Bulleted list with check marks
#[component]
pub fn CheckList(
    items: &'static [&'static str],
    #[prop(default = icons::CHECK)] icon: &'static str,
) -> impl IntoView {
    view! {
        <ul class="space-y-3">
            {items
                .iter()
                .map(|item| {
                    view! {
                        <li class="flex items-start gap-3">
                            <Icon name=icon class="w-5 h-5 mt-0.5 flex-shrink-0"/>
                            <span class="text-slate-600 dark:text-slate-400">{*item}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

/// Dark closing banner with a large call button
#[component]
pub fn CallToAction(
    #[prop(into)] title: String,
    #[prop(into)] text: String,
    /// Button label; defaults to `Call {phone}`
    #[prop(optional, into)]
    button_label: Option<String>,
    /// Extra lines below the business hours
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let site = use_site_config();
    let label = button_label.unwrap_or_else(|| format!("Call {}", site.phone));

    view! {
        <section class="py-20 bg-gradient-to-br from-slate-900 to-brand-950">
            <Reveal class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <h2 class="font-display text-3xl sm:text-4xl font-bold text-white mb-6">{title}</h2>
                <p class="text-xl text-slate-300 mb-8">{text}</p>
                <a
                    href=site.phone_link
                    class="inline-flex items-center gap-3 px-8 py-4 bg-gradient-to-r from-brand-500 to-cyan-500 rounded-xl font-semibold text-white text-lg shadow-xl shadow-brand-500/30"
                >
                    <Icon name=icons::PHONE class="w-6 h-6"/>
                    {label}
                </a>
                <p class="text-slate-400 mt-4">{site.hours}</p>
                {children.map(|c| c())}
            </Reveal>
        </section>
    }
}
