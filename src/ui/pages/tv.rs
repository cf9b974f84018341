use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::catalog::{CHANNEL_CATEGORIES, TV_LINEUPS, TvLineup};
use crate::ui::icon::{Icon, icons};
use crate::ui::pages::sections::{PageHero, SectionHeading};
use crate::ui::reveal::{Reveal, stagger};
use crate::ui::seo::PageMeta;
use crate::ui::use_site_config;

/// TV packages page
#[component]
pub fn TvPage() -> impl IntoView {
    let site = use_site_config();

    let categories = CHANNEL_CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, category)| {
            view! {
                <Reveal delay_ms=stagger(i)>
                    <div class="h-full p-6 bg-white dark:bg-slate-800 rounded-2xl border border-slate-200 dark:border-slate-700">
                        <div class="w-12 h-12 rounded-xl bg-purple-100 dark:bg-purple-900/40 flex items-center justify-center mb-4">
                            <Icon name=category.icon class="w-6 h-6"/>
                        </div>
                        <h3 class="font-display font-semibold text-lg text-slate-900 dark:text-white mb-2">
                            {category.name}
                        </h3>
                        <p class="text-sm text-slate-600 dark:text-slate-400">
                            {format!("Examples: {}", category.examples)}
                        </p>
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    let lineups = TV_LINEUPS
        .iter()
        .enumerate()
        .map(|(i, lineup)| {
            view! {
                <Reveal delay_ms=stagger(i)>
                    <LineupCard lineup=*lineup/>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <PageMeta
            title="TV Options & Packages"
            description="Explore TV packages from major providers. Compare channels, features, and bundle options. Call to confirm availability."
            path="/tv"
        />

        <PageHero
            eyebrow="TV Options"
            eyebrow_icon="tv"
            title="Explore TV Packages"
            subtitle="Compare channel lineups and TV packages from major providers. These are sample options. Call to confirm current packages and pricing for your address."
        >
            <div class="text-center">
                <a
                    href=site.phone_link
                    class="inline-flex items-center gap-2 px-6 py-3 rounded-xl bg-gradient-to-r from-brand-600 to-brand-500 font-semibold text-white"
                >
                    <Icon name=icons::PHONE class="w-5 h-5"/>
                    {format!("Call {}", site.phone)}
                </a>
            </div>
        </PageHero>

        <section class="py-24">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title="Types of Channels Available"/>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">{categories}</div>
            </div>
        </section>

        <section class="py-24 bg-slate-50 dark:bg-slate-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Sample TV Packages by Provider"
                    subtitle="*Prices shown are examples. Actual pricing varies by location and current promotions."
                />
                <div class="grid lg:grid-cols-2 gap-8">{lineups}</div>
            </div>
        </section>

        <section class="py-24">
            <Reveal class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <h2 class="font-display text-3xl font-bold text-slate-900 dark:text-white mb-6">
                    "Considering Streaming Instead?"
                </h2>
                <p class="text-lg text-slate-600 dark:text-slate-400 mb-8">
                    "Many providers also offer streaming apps and on-demand content as part of their TV packages. When you call, ask about streaming options and how they work with traditional TV service."
                </p>
                <A href="/bundles" attr:class="inline-flex items-center gap-2 text-brand-600 dark:text-brand-400 font-semibold">
                    "Explore Bundle Options →"
                </A>
            </Reveal>
        </section>
    }
}

#[component]
fn LineupCard(lineup: TvLineup) -> impl IntoView {
    let site = use_site_config();

    let packages = lineup
        .packages
        .iter()
        .map(|pkg| {
            view! {
                <div class="flex items-center justify-between gap-4 p-4 rounded-xl bg-slate-50 dark:bg-slate-900/50">
                    <div>
                        <h4 class="font-semibold text-slate-900 dark:text-white">{pkg.name}</h4>
                        <p class="text-sm text-slate-500 dark:text-slate-400">{pkg.note}</p>
                    </div>
                    <div class="text-right">
                        <p class="text-sm text-slate-500">{format!("{} channels", pkg.channels)}</p>
                        <p class="font-display font-bold text-slate-900 dark:text-white">{pkg.price}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="bg-white dark:bg-slate-800 rounded-2xl border border-slate-200 dark:border-slate-700 overflow-hidden">
            <div class="px-6 py-4" style=format!("background-color: {}15", lineup.color)>
                <span class="font-display font-bold text-lg" style=format!("color: {}", lineup.color)>
                    {lineup.provider}
                </span>
            </div>
            <div class="p-6 space-y-3">{packages}</div>
            <div class="px-6 pb-6 flex items-center justify-between gap-4">
                <p class="text-sm text-slate-500 dark:text-slate-400">
                    "Call to confirm current packages and pricing"
                </p>
                <a href=site.phone_link class="inline-flex items-center gap-2 font-semibold text-brand-600 dark:text-brand-400">
                    <Icon name=icons::PHONE class="w-4 h-4"/>
                    {site.phone}
                </a>
            </div>
        </div>
    }
}
