use leptos::prelude::*;

use crate::core::catalog::{WHAT_WE_DO, WHAT_WE_DONT_DO, WHY_STATS, WHY_STEPS, WHY_VALUES};
use crate::ui::icon::icons;
use crate::ui::pages::sections::{CallToAction, CheckList, InfoCardGrid, SectionHeading, StepList};
use crate::ui::reveal::{Reveal, stagger};
use crate::ui::seo::PageMeta;
use crate::ui::use_site_config;

/// "Why wandb.online" page
#[component]
pub fn WhyPage() -> impl IntoView {
    let site = use_site_config();
    let site_name = site.name;
    let site_phone = site.phone;

    let stats = WHY_STATS
        .iter()
        .enumerate()
        .map(|(i, stat)| {
            view! {
                <Reveal delay_ms={300 + stagger(i)} class="text-center">
                    <div class="font-display font-bold text-4xl text-brand-600 dark:text-brand-400">{stat.value}</div>
                    <div class="text-sm text-slate-500 dark:text-slate-400 mt-1">{stat.label}</div>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <PageMeta
            title="Why Choose Us"
            description="Why people choose wandb.online: an independent, transparent way to compare internet and TV options and talk to a real person."
            path="/why-wandb"
        />

        <section class="relative pt-32 pb-16 bg-gradient-to-b from-brand-50 to-white dark:from-slate-900 dark:to-slate-950">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <Reveal>
                    <span class="inline-flex items-center px-4 py-2 rounded-full bg-brand-100 dark:bg-brand-900/50 text-brand-700 dark:text-brand-300 text-sm font-medium mb-6">
                        "Our Promise"
                    </span>
                    <h1 class="font-display text-4xl sm:text-5xl font-bold text-slate-900 dark:text-white mb-6">
                        "Why People Choose "
                        <span class="text-brand-600 dark:text-brand-400">{site_name}</span>
                    </h1>
                    <p class="text-xl text-slate-600 dark:text-slate-400 max-w-3xl mx-auto mb-12">
                        "We built this service because finding the right internet provider shouldn't feel like navigating a maze. Here's what makes us different."
                    </p>
                </Reveal>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-8">{stats}</div>
            </div>
        </section>

        <section class="py-24">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Our Core Values"
                    subtitle="These principles guide every interaction and recommendation we make."
                />
                <InfoCardGrid cards=WHY_VALUES columns="md:grid-cols-2"/>
            </div>
        </section>

        <section class="py-24 bg-slate-50 dark:bg-slate-900">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Clear Expectations"
                    subtitle="Transparency means being upfront about our capabilities and limitations."
                />
                <div class="grid md:grid-cols-2 gap-8">
                    <Reveal>
                        <div class="p-8 h-full rounded-2xl bg-white dark:bg-slate-800 border border-green-200 dark:border-green-900">
                            <h3 class="font-display font-semibold text-xl text-green-700 dark:text-green-400 mb-6">
                                "What We Do"
                            </h3>
                            <CheckList items=WHAT_WE_DO/>
                        </div>
                    </Reveal>
                    <Reveal delay_ms=100>
                        <div class="p-8 h-full rounded-2xl bg-white dark:bg-slate-800 border border-red-200 dark:border-red-900">
                            <h3 class="font-display font-semibold text-xl text-red-700 dark:text-red-400 mb-6">
                                "What We Don't Do"
                            </h3>
                            <CheckList items=WHAT_WE_DONT_DO icon=icons::X_CIRCLE/>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>

        <section class="py-24">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title="Simple Process" subtitle="Getting connected takes just three steps."/>
                <StepList steps=WHY_STEPS/>
            </div>
        </section>

        <CallToAction
            title="Ready to Find Your Connection?"
            text="Our team is here Monday through Friday, 9AM to 6PM EST. Give us a call. No pressure, just help."
            button_label=site_phone
        />
    }
}
