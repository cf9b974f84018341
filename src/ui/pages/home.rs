//! Home page: hero search, service categories, process and provider strip

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::catalog::{HOME_BENEFITS, HOME_SERVICES, HOME_STEPS};
use crate::ui::icon::{Icon, icons};
use crate::ui::pages::sections::{CallToAction, SectionHeading, StepList};
use crate::ui::reveal::{Reveal, stagger};
use crate::ui::seo::PageMeta;
use crate::ui::use_site_config;
use crate::ui::zip_search::ZipSearchModule;

#[component]
pub fn HomePage() -> impl IntoView {
    let site = use_site_config();
    let site_phone = site.phone;
    let site_phone_link = site.phone_link;

    let services = HOME_SERVICES
        .iter()
        .enumerate()
        .map(|(i, service)| {
            view! {
                <Reveal delay_ms=stagger(i)>
                    <A
                        href=service.href
                        attr:class="group block h-full p-8 bg-white dark:bg-slate-800 rounded-2xl border border-slate-200 dark:border-slate-700 hover:border-brand-300 dark:hover:border-brand-700 transition-colors"
                    >
                        <div class="w-14 h-14 rounded-2xl bg-gradient-to-br from-brand-500 to-cyan-500 flex items-center justify-center mb-6">
                            <Icon name=service.icon class="w-7 h-7"/>
                        </div>
                        <h3 class="font-display font-bold text-xl text-slate-900 dark:text-white mb-3">
                            {service.title}
                        </h3>
                        <p class="text-slate-600 dark:text-slate-400 mb-4">{service.description}</p>
                        <span class="inline-flex items-center gap-2 text-brand-600 dark:text-brand-400 font-medium">
                            "Explore →"
                        </span>
                    </A>
                </Reveal>
            }
        })
        .collect_view();

    let benefits = HOME_BENEFITS
        .iter()
        .enumerate()
        .map(|(i, benefit)| {
            view! {
                <Reveal delay_ms={200 + stagger(i)}>
                    <div class="flex gap-5 p-6 rounded-2xl bg-white dark:bg-slate-800 border border-slate-200 dark:border-slate-700">
                        <div class="flex-shrink-0 w-12 h-12 rounded-xl bg-brand-100 dark:bg-brand-900/40 flex items-center justify-center">
                            <Icon name=benefit.icon class="w-6 h-6"/>
                        </div>
                        <div>
                            <h3 class="font-display font-bold text-lg text-slate-900 dark:text-white mb-1">
                                {benefit.title}
                            </h3>
                            <p class="text-slate-600 dark:text-slate-400">{benefit.description}</p>
                        </div>
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    let providers = site
        .providers
        .iter()
        .copied()
        .enumerate()
        .map(|(i, provider)| {
            view! {
                <Reveal delay_ms=stagger(i)>
                    <A
                        href=provider.href()
                        attr:class="text-xl font-display font-bold transition-colors"
                        attr:style=format!("color: {}", provider.color)
                    >
                        {provider.name}
                    </A>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <PageMeta
            description="Compare internet and TV options from major providers. Find plans that fit your needs and confirm availability at your address. Call to get connected today."
            path="/"
        />

        <section class="relative min-h-[90vh] flex items-center pt-20 overflow-hidden">
            <div class="relative z-10 max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-20">
                <div class="max-w-4xl mx-auto text-center">
                    <Reveal>
                        <span class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-brand-100 dark:bg-brand-900/40 text-brand-600 dark:text-brand-400 text-sm font-medium mb-6">
                            <span class="w-2 h-2 rounded-full bg-brand-500 animate-pulse"></span>
                            "Independent Comparison Service"
                        </span>
                    </Reveal>
                    <Reveal delay_ms=100>
                        <h1 class="font-display font-bold text-5xl sm:text-6xl lg:text-7xl text-slate-900 dark:text-white mb-6 leading-tight">
                            "Find the Right"
                            <span class="block bg-gradient-to-r from-brand-600 to-cyan-500 bg-clip-text text-transparent">
                                "Internet & TV Plans"
                            </span>
                        </h1>
                    </Reveal>
                    <Reveal delay_ms=200>
                        <p class="text-xl text-slate-600 dark:text-slate-400 mb-10 max-w-2xl mx-auto">
                            "Compare options from major providers, understand typical plan differences, and connect by phone to confirm availability for your address."
                        </p>
                    </Reveal>
                    <Reveal delay_ms=300>
                        <ZipSearchModule/>
                    </Reveal>
                    <Reveal delay_ms=400>
                        <div class="mt-10 flex flex-col sm:flex-row items-center justify-center gap-4">
                            <span class="text-slate-500 dark:text-slate-400">"Or call directly:"</span>
                            <a href=site_phone_link class="inline-flex items-center gap-2 text-xl font-semibold text-brand-600 dark:text-brand-400">
                                <Icon name=icons::PHONE class="w-5 h-5"/>
                                {site_phone}
                            </a>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>

        <section class="py-24 bg-slate-50 dark:bg-slate-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="What Are You Looking For?"
                    subtitle="Explore different service categories to find options that match your needs."
                />
                <div class="grid md:grid-cols-3 gap-8">{services}</div>
            </div>
        </section>

        <section class="py-24">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="How It Works"
                    subtitle="Getting started is simple. Here is our straightforward process."
                />
                <StepList steps=HOME_STEPS/>
            </div>
        </section>

        <section class="py-24 bg-slate-50 dark:bg-slate-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <div>
                        <Reveal>
                            <h2 class="font-display font-bold text-3xl sm:text-4xl text-slate-900 dark:text-white mb-6">
                                "Why Use Our Service?"
                            </h2>
                        </Reveal>
                        <Reveal delay_ms=100>
                            <p class="text-lg text-slate-600 dark:text-slate-400 mb-8">
                                "We are an independent comparison service, not an internet or TV provider. Our goal is to help you explore your options and connect you with specialists who can confirm what is available at your specific address."
                            </p>
                        </Reveal>
                        <Reveal delay_ms=200>
                            <a
                                href=site_phone_link
                                class="inline-flex items-center gap-2 px-6 py-3 rounded-xl bg-gradient-to-r from-brand-600 to-brand-500 font-semibold text-white"
                            >
                                <Icon name=icons::PHONE class="w-5 h-5"/>
                                {format!("Call {}", site_phone)}
                            </a>
                        </Reveal>
                    </div>
                    <div class="space-y-6">{benefits}</div>
                </div>
            </div>
        </section>

        <section class="py-16 border-y border-slate-200 dark:border-slate-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal>
                    <p class="text-center text-sm text-slate-500 dark:text-slate-400 mb-8">
                        "Compare options from major providers"
                    </p>
                </Reveal>
                <div class="flex flex-wrap items-center justify-center gap-8 md:gap-16">{providers}</div>
                <Reveal delay_ms=300>
                    <p class="text-center text-xs text-slate-400 dark:text-slate-500 mt-8">
                        "Provider names are trademarks of their respective owners. We are not affiliated with these providers."
                    </p>
                </Reveal>
            </div>
        </section>

        <CallToAction
            title="Ready to Find Your Perfect Plan?"
            text="Call now to speak with a specialist who can confirm availability and current offers for your address."
            button_label=site_phone
        />
    }
}
