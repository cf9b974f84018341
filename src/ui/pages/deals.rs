use leptos::prelude::*;

use crate::core::catalog::{Deal, SAMPLE_DEALS};
use crate::ui::common::WarningBanner;
use crate::ui::icon::{Icon, icons};
use crate::ui::pages::sections::{CallToAction, PageHero};
use crate::ui::reveal::{Reveal, stagger};
use crate::ui::seo::PageMeta;
use crate::ui::use_site_config;
use crate::ui::zip_search::{ZipSearchModule, ZipVariant};

/// Sample deals page
#[component]
pub fn DealsPage() -> impl IntoView {
    let deals = SAMPLE_DEALS
        .iter()
        .enumerate()
        .map(|(i, deal)| {
            view! {
                <Reveal delay_ms=stagger(i)>
                    <DealCard deal=*deal/>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <PageMeta
            title="Current Deals & Offers"
            description="Explore sample internet and TV deals from major providers. Call to confirm current promotions available at your address."
            path="/deals"
        />

        <PageHero
            eyebrow="Sample Offers"
            eyebrow_icon=icons::TAG
            title="Current Deals & Offers"
            subtitle="Browse sample deals from major providers. These are examples of typical offers. Call to confirm what is currently available at your address."
        >
            <ZipSearchModule variant=ZipVariant::Compact/>
        </PageHero>

        <WarningBanner
            title="Deals shown are examples only"
            detail="Actual offers depend on your location, provider availability, and current promotions. Prices and terms change frequently. Call to verify."
        />

        <section class="py-24">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid md:grid-cols-2 gap-8">{deals}</div>
            </div>
        </section>

        <section class="py-24 bg-slate-50 dark:bg-slate-900">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal>
                    <h2 class="font-display text-3xl font-bold text-slate-900 dark:text-white mb-6 text-center">
                        "Why Deals Change Frequently"
                    </h2>
                    <div class="space-y-4 text-lg text-slate-600 dark:text-slate-400">
                        <p>
                            "Internet and TV providers regularly update their promotional offers based on market conditions, seasonal campaigns, and regional availability. This means the deals you see online, including on this page, may not reflect what is currently available."
                        </p>
                        <p>
                            "Additionally, pricing often varies significantly by address. Two homes in the same ZIP code might have different provider options and pricing tiers. That is why we always recommend calling to confirm exact availability and current offers."
                        </p>
                    </div>
                </Reveal>
            </div>
        </section>

        <CallToAction
            title="Want to Know What's Available at Your Address?"
            text="Call now to speak with a specialist who can check current deals for your specific location."
        />
    }
}

#[component]
fn DealCard(deal: Deal) -> impl IntoView {
    let site = use_site_config();

    let features = deal
        .features
        .iter()
        .map(|feature| {
            view! {
                <li class="flex items-center gap-2 text-slate-600 dark:text-slate-400">
                    <Icon name=icons::CHECK class="w-4 h-4"/>
                    <span>{*feature}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="h-full flex flex-col bg-white dark:bg-slate-800 rounded-2xl border border-slate-200 dark:border-slate-700 overflow-hidden">
            <div
                class="px-6 py-4 flex items-center justify-between"
                style=format!("background-color: {}15", deal.color)
            >
                <span class="font-display font-bold text-lg" style=format!("color: {}", deal.color)>
                    {deal.provider}
                </span>
                <span class="px-3 py-1 text-xs font-semibold rounded-full bg-white dark:bg-slate-700 text-slate-700 dark:text-slate-300 shadow-sm">
                    {deal.tag}
                </span>
            </div>
            <div class="p-6 flex-1 flex flex-col">
                <h3 class="font-display font-bold text-xl text-slate-900 dark:text-white mb-2">{deal.title}</h3>
                <p class="text-slate-600 dark:text-slate-400 mb-4">{deal.description}</p>
                <div class="mb-4">
                    <span class="font-display font-bold text-2xl text-slate-900 dark:text-white">{deal.price}</span>
                    <span class="block text-xs text-slate-500">"*example pricing"</span>
                </div>
                <ul class="space-y-2 mb-6 flex-1">{features}</ul>
                <a
                    href=site.phone_link
                    class="flex items-center justify-center gap-2 w-full py-3 rounded-xl bg-gradient-to-r from-brand-600 to-brand-500 font-semibold text-white"
                >
                    <Icon name=icons::PHONE class="w-4 h-4"/>
                    "Call to Confirm Offer"
                </a>
            </div>
        </div>
    }
}
