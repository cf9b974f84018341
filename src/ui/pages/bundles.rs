use leptos::prelude::*;

use crate::core::catalog::{BUNDLE_BENEFITS, BUNDLE_TYPES, Bundle, SAMPLE_BUNDLES};
use crate::ui::icon::{Icon, icons};
use crate::ui::pages::sections::{InfoCardGrid, PageHero, SectionHeading};
use crate::ui::reveal::{Reveal, stagger};
use crate::ui::seo::PageMeta;
use crate::ui::use_site_config;

/// Internet + TV bundles page
#[component]
pub fn BundlesPage() -> impl IntoView {
    let site = use_site_config();

    let bundles = SAMPLE_BUNDLES
        .iter()
        .enumerate()
        .map(|(i, bundle)| {
            view! {
                <Reveal delay_ms=stagger(i)>
                    <BundleCard bundle=*bundle/>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <PageMeta
            title="Bundle Deals - Internet + TV"
            description="Explore internet and TV bundle options from major providers. Combine services and potentially save. Call to confirm availability."
            path="/bundles"
        />

        <PageHero
            eyebrow="Bundle Options"
            eyebrow_icon="package"
            title="Internet + TV Bundles"
            subtitle="Combining services into a bundle can sometimes offer savings and convenience. Explore sample bundles below and call to confirm what is available at your address."
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
                <SectionHeading title="Types of Bundles"/>
                <InfoCardGrid cards=BUNDLE_TYPES columns="md:grid-cols-3"/>
            </div>
        </section>

        <section class="py-24 bg-slate-50 dark:bg-slate-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="Sample Bundle Packages"
                    subtitle="These are example bundles for illustration. Actual pricing and availability vary by location."
                />
                <div class="grid md:grid-cols-2 gap-8">{bundles}</div>
            </div>
        </section>

        <section class="py-24">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title="Benefits of Bundling"/>
                <InfoCardGrid cards=BUNDLE_BENEFITS columns="md:grid-cols-2"/>
            </div>
        </section>
    }
}

#[component]
fn BundleCard(bundle: Bundle) -> impl IntoView {
    let site = use_site_config();

    let features = bundle
        .features
        .iter()
        .map(|feature| {
            view! {
                <span class="inline-flex items-center gap-1 px-3 py-1 text-sm rounded-lg bg-slate-100 dark:bg-slate-700 text-slate-600 dark:text-slate-300">
                    <Icon name=icons::CHECK class="w-3 h-3"/>
                    <span>{*feature}</span>
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="h-full flex flex-col bg-white dark:bg-slate-800 rounded-2xl border border-slate-200 dark:border-slate-700 overflow-hidden">
            <div class="px-6 py-4" style=format!("background-color: {}15", bundle.color)>
                <span class="font-display font-bold text-lg" style=format!("color: {}", bundle.color)>
                    {bundle.provider}
                </span>
            </div>
            <div class="p-6 flex-1 flex flex-col">
                <h3 class="font-display font-bold text-xl text-slate-900 dark:text-white mb-4">{bundle.name}</h3>
                <div class="grid grid-cols-2 gap-4 mb-4">
                    <div class="p-3 rounded-xl bg-slate-50 dark:bg-slate-900/50">
                        <div class="flex items-center gap-2 mb-1">
                            <Icon name=icons::WIFI class="w-4 h-4"/>
                            <span class="text-sm text-slate-500">"Internet"</span>
                        </div>
                        <p class="font-semibold text-slate-900 dark:text-white">{bundle.internet}</p>
                    </div>
                    <div class="p-3 rounded-xl bg-slate-50 dark:bg-slate-900/50">
                        <div class="flex items-center gap-2 mb-1">
                            <Icon name="tv" class="w-4 h-4"/>
                            <span class="text-sm text-slate-500">"TV"</span>
                        </div>
                        <p class="font-semibold text-slate-900 dark:text-white">{bundle.tv}</p>
                    </div>
                </div>
                <div class="mb-4">
                    <span class="font-display font-bold text-2xl text-slate-900 dark:text-white">{bundle.price}</span>
                    <span class="block text-sm text-slate-500">{bundle.savings}</span>
                </div>
                <div class="flex flex-wrap gap-2 mb-6 flex-1">{features}</div>
                <a
                    href=site.phone_link
                    class="flex items-center justify-center gap-2 w-full py-3 rounded-xl bg-gradient-to-r from-brand-600 to-brand-500 font-semibold text-white"
                >
                    <Icon name=icons::PHONE class="w-4 h-4"/>
                    "Call to Confirm Bundle"
                </a>
            </div>
        </div>
    }
}
