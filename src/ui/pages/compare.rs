use leptos::prelude::*;

use crate::core::catalog::{COMPARE_WE_DO, COMPARE_WE_DONT_DO};
use crate::ui::compare_table::ComparisonTable;
use crate::ui::icon::{Icon, icons};
use crate::ui::pages::sections::CheckList;
use crate::ui::reveal::Reveal;
use crate::ui::seo::PageMeta;
use crate::ui::zip_search::{ZipSearchModule, ZipVariant};

/// Plan comparison page
#[component]
pub fn ComparePage() -> impl IntoView {
    view! {
        <PageMeta
            title="Compare Internet Plans"
            description="Compare internet plans from major providers. Filter by speed, price, and features to find the right option for your needs."
            path="/compare"
        />

        <section class="relative pt-32 pb-16 bg-gradient-to-b from-brand-50 to-white dark:from-slate-900 dark:to-slate-950">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center max-w-3xl mx-auto mb-12">
                    <Reveal>
                        <h1 class="font-display text-4xl sm:text-5xl font-bold text-slate-900 dark:text-white mb-6">
                            "Compare Internet Plans"
                        </h1>
                    </Reveal>
                    <Reveal delay_ms=100>
                        <p class="text-xl text-slate-600 dark:text-slate-400">
                            "Explore sample plans from major providers. Filter by your needs and call to confirm actual pricing and availability at your address."
                        </p>
                    </Reveal>
                </div>
                <Reveal delay_ms=200>
                    <ZipSearchModule variant=ZipVariant::Compact/>
                </Reveal>
            </div>
        </section>

        <section class="py-8">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal>
                    <div class="flex gap-4 p-6 rounded-2xl bg-blue-50 dark:bg-blue-900/20 border border-blue-200 dark:border-blue-800">
                        <Icon name=icons::INFO class="w-6 h-6 flex-shrink-0"/>
                        <div>
                            <h3 class="font-semibold text-slate-900 dark:text-white mb-2">"Why Pricing Changes"</h3>
                            <p class="text-slate-600 dark:text-slate-400">
                                "The prices shown below are examples based on typical offers. Actual pricing depends on your specific address, current promotions, and the provider's terms. Prices can change without notice. Additionally, introductory rates often differ from regular rates. Always call to confirm the current offer available to you."
                            </p>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>

        <section class="py-8 pb-24">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <ComparisonTable/>
            </div>
        </section>

        <section class="py-24 bg-slate-50 dark:bg-slate-900">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal class="text-center mb-12">
                    <h2 class="font-display text-3xl font-bold text-slate-900 dark:text-white">
                        "What We Do & What We Don't Do"
                    </h2>
                </Reveal>
                <div class="grid md:grid-cols-2 gap-8">
                    <Reveal delay_ms=100>
                        <div class="p-8 h-full rounded-2xl bg-white dark:bg-slate-800 border border-green-200 dark:border-green-900">
                            <h3 class="font-display font-semibold text-xl text-green-700 dark:text-green-400 mb-6">
                                "What We Do"
                            </h3>
                            <CheckList items=COMPARE_WE_DO/>
                        </div>
                    </Reveal>
                    <Reveal delay_ms=200>
                        <div class="p-8 h-full rounded-2xl bg-white dark:bg-slate-800 border border-red-200 dark:border-red-900">
                            <h3 class="font-display font-semibold text-xl text-red-700 dark:text-red-400 mb-6">
                                "What We Don't Do"
                            </h3>
                            <CheckList items=COMPARE_WE_DONT_DO icon=icons::X_CIRCLE/>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
