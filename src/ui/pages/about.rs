use leptos::prelude::*;

use crate::core::catalog::{ABOUT_TEAM, ABOUT_VALUES};
use crate::ui::icon::icons;
use crate::ui::pages::sections::{CallToAction, InfoCardGrid, PageHero, SectionHeading};
use crate::ui::reveal::Reveal;
use crate::ui::seo::PageMeta;
use crate::ui::use_site_config;

#[component]
pub fn AboutPage() -> impl IntoView {
    let site = use_site_config();
    let site_name = site.name;

    view! {
        <PageMeta
            title="About Us"
            description="Learn about wandb.online - an independent internet and TV comparison service helping you find the right provider."
            path="/about"
        />

        <PageHero
            eyebrow="About Us"
            eyebrow_icon=icons::INFO
            title=format!("About {}", site_name)
            subtitle="We are an independent comparison service dedicated to helping you explore internet and TV options in your area."
        />

        <section class="py-24">
            <Reveal class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="font-display text-3xl font-bold text-slate-900 dark:text-white mb-6 text-center">
                    "Our Mission"
                </h2>
                <div class="space-y-4 text-lg text-slate-600 dark:text-slate-400">
                    <p>
                        {format!(
                            "Choosing an internet or TV provider can be overwhelming. With so many options, varying prices, and availability that changes by address, it is difficult to know where to start. {} exists to simplify this process.",
                            site_name,
                        )}
                    </p>
                    <p>
                        "We provide information about major providers, example pricing, and plan features to help you understand what might be available. When you are ready to learn more or sign up, our team is available by phone to assist you."
                    </p>
                </div>
            </Reveal>
        </section>

        <section class="py-24 bg-slate-50 dark:bg-slate-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title="Our Values"/>
                <InfoCardGrid cards=ABOUT_VALUES/>
            </div>
        </section>

        <section class="py-24">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title="Our Team"/>
                <InfoCardGrid cards=ABOUT_TEAM columns="md:grid-cols-3"/>

                <Reveal class="mt-16">
                    <div class="p-6 rounded-2xl bg-slate-50 dark:bg-slate-800/50 border border-slate-200 dark:border-slate-700">
                        <h3 class="font-semibold text-slate-900 dark:text-white mb-2">"Important Information"</h3>
                        <p class="text-sm text-slate-600 dark:text-slate-400">
                            {format!(
                                "{} is an independent comparison service. We are not affiliated with, endorsed by, or an authorized agent of any internet or TV provider. Provider names and trademarks belong to their respective owners. We may receive compensation when you sign up for service through our referrals. All pricing shown is for example purposes only; actual pricing and availability vary by location.",
                                site_name,
                            )}
                        </p>
                    </div>
                </Reveal>
            </div>
        </section>

        <CallToAction
            title="Ready to Explore Your Options?"
            text="Call our team to discuss what services might be available at your address."
        />
    }
}
