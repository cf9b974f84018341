use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::catalog::CONTACT_EXPECTATIONS;
use crate::ui::icon::{Icon, icons};
use crate::ui::pages::sections::{CallToAction, InfoCardGrid, SectionHeading};
use crate::ui::reveal::{Reveal, stagger};
use crate::ui::seo::PageMeta;
use crate::ui::use_site_config;

struct ContactMethod {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    value: &'static str,
    href: &'static str,
    primary: bool,
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let site = use_site_config();
    let site_phone = site.phone;
    let site_hours = site.hours;
    let site_name = site.name;

    let methods = [
        ContactMethod {
            icon: icons::PHONE,
            title: "Call Us",
            description: "Speak directly with our team for immediate assistance",
            value: site_phone,
            href: site.phone_link,
            primary: true,
        },
        ContactMethod {
            icon: icons::MAIL,
            title: "Email Us",
            description: "Send us a message and we'll respond within 24 hours",
            value: site.email,
            href: site.email_link,
            primary: false,
        },
    ];

    let method_cards = methods
        .into_iter()
        .enumerate()
        .map(|(i, method)| {
            let (card, badge, title, body, value) = if method.primary {
                (
                    "bg-gradient-to-br from-brand-600 to-blue-600 border-transparent",
                    "bg-white/20",
                    "text-white",
                    "text-white/80",
                    "text-white",
                )
            } else {
                (
                    "bg-white dark:bg-slate-800 border-slate-200 dark:border-slate-700 hover:border-brand-300",
                    "bg-brand-100 dark:bg-brand-900/30",
                    "text-slate-900 dark:text-white",
                    "text-slate-600 dark:text-slate-300",
                    "text-brand-600 dark:text-brand-400",
                )
            };

            view! {
                <Reveal delay_ms=stagger(i)>
                    <a href=method.href class=format!("block h-full p-8 rounded-2xl border-2 transition-colors {}", card)>
                        <div class=format!("w-14 h-14 rounded-xl flex items-center justify-center mb-6 {}", badge)>
                            <Icon name=method.icon class="w-7 h-7"/>
                        </div>
                        <h2 class=format!("font-display text-2xl font-bold mb-2 {}", title)>{method.title}</h2>
                        <p class=format!("mb-4 {}", body)>{method.description}</p>
                        <p class=format!("text-xl font-semibold {}", value)>{method.value}</p>
                    </a>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <PageMeta
            title="Contact Us"
            description="Contact wandb.online by phone or email. Our team can help you explore internet and TV options available at your address."
            path="/contact"
        />

        <section class="relative pt-32 pb-16 bg-gradient-to-b from-brand-50 to-white dark:from-slate-900 dark:to-slate-950">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal class="text-center mb-12">
                    <h1 class="font-display text-4xl sm:text-5xl font-bold text-slate-900 dark:text-white mb-6">
                        "Get in Touch"
                    </h1>
                    <p class="text-xl text-slate-600 dark:text-slate-400 max-w-2xl mx-auto">
                        "Have questions about internet or TV options? Our team is ready to help you explore what's available in your area."
                    </p>
                </Reveal>

                <div class="grid md:grid-cols-2 gap-6">{method_cards}</div>

                <Reveal delay_ms=200 class="mt-8">
                    <div class="flex items-start gap-4 p-6 rounded-2xl bg-white dark:bg-slate-800 border border-slate-200 dark:border-slate-700">
                        <Icon name=icons::CLOCK class="w-6 h-6 flex-shrink-0"/>
                        <div>
                            <h3 class="font-semibold text-slate-900 dark:text-white mb-1">"Business Hours"</h3>
                            <p class="text-slate-600 dark:text-slate-400">{site_hours}</p>
                            <p class="text-sm text-slate-500 dark:text-slate-500 mt-1">
                                "We try to respond to all emails within 24 business hours."
                            </p>
                        </div>
                    </div>
                </Reveal>
            </div>
        </section>

        <section class="py-24">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="What to Expect When You Call"
                    subtitle="We believe in making every interaction helpful and pressure-free."
                />
                <InfoCardGrid cards=CONTACT_EXPECTATIONS/>
            </div>
        </section>

        <section class="py-24 bg-slate-50 dark:bg-slate-900">
            <Reveal class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <h2 class="font-display text-3xl font-bold text-slate-900 dark:text-white mb-4">
                    "Looking for Quick Answers?"
                </h2>
                <p class="text-lg text-slate-600 dark:text-slate-400 mb-8">
                    {format!(
                        "Check our FAQ page for answers to common questions about internet service, pricing, and how {} works.",
                        site_name,
                    )}
                </p>
                <A
                    href="/faq"
                    attr:class="inline-flex items-center gap-2 px-6 py-3 rounded-xl bg-white dark:bg-slate-800 border border-slate-200 dark:border-slate-700 font-semibold text-brand-600 dark:text-brand-400"
                >
                    "View Frequently Asked Questions"
                    <span>"→"</span>
                </A>
            </Reveal>
        </section>

        <CallToAction
            title="Ready to Explore Your Options?"
            text="Our team can help you understand what's available at your address and answer any questions you have."
            button_label=site_phone
        />
    }
}
