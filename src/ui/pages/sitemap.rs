use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::sitemap::{SitemapSection, sitemap_sections};
use crate::ui::icon::{Icon, icons};
use crate::ui::pages::sections::PageHero;
use crate::ui::reveal::{Reveal, stagger};
use crate::ui::seo::PageMeta;
use crate::ui::use_site_config;

#[component]
pub fn SitemapPage() -> impl IntoView {
    let site = use_site_config();

    let sections = sitemap_sections()
        .iter()
        .enumerate()
        .map(|(i, section)| {
            view! {
                <Reveal delay_ms=stagger(i)>
                    <SitemapGroup section=*section/>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <PageMeta
            title="Sitemap"
            description="Browse every page on wandb.online, from plan comparisons to provider information and legal policies."
            path="/sitemap"
        />

        <PageHero
            eyebrow="Navigation"
            eyebrow_icon=icons::MAP
            title="Sitemap"
            subtitle=format!("Find all pages available on {}.", site.name)
        />

        <section class="py-12 pb-24">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid md:grid-cols-2 gap-8">{sections}</div>

                <Reveal class="mt-12 text-center">
                    <p class="text-slate-500 dark:text-slate-400">
                        "Looking for the XML sitemap for search engines? Visit "
                        <a href="/sitemap.xml" class="text-brand-600 dark:text-brand-400 hover:underline">
                            "/sitemap.xml"
                        </a>
                    </p>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn SitemapGroup(section: SitemapSection) -> impl IntoView {
    let links = section
        .links
        .iter()
        .map(|link| {
            view! {
                <li>
                    <A
                        href=link.href
                        attr:class="flex items-start gap-3 p-3 rounded-xl hover:bg-slate-50 dark:hover:bg-slate-700/50 transition-colors"
                    >
                        <div class="w-9 h-9 rounded-lg bg-brand-100 dark:bg-brand-900/40 flex items-center justify-center flex-shrink-0">
                            <Icon name=link.icon class="w-4 h-4"/>
                        </div>
                        <div>
                            <span class="block font-semibold text-slate-900 dark:text-white">{link.label}</span>
                            <span class="block text-sm text-slate-500 dark:text-slate-400">{link.description}</span>
                        </div>
                    </A>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="h-full p-6 rounded-2xl bg-white dark:bg-slate-800 border border-slate-200 dark:border-slate-700">
            <h2 class="font-display font-bold text-xl text-slate-900 dark:text-white mb-4">{section.title}</h2>
            <ul class="space-y-1">{links}</ul>
        </div>
    }
}
