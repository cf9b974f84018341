//! Privacy policy, terms, disclosures and accessibility statement

use leptos::prelude::*;

use crate::core::SiteConfig;
use crate::core::legal::{
    ACCESSIBILITY, DISCLOSURE_CARDS, DISCLOSURES, LegalBlock, LegalDocument, LegalSection,
    PRIVACY_POLICY, TERMS, fill_placeholders,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::pages::sections::CallToAction;
use crate::ui::reveal::{Reveal, stagger};
use crate::ui::seo::PageMeta;
use crate::ui::use_site_config;

#[component]
pub fn PrivacyPolicyPage() -> impl IntoView {
    view! { <LegalPage document=PRIVACY_POLICY icon="shield"/> }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! { <LegalPage document=TERMS icon="file-text"/> }
}

#[component]
pub fn AccessibilityPage() -> impl IntoView {
    view! { <LegalPage document=ACCESSIBILITY icon="accessibility"/> }
}

#[component]
pub fn DisclosuresPage() -> impl IntoView {
    let site = use_site_config();
    let site_email = site.email;
    let site_email_link = site.email_link;

    let cards = DISCLOSURE_CARDS
        .iter()
        .enumerate()
        .map(|(i, disclosure)| {
            let content = fill_placeholders(disclosure.content, &site);
            view! {
                <Reveal delay_ms=stagger(i)>
                    <div class="flex gap-5 p-6 rounded-2xl bg-white dark:bg-slate-800 border border-slate-200 dark:border-slate-700">
                        <div class="w-12 h-12 rounded-xl bg-brand-100 dark:bg-brand-900/40 flex items-center justify-center flex-shrink-0">
                            <Icon name=disclosure.icon class="w-6 h-6"/>
                        </div>
                        <div>
                            <h2 class="font-display font-bold text-xl text-slate-900 dark:text-white mb-2">
                                {disclosure.title}
                            </h2>
                            <p class="text-slate-600 dark:text-slate-400 leading-relaxed">
                                {content}
                            </p>
                        </div>
                    </div>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <LegalPage document=DISCLOSURES icon=icons::ALERT_CIRCLE>
            <div class="space-y-6 mb-12">{cards}</div>
        </LegalPage>

        <CallToAction
            title="Questions About These Disclosures?"
            text="If you have questions about these disclosures or how we operate, please don't hesitate to contact us."
        >
            <p class="text-slate-400 mt-2">
                "Or email us at "
                <a href=site_email_link class="text-brand-400 hover:underline">{site_email}</a>
            </p>
        </CallToAction>
    }
}

/// Header plus rendered sections for one legal document
#[component]
fn LegalPage(
    document: LegalDocument,
    icon: &'static str,
    /// Rendered between the header and the document sections
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let site = use_site_config();

    let sections = document
        .sections
        .iter()
        .map(|section| render_section(section, &site))
        .collect_view();

    view! {
        <PageMeta title=document.title description=document.description path=document.path/>

        <section class="pt-32 pb-12 bg-gradient-to-b from-slate-50 to-white dark:from-slate-900 dark:to-slate-950">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <Reveal>
                    <div class="w-16 h-16 mx-auto mb-6 rounded-2xl bg-brand-100 dark:bg-brand-900/40 flex items-center justify-center">
                        <Icon name=icon class="w-8 h-8"/>
                    </div>
                </Reveal>
                <Reveal delay_ms=100>
                    <h1 class="font-display text-4xl sm:text-5xl font-bold text-slate-900 dark:text-white mb-4">
                        {document.title}
                    </h1>
                </Reveal>
                <Reveal delay_ms=200>
                    {document
                        .intro
                        .map(|intro| {
                            view! {
                                <p class="text-lg text-slate-600 dark:text-slate-400 max-w-2xl mx-auto">
                                    {fill_placeholders(intro, &site)}
                                </p>
                            }
                        })}
                    {document
                        .last_updated
                        .map(|date| {
                            view! {
                                <p class="text-slate-500 dark:text-slate-400">{format!("Last updated: {}", date)}</p>
                            }
                        })}
                </Reveal>
            </div>
        </section>

        <section class="py-12 pb-24">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                {children.map(|c| c())}
                <div class="space-y-10">{sections}</div>
            </div>
        </section>
    }
}

fn render_section(section: &LegalSection, site: &SiteConfig) -> impl IntoView + use<> {
    let heading = section.heading;
    let blocks = section
        .blocks
        .iter()
        .map(|block| render_block(*block, site))
        .collect_view();

    view! {
        <Reveal>
            <article>
                <h2 class="font-display text-2xl font-bold text-slate-900 dark:text-white mb-4">
                    {heading}
                </h2>
                <div class="space-y-4 text-slate-600 dark:text-slate-400 leading-relaxed">{blocks}</div>
            </article>
        </Reveal>
    }
}

fn render_block(block: LegalBlock, site: &SiteConfig) -> AnyView {
    match block {
        LegalBlock::Paragraph(text) => view! { <p>{fill_placeholders(text, site)}</p> }.into_any(),
        LegalBlock::Subheading(text) => {
            view! { <h3 class="font-semibold text-lg text-slate-900 dark:text-white pt-2">{text}</h3> }
                .into_any()
        }
        LegalBlock::Bullets(items) => view! {
            <ul class="list-disc pl-6 space-y-2">
                {items
                    .iter()
                    .map(|item| view! { <li>{fill_placeholders(item, site)}</li> })
                    .collect_view()}
            </ul>
        }
        .into_any(),
        LegalBlock::Labeled(items) => view! {
            <ul class="list-disc pl-6 space-y-3">
                {items
                    .iter()
                    .map(|(label, text)| {
                        view! {
                            <li>
                                <strong class="text-slate-900 dark:text-white">{*label}</strong>
                                " "
                                {fill_placeholders(text, site)}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
        LegalBlock::ContactDetails => view! {
            <ul class="space-y-2">
                <li class="flex items-center gap-2">
                    <Icon name=icons::MAIL class="w-4 h-4"/>
                    "Email: "
                    <a href=site.email_link class="text-brand-600 dark:text-brand-400 hover:underline">
                        {site.email}
                    </a>
                </li>
                <li class="flex items-center gap-2">
                    <Icon name=icons::PHONE class="w-4 h-4"/>
                    "Phone: "
                    <a href=site.phone_link class="text-brand-600 dark:text-brand-400 hover:underline">
                        {site.phone}
                    </a>
                </li>
            </ul>
        }
        .into_any(),
    }
}
