//! Searchable FAQ with category chips and a single-open accordion

use leptos::prelude::*;

use crate::core::faq::{FaqEntry, faq_categories, faq_entries, filter_faqs};
use crate::ui::icon::{Icon, icons};
use crate::ui::pages::sections::CallToAction;
use crate::ui::reveal::Reveal;
use crate::ui::seo::PageMeta;
use crate::ui::use_site_config;

const CHIP: &str = "px-4 py-2 rounded-xl text-sm font-medium transition-colors";
const CHIP_ACTIVE: &str = "bg-brand-600 text-white";
const CHIP_IDLE: &str = "bg-slate-100 dark:bg-slate-800 text-slate-600 dark:text-slate-300 hover:bg-slate-200 dark:hover:bg-slate-700";

fn chip_class(active: bool) -> String {
    format!("{} {}", CHIP, if active { CHIP_ACTIVE } else { CHIP_IDLE })
}

#[component]
pub fn FaqPage() -> impl IntoView {
    let site = use_site_config();
    let (query, set_query) = signal(String::new());
    let (category, set_category) = signal(None::<&'static str>);
    // Question of the expanded entry
    let open = RwSignal::new(None::<&'static str>);

    let visible = Memo::new(move |_| {
        query.with(|q| filter_faqs(faq_entries(), q, category.get()))
    });

    let clear_filters = move |_| {
        set_query.set(String::new());
        set_category.set(None);
    };

    let category_chips = faq_categories(faq_entries())
        .into_iter()
        .map(|name| {
            view! {
                <button
                    type="button"
                    class=move || chip_class(category.get() == Some(name))
                    on:click=move |_| set_category.set(Some(name))
                >
                    {name}
                </button>
            }
        })
        .collect_view();

    view! {
        <PageMeta
            title="Frequently Asked Questions"
            description="Answers to common questions about wandb.online, how internet plans work, pricing, and what to expect when you call."
            path="/faq"
        />

        <section class="relative pt-32 pb-12 bg-gradient-to-b from-brand-50 to-white dark:from-slate-900 dark:to-slate-950">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal class="text-center mb-10">
                    <h1 class="font-display text-4xl sm:text-5xl font-bold text-slate-900 dark:text-white mb-6">
                        "Frequently Asked Questions"
                    </h1>
                    <p class="text-xl text-slate-600 dark:text-slate-400">
                        "Find answers to common questions about our service, how internet plans work, and what to expect."
                    </p>
                </Reveal>

                <Reveal delay_ms=100>
                    <div class="relative mb-6">
                        <div class="absolute left-4 top-1/2 -translate-y-1/2">
                            <Icon name=icons::SEARCH class="w-5 h-5"/>
                        </div>
                        <input
                            type="text"
                            placeholder="Search questions..."
                            aria-label="Search questions"
                            class="w-full pl-12 pr-4 py-4 rounded-2xl bg-white dark:bg-slate-800 border border-slate-200 dark:border-slate-700 text-slate-900 dark:text-white focus:outline-none focus:ring-2 focus:ring-brand-500"
                            prop:value=move || query.get()
                            on:input=move |ev| set_query.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="flex flex-wrap gap-2 justify-center">
                        <button
                            type="button"
                            class=move || chip_class(category.get().is_none())
                            on:click=move |_| set_category.set(None)
                        >
                            "All Questions"
                        </button>
                        {category_chips}
                    </div>
                </Reveal>
            </div>
        </section>

        <section class="py-12 pb-24">
            <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <Show
                    when=move || !visible.with(Vec::is_empty)
                    fallback=move || {
                        view! {
                            <div class="text-center py-12">
                                <p class="text-slate-500 dark:text-slate-400">
                                    "No questions match your search. Try different keywords or "
                                    <button
                                        type="button"
                                        class="text-brand-600 dark:text-brand-400 font-medium hover:underline"
                                        on:click=clear_filters
                                    >
                                        "clear filters"
                                    </button>
                                    "."
                                </p>
                            </div>
                        }
                    }
                >
                    <div class="space-y-4">
                        <For
                            each=move || visible.get()
                            key=|entry| entry.question
                            children=move |entry| view! { <FaqItem entry=entry open=open/> }
                        />
                    </div>
                </Show>
            </div>
        </section>

        <CallToAction
            title="Still Have Questions?"
            text="Our team is here to help. Call us Monday through Friday, 9AM to 6PM EST, and we'll answer any questions you have about finding the right internet or TV service."
            button_label=site.phone
        >
            <p class="text-slate-400 mt-2">
                "Or email us at "
                <a href=site.email_link class="text-brand-400 hover:underline">{site.email}</a>
            </p>
        </CallToAction>
    }
}

#[component]
fn FaqItem(entry: FaqEntry, open: RwSignal<Option<&'static str>>) -> impl IntoView {
    let question = entry.question;
    let is_open = move || open.get() == Some(question);

    view! {
        <div class="border border-slate-200 dark:border-slate-700 rounded-xl overflow-hidden bg-white dark:bg-slate-800">
            <button
                type="button"
                class="w-full px-6 py-4 flex items-center justify-between gap-4 text-left hover:bg-slate-50 dark:hover:bg-slate-700/50 transition-colors"
                on:click=move |_| {
                    open.update(|current| {
                        *current = if *current == Some(question) { None } else { Some(question) };
                    })
                }
                aria-expanded=move || is_open().to_string()
            >
                <span class="font-semibold text-slate-900 dark:text-white">{question}</span>
                <div
                    class="flex items-center justify-center w-5 h-5 flex-shrink-0 transition-transform duration-300"
                    class=("rotate-180", is_open)
                >
                    <Icon name=icons::CHEVRON_DOWN class="w-5 h-5"/>
                </div>
            </button>
            <div
                class="overflow-hidden transition-all duration-300"
                class=("max-h-0", move || !is_open())
                class=("max-h-96", is_open)
            >
                <div class="px-6 pb-4 text-slate-600 dark:text-slate-400 leading-relaxed">
                    {entry.answer}
                </div>
            </div>
        </div>
    }
}
