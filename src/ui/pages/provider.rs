//! Provider detail pages under `/providers/:slug`

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::core::catalog::{ProviderPlan, ProviderProfile, provider_profile};
use crate::core::ProviderInfo;
use crate::ui::common::{ProviderPopup, WarningNotice};
use crate::ui::icon::{Icon, icons};
use crate::ui::pages::NotFoundPage;
use crate::ui::pages::sections::SectionHeading;
use crate::ui::reveal::{Reveal, stagger};
use crate::ui::seo::PageMeta;
use crate::ui::use_site_config;

/// Resolves the slug and renders the provider page, or the 404 page for an
/// unknown provider
#[component]
pub fn ProviderRoute() -> impl IntoView {
    let site = use_site_config();
    let params = use_params_map();
    let slug = Memo::new(move |_| params.with(|p| p.get("slug").unwrap_or_default()));

    move || {
        let slug = slug.get();
        let resolved = site
            .provider(&slug)
            .and_then(|info| provider_profile(&slug).map(|profile| (*info, profile)));

        match resolved {
            Ok((info, profile)) => view! { <ProviderPage provider=info profile=profile/> }.into_any(),
            Err(err) => {
                #[cfg(feature = "ssr")]
                tracing::debug!(error = %err, "provider page not found");
                #[cfg(not(feature = "ssr"))]
                let _ = err;
                view! { <NotFoundPage/> }.into_any()
            }
        }
    }
}

#[component]
fn ProviderPage(provider: ProviderInfo, profile: &'static ProviderProfile) -> impl IntoView {
    let site = use_site_config();
    let (popup_open, set_popup_open) = signal(false);

    // Open once hydrated so the server markup matches the first client render
    Effect::new(move |_| set_popup_open.set(true));

    let name = provider.name;
    let color = provider.color;
    let path = provider.href();

    let plans = profile
        .plans
        .iter()
        .enumerate()
        .map(|(i, plan)| {
            view! {
                <Reveal delay_ms=stagger(i)>
                    <PlanCard plan=*plan color=color/>
                </Reveal>
            }
        })
        .collect_view();

    let about = profile
        .about
        .iter()
        .map(|paragraph| view! { <p>{*paragraph}</p> })
        .collect_view();

    view! {
        <PageMeta
            title=format!("{} Internet Plans", name)
            description=format!(
                "Explore sample {} internet plans and call to confirm availability and current pricing at your address.",
                name,
            )
            path=path
        />

        <ProviderPopup
            provider=provider
            is_open=Signal::from(popup_open)
            on_close=Callback::new(move |_| set_popup_open.set(false))
        />

        <section class="relative pt-32 pb-16 overflow-hidden">
            <div
                class="absolute inset-0 pointer-events-none"
                style=format!("background: radial-gradient(ellipse at center, {}40, transparent 70%)", color)
            ></div>
            <div class="relative max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <Reveal>
                    <h1 class="font-display text-4xl sm:text-5xl font-bold text-slate-900 dark:text-white mb-6">
                        <span style=format!("color: {}", color)>{name}</span>
                        " Internet Plans"
                    </h1>
                    <p class="text-xl text-slate-600 dark:text-slate-400 mb-8">
                        {format!(
                            "Explore sample {} internet plans. Actual availability and pricing depend on your location. Call to confirm options at your address.",
                            name,
                        )}
                    </p>
                </Reveal>
                <Reveal delay_ms=100>
                    <CallButton color=color/>
                </Reveal>
            </div>
        </section>

        <section class="pb-8">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <WarningNotice
                    lead="Note:"
                    message=format!(
                        "{} is an independent comparison service, not affiliated with {}. Pricing shown is for example purposes only. {} is a trademark of its respective owner.",
                        site.name,
                        name,
                        name,
                    )
                />
            </div>
        </section>

        <section class="py-16">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title=format!("Sample {} Plans", name)
                    subtitle="These are example plans for illustration. Verify current offers by calling."
                />
                <div class="grid md:grid-cols-3 gap-6">{plans}</div>
            </div>
        </section>

        <section class="py-16 bg-slate-50 dark:bg-slate-900">
            <Reveal class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8">
                <h2 class="font-display text-3xl font-bold text-slate-900 dark:text-white mb-6">
                    {format!("About {}", name)}
                </h2>
                <div class="space-y-4 text-lg text-slate-600 dark:text-slate-400">
                    {about}
                    <p>"Call to check availability and current offers at your specific address."</p>
                </div>
            </Reveal>
        </section>

        <section class="py-20">
            <Reveal class="max-w-3xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <h2 class="font-display text-3xl font-bold text-slate-900 dark:text-white mb-4">
                    {format!("Check {} Availability", name)}
                </h2>
                <p class="text-lg text-slate-600 dark:text-slate-400 mb-8">
                    {format!(
                        "Call to verify if {} is available at your address and get current pricing.",
                        name,
                    )}
                </p>
                <CallButton color=color/>
            </Reveal>
        </section>
    }
}

/// Call button filled with the provider's brand color
#[component]
fn CallButton(color: &'static str) -> impl IntoView {
    let site = use_site_config();

    view! {
        <a
            href=site.phone_link
            class="inline-flex items-center gap-3 px-8 py-4 rounded-xl font-semibold text-white text-lg shadow-xl"
            style=format!("background-color: {}", color)
        >
            <Icon name=icons::PHONE class="w-5 h-5"/>
            {format!("Call {}", site.phone)}
        </a>
    }
}

#[component]
fn PlanCard(plan: ProviderPlan, color: &'static str) -> impl IntoView {
    let site = use_site_config();

    let features = plan
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
            <div class="h-2" style=format!("background-color: {}", color)></div>
            <div class="p-6 flex-1 flex flex-col">
                <h3 class="font-display font-bold text-xl text-slate-900 dark:text-white mb-2">{plan.name}</h3>
                <div class="flex items-center gap-2 text-slate-500 dark:text-slate-400 mb-4">
                    <Icon name=icons::ZAP class="w-4 h-4"/>
                    <span>{plan.speed}</span>
                </div>
                <div class="mb-4">
                    <span class="font-display font-bold text-3xl text-slate-900 dark:text-white">{plan.price}</span>
                    <span class="block text-xs text-slate-500">"*example pricing"</span>
                </div>
                <ul class="space-y-2 mb-6 flex-1">{features}</ul>
                <a
                    href=site.phone_link
                    class="flex items-center justify-center gap-2 w-full py-3 rounded-xl bg-slate-900 dark:bg-white text-white dark:text-slate-900 font-semibold"
                >
                    <Icon name=icons::PHONE class="w-4 h-4"/>
                    "Call to Verify"
                </a>
            </div>
        </div>
    }
}
