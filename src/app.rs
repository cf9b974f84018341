use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::SiteConfig;
use crate::ui::pages::{
    AboutPage, AccessibilityPage, BundlesPage, ComparePage, ContactPage, DealsPage,
    DisclosuresPage, FaqPage, HomePage, NotFoundPage, PrivacyPolicyPage, ProviderRoute,
    SitemapPage, TermsPage, TvPage, WhyPage,
};
use crate::ui::reveal::RevealScript;
use crate::ui::seo::SiteStructuredData;
use crate::ui::{
    FloatingCallButton, Footer, Header, StickyCallBar, provide_site_config, provide_theme_context,
    use_site_config,
};

/// Request context hook that hands every server render the `SiteConfig`
/// built at startup
pub fn site_context(site: Arc<SiteConfig>) -> impl Fn() + Clone + Send + Sync + 'static {
    move || provide_site_config(site.clone())
}

/// HTML document for server rendering. Expects [`site_context`] to have
/// provided the site configuration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let site = use_site_config();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" href="/favicon.svg" type="image/svg+xml"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-white dark:bg-slate-950 text-slate-900 dark:text-white antialiased">
                <App site=site/>
            </body>
        </html>
    }
}

#[component]
pub fn App(site: Arc<SiteConfig>) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_site_config(site);
    provide_theme_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/wandb-online.css"/>
        <SiteStructuredData/>

        <Router>
            <Header/>
            <main class="min-h-screen">
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/compare") view=ComparePage/>
                    <Route path=path!("/deals") view=DealsPage/>
                    <Route path=path!("/tv") view=TvPage/>
                    <Route path=path!("/bundles") view=BundlesPage/>
                    <Route path=path!("/why-wandb") view=WhyPage/>
                    <Route path=path!("/about") view=AboutPage/>
                    <Route path=path!("/contact") view=ContactPage/>
                    <Route path=path!("/faq") view=FaqPage/>
                    <Route path=path!("/providers/:slug") view=ProviderRoute/>
                    <Route path=path!("/privacy-policy") view=PrivacyPolicyPage/>
                    <Route path=path!("/terms-and-conditions") view=TermsPage/>
                    <Route path=path!("/disclosures") view=DisclosuresPage/>
                    <Route path=path!("/accessibility") view=AccessibilityPage/>
                    <Route path=path!("/sitemap") view=SitemapPage/>
                </Routes>
            </main>
            <Footer/>
            <StickyCallBar/>
            <FloatingCallButton/>
        </Router>

        <RevealScript/>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_context_shares_one_config_across_requests() {
        let site = Arc::new(SiteConfig::wandb_online());
        let provide = site_context(site.clone());

        for _ in 0..2 {
            let owner = Owner::new();
            owner.with(|| {
                provide();
                assert!(Arc::ptr_eq(&use_site_config(), &site));
            });
        }
    }
}
