//! Per-page meta tags and site-wide structured data

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use serde::Serialize;

use crate::core::SiteConfig;
use crate::ui::use_site_config;

#[derive(Debug, Serialize)]
struct ContactPoint<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    telephone: &'a str,
    #[serde(rename = "contactType")]
    contact_type: &'static str,
    #[serde(rename = "availableLanguage")]
    available_language: &'static str,
}

#[derive(Debug, Serialize)]
struct Organization<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    url: &'a str,
    description: &'a str,
    #[serde(rename = "contactPoint")]
    contact_point: ContactPoint<'a>,
}

#[derive(Debug, Serialize)]
struct WebSite<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    url: &'a str,
}

/// schema.org `Organization` document for the site
pub fn organization_json_ld(site: &SiteConfig) -> String {
    let org = Organization {
        context: "https://schema.org",
        kind: "Organization",
        name: site.name,
        url: site.url,
        description: site.description,
        contact_point: ContactPoint {
            kind: "ContactPoint",
            telephone: site.phone,
            contact_type: "customer service",
            available_language: "English",
        },
    };
    serde_json::to_string(&org).unwrap_or_default()
}

/// schema.org `WebSite` document for the site
pub fn website_json_ld(site: &SiteConfig) -> String {
    let web = WebSite {
        context: "https://schema.org",
        kind: "WebSite",
        name: site.name,
        url: site.url,
    };
    serde_json::to_string(&web).unwrap_or_default()
}

/// Title, description, canonical link and Open Graph tags for one page
#[component]
pub fn PageMeta(
    /// Page title without the site suffix; `None` uses the site default
    #[prop(optional, into)]
    title: Option<String>,
    #[prop(into)] description: String,
    /// Site path of the page, used for the canonical URL
    #[prop(into)]
    path: String,
) -> impl IntoView {
    let site = use_site_config();
    let full_title = match title {
        Some(t) => site.page_title(&t),
        None => site.default_title(),
    };
    let canonical = site.absolute_url(&path);

    view! {
        <Title text=full_title.clone()/>
        <Meta name="description" content=description.clone()/>
        <Meta property="og:type" content="website"/>
        <Meta property="og:site_name" content=site.name/>
        <Meta property="og:url" content=canonical.clone()/>
        <Meta property="og:title" content=full_title.clone()/>
        <Meta property="og:description" content=description.clone()/>
        <Meta name="twitter:card" content="summary_large_image"/>
        <Meta name="twitter:title" content=full_title/>
        <Meta name="twitter:description" content=description/>
        <Link rel="canonical" href=canonical/>
    }
}

/// Site-wide robots/keywords meta and JSON-LD blocks
#[component]
pub fn SiteStructuredData() -> impl IntoView {
    let site = use_site_config();

    view! {
        <Meta name="robots" content="index, follow"/>
        <Meta name="keywords" content="internet comparison, tv comparison, broadband, cable, fiber, internet service"/>
        <script type="application/ld+json" inner_html=organization_json_ld(&site)></script>
        <script type="application/ld+json" inner_html=website_json_ld(&site)></script>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organization_json_ld() {
        let site = SiteConfig::wandb_online();
        let value: serde_json::Value =
            serde_json::from_str(&organization_json_ld(&site)).unwrap();

        assert_eq!(value["@context"], "https://schema.org");
        assert_eq!(value["@type"], "Organization");
        assert_eq!(value["name"], "wandb.online");
        assert_eq!(value["url"], "https://wandb.online");
        assert_eq!(value["contactPoint"]["telephone"], site.phone);
        assert_eq!(value["contactPoint"]["contactType"], "customer service");
    }

    #[test]
    fn test_website_json_ld() {
        let site = SiteConfig::wandb_online();
        let value: serde_json::Value = serde_json::from_str(&website_json_ld(&site)).unwrap();

        assert_eq!(value["@type"], "WebSite");
        assert_eq!(value["url"], site.url);
    }
}
