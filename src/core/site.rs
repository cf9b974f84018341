//! Immutable site configuration
//!
//! Brand, contact and navigation data for the whole site. A single
//! [`SiteConfig`] is built at startup (server `main` and client `hydrate`)
//! and handed to the component tree, which reads it through
//! `crate::ui::use_site_config`.

/// A provider the site has information pages for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderInfo {
    /// URL segment, e.g. `att` for `/providers/att`
    pub slug: &'static str,
    pub name: &'static str,
    /// Brand color as a CSS hex string
    pub color: &'static str,
    pub color_light: &'static str,
    pub description: &'static str,
}

impl ProviderInfo {
    pub fn href(&self) -> String {
        format!("/providers/{}", self.slug)
    }
}

/// Typical speed tier shown on marketing pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedTier {
    pub label: &'static str,
    pub range: &'static str,
    pub description: &'static str,
}

/// Navigation link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

/// Titled group of footer links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkGroup {
    pub title: &'static str,
    pub links: &'static [NavLink],
}

/// Standard disclaimer texts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disclaimers {
    pub footer: &'static str,
    pub pricing: &'static str,
    pub referral: &'static str,
}

/// Site configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SiteError {
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),
}

/// Site-wide configuration, constructed once and shared by reference
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    /// Phone number as displayed to visitors
    pub phone: &'static str,
    /// `tel:` link for [`Self::phone`]
    pub phone_link: &'static str,
    pub email: &'static str,
    /// `mailto:` link for [`Self::email`]
    pub email_link: &'static str,
    pub hours: &'static str,
    /// Canonical site URL without trailing slash
    pub url: &'static str,
    pub disclaimers: Disclaimers,
    pub providers: Vec<ProviderInfo>,
    pub speed_tiers: Vec<SpeedTier>,
    pub navigation: Vec<NavLink>,
    pub footer_groups: Vec<LinkGroup>,
    /// Paths where the sticky call bar and floating call button are hidden
    pub call_bar_excluded_paths: Vec<&'static str>,
}

const SERVICES_LINKS: &[NavLink] = &[
    NavLink { name: "Compare Plans", href: "/compare" },
    NavLink { name: "Current Deals", href: "/deals" },
    NavLink { name: "TV Options", href: "/tv" },
    NavLink { name: "Bundles", href: "/bundles" },
];

const PROVIDER_LINKS: &[NavLink] = &[
    NavLink { name: "Verizon", href: "/providers/verizon" },
    NavLink { name: "Spectrum", href: "/providers/spectrum" },
    NavLink { name: "AT&T", href: "/providers/att" },
    NavLink { name: "Optimum", href: "/providers/optimum" },
];

const COMPANY_LINKS: &[NavLink] = &[
    NavLink { name: "About Us", href: "/about" },
    NavLink { name: "Why wandb", href: "/why-wandb" },
    NavLink { name: "Contact", href: "/contact" },
    NavLink { name: "FAQ", href: "/faq" },
];

const LEGAL_LINKS: &[NavLink] = &[
    NavLink { name: "Privacy Policy", href: "/privacy-policy" },
    NavLink { name: "Terms & Conditions", href: "/terms-and-conditions" },
    NavLink { name: "Disclosures", href: "/disclosures" },
    NavLink { name: "Accessibility", href: "/accessibility" },
    NavLink { name: "Sitemap", href: "/sitemap" },
];

impl SiteConfig {
    /// Configuration for the production wandb.online site
    pub fn wandb_online() -> Self {
        Self {
            name: "wandb.online",
            tagline: "Compare. Connect. Get Set Up.",
            description: "An independent comparison and connection service helping you explore internet and TV options.",
            phone: "(888) 524-0250",
            phone_link: "tel:+18885240250",
            email: "support@wandb.online",
            email_link: "mailto:support@wandb.online",
            hours: "Mon–Fri 9AM–6PM EST",
            url: "https://wandb.online",
            disclaimers: Disclaimers {
                footer: "wandb.online is an independent comparison and connection service and is not affiliated with, endorsed by, or sponsored by Verizon, Spectrum, AT&T, or Optimum. Provider names and trademarks belong to their respective owners. Availability and pricing vary by location and are subject to change.",
                pricing: "Prices shown are examples only. Actual pricing and availability depend on your specific address and are subject to change. Contact us to confirm current offers.",
                referral: "We may receive compensation when you connect with providers through our service. This helps us keep our comparison service free.",
            },
            providers: vec![
                ProviderInfo {
                    slug: "verizon",
                    name: "Verizon",
                    color: "#ee0000",
                    color_light: "#ff4444",
                    description: "Known for fiber-optic internet with fast upload and download speeds in select areas.",
                },
                ProviderInfo {
                    slug: "spectrum",
                    name: "Spectrum",
                    color: "#0075c9",
                    color_light: "#3399ff",
                    description: "Widely available cable internet service with no contracts and included equipment.",
                },
                ProviderInfo {
                    slug: "att",
                    name: "AT&T",
                    color: "#00a8e0",
                    color_light: "#33c4ff",
                    description: "Offers fiber and DSL internet options along with TV and phone bundles.",
                },
                ProviderInfo {
                    slug: "optimum",
                    name: "Optimum",
                    color: "#ff6900",
                    color_light: "#ff9944",
                    description: "Regional cable and fiber provider with internet, TV, and phone services.",
                },
            ],
            speed_tiers: vec![
                SpeedTier { label: "Basic", range: "25–100 Mbps", description: "Good for light browsing and email" },
                SpeedTier { label: "Standard", range: "100–300 Mbps", description: "Great for streaming and multiple devices" },
                SpeedTier { label: "Fast", range: "300–500 Mbps", description: "Ideal for work-from-home and gaming" },
                SpeedTier { label: "Ultra", range: "500+ Mbps", description: "Best for large households and heavy usage" },
            ],
            navigation: vec![
                NavLink { name: "Compare", href: "/compare" },
                NavLink { name: "Deals", href: "/deals" },
                NavLink { name: "TV", href: "/tv" },
                NavLink { name: "Bundles", href: "/bundles" },
                NavLink { name: "Why wandb", href: "/why-wandb" },
                NavLink { name: "FAQ", href: "/faq" },
            ],
            footer_groups: vec![
                LinkGroup { title: "Services", links: SERVICES_LINKS },
                LinkGroup { title: "Providers", links: PROVIDER_LINKS },
                LinkGroup { title: "Company", links: COMPANY_LINKS },
                LinkGroup { title: "Legal", links: LEGAL_LINKS },
            ],
            call_bar_excluded_paths: vec!["/", "/privacy-policy", "/terms-and-conditions"],
        }
    }

    /// Look up a provider by its URL slug
    pub fn provider(&self, slug: &str) -> Result<&ProviderInfo, SiteError> {
        self.providers
            .iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| SiteError::UnknownProvider(slug.to_string()))
    }

    /// Whether the sticky call bar / floating call button render on `path`
    pub fn shows_call_bar(&self, path: &str) -> bool {
        !self.call_bar_excluded_paths.contains(&path)
    }

    /// Document title for a page, e.g. `Compare Internet Plans | wandb.online`
    pub fn page_title(&self, title: &str) -> String {
        format!("{} | {}", title, self.name)
    }

    /// Title used by the home page and as the default
    pub fn default_title(&self) -> String {
        format!("{} - {}", self.name, self.tagline)
    }

    /// Absolute URL for a site path
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.url.trim_end_matches('/'), path)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::wandb_online()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_lookup() {
        let site = SiteConfig::wandb_online();

        let att = site.provider("att").unwrap();
        assert_eq!(att.name, "AT&T");
        assert_eq!(att.color, "#00a8e0");
        assert_eq!(att.href(), "/providers/att");
    }

    #[test]
    fn test_provider_lookup_unknown_slug() {
        let site = SiteConfig::wandb_online();

        let err = site.provider("comcast").unwrap_err();
        assert_eq!(err, SiteError::UnknownProvider("comcast".to_string()));
        assert_eq!(err.to_string(), "Unknown provider: comcast");
    }

    #[test]
    fn test_footer_provider_links_match_providers() {
        let site = SiteConfig::wandb_online();
        let group = site
            .footer_groups
            .iter()
            .find(|g| g.title == "Providers")
            .unwrap();

        let hrefs: Vec<String> = site.providers.iter().map(|p| p.href()).collect();
        for link in group.links {
            assert!(hrefs.iter().any(|h| h == link.href), "{}", link.href);
        }
    }

    #[test]
    fn test_call_bar_hidden_on_excluded_paths() {
        let site = SiteConfig::wandb_online();

        assert!(!site.shows_call_bar("/"));
        assert!(!site.shows_call_bar("/privacy-policy"));
        assert!(!site.shows_call_bar("/terms-and-conditions"));
        assert!(site.shows_call_bar("/compare"));
        assert!(site.shows_call_bar("/providers/optimum"));
    }

    #[test]
    fn test_contact_links() {
        let site = SiteConfig::wandb_online();

        assert!(site.phone_link.starts_with("tel:+1"));
        assert_eq!(site.email_link, format!("mailto:{}", site.email));
    }

    #[test]
    fn test_page_titles() {
        let site = SiteConfig::wandb_online();

        assert_eq!(site.page_title("FAQ"), "FAQ | wandb.online");
        assert_eq!(
            site.default_title(),
            "wandb.online - Compare. Connect. Get Set Up."
        );
    }

    #[test]
    fn test_absolute_url() {
        let site = SiteConfig::wandb_online();

        assert_eq!(site.absolute_url("/faq"), "https://wandb.online/faq");
        assert_eq!(site.absolute_url("/"), "https://wandb.online/");
    }
}
