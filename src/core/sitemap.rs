//! Sitemap table, rendered as `/sitemap.xml` and as the HTML `/sitemap` page

use std::fmt;

/// How often a page is expected to change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `<url>` element of the XML sitemap
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SitemapEntry {
    pub path: &'static str,
    /// 0.0..=1.0
    pub priority: f32,
    pub change_freq: ChangeFrequency,
}

const fn entry(path: &'static str, priority: f32, change_freq: ChangeFrequency) -> SitemapEntry {
    SitemapEntry {
        path,
        priority,
        change_freq,
    }
}

static SITEMAP_ENTRIES: [SitemapEntry; 18] = {
    use ChangeFrequency::*;
    [
        entry("/", 1.0, Weekly),
        entry("/compare", 0.9, Weekly),
        entry("/deals", 0.9, Weekly),
        entry("/tv", 0.8, Weekly),
        entry("/bundles", 0.8, Weekly),
        entry("/why-wandb", 0.7, Monthly),
        entry("/faq", 0.7, Monthly),
        entry("/contact", 0.6, Monthly),
        entry("/about", 0.6, Monthly),
        entry("/providers/verizon", 0.7, Weekly),
        entry("/providers/spectrum", 0.7, Weekly),
        entry("/providers/att", 0.7, Weekly),
        entry("/providers/optimum", 0.7, Weekly),
        entry("/privacy-policy", 0.3, Yearly),
        entry("/terms-and-conditions", 0.3, Yearly),
        entry("/disclosures", 0.4, Yearly),
        entry("/accessibility", 0.3, Yearly),
        entry("/sitemap", 0.3, Monthly),
    ]
};

/// Every indexable page of the site
pub fn sitemap_entries() -> &'static [SitemapEntry] {
    &SITEMAP_ENTRIES
}

/// Escape the characters that would break XML text content
#[cfg(feature = "ssr")]
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render the sitemaps.org 0.9 `urlset` for `entries`.
///
/// A trailing slash on `base_url` is dropped so `/` paths are not doubled.
/// Each `<loc>` is XML-escaped.
#[cfg(feature = "ssr")]
pub fn render_sitemap_xml(
    base_url: &str,
    lastmod: chrono::NaiveDate,
    entries: &[SitemapEntry],
) -> String {
    let base = base_url.trim_end_matches('/');
    let lastmod = lastmod.format("%Y-%m-%d").to_string();

    let urls = entries
        .iter()
        .map(|e| {
            format!(
                "  <url>\n    <loc>{loc}</loc>\n    <lastmod>{lastmod}</lastmod>\n    <changefreq>{freq}</changefreq>\n    <priority>{priority}</priority>\n  </url>",
                loc = escape_xml(&format!("{base}{}", e.path)),
                freq = e.change_freq,
                priority = e.priority,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    tracing::debug!(entries = entries.len(), base, "Rendered sitemap.xml");

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{urls}\n</urlset>"
    )
}

// ============================================================================
// HTML sitemap
// ============================================================================

/// A link on the HTML sitemap page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SitemapLink {
    pub href: &'static str,
    pub label: &'static str,
    /// Icon name under `/icons`
    pub icon: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SitemapSection {
    pub title: &'static str,
    pub links: &'static [SitemapLink],
}

const fn link(
    href: &'static str,
    label: &'static str,
    icon: &'static str,
    description: &'static str,
) -> SitemapLink {
    SitemapLink {
        href,
        label,
        icon,
        description,
    }
}

static SITEMAP_SECTIONS: [SitemapSection; 4] = [
    SitemapSection {
        title: "Main Pages",
        links: &[
            link("/", "Home", "home", "Start your search for internet and TV services"),
            link("/compare", "Compare Plans", "bar-chart", "Compare plans from different providers"),
            link("/deals", "Current Deals", "tag", "Browse sample promotional offers"),
            link("/tv", "TV Packages", "tv", "Explore TV channel packages"),
            link("/bundles", "Bundles", "package", "Internet and TV bundle options"),
        ],
    },
    SitemapSection {
        title: "About Us",
        links: &[
            link("/why-wandb", "Why wandb.online", "users", "Learn why to use our service"),
            link("/about", "About Us", "info", "Learn about our company"),
            link("/contact", "Contact", "phone", "Get in touch with our team"),
            link("/faq", "FAQ", "help-circle", "Frequently asked questions"),
        ],
    },
    SitemapSection {
        title: "Provider Information",
        links: &[
            link("/providers/verizon", "Verizon", "building", "Verizon service information"),
            link("/providers/spectrum", "Spectrum", "building", "Spectrum service information"),
            link("/providers/att", "AT&T", "building", "AT&T service information"),
            link("/providers/optimum", "Optimum", "building", "Optimum service information"),
        ],
    },
    SitemapSection {
        title: "Legal & Policies",
        links: &[
            link("/privacy-policy", "Privacy Policy", "shield", "How we handle your data"),
            link("/terms-and-conditions", "Terms & Conditions", "file-text", "Terms of using our service"),
            link("/disclosures", "Disclosures", "alert-circle", "Important disclosures about our service"),
            link("/accessibility", "Accessibility", "accessibility", "Our accessibility commitment"),
        ],
    },
];

/// Sections of the HTML sitemap page
pub fn sitemap_sections() -> &'static [SitemapSection] {
    &SITEMAP_SECTIONS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_entries_are_unique_and_in_range() {
        let paths: HashSet<&str> = sitemap_entries().iter().map(|e| e.path).collect();

        assert_eq!(paths.len(), sitemap_entries().len());
        for e in sitemap_entries() {
            assert!(e.path.starts_with('/'));
            assert!((0.0..=1.0).contains(&e.priority), "{}", e.path);
        }
    }

    #[test]
    fn test_html_sections_only_link_to_sitemap_pages() {
        let paths: HashSet<&str> = sitemap_entries().iter().map(|e| e.path).collect();

        assert_eq!(sitemap_sections().len(), 4);
        for section in sitemap_sections() {
            for link in section.links {
                assert!(paths.contains(link.href), "{}", link.href);
            }
        }
    }

    #[test]
    fn test_change_frequency_names() {
        assert_eq!(ChangeFrequency::Weekly.to_string(), "weekly");
        assert_eq!(ChangeFrequency::Monthly.as_str(), "monthly");
        assert_eq!(ChangeFrequency::Yearly.as_str(), "yearly");
    }

    #[cfg(feature = "ssr")]
    mod xml {
        use super::super::*;

        fn date() -> chrono::NaiveDate {
            chrono::NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
        }

        #[test]
        fn test_contains_every_path_with_base_url() {
            let xml = render_sitemap_xml("https://wandb.online", date(), sitemap_entries());

            for e in sitemap_entries() {
                let loc = format!("<loc>https://wandb.online{}</loc>", e.path);
                assert!(xml.contains(&loc), "missing {}", loc);
            }
            assert_eq!(xml.matches("<url>").count(), 18);
        }

        #[test]
        fn test_header_and_fields() {
            let xml = render_sitemap_xml("https://wandb.online", date(), sitemap_entries());

            assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
            assert!(xml.contains("xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\""));
            assert!(xml.contains("<lastmod>2025-01-15</lastmod>"));
            assert!(xml.contains("<changefreq>yearly</changefreq>"));
            assert!(xml.contains("<priority>1</priority>"));
            assert!(xml.contains("<priority>0.3</priority>"));
            assert!(xml.trim_end().ends_with("</urlset>"));
        }

        #[test]
        fn test_trailing_slash_is_not_doubled() {
            let xml = render_sitemap_xml("https://wandb.online/", date(), sitemap_entries());

            assert!(xml.contains("<loc>https://wandb.online/</loc>"));
            assert!(xml.contains("<loc>https://wandb.online/compare</loc>"));
            assert!(!xml.contains("online//"));
        }

        #[test]
        fn test_loc_is_xml_escaped() {
            let xml = render_sitemap_xml("https://wandb.online/?a=1&b=<2>", date(), sitemap_entries());

            assert!(xml.contains("<loc>https://wandb.online/?a=1&amp;b=&lt;2&gt;/compare</loc>"));
            assert!(!xml.contains("&b="));
            assert!(!xml.contains("<2>"));
        }

        #[test]
        fn test_empty_entries() {
            let xml = render_sitemap_xml("https://wandb.online", date(), &[]);
            assert!(!xml.contains("<url>"));
        }
    }
}
