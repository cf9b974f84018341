//! Legal and policy documents
//!
//! Documents are stored as structured blocks so the pages render them
//! uniformly. Text may contain `{site}`, `{url}`, `{email}`, `{phone}` and
//! `{hours}` placeholders that [`fill_placeholders`] replaces with values
//! from [`SiteConfig`].

use super::site::SiteConfig;

/// Date shown as "Last updated" on the policy pages
pub const LAST_UPDATED: &str = "January 1, 2026";

/// One piece of content inside a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalBlock {
    Paragraph(&'static str),
    Subheading(&'static str),
    Bullets(&'static [&'static str]),
    /// Bullets with a bold lead-in, e.g. `With Service Providers:`
    Labeled(&'static [(&'static str, &'static str)]),
    /// Email and phone links
    ContactDetails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalSection {
    pub heading: &'static str,
    pub blocks: &'static [LegalBlock],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalDocument {
    pub title: &'static str,
    /// Meta description
    pub description: &'static str,
    pub path: &'static str,
    /// Lead paragraph under the title
    pub intro: Option<&'static str>,
    pub last_updated: Option<&'static str>,
    pub sections: &'static [LegalSection],
}

/// Replace the site placeholders in `text`
pub fn fill_placeholders(text: &str, site: &SiteConfig) -> String {
    text.replace("{site}", site.name)
        .replace("{url}", site.url)
        .replace("{email}", site.email)
        .replace("{phone}", site.phone)
        .replace("{hours}", site.hours)
}

use LegalBlock::{Bullets, ContactDetails, Labeled, Paragraph, Subheading};

const fn section(heading: &'static str, blocks: &'static [LegalBlock]) -> LegalSection {
    LegalSection { heading, blocks }
}

// ============================================================================
// Privacy policy
// ============================================================================

pub const PRIVACY_POLICY: LegalDocument = LegalDocument {
    title: "Privacy Policy",
    description: "Privacy policy for wandb.online - learn how we collect, use, and protect your information.",
    path: "/privacy-policy",
    intro: None,
    last_updated: Some(LAST_UPDATED),
    sections: &[
        section(
            "Introduction",
            &[Paragraph(
                "{site} operates the website {url}. This summary explains what information we collect when you visit and how we use it.",
            )],
        ),
        section(
            "Information We Collect",
            &[
                Paragraph("We collect what you choose to give us and basic visit data:"),
                Bullets(&[
                    "ZIP codes entered to search for available services",
                    "Details you share when you call or email us",
                    "Browser, device and page-visit information",
                ]),
            ],
        ),
        section(
            "How We Use Your Information",
            &[Paragraph(
                "We use this information to help you find services available at your address, answer your questions, and improve the website.",
            )],
        ),
        section(
            "Sharing Your Information",
            &[Labeled(&[
                (
                    "With Service Providers:",
                    "When you ask about a provider's service, we may pass your contact details to that provider.",
                ),
                (
                    "Legal Requirements:",
                    "We may disclose information when the law requires it.",
                ),
            ])],
        ),
        section(
            "Your Rights",
            &[Paragraph(
                "You may ask us to access, correct or delete the information we hold about you, or opt out of marketing at any time.",
            )],
        ),
        section(
            "Contact Us",
            &[
                Paragraph("If you have questions about this Privacy Policy, please contact us:"),
                ContactDetails,
            ],
        ),
    ],
};

// ============================================================================
// Terms and conditions
// ============================================================================

pub const TERMS: LegalDocument = LegalDocument {
    title: "Terms and Conditions",
    description: "Terms and conditions for using wandb.online - an independent internet and TV comparison service.",
    path: "/terms-and-conditions",
    intro: None,
    last_updated: Some(LAST_UPDATED),
    sections: &[
        section(
            "Agreement to Terms",
            &[Paragraph(
                "By using {site} ({url}) you agree to these terms. If you disagree with them, please do not use the website.",
            )],
        ),
        section(
            "Description of Service",
            &[Labeled(&[(
                "Important:",
                "{site} is an independent comparison service. We do not provide internet or TV service and are not an authorized agent of any provider.",
            )])],
        ),
        section(
            "Information Accuracy",
            &[Bullets(&[
                "All pricing and plan details shown are examples only",
                "Availability and terms vary by location and change without notice",
                "Verify every detail with the provider before signing up",
            ])],
        ),
        section(
            "Referral Compensation",
            &[Paragraph(
                "{site} may be paid when you sign up for a service through our referrals.",
            )],
        ),
        section(
            "Third-Party Services",
            &[Paragraph(
                "Any service agreement is between you and the provider. We are not a party to it and are not responsible for the provider's service or billing.",
            )],
        ),
        section(
            "Contact Information",
            &[
                Paragraph("For questions about these Terms and Conditions, please contact us:"),
                ContactDetails,
            ],
        ),
    ],
};

// ============================================================================
// Disclosures
// ============================================================================

/// Highlighted disclosure card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Disclosure {
    pub icon: &'static str,
    pub title: &'static str,
    pub content: &'static str,
}

pub const DISCLOSURE_CARDS: &[Disclosure] = &[
    Disclosure {
        icon: "building",
        title: "Independence Statement",
        content: "{site} is an independent comparison and information service. We are NOT affiliated with, endorsed by, sponsored by, or an authorized representative of any internet or TV service provider. We operate as a third-party comparison platform designed to help consumers explore their options.",
    },
    Disclosure {
        icon: "dollar-sign",
        title: "Compensation Disclosure",
        content: "{site} may receive compensation when you contact a provider or sign up for services through our referrals. This compensation helps fund our operations and allows us to provide our comparison service at no cost to you. Our compensation arrangements may vary by provider and do not influence our presentation of information.",
    },
    Disclosure {
        icon: "shield",
        title: "Trademark Notice",
        content: "All provider names, logos, trademarks, and service marks displayed on this website are the property of their respective owners. Their inclusion on our website is for informational and identification purposes only. We do not claim ownership of these marks, and their use does not imply any affiliation, endorsement, or sponsorship by the trademark owners.",
    },
    Disclosure {
        icon: "file-check",
        title: "Pricing Disclaimer",
        content: "All pricing information displayed on this website represents EXAMPLE pricing for illustrative purposes only. Actual pricing, availability, promotions, and terms vary significantly by location, are subject to change without notice, and may include additional fees, taxes, or equipment charges not shown. You must verify all pricing and terms directly with the provider before making any purchase decision.",
    },
];

pub const DISCLOSURES: LegalDocument = LegalDocument {
    title: "Disclosures",
    description: "Important disclosures about wandb.online - our independence, compensation, and how we operate.",
    path: "/disclosures",
    intro: Some(
        "Transparency is important to us. Please review these important disclosures about who we are and how we operate.",
    ),
    last_updated: None,
    sections: &[section(
        "Additional Information",
        &[
            Subheading("How We Present Information"),
            Paragraph(
                "We strive to present information fairly and objectively. The order in which providers or plans appear on our website is not necessarily based on ranking or recommendation. We encourage you to explore all options and choose what best meets your specific needs.",
            ),
            Subheading("Our Role"),
            Paragraph(
                "{site} serves as an information resource. When you contact us or express interest in a provider's services, we may connect you with the provider or their authorized representatives. The final service agreement is between you and the provider, and we are not a party to that agreement.",
            ),
            Subheading("Availability"),
            Paragraph(
                "Not all providers or plans are available in all areas. Service availability depends on your specific address and may be affected by factors including infrastructure, local regulations, and provider coverage areas. Always verify availability at your address before making decisions.",
            ),
            Subheading("Information Updates"),
            Paragraph(
                "We make reasonable efforts to keep our information current, but provider offerings change frequently. Information on our website may not reflect the most recent updates from providers. Always confirm current offerings directly with the provider.",
            ),
        ],
    )],
};

// ============================================================================
// Accessibility
// ============================================================================

pub const ACCESSIBILITY_FEATURES: &[&str] = &[
    "Semantic HTML structure for screen reader compatibility",
    "Keyboard navigation support throughout the website",
    "Sufficient color contrast ratios for readability",
    "Alternative text for meaningful images",
    "Clear and consistent navigation",
    "Resizable text without loss of functionality",
    "Focus indicators for interactive elements",
    "Skip navigation links for keyboard users",
    "ARIA labels where appropriate",
    "Reduced motion options for users who prefer less animation",
];

pub const ACCESSIBILITY: LegalDocument = LegalDocument {
    title: "Accessibility Statement",
    description: "Our commitment to digital accessibility at wandb.online.",
    path: "/accessibility",
    intro: Some("{site} is committed to ensuring digital accessibility for people with disabilities."),
    last_updated: None,
    sections: &[
        section(
            "Our Commitment",
            &[
                Paragraph(
                    "We believe everyone should have equal access to information and functionality on the web. We are actively working to increase the accessibility and usability of our website and hold ourselves to a high standard of accessibility.",
                ),
                Paragraph(
                    "Our ongoing accessibility effort works towards conformance with the Web Content Accessibility Guidelines (WCAG) 2.1 Level AA standards. These guidelines explain how to make web content more accessible for people with disabilities.",
                ),
            ],
        ),
        section("Accessibility Features", &[Bullets(ACCESSIBILITY_FEATURES)]),
        section(
            "Feedback and Contact",
            &[
                Paragraph(
                    "We welcome your feedback on the accessibility of {site}. If you encounter any accessibility barriers or have suggestions for improvement, please let us know.",
                ),
                ContactDetails,
            ],
        ),
        section(
            "Response Time",
            &[Paragraph(
                "We aim to respond to accessibility feedback within 2-3 business days. If you need immediate assistance, please call us during our business hours: {hours}.",
            )],
        ),
        section(
            "Continuous Improvement",
            &[Paragraph(
                "We are committed to ongoing accessibility improvements and regularly review our website against accessibility standards. This statement was last reviewed and updated in January 2026.",
            )],
        ),
    ],
};

/// Every legal document, in footer order
pub const LEGAL_DOCUMENTS: &[LegalDocument] = &[PRIVACY_POLICY, TERMS, DISCLOSURES, ACCESSIBILITY];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_placeholders() {
        let site = SiteConfig::wandb_online();
        let text = fill_placeholders("{site} at {url}, call {phone} ({hours}) or mail {email}", &site);

        assert_eq!(
            text,
            format!(
                "{} at {}, call {} ({}) or mail {}",
                site.name, site.url, site.phone, site.hours, site.email
            )
        );
    }

    #[test]
    fn test_fill_placeholders_leaves_plain_text() {
        let site = SiteConfig::wandb_online();
        assert_eq!(fill_placeholders("No braces here", &site), "No braces here");
    }

    #[test]
    fn test_privacy_section_order() {
        let headings: Vec<_> = PRIVACY_POLICY.sections.iter().map(|s| s.heading).collect();
        assert_eq!(headings.first(), Some(&"Introduction"));
        assert_eq!(headings.last(), Some(&"Contact Us"));
        assert_eq!(headings.len(), 6);
    }

    #[test]
    fn test_terms_sections() {
        assert_eq!(TERMS.sections.len(), 6);
        assert_eq!(TERMS.sections[3].heading, "Referral Compensation");
    }

    #[test]
    fn test_dated_documents() {
        assert_eq!(PRIVACY_POLICY.last_updated, Some(LAST_UPDATED));
        assert_eq!(TERMS.last_updated, Some(LAST_UPDATED));
        assert!(DISCLOSURES.last_updated.is_none());
        assert!(ACCESSIBILITY.last_updated.is_none());
    }

    #[test]
    fn test_legal_documents_linked_from_footer() {
        let site = SiteConfig::wandb_online();
        let legal = site
            .footer_groups
            .iter()
            .find(|g| g.title == "Legal")
            .expect("footer should have a Legal group");

        for doc in LEGAL_DOCUMENTS {
            assert!(
                legal.links.iter().any(|l| l.href == doc.path),
                "{} missing from footer",
                doc.path
            );
        }
    }

    #[test]
    fn test_disclosure_cards() {
        let titles: Vec<_> = DISCLOSURE_CARDS.iter().map(|d| d.title).collect();
        assert_eq!(
            titles,
            [
                "Independence Statement",
                "Compensation Disclosure",
                "Trademark Notice",
                "Pricing Disclaimer"
            ]
        );
    }
}
