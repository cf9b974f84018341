//! Static marketing content: sample deals, TV lineups, bundles, provider plans
//! and the copy blocks of the informational pages.
//!
//! Everything here is illustrative sample data. Pages render it as-is and
//! always pair it with a "call to confirm" prompt.

use super::site::SiteError;

/// Icon + title + text card used throughout the marketing pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoCard {
    /// Icon name under `/icons`
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Service category card on the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

/// Numbered process step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

const fn card(icon: &'static str, title: &'static str, description: &'static str) -> InfoCard {
    InfoCard {
        icon,
        title,
        description,
    }
}

const fn step(number: &'static str, title: &'static str, description: &'static str) -> Step {
    Step {
        number,
        title,
        description,
    }
}

// ============================================================================
// Home
// ============================================================================

pub const HOME_SERVICES: &[ServiceCard] = &[
    ServiceCard {
        icon: "wifi",
        title: "Internet Plans",
        description: "Explore fiber, cable, and DSL options from major providers with speeds up to 1 Gbps.",
        href: "/compare",
    },
    ServiceCard {
        icon: "tv",
        title: "TV Packages",
        description: "Compare channel lineups, DVR features, and streaming options to find your perfect fit.",
        href: "/tv",
    },
    ServiceCard {
        icon: "package",
        title: "Bundle Deals",
        description: "Save with internet + TV combos. See what bundle options might be available in your area.",
        href: "/bundles",
    },
];

pub const HOME_BENEFITS: &[InfoCard] = &[
    card(
        "shield",
        "Independent & Transparent",
        "We are not an internet provider. We help you compare options and connect with specialists.",
    ),
    card(
        "clock",
        "Save Time Researching",
        "Get a quick overview of typical plans instead of visiting multiple provider websites.",
    ),
    card(
        "users",
        "Personal Assistance",
        "Speak with a real person who can answer questions and confirm what is available at your address.",
    ),
];

pub const HOME_STEPS: &[Step] = &[
    step("01", "Enter Your ZIP", "See typical options in your area"),
    step("02", "Compare Plans", "Review speeds, features, and pricing"),
    step("03", "Call to Confirm", "Verify availability and current offers"),
];

// ============================================================================
// Deals
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deal {
    pub provider: &'static str,
    pub color: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    /// Badge shown in the card header, e.g. `Popular`
    pub tag: &'static str,
}

pub const SAMPLE_DEALS: &[Deal] = &[
    Deal {
        provider: "Verizon",
        color: "#ee0000",
        title: "Fios New Customer Offer",
        description: "Sample offer for new Fios customers with 300 Mbps speeds.",
        price: "Starting at $49.99/mo",
        features: &["300 Mbps speeds", "No annual contract option", "Free router for 12 months"],
        tag: "Popular",
    },
    Deal {
        provider: "Spectrum",
        color: "#0075c9",
        title: "Internet + TV Bundle",
        description: "Sample bundle combining internet and TV service.",
        price: "Starting at $89.98/mo",
        features: &["300 Mbps internet", "125+ TV channels", "Free modem"],
        tag: "Bundle",
    },
    Deal {
        provider: "AT&T",
        color: "#00a8e0",
        title: "Fiber Autopay Discount",
        description: "Sample discount when you set up autopay on fiber plans.",
        price: "Starting at $55/mo",
        features: &["300 Mbps fiber", "Autopay required", "Unlimited data"],
        tag: "Savings",
    },
    Deal {
        provider: "Optimum",
        color: "#ff6900",
        title: "First Year Promo",
        description: "Sample promotional pricing for the first 12 months.",
        price: "Starting at $40/mo",
        features: &["300 Mbps speeds", "First year pricing", "No annual contract"],
        tag: "Promo",
    },
];

// ============================================================================
// TV
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelCategory {
    pub icon: &'static str,
    pub name: &'static str,
    pub examples: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TvPackage {
    pub name: &'static str,
    pub channels: &'static str,
    pub price: &'static str,
    pub note: &'static str,
}

/// TV packages offered by one provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TvLineup {
    pub provider: &'static str,
    pub color: &'static str,
    pub packages: &'static [TvPackage],
}

const fn tv(name: &'static str, channels: &'static str, price: &'static str, note: &'static str) -> TvPackage {
    TvPackage {
        name,
        channels,
        price,
        note,
    }
}

pub const CHANNEL_CATEGORIES: &[ChannelCategory] = &[
    ChannelCategory { icon: "newspaper", name: "News & Info", examples: "CNN, Fox News, MSNBC, Bloomberg" },
    ChannelCategory { icon: "trophy", name: "Sports", examples: "ESPN, Fox Sports, NFL Network, NBA TV" },
    ChannelCategory { icon: "film", name: "Movies", examples: "HBO, Showtime, Starz, Cinemax" },
    ChannelCategory { icon: "play", name: "Entertainment", examples: "USA, TNT, FX, Comedy Central" },
];

pub const TV_LINEUPS: &[TvLineup] = &[
    TvLineup {
        provider: "Verizon",
        color: "#ee0000",
        packages: &[
            tv("Your Fios TV", "125+", "$70/mo*", "Customize your channel lineup"),
            tv("More Fios TV", "300+", "$90/mo*", "Includes sports and premium"),
            tv("The Most Fios TV", "425+", "$110/mo*", "Everything included"),
        ],
    },
    TvLineup {
        provider: "Spectrum",
        color: "#0075c9",
        packages: &[
            tv("TV Select", "125+", "$59.99/mo*", "Popular channels included"),
            tv("TV Silver", "175+", "$79.99/mo*", "More sports and entertainment"),
            tv("TV Gold", "200+", "$99.99/mo*", "Premium channels included"),
        ],
    },
    TvLineup {
        provider: "AT&T",
        color: "#00a8e0",
        packages: &[
            tv("Entertainment", "160+", "$69.99/mo*", "Great variety of channels"),
            tv("Choice", "185+", "$84.99/mo*", "Regional sports networks"),
            tv("Ultimate", "250+", "$94.99/mo*", "HBO Max included"),
        ],
    },
    TvLineup {
        provider: "Optimum",
        color: "#ff6900",
        packages: &[
            tv("Core TV", "100+", "$50/mo*", "Essential channels"),
            tv("Select TV", "170+", "$75/mo*", "Sports and movies"),
            tv("Premier TV", "340+", "$110/mo*", "Premium everything"),
        ],
    },
];

// ============================================================================
// Bundles
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bundle {
    pub provider: &'static str,
    pub color: &'static str,
    pub name: &'static str,
    pub internet: &'static str,
    pub tv: &'static str,
    pub price: &'static str,
    pub savings: &'static str,
    pub features: &'static [&'static str],
}

pub const BUNDLE_TYPES: &[InfoCard] = &[
    card(
        "wifi",
        "Internet + TV",
        "The most popular bundle. Combine high-speed internet with your favorite channels.",
    ),
    card(
        "smartphone",
        "Internet + Mobile",
        "Some providers offer discounts when you add mobile service to your internet plan.",
    ),
    card(
        "package",
        "Triple Play",
        "Internet, TV, and phone service combined into one package.",
    ),
];

pub const SAMPLE_BUNDLES: &[Bundle] = &[
    Bundle {
        provider: "Verizon",
        color: "#ee0000",
        name: "Fios Internet + TV Bundle",
        internet: "300 Mbps",
        tv: "125+ channels",
        price: "$119.99/mo",
        savings: "Example: save vs. separate",
        features: &["No annual contract option", "Free router for 12 mo", "DVR included"],
    },
    Bundle {
        provider: "Spectrum",
        color: "#0075c9",
        name: "Internet + TV Select",
        internet: "300 Mbps",
        tv: "125+ channels",
        price: "$109.98/mo",
        savings: "Example bundle pricing",
        features: &["No contracts", "Free modem", "DVR service included"],
    },
    Bundle {
        provider: "AT&T",
        color: "#00a8e0",
        name: "Fiber + Entertainment",
        internet: "300 Mbps Fiber",
        tv: "160+ channels",
        price: "$125/mo",
        savings: "Example with autopay",
        features: &["Symmetrical speeds", "HBO Max included", "Cloud DVR"],
    },
    Bundle {
        provider: "Optimum",
        color: "#ff6900",
        name: "Internet + Select TV",
        internet: "300 Mbps",
        tv: "170+ channels",
        price: "$115/mo",
        savings: "Example first year price",
        features: &["No annual contract", "WiFi 6 router", "Sports included"],
    },
];

pub const BUNDLE_BENEFITS: &[InfoCard] = &[
    card("check", "One Bill", "Simplify your monthly payments with a single statement."),
    card(
        "check",
        "Potential Savings",
        "Bundles may offer lower combined pricing than separate services.",
    ),
    card(
        "check",
        "One Provider",
        "Deal with one company for support and service questions.",
    ),
];

// ============================================================================
// Provider pages
// ============================================================================

/// Sample plan on a provider detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderPlan {
    pub name: &'static str,
    pub speed: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
}

/// Plans and background copy for one provider page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderProfile {
    pub slug: &'static str,
    pub plans: &'static [ProviderPlan],
    /// Paragraphs for the "About {provider}" section
    pub about: &'static [&'static str],
}

const fn plan(
    name: &'static str,
    speed: &'static str,
    price: &'static str,
    features: &'static [&'static str],
) -> ProviderPlan {
    ProviderPlan {
        name,
        speed,
        price,
        features,
    }
}

const PROVIDER_PROFILES: &[ProviderProfile] = &[
    ProviderProfile {
        slug: "verizon",
        plans: &[
            plan("Fios 300", "300 Mbps", "$49.99/mo", &["Symmetrical upload/download", "No data caps", "Free router for 12 mo"]),
            plan("Fios 500", "500 Mbps", "$69.99/mo", &["Symmetrical speeds", "Great for streaming", "WiFi 6 router"]),
            plan("Fios Gigabit", "940 Mbps", "$89.99/mo", &["Symmetrical speeds", "Unlimited data", "Whole-home WiFi option"]),
        ],
        about: &[
            "Verizon Fios delivers internet over a 100% fiber-optic network in parts of the Northeast and Mid-Atlantic, with matching upload and download speeds on most plans.",
            "Fios plans typically come without annual contracts or data caps, and router rental is often included for a promotional period.",
            "Call to check availability and current offers at your specific address.",
        ],
    },
    ProviderProfile {
        slug: "spectrum",
        plans: &[
            plan("Internet", "300 Mbps", "$49.99/mo", &["No contracts", "Free modem", "Free antivirus"]),
            plan("Internet Ultra", "500 Mbps", "$69.99/mo", &["No contracts", "Free modem", "Advanced WiFi option"]),
            plan("Internet Gig", "1000 Mbps", "$89.99/mo", &["No contracts", "Free modem", "WiFi 6 router"]),
        ],
        about: &[
            "Spectrum is one of the largest cable internet providers in the United States, serving customers across more than 40 states.",
            "Spectrum plans typically include a modem, no data caps and no annual contracts. TV and mobile bundles are available in many areas.",
            "Call to check availability and current offers at your specific address.",
        ],
    },
    ProviderProfile {
        slug: "att",
        plans: &[
            plan("Fiber 300", "300 Mbps", "$55/mo", &["Symmetrical speeds", "Unlimited data", "Smart Home Manager"]),
            plan("Fiber 500", "500 Mbps", "$65/mo", &["Symmetrical speeds", "Unlimited data", "WiFi 6 gateway"]),
            plan("Fiber 1 Gig", "1000 Mbps", "$80/mo", &["Symmetrical speeds", "Unlimited data", "HBO Max included"]),
        ],
        about: &[
            "AT&T offers fiber internet in many metro areas and DSL-based service in others, along with TV and wireless plans.",
            "AT&T Fiber plans feature symmetrical speeds and unlimited data, with pricing that often includes an autopay discount.",
            "Call to check availability and current offers at your specific address.",
        ],
    },
    ProviderProfile {
        slug: "optimum",
        plans: &[
            plan("Optimum 300", "300 Mbps", "$40/mo", &["No annual contract", "WiFi included", "Smart Router"]),
            plan("Optimum 500", "500 Mbps", "$60/mo", &["No annual contract", "Great for streaming", "WiFi 6 router"]),
            plan("Optimum 1 Gig", "940 Mbps", "$80/mo", &["No annual contract", "Fiber speeds available", "Whole-home WiFi"]),
        ],
        about: &[
            "Optimum (formerly Cablevision and Altice USA) provides cable and fiber internet service primarily in the New York, New Jersey, and Connecticut tri-state area, as well as parts of other states.",
            "Optimum has been expanding its fiber-optic network, offering faster speeds in areas where fiber is available. Their service typically includes no annual contracts and comes with a WiFi router.",
            "Call to check availability and current offers at your specific address.",
        ],
    },
];

/// Plans and about copy for the provider with URL slug `slug`
pub fn provider_profile(slug: &str) -> Result<&'static ProviderProfile, SiteError> {
    PROVIDER_PROFILES
        .iter()
        .find(|p| p.slug == slug)
        .ok_or_else(|| SiteError::UnknownProvider(slug.to_string()))
}

// ============================================================================
// Why wandb / About / Contact
// ============================================================================

pub const WHY_STATS: &[Stat] = &[
    Stat { value: "100%", label: "Independent" },
    Stat { value: "4", label: "Major Providers" },
    Stat { value: "5-Day", label: "Support Week" },
    Stat { value: "Free", label: "Service" },
];

pub const WHY_VALUES: &[InfoCard] = &[
    card(
        "shield",
        "Independence First",
        "We're not owned by any internet provider. Our recommendations are based on what fits your needs, not on corporate partnerships or exclusive deals.",
    ),
    card(
        "eye",
        "Total Transparency",
        "We clearly disclose how we operate, how we're compensated, and what we can and cannot do. No hidden agendas, no fine print surprises.",
    ),
    card(
        "users",
        "Human Connection",
        "Real people answer your calls. Our team takes the time to understand your situation and explain options without pressure or scripts.",
    ),
    card(
        "heart",
        "Your Best Interest",
        "We succeed when you find the right service for your home. That alignment means we're genuinely invested in helping you make a good decision.",
    ),
];

pub const WHAT_WE_DO: &[&str] = &[
    "Help you understand internet and TV options available in your area",
    "Explain typical speed tiers, equipment, and bundle configurations",
    "Compare general pricing structures across major providers",
    "Connect you with specialists who can verify exact availability",
    "Provide guidance on what to ask and what to look out for",
    "Answer questions about technology, installation, and service",
];

pub const WHAT_WE_DONT_DO: &[&str] = &[
    "Claim to be an official provider or authorized dealer",
    "Guarantee specific pricing or promotional offers",
    "Process payments or handle account management",
    "Make promises about service quality or uptime",
    "Pressure you into decisions or use aggressive tactics",
    "Hide our identity or compensation structure",
];

/// Shorter version of the lists above, shown under the comparison table
pub const COMPARE_WE_DO: &[&str] = &[
    "Provide an overview of typical internet and TV options",
    "Help you understand general plan differences",
    "Connect you by phone to confirm availability",
    "Operate transparently as an independent service",
];

pub const COMPARE_WE_DONT_DO: &[&str] = &[
    "We are not the internet or TV provider",
    "We cannot guarantee specific prices or availability",
    "We do not process orders or installations",
    "We are not affiliated with or endorsed by providers",
];

pub const WHY_STEPS: &[Step] = &[
    step(
        "1",
        "Explore Options",
        "Browse typical plans and providers. Use our tools to filter by speed, features, and service type.",
    ),
    step(
        "2",
        "Call to Verify",
        "Speak with our team to confirm what's actually available at your specific address and current pricing.",
    ),
    step(
        "3",
        "Get Connected",
        "We help coordinate next steps and ensure you have the information needed to proceed with confidence.",
    ),
];

pub const ABOUT_VALUES: &[InfoCard] = &[
    card(
        "shield",
        "Independence",
        "We operate independently from internet and TV providers. Our comparisons are designed to help you, not push a specific brand.",
    ),
    card(
        "target",
        "Transparency",
        "We clearly label example pricing and disclose that availability varies by location. No hidden agendas or misleading claims.",
    ),
    card(
        "heart",
        "Customer Focus",
        "Our team is here to help you navigate options and find what works for your household's specific needs.",
    ),
    card(
        "users",
        "Real People",
        "When you call, you speak with real people who can answer questions and help you understand your options.",
    ),
];

pub const ABOUT_TEAM: &[InfoCard] = &[
    card(
        "users",
        "Customer Support",
        "Our support specialists are trained to help you compare plans, understand pricing, and navigate the process.",
    ),
    card(
        "search",
        "Research Team",
        "We continuously research and update our information to reflect current offerings from providers.",
    ),
    card(
        "check",
        "Quality Assurance",
        "We review our content regularly to ensure accuracy and compliance with advertising standards.",
    ),
];

pub const CONTACT_EXPECTATIONS: &[InfoCard] = &[
    card(
        "message-square",
        "Friendly Conversation",
        "Our team is here to help, not to pressure. Ask questions, take your time, and get the information you need.",
    ),
    card(
        "message-square",
        "Clear Information",
        "We explain options in plain language. No confusing jargon or hidden details.",
    ),
    card(
        "message-square",
        "Honest Guidance",
        "We'll tell you what we know and what we don't. If we can't help, we'll say so.",
    ),
    card(
        "message-square",
        "No Obligation",
        "Calling doesn't commit you to anything. Explore your options freely.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::site::SiteConfig;

    #[test]
    fn test_every_configured_provider_has_a_profile() {
        let site = SiteConfig::wandb_online();

        for provider in &site.providers {
            let profile = provider_profile(provider.slug).unwrap();
            assert_eq!(profile.plans.len(), 3, "{}", provider.slug);
            assert!(!profile.about.is_empty());
        }
    }

    #[test]
    fn test_unknown_provider_profile() {
        assert_eq!(
            provider_profile("comcast"),
            Err(SiteError::UnknownProvider("comcast".to_string()))
        );
    }

    #[test]
    fn test_optimum_plans() {
        let profile = provider_profile("optimum").unwrap();
        let prices: Vec<&str> = profile.plans.iter().map(|p| p.price).collect();

        assert_eq!(prices, vec!["$40/mo", "$60/mo", "$80/mo"]);
        assert_eq!(profile.plans[2].speed, "940 Mbps");
    }

    #[test]
    fn test_sample_content_uses_provider_colors() {
        let site = SiteConfig::wandb_online();
        let color_of = |name: &str| {
            site.providers
                .iter()
                .find(|p| p.name == name)
                .map(|p| p.color)
        };

        for deal in SAMPLE_DEALS {
            assert_eq!(color_of(deal.provider), Some(deal.color), "{}", deal.title);
        }
        for bundle in SAMPLE_BUNDLES {
            assert_eq!(color_of(bundle.provider), Some(bundle.color), "{}", bundle.name);
        }
        for lineup in TV_LINEUPS {
            assert_eq!(color_of(lineup.provider), Some(lineup.color));
            assert_eq!(lineup.packages.len(), 3);
        }
    }

    #[test]
    fn test_home_service_cards_link_to_pages() {
        let hrefs: Vec<&str> = HOME_SERVICES.iter().map(|s| s.href).collect();
        assert_eq!(hrefs, vec!["/compare", "/tv", "/bundles"]);
    }
}
