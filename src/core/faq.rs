//! Frequently asked questions and their search filter

/// A single question/answer pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub category: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

impl FaqEntry {
    const fn new(category: &'static str, question: &'static str, answer: &'static str) -> Self {
        Self {
            category,
            question,
            answer,
        }
    }
}

const ABOUT: &str = "About Our Service";
const HOW: &str = "How It Works";
const PRICING: &str = "Pricing & Plans";
const TECHNICAL: &str = "Technical Questions";
const PRIVACY: &str = "Privacy & Trust";

static FAQ_ENTRIES: [FaqEntry; 17] = [
    FaqEntry::new(
        ABOUT,
        "What is wandb.online?",
        "wandb.online is an independent comparison and connection service that helps you explore internet and TV options in your area. We provide information about typical plans, speeds, and pricing to help you understand your choices. We are not an internet provider; we're a service that helps you navigate and compare options.",
    ),
    FaqEntry::new(
        ABOUT,
        "Are you affiliated with Verizon, Spectrum, AT&T, or Optimum?",
        "No. We are completely independent and not affiliated with, endorsed by, or sponsored by any internet or TV provider. Provider names and trademarks belong to their respective owners. Our goal is to give you unbiased information to help you make decisions.",
    ),
    FaqEntry::new(
        ABOUT,
        "How does wandb.online make money?",
        "We may receive compensation when you connect with a provider through our service. This referral-based model allows us to provide our comparison service at no cost to you. We're transparent about this because we believe you should know how any service you use operates.",
    ),
    FaqEntry::new(
        ABOUT,
        "Is your service free?",
        "Yes. Our comparison and connection service is completely free for you to use. You won't pay us anything; any costs you incur are between you and the provider you choose to sign up with.",
    ),
    FaqEntry::new(
        HOW,
        "Why do I need to enter my ZIP code?",
        "Internet and TV availability varies significantly by location. What's available in one neighborhood may not be available a few streets away. Entering your ZIP code helps us show you options that are more likely to be available in your area. However, exact availability must be confirmed with the provider.",
    ),
    FaqEntry::new(
        HOW,
        "Why should I call instead of just signing up online?",
        "Calling allows you to confirm exact availability, current pricing, and any promotions specific to your address. Online pricing is often general; a phone consultation ensures you get accurate information and can ask questions before committing.",
    ),
    FaqEntry::new(
        HOW,
        "What happens when I call the number on your site?",
        "You'll speak with a member of our team who can help answer questions, explain options, and assist with confirming availability at your address. We don't use high-pressure tactics. Our goal is to help you find the right service for your needs.",
    ),
    FaqEntry::new(
        HOW,
        "Can you set up my service for me?",
        "We can guide you through the process and help you understand your options, but actual service setup, billing, and account management are handled directly by the provider you choose. We help you get to the right place.",
    ),
    FaqEntry::new(
        PRICING,
        "Are the prices on your site guaranteed?",
        "No. All pricing shown on wandb.online is for example purposes only. Actual pricing varies by location, current promotions, and provider policies. We recommend calling to confirm current rates and availability at your specific address.",
    ),
    FaqEntry::new(
        PRICING,
        "Why does pricing vary so much by location?",
        "Providers price services based on many factors: infrastructure costs, competition in your area, regional promotions, and more. Two neighbors might pay different rates depending on when they signed up and what promotions were available. That's why confirming current pricing is so important.",
    ),
    FaqEntry::new(
        PRICING,
        "What speed do I actually need?",
        "It depends on how you use the internet. For basic browsing and email, 25-50 Mbps is typically sufficient. For streaming HD video, 50-100 Mbps works well for most households. Multiple users streaming 4K, gaming, or working from home may benefit from 200+ Mbps. Our team can help you think through your specific needs.",
    ),
    FaqEntry::new(
        PRICING,
        "Are bundles worth it?",
        "Bundles (combining internet, TV, and sometimes phone) can offer savings compared to purchasing services separately, but it depends on what you actually need. If you don't watch much TV, a standalone internet plan might be more cost-effective. We can help you compare the options.",
    ),
    FaqEntry::new(
        TECHNICAL,
        "What's the difference between fiber, cable, and DSL?",
        "Fiber uses light through glass cables and typically offers the fastest, most reliable speeds. Cable uses coaxial cables (same as cable TV) and offers good speeds in many areas. DSL uses phone lines and is widely available but usually slower. Availability depends on infrastructure in your area.",
    ),
    FaqEntry::new(
        TECHNICAL,
        "Do I need to buy equipment?",
        "Most providers offer equipment rental (modem, router) for a monthly fee. Some allow you to purchase your own compatible equipment. Rental includes support and replacements, while owning can save money long-term. We can discuss options when you call.",
    ),
    FaqEntry::new(
        TECHNICAL,
        "What about installation?",
        "Installation requirements vary by provider and your home's existing infrastructure. Some installations are simple self-installs; others require a technician visit. Installation fees may apply. These details are best confirmed directly when you're setting up service.",
    ),
    FaqEntry::new(
        PRIVACY,
        "What do you do with my information?",
        "We only collect information necessary to help you explore options, like your ZIP code to show relevant services. We don't sell your personal information. See our Privacy Policy for complete details on how we handle data.",
    ),
    FaqEntry::new(
        PRIVACY,
        "How do I know I can trust this site?",
        "We're transparent about who we are, how we operate, and how we make money. We clearly state we're not affiliated with providers. We don't make guarantees we can't keep. We encourage you to verify any information we provide by calling providers directly.",
    ),
];

/// All FAQ entries in display order
pub fn faq_entries() -> &'static [FaqEntry] {
    &FAQ_ENTRIES
}

/// Distinct categories in the order they first appear
pub fn faq_categories(entries: &[FaqEntry]) -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = Vec::new();
    for entry in entries {
        if !categories.contains(&entry.category) {
            categories.push(entry.category);
        }
    }
    categories
}

/// Entries matching a free-text query and an optional category.
///
/// The query matches case-insensitively against question and answer; an empty
/// query matches everything.
pub fn filter_faqs(entries: &[FaqEntry], query: &str, category: Option<&str>) -> Vec<FaqEntry> {
    let needle = query.to_lowercase();

    entries
        .iter()
        .filter(|entry| {
            let matches_search = needle.is_empty()
                || entry.question.to_lowercase().contains(&needle)
                || entry.answer.to_lowercase().contains(&needle);
            let matches_category = category.is_none_or(|c| entry.category == c);
            matches_search && matches_category
        })
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_in_first_seen_order() {
        let categories = faq_categories(faq_entries());

        assert_eq!(
            categories,
            vec![ABOUT, HOW, PRICING, TECHNICAL, PRIVACY]
        );
    }

    #[test]
    fn test_empty_query_and_no_category_returns_all() {
        let all = filter_faqs(faq_entries(), "", None);
        assert_eq!(all.len(), faq_entries().len());
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let lower = filter_faqs(faq_entries(), "zip code", None);
        let upper = filter_faqs(faq_entries(), "ZIP CODE", None);

        assert!(!lower.is_empty());
        assert_eq!(lower, upper);
        assert!(lower.iter().any(|e| e.question == "Why do I need to enter my ZIP code?"));
    }

    #[test]
    fn test_query_matches_answers() {
        let results = filter_faqs(faq_entries(), "coaxial", None);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].category, TECHNICAL);
    }

    #[test]
    fn test_category_filter() {
        let results = filter_faqs(faq_entries(), "", Some(PRIVACY));

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|e| e.category == PRIVACY));
    }

    #[test]
    fn test_query_and_category_combine() {
        let results = filter_faqs(faq_entries(), "provider", Some(HOW));

        assert!(!results.is_empty());
        assert!(results.iter().all(|e| e.category == HOW));

        let none = filter_faqs(faq_entries(), "coaxial", Some(PRIVACY));
        assert!(none.is_empty());
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        assert!(filter_faqs(faq_entries(), "", Some("Billing")).is_empty());
    }
}
