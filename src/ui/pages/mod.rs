//! Application pages
//!
//! One component per route, plus the shared section building blocks in
//! [`sections`]:
//! - Home, compare, deals, TV and bundles
//! - Provider detail pages
//! - About, why, contact and FAQ
//! - Legal pages and the HTML sitemap
//! - 404

pub mod sections;

mod about;
mod bundles;
mod compare;
mod contact;
mod deals;
mod faq;
mod home;
mod legal;
mod not_found;
mod provider;
mod sitemap;
mod tv;
mod why;

pub use about::AboutPage;
pub use bundles::BundlesPage;
pub use compare::ComparePage;
pub use contact::ContactPage;
pub use deals::DealsPage;
pub use faq::FaqPage;
pub use home::HomePage;
pub use legal::{AccessibilityPage, DisclosuresPage, PrivacyPolicyPage, TermsPage};
pub use not_found::NotFoundPage;
pub use provider::ProviderRoute;
pub use sitemap::SitemapPage;
pub use tv::TvPage;
pub use why::WhyPage;
