//! Core site data and widget logic, shared by the server and the browser

pub mod catalog;
pub mod compare;
#[cfg(feature = "ssr")]
pub mod config;
pub mod faq;
pub mod legal;
pub mod plans;
pub mod site;
pub mod sitemap;
#[cfg(feature = "ssr")]
pub mod sitemap_api;
pub mod zip_search;

pub use compare::{FilterState, SortMode, compute_visible_plans};
pub use plans::{PlanRecord, UseCase, sample_plans};
pub use site::{ProviderInfo, SiteConfig, SiteError};
pub use zip_search::{SearchPhase, ZipEvent, ZipSearch};
