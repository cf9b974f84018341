pub mod common;
pub mod compare_table;
pub mod icon;
pub mod layout;
pub mod pages;
pub mod reveal;
pub mod seo;
pub mod site_context;
pub mod theme;
pub mod zip_search;

pub use compare_table::ComparisonTable;
pub use icon::{Icon, icons};
pub use layout::{FloatingCallButton, Footer, Header, StickyCallBar};
pub use site_context::{provide_site_config, use_pathname, use_site_config};
pub use theme::{provide_theme_context, use_theme_context};
pub use zip_search::ZipSearchModule;
