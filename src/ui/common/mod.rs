//! Common reusable UI components
//!
//! Building blocks shared by several pages: the modal overlay, inline
//! messages and the info tooltip.

pub mod message;
pub mod modal;
pub mod tooltip;

pub use message::{ErrorMessage, WarningBanner, WarningNotice};
pub use modal::{BaseModal, ProviderPopup};
pub use tooltip::InfoTooltip;
