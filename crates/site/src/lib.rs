//! `varahi-site`
//!
//! **Responsibility:** the two interactive surfaces of the website.
//!
//! - [`ContactSurface`]: the always-visible contact form
//! - [`CatalogSurface`]: the product grid with its order modal
//!
//! Each surface owns its own field store (and, for the catalog, its own
//! selection gate) and a submission controller wired to the host navigator.
//! Rendering stays with the host; it feeds field edits, selections and button
//! presses into these types and re-renders from their state.

pub mod catalog;
pub mod company;
pub mod contact;
pub mod preview;

pub use catalog::CatalogSurface;
pub use company::{COMPANY, CompanyContact};
pub use contact::ContactSurface;
