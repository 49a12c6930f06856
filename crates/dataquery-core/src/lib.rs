//! # dataquery-core
//!
//! Content model and static catalogs for the DataQuery institutional site.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        dataquery-web                          │
//! │   Header ─ Hero ─ Features ─ Testimonials ─ Pricing ─ Footer  │
//! └───────────────┬──────────────────────────────┬───────────────┘
//!                 │ reads                        │ toggles
//!   ┌─────────────▼─────────────┐   ┌────────────▼────────────┐
//!   │  catalog (static records)  │   │  nav::MenuState (bool)  │
//!   └────────────────────────────┘   └─────────────────────────┘
//! ```
//!
//! Everything here is `'static` data or a pure function of it, so the
//! frontend, the static host and the tests all read the same records.

pub mod catalog;
pub mod contact;
pub mod error;
pub mod model;
pub mod nav;
pub mod site;

pub use catalog::{FEATURES, HOME_SECTIONS, PLANS, TESTIMONIALS};
pub use error::{Result, SiteError};
pub use model::{Feature, Icon, Plan, SectionCopy, SectionId, Testimonial};
pub use nav::{LinkTarget, MenuState, NavLink};
pub use site::{SiteMetadata, copyright_line, current_year};
