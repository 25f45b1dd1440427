//! Warning tracking for generated code.
//!
//! - [`WarningTracker`] - Ordered, deduplicated warning categories for one code unit
//! - [`DeprecationInfo`] - Deprecation metadata of a referenced program element
//! - [`Suppression`] - Directive payload (single category or list)
//! - [`SuppressionTarget`] - Generated items that accept a suppression directive

mod deprecation;
mod suppression;
mod tracker;

pub use deprecation::{Deprecation, DeprecationInfo};
pub use suppression::{Suppression, SuppressionTarget};
pub use tracker::WarningTracker;

/// Category raised by using a deprecated element.
pub const DEPRECATION: &str = "deprecation";

/// Category raised by using an element deprecated for removal.
pub const REMOVAL: &str = "removal";
