//! Variant vocabulary and selection validation.
//!
//! This module provides:
//!
//! - [`VariantGroups`]: the declared mapping from group name to allowed values
//! - [`VariantSelection`]: an assignment of at most one value per group
//! - [`VariantError`]: rejections for selections outside the declared contract
//!
//! The host language the source contract was written for derives the accepted
//! selection type from the declared groups at compile time. Here that
//! derivation is a first-class validation operation instead:
//! [`VariantGroups::check_selection`] rejects any selection naming a group or
//! value outside the declaration, so the accepted selections are exactly the
//! ones derivable from the groups: nothing dropped, nothing invented.

mod error;
mod groups;
mod selection;

pub use error::VariantError;
pub use groups::{VariantGroup, VariantGroups};
pub use selection::VariantSelection;
