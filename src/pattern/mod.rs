//! The static pattern specification passed to the styling factory.
//!
//! This module provides:
//!
//! - [`StyleRule`]: an opaque bag of style declarations
//! - [`PatternOptions`]: base rule, per-variant rules, defaults, and
//!   compound variants
//! - [`PatternError`]: validation failures for options that reference
//!   undeclared groups or values
//!
//! Pattern options are build-time data. The factory never evaluates them;
//! the build transform extracts them from the call site (everything here is
//! serializable for that reason) and hands them to the variant-pattern
//! compiler. What the declarations inside a [`StyleRule`] mean (parsing,
//! merging, emission) is entirely that compiler's business.

mod error;
mod options;
mod rule;

pub use error::PatternError;
pub use options::{CompoundVariant, PatternOptions, VariantStyle};
pub use rule::StyleRule;
