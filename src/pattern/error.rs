//! Pattern validation errors.

use thiserror::Error;

use crate::variant::VariantError;

/// Error returned when pattern options fail validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The default selection references an undeclared group or value.
    #[error("invalid default variants: {0}")]
    DefaultVariant(VariantError),

    /// A compound variant's selection references an undeclared group or value.
    #[error("invalid compound variant at index {index}: {source}")]
    CompoundVariant {
        /// Position of the offending compound variant, in declaration order.
        index: usize,
        /// The underlying selection rejection.
        source: VariantError,
    },

    /// The same `(group, value)` pair was given a style rule twice.
    #[error("variant \"{group}.{value}\" is declared more than once")]
    DuplicateVariant {
        /// The group name.
        group: String,
        /// The value declared twice.
        value: String,
    },
}
