//! Selection validation errors.

use thiserror::Error;

/// Error returned when a variant selection falls outside the declared groups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariantError {
    /// The selection names a group that was never declared.
    #[error("unknown variant group \"{group}\"; declared groups are: {}", .known.join(", "))]
    UnknownGroup {
        /// The group name the selection used.
        group: String,
        /// The declared group names, in declaration order.
        known: Vec<String>,
    },

    /// The selection assigns a value the group does not allow.
    #[error("variant group \"{group}\" has no value \"{value}\"; allowed values are: {}", .allowed.join(", "))]
    UnknownValue {
        /// The group the value was assigned to.
        group: String,
        /// The value the selection used.
        value: String,
        /// The group's allowed values, in declaration order.
        allowed: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_group_display_lists_candidates() {
        let err = VariantError::UnknownGroup {
            group: "tone".to_string(),
            known: vec!["size".to_string(), "color".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("tone"));
        assert!(msg.contains("size, color"));
    }

    #[test]
    fn test_unknown_value_display_lists_candidates() {
        let err = VariantError::UnknownValue {
            group: "size".to_string(),
            value: "huge".to_string(),
            allowed: vec!["small".to_string(), "large".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("size"));
        assert!(msg.contains("huge"));
        assert!(msg.contains("small, large"));
    }
}
