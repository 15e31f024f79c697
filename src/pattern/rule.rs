//! Opaque style rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An opaque bag of style declarations.
///
/// A rule maps declaration names to JSON values, which is enough to carry
/// plain declarations (`"padding": "8px"`) as well as nested structures
/// (media queries, selectors) without this crate knowing what any of it
/// means. Rules are never parsed, merged, or emitted here; they travel from
/// the call site to the variant-pattern compiler as-is.
///
/// # Example
///
/// ```rust
/// use restyled::StyleRule;
///
/// let rule = StyleRule::new()
///     .set("padding", "8px")
///     .set("font-weight", 600);
///
/// assert_eq!(rule.get("padding").and_then(|v| v.as_str()), Some("8px"));
/// assert_eq!(rule.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleRule {
    declarations: BTreeMap<String, Value>,
}

impl StyleRule {
    /// Creates an empty rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a declaration, returning the updated rule for chaining.
    pub fn set(mut self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.declarations.insert(property.into(), value.into());
        self
    }

    /// Returns a declaration's value by name.
    pub fn get(&self, property: &str) -> Option<&Value> {
        self.declarations.get(property)
    }

    /// Returns the number of declarations.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns `true` if the rule has no declarations.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Iterates over `(property, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.declarations
            .iter()
            .map(|(property, value)| (property.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_rule() {
        let rule = StyleRule::new();
        assert!(rule.is_empty());
        assert_eq!(rule.len(), 0);
        assert_eq!(rule.get("padding"), None);
    }

    #[test]
    fn test_set_and_get() {
        let rule = StyleRule::new().set("padding", "8px").set("z-index", 3);
        assert_eq!(rule.get("padding"), Some(&json!("8px")));
        assert_eq!(rule.get("z-index"), Some(&json!(3)));
    }

    #[test]
    fn test_nested_values_pass_through() {
        let rule = StyleRule::new().set(
            "@media (min-width: 768px)",
            json!({ "padding": "16px" }),
        );
        let nested = rule.get("@media (min-width: 768px)").unwrap();
        assert_eq!(nested["padding"], json!("16px"));
    }

    #[test]
    fn test_serde_round_trip() {
        let rule = StyleRule::new().set("color", "red").set("opacity", 0.5);
        let json = serde_json::to_string(&rule).unwrap();
        let back: StyleRule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rule);
    }
}
