//! Variant selections: one chosen value per group.

use serde::{Deserialize, Serialize};

/// An assignment of at most one value to each variant group.
///
/// Selections preserve the order in which groups were set and never carry
/// two values for the same group: setting a group that already has a value
/// replaces it in place.
///
/// Omitting a group entirely is always allowed; groups are optional unless
/// a default fills them in, and defaulting happens in the compiled selector,
/// outside this crate.
///
/// # Example
///
/// ```rust
/// use restyled::VariantSelection;
///
/// let selection = VariantSelection::new()
///     .set("size", "small")
///     .set("color", "red")
///     .set("size", "large");
///
/// assert_eq!(selection.get("size"), Some("large"));
/// assert_eq!(selection.get("color"), Some("red"));
/// assert_eq!(selection.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantSelection {
    entries: Vec<(String, String)>,
}

impl VariantSelection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a value to a group, returning the updated selection.
    ///
    /// A group that already has a value keeps its position and gets the new
    /// value; the selection never holds more than one value per group.
    pub fn set(mut self, group: impl Into<String>, value: impl Into<String>) -> Self {
        let group = group.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| *name == group) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((group, value)),
        }
        self
    }

    /// Returns the value assigned to a group, if any.
    pub fn get(&self, group: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == group)
            .map(|(_, value)| value.as_str())
    }

    /// Returns `true` if the selection assigns a value to the group.
    pub fn contains(&self, group: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == group)
    }

    /// Returns the number of assigned groups.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no group has a value.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(group, value)` pairs in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(group, value)| (group.as_str(), value.as_str()))
    }
}

impl<G: Into<String>, V: Into<String>> FromIterator<(G, V)> for VariantSelection {
    fn from_iter<I: IntoIterator<Item = (G, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |selection, (group, value)| {
                selection.set(group, value)
            })
    }
}
