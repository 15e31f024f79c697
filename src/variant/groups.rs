//! Variant groups: the declared vocabulary of a pattern.

use serde::{Deserialize, Serialize};

use super::error::VariantError;
use super::selection::VariantSelection;

/// A single variant group: a name and its allowed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantGroup {
    name: String,
    values: Vec<String>,
}

impl VariantGroup {
    /// Returns the group's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the allowed values, in declaration order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Returns `true` if the value belongs to this group.
    pub fn allows(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

/// The declared mapping from variant-group name to allowed values.
///
/// Group names are unique and both groups and values keep declaration order,
/// which is the order the resulting styled component reports its variants in.
///
/// # Example
///
/// ```rust
/// use restyled::{VariantGroups, VariantSelection};
///
/// let groups = VariantGroups::new()
///     .group("size", ["small", "large"])
///     .group("color", ["red", "blue"]);
///
/// let names: Vec<_> = groups.names().collect();
/// assert_eq!(names, vec!["size", "color"]);
///
/// let selection = VariantSelection::new().set("size", "small");
/// assert!(groups.check_selection(&selection).is_ok());
///
/// let bad = VariantSelection::new().set("tone", "loud");
/// assert!(groups.check_selection(&bad).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantGroups {
    groups: Vec<VariantGroup>,
}

impl VariantGroups {
    /// Creates an empty set of groups.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a group with its allowed values, returning the updated set.
    ///
    /// Declaring an existing group again extends its value list; values a
    /// group already allows are not duplicated.
    pub fn group<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        for value in values {
            self.declare(&name, &value.into());
        }
        self
    }

    /// Declares a single `(group, value)` pair, creating the group if needed.
    pub(crate) fn declare(&mut self, group: &str, value: &str) {
        match self.groups.iter_mut().find(|g| g.name == group) {
            Some(existing) => {
                if !existing.allows(value) {
                    existing.values.push(value.to_string());
                }
            }
            None => self.groups.push(VariantGroup {
                name: group.to_string(),
                values: vec![value.to_string()],
            }),
        }
    }

    /// Returns a group by name.
    pub fn get(&self, name: &str) -> Option<&VariantGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Returns `true` if a group with this name is declared.
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates over group names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.name.as_str())
    }

    /// Iterates over the declared groups.
    pub fn iter(&self) -> impl Iterator<Item = &VariantGroup> {
        self.groups.iter()
    }

    /// Returns the number of declared groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if no group is declared.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Checks a selection against the declared contract.
    ///
    /// A selection is valid when every assigned group is declared and every
    /// assigned value is allowed by its group. Omitted groups are fine; a
    /// selection is never required to cover every group.
    ///
    /// This is the runtime rendition of the source contract's type-level
    /// derivation: the selections this accepts are exactly the ones derivable
    /// from the declared groups.
    ///
    /// # Errors
    ///
    /// Returns [`VariantError::UnknownGroup`] or [`VariantError::UnknownValue`]
    /// for the first assignment outside the contract.
    pub fn check_selection(&self, selection: &VariantSelection) -> Result<(), VariantError> {
        for (group, value) in selection.iter() {
            let Some(declared) = self.get(group) else {
                return Err(VariantError::UnknownGroup {
                    group: group.to_string(),
                    known: self.names().map(String::from).collect(),
                });
            };
            if !declared.allows(value) {
                return Err(VariantError::UnknownValue {
                    group: group.to_string(),
                    value: value.to_string(),
                    allowed: declared.values.clone(),
                });
            }
        }
        Ok(())
    }
}
