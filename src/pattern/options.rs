//! Pattern options: the full static specification a call site passes.

use serde::{Deserialize, Serialize};

use super::error::PatternError;
use super::rule::StyleRule;
use crate::variant::{VariantGroups, VariantSelection};

/// The style rule for one `(group, value)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantStyle {
    /// The variant group this rule belongs to.
    pub group: String,
    /// The value within the group this rule styles.
    pub value: String,
    /// The rule applied when the value is selected.
    pub style: StyleRule,
}

/// A style rule applied when a whole selection matches at once.
///
/// Compound variants express styles that only make sense for a combination,
/// such as "small and red", that neither per-value rule can carry alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundVariant {
    /// The selection that must match for the rule to apply.
    pub selection: VariantSelection,
    /// The rule applied on a match.
    pub style: StyleRule,
}

/// The full static specification passed to the styling factory.
///
/// Options collect a base rule, one rule per declared `(group, value)` pair,
/// an optional default selection, and compound variants. Declaring a variant
/// rule implicitly declares its group and value; the declared
/// [`VariantGroups`] fall out of the `variant` calls in declaration order.
///
/// Building is infallible and validation is a separate, explicit step:
/// [`validate`](PatternOptions::validate) checks that defaults and compound
/// selections stay inside the declared groups. The factory itself never
/// validates (or otherwise looks at) options; they are build-time data for
/// the transform, which validates before compiling.
///
/// # Example
///
/// ```rust
/// use restyled::{PatternOptions, StyleRule, VariantSelection};
///
/// let options = PatternOptions::new()
///     .base(StyleRule::new().set("padding", "8px"))
///     .variant("size", "small", StyleRule::new().set("font-size", "12px"))
///     .variant("size", "large", StyleRule::new().set("font-size", "16px"))
///     .variant("color", "red", StyleRule::new().set("color", "#c00"))
///     .default_variant("size", "small")
///     .compound(
///         VariantSelection::new().set("size", "small").set("color", "red"),
///         StyleRule::new().set("outline", "none"),
///     );
///
/// assert!(options.validate().is_ok());
///
/// let names: Vec<_> = options.variant_groups().names().collect();
/// assert_eq!(names, vec!["size", "color"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatternOptions {
    base: StyleRule,
    groups: VariantGroups,
    variant_styles: Vec<VariantStyle>,
    default_variants: VariantSelection,
    compound_variants: Vec<CompoundVariant>,
}

impl PatternOptions {
    /// Creates empty options: no base rule, no variants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base rule applied regardless of selection.
    pub fn base(mut self, rule: StyleRule) -> Self {
        self.base = rule;
        self
    }

    /// Declares a variant value and its rule, implicitly declaring the group.
    ///
    /// Groups and values keep declaration order. Declaring the same
    /// `(group, value)` pair twice is recorded as-is and rejected by
    /// [`validate`](PatternOptions::validate).
    pub fn variant(
        mut self,
        group: impl Into<String>,
        value: impl Into<String>,
        style: StyleRule,
    ) -> Self {
        let group = group.into();
        let value = value.into();
        self.groups.declare(&group, &value);
        self.variant_styles.push(VariantStyle {
            group,
            value,
            style,
        });
        self
    }

    /// Sets the default value for a group.
    pub fn default_variant(mut self, group: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_variants = self.default_variants.set(group, value);
        self
    }

    /// Adds a compound variant: a rule applied when the whole selection matches.
    pub fn compound(mut self, selection: VariantSelection, style: StyleRule) -> Self {
        self.compound_variants.push(CompoundVariant { selection, style });
        self
    }

    /// Validates that the options stay inside their own declared contract.
    ///
    /// Checks, in order:
    ///
    /// 1. no `(group, value)` pair has two rules;
    /// 2. the default selection references only declared groups and values;
    /// 3. every compound selection references only declared groups and values.
    ///
    /// The transform runs this before compiling; it can also be called
    /// explicitly for early error detection.
    pub fn validate(&self) -> Result<(), PatternError> {
        for (index, style) in self.variant_styles.iter().enumerate() {
            let duplicated = self.variant_styles[..index]
                .iter()
                .any(|earlier| earlier.group == style.group && earlier.value == style.value);
            if duplicated {
                return Err(PatternError::DuplicateVariant {
                    group: style.group.clone(),
                    value: style.value.clone(),
                });
            }
        }

        self.groups
            .check_selection(&self.default_variants)
            .map_err(PatternError::DefaultVariant)?;

        for (index, compound) in self.compound_variants.iter().enumerate() {
            self.groups
                .check_selection(&compound.selection)
                .map_err(|source| PatternError::CompoundVariant { index, source })?;
        }

        Ok(())
    }

    /// Returns the base rule.
    pub fn base_style(&self) -> &StyleRule {
        &self.base
    }

    /// Returns the groups declared by the `variant` calls.
    pub fn variant_groups(&self) -> &VariantGroups {
        &self.groups
    }

    /// Returns the per-value rules, in declaration order.
    pub fn variant_styles(&self) -> &[VariantStyle] {
        &self.variant_styles
    }

    /// Returns the default selection.
    pub fn default_variants(&self) -> &VariantSelection {
        &self.default_variants
    }

    /// Returns the compound variants, in declaration order.
    pub fn compound_variants(&self) -> &[CompoundVariant] {
        &self.compound_variants
    }
}
