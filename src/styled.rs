//! The styling factory and the styled-component surface.

use crate::component::{merge_class_attribute, ComponentReference, Node, Props};
use crate::pattern::PatternOptions;
use crate::transform::{BuildTransformMissing, Selector};
use crate::variant::{VariantError, VariantGroups, VariantSelection};

/// Attaches style variants to a component.
///
/// Accepts either call shape, an intrinsic element identifier or a
/// [`Component`](crate::Component) value, through the
/// `impl Into<ComponentReference>` parameter:
///
/// ```rust
/// use restyled::{styled, Component, Node, PatternOptions, Props, StyleRule};
///
/// let options = PatternOptions::new()
///     .variant("size", "small", StyleRule::new().set("font-size", "12px"))
///     .variant("size", "large", StyleRule::new().set("font-size", "16px"));
///
/// // Tag shape.
/// assert!(styled("button", options.clone()).is_err());
///
/// // Component-value shape.
/// let card = Component::new(|_props: &Props| Node::element("div"));
/// assert!(styled(card, options).is_err());
/// ```
///
/// This function is a marker for a source-to-source rewrite, not an
/// implementation: the build transform locates its call sites, extracts the
/// literal arguments, and replaces the call with a constructed
/// [`StyledComponent`]. The body never inspects its arguments and
/// unconditionally fails, so a call that actually executes signals a broken
/// build setup.
///
/// # Errors
///
/// Always returns [`BuildTransformMissing`].
pub fn styled(
    component: impl Into<ComponentReference>,
    options: PatternOptions,
) -> Result<StyledComponent, BuildTransformMissing> {
    // The arguments exist to be extracted from the call site by static
    // analysis; nothing here may inspect them.
    let _ = (component.into(), options);
    Err(BuildTransformMissing)
}

/// A component with style variants attached.
///
/// Styled components are never produced by [`styled`] itself; the build
/// transform constructs them through [`StyledComponent::new`] when it
/// rewrites a call site, pairing the extracted component reference with the
/// declared variant groups and a compiled [`Selector`].
///
/// The surface mirrors the authoring contract:
///
/// - [`variants`](StyledComponent::variants): the ordered variant-group names
/// - [`class_name`](StyledComponent::class_name): selection to class string,
///   checked against the declared groups
/// - [`render`](StyledComponent::render): the callable, which validates the
///   selection, computes the class string, and renders through the wrapped
///   reference, honoring children and the `as` tag override
#[derive(Debug, Clone)]
pub struct StyledComponent {
    reference: ComponentReference,
    groups: VariantGroups,
    selector: Selector,
}

impl StyledComponent {
    /// Constructs a styled component. This is the rewrite target: generated
    /// code calls it with the extracted reference, the groups declared by the
    /// call site's options, and the selector compiled from them.
    pub fn new(
        reference: impl Into<ComponentReference>,
        groups: VariantGroups,
        selector: Selector,
    ) -> Self {
        Self {
            reference: reference.into(),
            groups,
            selector,
        }
    }

    /// Returns the wrapped component reference.
    pub fn reference(&self) -> &ComponentReference {
        &self.reference
    }

    /// Returns the variant-group names, in declaration order.
    pub fn variants(&self) -> Vec<&str> {
        self.groups.names().collect()
    }

    /// Returns the compiled selector.
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Computes the class-name string for a selection.
    ///
    /// # Errors
    ///
    /// Returns a [`VariantError`] if the selection names a group or value
    /// outside the declared contract.
    pub fn class_name(&self, selection: &VariantSelection) -> Result<String, VariantError> {
        self.groups.check_selection(selection)?;
        Ok(self.selector.class_name(selection))
    }

    /// Renders the component with the given props.
    ///
    /// The props' selection is validated, its class string is computed and
    /// merged into the `class` attribute, and rendering is delegated:
    ///
    /// - a tag reference becomes an element node, with the `as` override
    ///   replacing the tag when present;
    /// - a component value receives the props (class merged, `as` forwarded
    ///   untouched) and renders itself.
    ///
    /// # Errors
    ///
    /// Returns a [`VariantError`] if the props' selection falls outside the
    /// declared groups.
    pub fn render(&self, props: &Props) -> Result<Node, VariantError> {
        self.groups.check_selection(props.variants())?;
        let class = self.selector.class_name(props.variants());

        match &self.reference {
            ComponentReference::Tag(tag) => {
                let tag = props.as_override().unwrap_or(tag).to_string();
                let mut attributes = props.attributes().clone();
                merge_class_attribute(&mut attributes, &class);
                Ok(Node::Element {
                    tag,
                    attributes,
                    children: props.child_nodes().to_vec(),
                })
            }
            ComponentReference::Value(component) => {
                let mut forwarded = props.clone();
                forwarded.merge_class(&class);
                Ok(component.render(&forwarded))
            }
        }
    }
}

/// Recovers the variant contract from a styled-component-like value.
///
/// This is the variant-extraction utility: calling code can name a styled
/// component's variant groups without repeating the pattern specification.
/// It is implemented for [`StyledComponent`]; a bare
/// [`Component`](crate::Component) has no variant parameter and deliberately
/// has no implementation, so the "no selection" case is excluded at compile
/// time rather than answered with an empty value.
pub trait StyleVariants {
    /// Returns the variant groups this value's selections are checked against.
    fn style_variants(&self) -> &VariantGroups;
}

impl StyleVariants for StyledComponent {
    fn style_variants(&self) -> &VariantGroups {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;
    use crate::pattern::StyleRule;
    use serde_json::Value;

    fn size_groups() -> VariantGroups {
        VariantGroups::new().group("size", ["small", "large"])
    }

    fn suffix_selector() -> Selector {
        Selector::new(|selection| {
            let mut class = String::from("base");
            for (group, value) in selection.iter() {
                class.push_str(&format!(" {}_{}", group, value));
            }
            class
        })
    }

    #[test]
    fn test_styled_always_fails_for_tag_shape() {
        let options = PatternOptions::new()
            .variant("size", "small", StyleRule::new())
            .variant("size", "large", StyleRule::new());

        let result = styled("button", options);
        assert_eq!(result.unwrap_err(), BuildTransformMissing);
    }

    #[test]
    fn test_styled_always_fails_for_component_shape() {
        let label = Component::new(|_props: &Props| Node::element("span"));
        let result = styled(label, PatternOptions::new());
        assert_eq!(result.unwrap_err(), BuildTransformMissing);
    }

    #[test]
    fn test_styled_never_inspects_options() {
        // Options referencing undeclared groups are invalid, but the factory
        // must fail with the sentinel error, not a validation error.
        let options = PatternOptions::new().default_variant("ghost", "on");
        assert_eq!(styled("div", options).unwrap_err(), BuildTransformMissing);
    }

    #[test]
    fn test_variants_reports_ordered_names() {
        let groups = VariantGroups::new()
            .group("size", ["small"])
            .group("color", ["red"]);
        let component = StyledComponent::new("button", groups, suffix_selector());
        assert_eq!(component.variants(), vec!["size", "color"]);
    }

    #[test]
    fn test_class_name_checks_selection() {
        let component = StyledComponent::new("button", size_groups(), suffix_selector());

        let selection = VariantSelection::new().set("size", "small");
        assert_eq!(component.class_name(&selection).unwrap(), "base size_small");

        let bad = VariantSelection::new().set("tone", "loud");
        assert!(matches!(
            component.class_name(&bad),
            Err(VariantError::UnknownGroup { .. })
        ));
    }

    #[test]
    fn test_render_tag_reference_builds_element() {
        let component = StyledComponent::new("button", size_groups(), suffix_selector());
        let props = Props::new()
            .attr("disabled", true)
            .variant("size", "large")
            .child(Node::text("Save"));

        let node = component.render(&props).unwrap();
        assert_eq!(node.tag(), Some("button"));
        assert_eq!(
            node.attribute("class"),
            Some(&Value::from("base size_large"))
        );
        assert_eq!(node.attribute("disabled"), Some(&Value::from(true)));
    }

    #[test]
    fn test_render_honors_as_override() {
        let component = StyledComponent::new("button", size_groups(), suffix_selector());
        let node = component.render(&Props::new().as_tag("a")).unwrap();
        assert_eq!(node.tag(), Some("a"));
    }

    #[test]
    fn test_render_delegates_to_component_value() {
        let inner = Component::new(|props: &Props| {
            let mut node = Node::element("span");
            if let Node::Element { attributes, .. } = &mut node {
                if let Some(class) = props.get("class") {
                    attributes.insert("class".to_string(), class.clone());
                }
            }
            node
        });

        let component = StyledComponent::new(inner, size_groups(), suffix_selector());
        let node = component
            .render(&Props::new().variant("size", "small"))
            .unwrap();

        assert_eq!(node.tag(), Some("span"));
        assert_eq!(
            node.attribute("class"),
            Some(&Value::from("base size_small"))
        );
    }

    #[test]
    fn test_render_rejects_foreign_selection() {
        let component = StyledComponent::new("button", size_groups(), suffix_selector());
        let props = Props::new().variant("size", "huge");
        assert!(matches!(
            component.render(&props),
            Err(VariantError::UnknownValue { .. })
        ));
    }

    #[test]
    fn test_style_variants_recovers_contract() {
        let groups = size_groups();
        let component = StyledComponent::new("button", groups.clone(), suffix_selector());
        assert_eq!(component.style_variants(), &groups);
    }
}
