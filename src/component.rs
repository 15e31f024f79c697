//! Component references, props, and the renderable node tree.
//!
//! This module provides the value-level half of the authoring contract:
//!
//! - [`Node`]: a minimal renderable tree (elements, text, fragments)
//! - [`Props`]: the properties bag a styled component accepts
//! - [`Component`]: an opaque component value, a function from props to a node
//! - [`ComponentReference`]: the two accepted shapes of a factory's first
//!   argument: an intrinsic element tag or a component value
//!
//! Rendering nodes to any concrete output is out of scope; the tree exists so
//! that component values have a concrete return type and so that the styled
//! wrapper has something to delegate to.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::intrinsic::is_intrinsic_tag;
use crate::variant::VariantSelection;

/// A renderable node produced by a component.
///
/// The tree is deliberately small: an element with attributes and children,
/// a text run, or a fragment grouping siblings without a wrapper element.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An element with a tag name, attributes, and child nodes.
    Element {
        /// The element's tag name.
        tag: String,
        /// Attribute name to value. The `class` attribute is where computed
        /// class-name strings end up.
        attributes: BTreeMap<String, Value>,
        /// Child nodes, in order.
        children: Vec<Node>,
    },
    /// A text run.
    Text(String),
    /// A sequence of sibling nodes with no wrapper element.
    Fragment(Vec<Node>),
}

impl Node {
    /// Creates an element node with no attributes or children.
    pub fn element(tag: impl Into<String>) -> Self {
        Node::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Creates a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Returns the tag name if this is an element node.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Returns an attribute value if this is an element node carrying it.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        match self {
            Node::Element { attributes, .. } => attributes.get(name),
            _ => None,
        }
    }
}

/// Merges a computed class string into an attribute map.
///
/// An existing `class` attribute is kept and the computed classes are
/// appended after it, matching how the rendered wrapper combines caller
/// classes with generated ones. Empty class strings leave the map untouched.
pub(crate) fn merge_class_attribute(attributes: &mut BTreeMap<String, Value>, class: &str) {
    if class.is_empty() {
        return;
    }
    let merged = match attributes.get("class").and_then(Value::as_str) {
        Some(existing) if !existing.is_empty() => format!("{} {}", existing, class),
        _ => class.to_string(),
    };
    attributes.insert("class".to_string(), Value::String(merged));
}

/// The properties bag accepted by a styled component.
///
/// Props carry four things: pass-through attributes for the underlying
/// component or element, a [`VariantSelection`] choosing one value per
/// declared variant group, child nodes, and an optional override of the
/// rendered element tag (the `as` prop).
///
/// # Example
///
/// ```rust
/// use restyled::{Node, Props};
///
/// let props = Props::new()
///     .attr("label", "Save")
///     .variant("size", "small")
///     .child(Node::text("Save"))
///     .as_tag("a");
///
/// assert_eq!(props.get("label").and_then(|v| v.as_str()), Some("Save"));
/// assert_eq!(props.variants().get("size"), Some("small"));
/// assert_eq!(props.as_override(), Some("a"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Props {
    attributes: BTreeMap<String, Value>,
    variants: VariantSelection,
    children: Vec<Node>,
    as_tag: Option<String>,
}

impl Props {
    /// Creates an empty properties bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a pass-through attribute, returning updated props for chaining.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Selects a variant value for a group.
    ///
    /// Setting the same group twice keeps the later value, so a selection
    /// never carries more than one value per group.
    pub fn variant(mut self, group: impl Into<String>, value: impl Into<String>) -> Self {
        self.variants = self.variants.set(group, value);
        self
    }

    /// Replaces the whole variant selection.
    pub fn with_variants(mut self, variants: VariantSelection) -> Self {
        self.variants = variants;
        self
    }

    /// Appends a child node.
    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    /// Appends several child nodes.
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Overrides the rendered element tag (the `as` prop).
    pub fn as_tag(mut self, tag: impl Into<String>) -> Self {
        self.as_tag = Some(tag.into());
        self
    }

    /// Returns the pass-through attributes.
    pub fn attributes(&self) -> &BTreeMap<String, Value> {
        &self.attributes
    }

    /// Returns an attribute value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Returns the variant selection.
    pub fn variants(&self) -> &VariantSelection {
        &self.variants
    }

    /// Returns the child nodes.
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Returns the rendered-tag override, if any.
    pub fn as_override(&self) -> Option<&str> {
        self.as_tag.as_deref()
    }

    /// Merges a computed class string into the `class` attribute.
    pub(crate) fn merge_class(&mut self, class: &str) {
        merge_class_attribute(&mut self.attributes, class);
    }
}

/// An opaque component value: a function from props to a renderable node.
///
/// Component values are shared closures, so cloning a component is cheap and
/// a component can back several styled wrappers at once.
///
/// # Example
///
/// ```rust
/// use restyled::{Component, Node, Props};
///
/// let greeting = Component::new(|props: &Props| {
///     let name = props
///         .get("name")
///         .and_then(|v| v.as_str())
///         .unwrap_or("world");
///     Node::text(format!("Hello, {}!", name))
/// });
///
/// let node = greeting.render(&Props::new().attr("name", "Ada"));
/// assert_eq!(node, Node::text("Hello, Ada!"));
/// ```
#[derive(Clone)]
pub struct Component {
    render: Arc<dyn Fn(&Props) -> Node + Send + Sync>,
}

impl Component {
    /// Creates a component from a render function.
    pub fn new(render: impl Fn(&Props) -> Node + Send + Sync + 'static) -> Self {
        Self {
            render: Arc::new(render),
        }
    }

    /// Renders the component with the given props.
    pub fn render(&self, props: &Props) -> Node {
        (self.render)(props)
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Component")
    }
}

/// The two accepted shapes of the styling factory's first argument.
///
/// A reference is either an intrinsic element identifier (a tag string such
/// as `"button"`) or an opaque [`Component`] value. The `From` impls let the
/// factory accept both shapes through a single `impl Into<ComponentReference>`
/// parameter instead of overloaded declarations.
#[derive(Debug, Clone)]
pub enum ComponentReference {
    /// An intrinsic element identifier.
    Tag(String),
    /// A component value.
    Value(Component),
}

impl ComponentReference {
    /// Returns the tag name if this reference is an intrinsic identifier.
    pub fn tag(&self) -> Option<&str> {
        match self {
            ComponentReference::Tag(tag) => Some(tag),
            ComponentReference::Value(_) => None,
        }
    }

    /// Returns `true` if this reference names a recognized intrinsic element.
    ///
    /// Tag references outside the recognized set still construct fine; they
    /// fall back to an unconstrained property set (see
    /// [`intrinsic_props`](crate::intrinsic::intrinsic_props)).
    pub fn is_intrinsic(&self) -> bool {
        matches!(self, ComponentReference::Tag(tag) if is_intrinsic_tag(tag))
    }
}

impl From<&str> for ComponentReference {
    fn from(tag: &str) -> Self {
        ComponentReference::Tag(tag.to_string())
    }
}

impl From<String> for ComponentReference {
    fn from(tag: String) -> Self {
        ComponentReference::Tag(tag)
    }
}

impl From<Component> for ComponentReference {
    fn from(component: Component) -> Self {
        ComponentReference::Value(component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_element_accessors() {
        let node = Node::element("div");
        assert_eq!(node.tag(), Some("div"));
        assert_eq!(node.attribute("class"), None);
    }

    #[test]
    fn test_node_text_has_no_tag() {
        let node = Node::text("hi");
        assert_eq!(node.tag(), None);
        assert_eq!(node.attribute("class"), None);
    }

    #[test]
    fn test_props_builder_collects_everything() {
        let props = Props::new()
            .attr("label", "Save")
            .attr("disabled", true)
            .variant("size", "small")
            .child(Node::text("Save"))
            .as_tag("a");

        assert_eq!(props.get("label").and_then(|v| v.as_str()), Some("Save"));
        assert_eq!(props.get("disabled").and_then(|v| v.as_bool()), Some(true));
        assert_eq!(props.variants().get("size"), Some("small"));
        assert_eq!(props.child_nodes().len(), 1);
        assert_eq!(props.as_override(), Some("a"));
    }

    #[test]
    fn test_props_variant_last_write_wins() {
        let props = Props::new().variant("size", "small").variant("size", "large");
        assert_eq!(props.variants().get("size"), Some("large"));
        assert_eq!(props.variants().len(), 1);
    }

    #[test]
    fn test_merge_class_into_empty_map() {
        let mut attributes = BTreeMap::new();
        merge_class_attribute(&mut attributes, "btn_a1");
        assert_eq!(attributes.get("class"), Some(&Value::from("btn_a1")));
    }

    #[test]
    fn test_merge_class_appends_to_existing() {
        let mut attributes = BTreeMap::new();
        attributes.insert("class".to_string(), Value::from("caller"));
        merge_class_attribute(&mut attributes, "btn_a1");
        assert_eq!(attributes.get("class"), Some(&Value::from("caller btn_a1")));
    }

    #[test]
    fn test_merge_class_empty_is_noop() {
        let mut attributes = BTreeMap::new();
        merge_class_attribute(&mut attributes, "");
        assert!(attributes.is_empty());
    }

    #[test]
    fn test_component_render_delegates() {
        let upper = Component::new(|props: &Props| {
            let text = props.get("text").and_then(|v| v.as_str()).unwrap_or("");
            Node::text(text.to_uppercase())
        });

        let node = upper.render(&Props::new().attr("text", "abc"));
        assert_eq!(node, Node::text("ABC"));
    }

    #[test]
    fn test_reference_from_str_is_tag() {
        let reference = ComponentReference::from("button");
        assert_eq!(reference.tag(), Some("button"));
        assert!(reference.is_intrinsic());
    }

    #[test]
    fn test_reference_unknown_tag_is_not_intrinsic() {
        let reference = ComponentReference::from("x-custom-widget");
        assert_eq!(reference.tag(), Some("x-custom-widget"));
        assert!(!reference.is_intrinsic());
    }

    #[test]
    fn test_reference_from_component_has_no_tag() {
        let component = Component::new(|_| Node::text("x"));
        let reference = ComponentReference::from(component);
        assert_eq!(reference.tag(), None);
        assert!(!reference.is_intrinsic());
    }
}
