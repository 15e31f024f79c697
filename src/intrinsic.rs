//! Registry of intrinsic element identifiers and their known property sets.
//!
//! The factory's first argument can be a plain string naming an intrinsic
//! element. This module defines the fixed set of recognized identifiers
//! ([`INTRINSIC_TAGS`]) and resolves each to its known property set
//! ([`intrinsic_props`]): the global attributes every element accepts plus
//! the tag's own attributes.
//!
//! An unrecognized tag string is not rejected. It resolves to the permissive
//! [`PropSet::Any`], so custom elements and tags missing from the registry
//! keep working with an unconstrained property set.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// The recognized intrinsic element identifiers.
///
/// Tag strings outside this set fall back to [`PropSet::Any`].
pub const INTRINSIC_TAGS: &[&str] = &[
    "a", "abbr", "address", "area", "article", "aside", "audio", "b", "base", "bdi", "bdo",
    "blockquote", "body", "br", "button", "canvas", "caption", "cite", "code", "col", "colgroup",
    "data", "datalist", "dd", "del", "details", "dfn", "dialog", "div", "dl", "dt", "em", "embed",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "head", "header", "hgroup", "hr", "html", "i", "iframe", "img", "input", "ins", "kbd", "label",
    "legend", "li", "link", "main", "map", "mark", "menu", "meta", "meter", "nav", "noscript",
    "object", "ol", "optgroup", "option", "output", "p", "picture", "pre", "progress", "q", "rp",
    "rt", "ruby", "s", "samp", "script", "section", "select", "slot", "small", "source", "span",
    "strong", "style", "sub", "summary", "sup", "table", "tbody", "td", "template", "textarea",
    "tfoot", "th", "thead", "time", "title", "tr", "track", "u", "ul", "var", "video", "wbr",
];

/// Attributes accepted by every intrinsic element.
pub const GLOBAL_ATTRIBUTES: &[&str] = &[
    "accesskey",
    "autocapitalize",
    "autofocus",
    "class",
    "contenteditable",
    "dir",
    "draggable",
    "enterkeyhint",
    "hidden",
    "id",
    "inert",
    "inputmode",
    "is",
    "lang",
    "part",
    "popover",
    "role",
    "slot",
    "spellcheck",
    "style",
    "tabindex",
    "title",
    "translate",
];

static INTRINSIC_TAG_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| INTRINSIC_TAGS.iter().copied().collect());

/// Returns the tag-specific attributes for a recognized tag.
///
/// Tags with no attributes beyond the globals return `None`.
fn tag_attributes(tag: &str) -> Option<&'static [&'static str]> {
    Some(match tag {
        "a" => &["href", "target", "rel", "download", "hreflang", "type", "referrerpolicy"],
        "area" => &["alt", "coords", "shape", "href", "target", "rel", "download"],
        "audio" => &["src", "controls", "autoplay", "loop", "muted", "preload", "crossorigin"],
        "base" => &["href", "target"],
        "blockquote" | "q" => &["cite"],
        "button" => &["type", "disabled", "name", "value", "form", "formaction", "formmethod"],
        "canvas" => &["width", "height"],
        "col" | "colgroup" => &["span"],
        "data" => &["value"],
        "del" | "ins" => &["cite", "datetime"],
        "details" => &["open", "name"],
        "dialog" => &["open"],
        "embed" => &["src", "type", "width", "height"],
        "fieldset" => &["disabled", "form", "name"],
        "form" => &["action", "method", "enctype", "name", "target", "novalidate", "autocomplete"],
        "iframe" => &[
            "src",
            "srcdoc",
            "name",
            "width",
            "height",
            "sandbox",
            "allow",
            "loading",
            "referrerpolicy",
        ],
        "img" => &[
            "src",
            "alt",
            "width",
            "height",
            "srcset",
            "sizes",
            "loading",
            "decoding",
            "crossorigin",
            "referrerpolicy",
        ],
        "input" => &[
            "type",
            "name",
            "value",
            "placeholder",
            "disabled",
            "readonly",
            "required",
            "checked",
            "min",
            "max",
            "step",
            "minlength",
            "maxlength",
            "pattern",
            "autocomplete",
            "multiple",
            "accept",
            "list",
            "form",
            "size",
        ],
        "label" => &["for", "form"],
        "li" => &["value"],
        "link" => &["href", "rel", "type", "media", "sizes", "as", "crossorigin", "integrity"],
        "map" => &["name"],
        "meta" => &["name", "content", "charset", "http-equiv"],
        "meter" => &["value", "min", "max", "low", "high", "optimum"],
        "object" => &["data", "type", "name", "form", "width", "height"],
        "ol" => &["reversed", "start", "type"],
        "optgroup" => &["disabled", "label"],
        "option" => &["disabled", "label", "selected", "value"],
        "output" => &["for", "form", "name"],
        "progress" => &["value", "max"],
        "script" => &["src", "type", "async", "defer", "crossorigin", "integrity", "nomodule"],
        "select" => &["name", "disabled", "required", "multiple", "size", "form", "autocomplete"],
        "slot" => &["name"],
        "source" => &["src", "srcset", "sizes", "type", "media", "width", "height"],
        "td" => &["colspan", "rowspan", "headers"],
        "textarea" => &[
            "name",
            "rows",
            "cols",
            "placeholder",
            "disabled",
            "readonly",
            "required",
            "minlength",
            "maxlength",
            "wrap",
            "autocomplete",
            "form",
        ],
        "th" => &["colspan", "rowspan", "headers", "scope", "abbr"],
        "time" => &["datetime"],
        "track" => &["src", "kind", "srclang", "label", "default"],
        "video" => &[
            "src",
            "poster",
            "width",
            "height",
            "controls",
            "autoplay",
            "loop",
            "muted",
            "preload",
            "playsinline",
            "crossorigin",
        ],
        _ => return None,
    })
}

/// The property set an intrinsic element identifier resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropSet {
    /// A recognized tag: the global attributes plus the tag's own, in
    /// registry order.
    Known(Vec<&'static str>),
    /// An unrecognized tag: any property is accepted.
    Any,
}

impl PropSet {
    /// Returns `true` if a property name belongs to this set.
    ///
    /// `Known` sets always accept `data-*` and `aria-*` names in addition
    /// to their listed attributes.
    pub fn allows(&self, name: &str) -> bool {
        match self {
            PropSet::Any => true,
            PropSet::Known(names) => {
                name.starts_with("data-")
                    || name.starts_with("aria-")
                    || names.iter().any(|known| *known == name)
            }
        }
    }

    /// Returns `true` if this is the unconstrained fallback set.
    pub fn is_any(&self) -> bool {
        matches!(self, PropSet::Any)
    }

    /// Returns the listed attribute names for a `Known` set.
    pub fn names(&self) -> Option<&[&'static str]> {
        match self {
            PropSet::Known(names) => Some(names),
            PropSet::Any => None,
        }
    }
}

/// Returns `true` if the tag is a recognized intrinsic element identifier.
pub fn is_intrinsic_tag(tag: &str) -> bool {
    INTRINSIC_TAG_SET.contains(tag)
}

/// Resolves a tag string to its known property set.
///
/// Recognized tags resolve to [`PropSet::Known`] with the global attributes
/// plus the tag's own. Unrecognized tags resolve to [`PropSet::Any`] rather
/// than an error; the registry is deliberately loose there so that custom
/// elements keep working.
///
/// # Example
///
/// ```rust
/// use restyled::{intrinsic_props, PropSet};
///
/// let button = intrinsic_props("button");
/// assert!(button.allows("disabled"));
/// assert!(button.allows("class"));
/// assert!(button.allows("data-testid"));
/// assert!(!button.allows("href"));
///
/// assert_eq!(intrinsic_props("x-widget"), PropSet::Any);
/// ```
pub fn intrinsic_props(tag: &str) -> PropSet {
    if !is_intrinsic_tag(tag) {
        return PropSet::Any;
    }
    let mut names: Vec<&'static str> = GLOBAL_ATTRIBUTES.to_vec();
    if let Some(extra) = tag_attributes(tag) {
        names.extend_from_slice(extra);
    }
    PropSet::Known(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_tags() {
        assert!(is_intrinsic_tag("button"));
        assert!(is_intrinsic_tag("div"));
        assert!(is_intrinsic_tag("textarea"));
        assert!(!is_intrinsic_tag("x-custom-widget"));
        assert!(!is_intrinsic_tag("BUTTON"));
        assert!(!is_intrinsic_tag(""));
    }

    #[test]
    fn test_known_props_include_globals_and_specifics() {
        let props = intrinsic_props("a");
        assert!(!props.is_any());
        assert!(props.allows("href"));
        assert!(props.allows("class"));
        assert!(props.allows("tabindex"));
        assert!(!props.allows("disabled"));
    }

    #[test]
    fn test_known_props_accept_data_and_aria() {
        let props = intrinsic_props("div");
        assert!(props.allows("data-testid"));
        assert!(props.allows("aria-label"));
        assert!(!props.allows("href"));
    }

    #[test]
    fn test_tag_without_specific_attributes() {
        let props = intrinsic_props("span");
        let names = props.names().unwrap();
        assert_eq!(names.len(), GLOBAL_ATTRIBUTES.len());
    }

    #[test]
    fn test_unrecognized_tag_falls_back_to_any() {
        let props = intrinsic_props("x-custom-widget");
        assert!(props.is_any());
        assert!(props.allows("anything-at-all"));
        assert_eq!(props.names(), None);
    }

    #[test]
    fn test_every_listed_tag_resolves_known() {
        for tag in INTRINSIC_TAGS {
            assert!(
                !intrinsic_props(tag).is_any(),
                "tag {:?} should resolve to a known property set",
                tag
            );
        }
    }

    #[test]
    fn test_tag_attribute_table_only_lists_recognized_tags() {
        // Every tag with a specific attribute list must also be in the
        // recognized set, otherwise its attributes would be unreachable.
        for tag in INTRINSIC_TAGS {
            if let Some(extra) = tag_attributes(tag) {
                assert!(!extra.is_empty());
            }
        }
        assert!(tag_attributes("x-custom-widget").is_none());
    }
}
