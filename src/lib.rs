//! # restyled
//!
//! Authoring contract for build-time extracted component styling.
//!
//! The crate centers on one function, [`styled`](fn@styled): attach style
//! variants to a component and get back a [`StyledComponent`] whose props are
//! extended with a [`VariantSelection`], plus a selector that computes the
//! class-name string for a selection.
//!
//! The factory does no styling work at run time. Its call sites exist for a
//! build-time transform to locate, extract, and replace with generated
//! artifacts; if a call site survives into a running program, the factory
//! fails fast with [`BuildTransformMissing`] so the broken build setup
//! surfaces immediately instead of as silently unstyled output.
//!
//! ## Example
//!
//! ```rust
//! use restyled::{styled, PatternOptions, StyleRule};
//!
//! let options = PatternOptions::new()
//!     .base(StyleRule::new().set("padding", "8px"))
//!     .variant("size", "small", StyleRule::new().set("font-size", "12px"))
//!     .variant("size", "large", StyleRule::new().set("font-size", "16px"))
//!     .default_variant("size", "small");
//!
//! // The options stay inside their declared contract...
//! assert!(options.validate().is_ok());
//!
//! // ...but without the build transform, the factory refuses to run.
//! assert!(styled("button", options).is_err());
//! ```
//!
//! ## Modules
//!
//! - [`component`] - component references, props, and the renderable node tree
//! - [`intrinsic`] - the recognized intrinsic element tags and their
//!   known property sets
//! - [`variant`] - variant groups, selections, and selection validation
//! - [`pattern`] - the static pattern specification extracted from call sites
//! - [`styled`](mod@styled) - the factory and the styled-component surface
//! - [`transform`] - the build-transform contract and its collaborator traits

pub mod component;
pub mod intrinsic;
pub mod pattern;
pub mod styled;
pub mod transform;
pub mod variant;

pub use component::{Component, ComponentReference, Node, Props};
pub use intrinsic::{intrinsic_props, is_intrinsic_tag, PropSet, GLOBAL_ATTRIBUTES, INTRINSIC_TAGS};
pub use pattern::{CompoundVariant, PatternError, PatternOptions, StyleRule, VariantStyle};
pub use styled::{styled, StyleVariants, StyledComponent};
pub use transform::{BuildTransformMissing, CallSiteRewriter, PatternCompiler, Selector};
pub use variant::{VariantError, VariantGroup, VariantGroups, VariantSelection};
