//! The build-transform contract: the factory's external collaborators.
//!
//! The styling factory does no work at run time; a build-time transform
//! locates its call sites, extracts the literal arguments, and replaces
//! each call with generated artifacts. This module declares the pieces of
//! that contract:
//!
//! - [`BuildTransformMissing`]: the sentinel error the factory raises when
//!   a call site was *not* rewritten and executes as written
//! - [`Selector`]: the compiled selection-to-class-name function a rewrite
//!   installs
//! - [`PatternCompiler`]: the collaborator that compiles pattern options
//!   into a [`Selector`], declared here and never invoked by this crate
//! - [`CallSiteRewriter`]: the collaborator that turns an extracted call
//!   site into a [`StyledComponent`]
//!
//! The collaborators are traits rather than concrete imports so the factory
//! can be tested against stubs that assert they are never reached.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::component::ComponentReference;
use crate::pattern::{PatternError, PatternOptions};
use crate::styled::StyledComponent;
use crate::variant::VariantSelection;

/// The error raised whenever the styling factory executes at run time.
///
/// A `styled` call reaching execution means the build transform did not
/// rewrite it, which is a build-configuration failure, not a recoverable
/// runtime state. The error is never caught inside this crate; it propagates
/// so the host surfaces it as a startup failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "styled() was invoked at run time. Every styled() call site should be rewritten \
     by the style build transform before the program runs, so reaching this code means \
     the transform did not process this file. Check that the transform is registered in \
     your build pipeline; if the configuration looks correct, please file an issue at \
     https://github.com/restyled-rs/restyled/issues"
)]
pub struct BuildTransformMissing;

/// A compiled, pure function from a variant selection to a class-name string.
///
/// Selectors are produced by the variant-pattern compiler outside this crate
/// and installed into [`StyledComponent`]s by the call-site rewrite. They are
/// shared closures, so cloning is cheap.
#[derive(Clone)]
pub struct Selector {
    select: Arc<dyn Fn(&VariantSelection) -> String + Send + Sync>,
}

impl Selector {
    /// Wraps a selection-to-class-name function.
    pub fn new(select: impl Fn(&VariantSelection) -> String + Send + Sync + 'static) -> Self {
        Self {
            select: Arc::new(select),
        }
    }

    /// Computes the class-name string for a selection.
    pub fn class_name(&self, selection: &VariantSelection) -> String {
        (self.select)(selection)
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Selector")
    }
}

/// The variant-pattern compiler this crate depends on but never calls.
///
/// Implementations turn a full [`PatternOptions`] into a runtime
/// [`Selector`]. The factory only needs the *type* of this capability; the
/// build transform owns the implementation.
pub trait PatternCompiler {
    /// Compiles pattern options into a selector.
    ///
    /// # Errors
    ///
    /// Implementations are expected to run [`PatternOptions::validate`]
    /// first and surface its [`PatternError`].
    fn compile(&self, options: &PatternOptions) -> Result<Selector, PatternError>;
}

/// The call-site rewriter this crate depends on but never calls.
///
/// Implementations replace a located `styled(component, options)` call with
/// a constructed [`StyledComponent`] (a serialized component reference plus
/// a compiled selector) before the program runs.
pub trait CallSiteRewriter {
    /// Rewrites one extracted call site into its runtime replacement.
    fn rewrite(
        &self,
        component: ComponentReference,
        options: &PatternOptions,
    ) -> Result<StyledComponent, PatternError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_points_at_build_pipeline() {
        let msg = BuildTransformMissing.to_string();
        assert!(msg.contains("build transform"));
        assert!(msg.contains("build pipeline"));
        assert!(msg.contains("file an issue"));
    }

    #[test]
    fn test_selector_is_pure_passthrough() {
        let selector = Selector::new(|selection| {
            let mut class = String::from("base");
            for (group, value) in selection.iter() {
                class.push_str(&format!(" {}_{}", group, value));
            }
            class
        });

        let selection = VariantSelection::new().set("size", "small");
        assert_eq!(selector.class_name(&selection), "base size_small");
        // Same input, same output.
        assert_eq!(selector.class_name(&selection), "base size_small");
    }

    #[test]
    fn test_selector_clone_shares_function() {
        let selector = Selector::new(|_| "c".to_string());
        let clone = selector.clone();
        assert_eq!(
            selector.class_name(&VariantSelection::new()),
            clone.class_name(&VariantSelection::new())
        );
    }
}
