//! Content-wrapping templates
//!
//! Templates are registered through the environment: `wrap` appends a
//! template to a copy of the inherited list, so registration order along the
//! root-to-leaf path is preserved and siblings never see each other's
//! templates. The write sink composes the list innermost-first: the
//! last-registered template wraps the raw content, and each earlier (outer)
//! template wraps the prior result, giving conventional layout nesting.

use std::sync::Arc;

use crate::content::Content;
use crate::environment::{EnvironmentKey, EnvironmentValues};

/// A content-wrapping transform applied at write time
///
/// Templates with environment slots override `bind`; the sink binds each
/// template to the environment in scope immediately before `apply`.
pub trait Template {
    /// Bind environment slots before `apply`; default no-op
    fn bind(&self, _env: &EnvironmentValues) {}

    /// Wrap the given content
    fn apply(&self, content: Content) -> Content;
}

/// The ordered template list accumulated along a path
pub type TemplateList = Vec<Arc<dyn Template>>;

/// Environment key holding the registered templates, outermost first
pub struct TemplateKey;

impl EnvironmentKey for TemplateKey {
    type Value = TemplateList;

    fn default_value() -> TemplateList {
        Vec::new()
    }
}
