//! The rule tree and its expansion protocol
//!
//! A [`Rule`] is a node in the declarative build tree. Most rules are
//! composite: they assemble further rules in `body`, and the default `run`
//! carries out the expansion protocol — bind the environment into the rule's
//! slots, compute the body once, and run it with the same environment.
//! Primitive rules (the write sink, the scoped modifiers) override `run`
//! directly and never expose a body.
//!
//! Execution is a single depth-first, pre-order traversal: synchronous,
//! sequential, deterministic. The first error aborts the run and propagates
//! to the caller of [`RuleExt::execute`] unchanged.

mod modifiers;
mod sequence;
mod write;

pub use modifiers::{EnvironmentReader, EnvironmentWritingModifier, RuleExt};
pub use sequence::RuleList;
pub use write::Write;

use crate::environment::EnvironmentValues;
use crate::error::BuildError;

/// A boxed rule, the unit of heterogeneous tree composition
pub type BoxRule = Box<dyn Rule>;

/// A node in the declarative build tree
pub trait Rule {
    /// Bind environment values into the rule's slots
    ///
    /// Called by the engine with the environment in scope, immediately before
    /// `body` is read. Rules without slots keep the default no-op.
    fn bind(&self, _env: &EnvironmentValues) {}

    /// The rule's substructure
    ///
    /// Composite rules implement this; it is computed once per expansion, on
    /// demand, after `bind`. The default panics because primitive rules have
    /// no body — they override [`run`](Self::run) instead.
    fn body(&self) -> BoxRule {
        panic!("primitive rules have no body; override `run` instead")
    }

    /// Execute the rule against the environment
    ///
    /// The default implementation is the expansion protocol for composite
    /// rules. Primitive rules override this with their action.
    fn run(&self, env: &EnvironmentValues) -> Result<(), BuildError> {
        self.bind(env);
        self.body().run(env)
    }
}

impl Rule for Box<dyn Rule> {
    fn bind(&self, env: &EnvironmentValues) {
        (**self).bind(env)
    }

    fn body(&self) -> BoxRule {
        (**self).body()
    }

    fn run(&self, env: &EnvironmentValues) -> Result<(), BuildError> {
        (**self).run(env)
    }
}

/// A rule that does nothing; the neutral element of sequencing
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyRule;

impl Rule for EmptyRule {
    fn run(&self, _env: &EnvironmentValues) -> Result<(), BuildError> {
        Ok(())
    }
}
