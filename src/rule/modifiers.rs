//! Scoped environment modifiers and the rule extension methods

use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use crate::environment::{EnvironmentKey, EnvironmentValues};
use crate::error::BuildError;
use crate::template::{Template, TemplateKey};

use super::{BoxRule, Rule};

/// A rule that derives a new environment for its subtree
///
/// Expansion copies the environment in scope, applies the mutation to the
/// copy, and runs the wrapped content with it. Nothing outside the subtree
/// ever observes the derived environment.
pub struct EnvironmentWritingModifier<R> {
    content: R,
    modify: Box<dyn Fn(&mut EnvironmentValues)>,
}

impl<R: Rule> EnvironmentWritingModifier<R> {
    pub fn new(content: R, modify: impl Fn(&mut EnvironmentValues) + 'static) -> Self {
        Self {
            content,
            modify: Box::new(modify),
        }
    }
}

impl<R: Rule> Rule for EnvironmentWritingModifier<R> {
    fn run(&self, env: &EnvironmentValues) -> Result<(), BuildError> {
        let mut scoped = env.clone();
        (self.modify)(&mut scoped);
        self.content.run(&scoped)
    }
}

/// A rule whose structure depends on an environment value
///
/// Expansion reads the value for `K` out of the environment in scope, asks
/// the builder for a rule, and runs that rule with the same, unmodified
/// environment.
pub struct EnvironmentReader<K: EnvironmentKey> {
    build: Box<dyn Fn(K::Value) -> BoxRule>,
    key: PhantomData<K>,
}

impl<K: EnvironmentKey> EnvironmentReader<K> {
    pub fn new(build: impl Fn(K::Value) -> BoxRule + 'static) -> Self {
        Self {
            build: Box::new(build),
            key: PhantomData,
        }
    }
}

impl<K: EnvironmentKey> Rule for EnvironmentReader<K> {
    fn run(&self, env: &EnvironmentValues) -> Result<(), BuildError> {
        let rule = (self.build)(env.get::<K>());
        rule.run(env)
    }
}

/// Chainable modifiers available on every rule
pub trait RuleExt: Rule + Sized {
    /// Override an environment key for this rule's subtree
    fn environment<K: EnvironmentKey>(self, value: K::Value) -> EnvironmentWritingModifier<Self> {
        EnvironmentWritingModifier::new(self, move |env| env.set::<K>(value.clone()))
    }

    /// Scope this rule's output under a subdirectory
    fn output_path(self, segment: impl Into<PathBuf>) -> EnvironmentWritingModifier<Self> {
        let segment = segment.into();
        EnvironmentWritingModifier::new(self, move |env| env.push_output_path(&segment))
    }

    /// Wrap everything this rule writes in a template
    ///
    /// The template is appended to a copy of the inherited list, so it
    /// applies inside any template registered by an ancestor and never leaks
    /// to siblings.
    fn wrap(self, template: impl Template + 'static) -> EnvironmentWritingModifier<Self> {
        let template: Arc<dyn Template> = Arc::new(template);
        EnvironmentWritingModifier::new(self, move |env| {
            let mut templates = env.get::<TemplateKey>();
            templates.push(template.clone());
            env.set::<TemplateKey>(templates);
        })
    }

    /// Run this rule as the root of a build
    ///
    /// Constructs the initial environment from the output directory and
    /// expands the tree. The first error aborts the run and is returned
    /// unchanged.
    fn execute(&self, output_directory: impl Into<PathBuf>) -> Result<(), BuildError> {
        let env = EnvironmentValues::new(output_directory);
        debug!(output_directory = %env.output_directory().display(), "starting build");
        self.run(&env)
    }
}

impl<R: Rule> RuleExt for R {}
