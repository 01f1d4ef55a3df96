//! Ordered composition of sibling rules

use crate::environment::EnvironmentValues;
use crate::error::BuildError;

use super::{BoxRule, Rule};

/// An ordered list of rules run in sequence
///
/// This is the composer for sibling rules, whether listed literally (see the
/// [`rules!`](crate::rules) macro) or produced by iteration — for example,
/// one write rule per blog post. Expansion order is list order; the first
/// failing element aborts the rest.
#[derive(Default)]
pub struct RuleList {
    rules: Vec<BoxRule>,
}

impl RuleList {
    /// An empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule, builder style
    pub fn with(mut self, rule: impl Rule + 'static) -> Self {
        self.push(rule);
        self
    }

    /// Append a rule
    pub fn push(&mut self, rule: impl Rule + 'static) {
        self.rules.push(Box::new(rule));
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Rule for RuleList {
    fn run(&self, env: &EnvironmentValues) -> Result<(), BuildError> {
        for rule in &self.rules {
            rule.run(env)?;
        }
        Ok(())
    }
}

impl From<Vec<BoxRule>> for RuleList {
    fn from(rules: Vec<BoxRule>) -> Self {
        Self { rules }
    }
}

impl FromIterator<BoxRule> for RuleList {
    fn from_iter<I: IntoIterator<Item = BoxRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

/// List sibling rules in execution order
///
/// ```
/// use sitewright::{rules, Content, Write};
///
/// let pages = rules![
///     Write::new(Content::text("home"), "index.html"),
///     Write::new(Content::text("about"), "about.html"),
/// ];
/// assert_eq!(pages.len(), 2);
/// ```
#[macro_export]
macro_rules! rules {
    ($($rule:expr),* $(,)?) => {
        $crate::rule::RuleList::from(vec![
            $(Box::new($rule) as $crate::rule::BoxRule),*
        ])
    };
}
