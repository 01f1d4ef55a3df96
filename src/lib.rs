//! Sitewright - a declarative, tree-structured static-site build engine
//!
//! A site is described as a tree of [`Rule`]s. Composite rules expand into a
//! `body`; primitive rules act, the main one being [`Write`], which
//! serializes a [`Content`] value to a file under the output directory. A
//! typed [`EnvironmentValues`](environment::EnvironmentValues) context flows
//! down the tree and can be overridden per subtree, and ancestors can
//! register [`Template`]s that wrap everything their descendants write.
//!
//! # Example
//!
//! ```no_run
//! use sitewright::html;
//! use sitewright::{rules, Content, Rule, RuleExt, Write};
//!
//! struct Home;
//!
//! impl Rule for Home {
//!     fn body(&self) -> sitewright::BoxRule {
//!         Box::new(Write::new(
//!             html::h1(vec![Content::text("Hello")]),
//!             "index.html",
//!         ))
//!     }
//! }
//!
//! # fn main() -> Result<(), sitewright::BuildError> {
//! rules![Home, Home.output_path("mirror")].execute("out")?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod content;
pub mod environment;
pub mod error;
pub mod rule;
pub mod site;
pub mod template;

pub use config::{ConfigError, SiteConfig};
pub use content::{html, Content};
pub use environment::{EnvironmentKey, EnvironmentSlot, EnvironmentValues};
pub use error::BuildError;
pub use rule::{
    BoxRule, EmptyRule, EnvironmentReader, EnvironmentWritingModifier, Rule, RuleExt, RuleList,
    Write,
};
pub use template::{Template, TemplateKey, TemplateList};
