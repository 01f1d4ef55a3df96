//! The demo site built by the `sitewright` binary
//!
//! A small three-section site: a home page, an archive, and a blog whose
//! posts each override the title for their own write. The blog subtree also
//! registers [`BlogTemplate`] inside whatever outer template the caller
//! wraps the whole site in.

use crate::content::{html, Content};
use crate::environment::{EnvironmentKey, EnvironmentSlot, EnvironmentValues};
use crate::rule::{BoxRule, Rule, RuleExt, RuleList, Write};
use crate::template::Template;

/// The page title in scope, default `"My Site"`
pub struct TitleKey;

impl EnvironmentKey for TitleKey {
    type Value = String;

    fn default_value() -> String {
        "My Site".to_string()
    }
}

const POSTS: &[&str] = &["one", "two", "three"];

/// The home page; its heading shows the title in scope
#[derive(Default)]
pub struct Index {
    title: EnvironmentSlot<TitleKey>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Rule for Index {
    fn bind(&self, env: &EnvironmentValues) {
        self.title.bind(env);
    }

    fn body(&self) -> BoxRule {
        let heading = html::h1(vec![Content::text(format!("Homepage {}", self.title.get()))]);
        Box::new(Write::new(heading, "index.html"))
    }
}

/// The archive landing page
pub struct Archive;

impl Rule for Archive {
    fn body(&self) -> BoxRule {
        Box::new(Write::new(
            html::h1(vec![Content::text("Archive")]),
            "index.html",
        ))
    }
}

/// One write per post, each with its own title override
pub struct Blog;

impl Rule for Blog {
    fn body(&self) -> BoxRule {
        let posts: RuleList = POSTS
            .iter()
            .map(|post| {
                let write = Write::new(Content::text(*post), format!("{post}.html"));
                Box::new(write.environment::<TitleKey>(format!("Blog - {post}"))) as BoxRule
            })
            .collect();
        Box::new(posts)
    }
}

/// The site root: home page, archive, and blog sections
pub struct Site;

impl Rule for Site {
    fn body(&self) -> BoxRule {
        Box::new(crate::rules![
            Index::new(),
            Archive.output_path("archive"),
            Blog.output_path("blog").wrap(BlogTemplate),
        ])
    }
}

/// The outermost layout: a full HTML document titled from the environment
#[derive(Default)]
pub struct SiteTemplate {
    title: EnvironmentSlot<TitleKey>,
}

impl SiteTemplate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Template for SiteTemplate {
    fn bind(&self, env: &EnvironmentValues) {
        self.title.bind(env);
    }

    fn apply(&self, content: Content) -> Content {
        html::html(vec![
            html::head(vec![html::title(vec![Content::text(self.title.get())])]),
            html::body(vec![content]),
        ])
    }
}

/// The blog layout: a section heading above each post
pub struct BlogTemplate;

impl Template for BlogTemplate {
    fn apply(&self, content: Content) -> Content {
        Content::fragment(vec![html::h1(vec![Content::text("Blog")]), content])
    }
}
