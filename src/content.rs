//! HTML content values
//!
//! Rules and templates assemble [`Content`] trees; the write sink serializes
//! them to text at the very end of a run. The engine itself never inspects
//! content structure, it only clones values, passes them through templates,
//! and renders the final tree.
//!
//! Rendering is compact and deterministic: no inserted whitespace, attributes
//! in declaration order, text and attribute values escaped.

use std::fmt::Write as _;

/// A fragment of output markup
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Plain text, escaped on render
    Text(String),
    /// Pre-rendered markup, emitted verbatim
    Raw(String),
    /// An element with a tag, attributes, and child content
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<Content>,
    },
    /// A sequence of sibling fragments
    Fragment(Vec<Content>),
}

impl Content {
    /// Escaped text content
    pub fn text(text: impl Into<String>) -> Self {
        Content::Text(text.into())
    }

    /// Verbatim markup, trusted as-is
    pub fn raw(markup: impl Into<String>) -> Self {
        Content::Raw(markup.into())
    }

    /// An element node
    pub fn element(tag: impl Into<String>, children: Vec<Content>) -> Self {
        Content::Element {
            tag: tag.into(),
            attrs: Vec::new(),
            children,
        }
    }

    /// A sequence of siblings with no wrapping element
    pub fn fragment(parts: Vec<Content>) -> Self {
        Content::Fragment(parts)
    }

    /// Add an attribute; a no-op on non-element content
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Content::Element { ref mut attrs, .. } = self {
            attrs.push((name.into(), value.into()));
        }
        self
    }

    /// Serialize to the text written to disk
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        match self {
            Content::Text(text) => out.push_str(&escape_text(text)),
            Content::Raw(markup) => out.push_str(markup),
            Content::Element {
                tag,
                attrs,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    let _ = write!(out, r#" {}="{}""#, name, escape_attr(value));
                }
                out.push('>');
                for child in children {
                    child.render_into(out);
                }
                let _ = write!(out, "</{}>", tag);
            }
            Content::Fragment(parts) => {
                for part in parts {
                    part.render_into(out);
                }
            }
        }
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

/// Element constructors for the handful of tags the demo site uses
pub mod html {
    use super::Content;

    macro_rules! elements {
        ($($name:ident => $tag:literal),* $(,)?) => {
            $(
                pub fn $name(children: Vec<Content>) -> Content {
                    Content::element($tag, children)
                }
            )*
        };
    }

    elements! {
        html => "html",
        head => "head",
        title => "title",
        body => "body",
        div => "div",
        h1 => "h1",
        p => "p",
        ul => "ul",
        li => "li",
        a => "a",
    }
}
