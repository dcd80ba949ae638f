//! tagsmith generates flexible, consistently formatted HTML tags for server-side templates.
//!
//! The crate revolves around one operation: render a tag from a name, optional content, optional
//! attributes and an optional nested block. Whitespace follows the kind of tag being rendered:
//!
//! | Kind         | Examples               | Rendering                          |
//! | ------------ | ---------------------- | ---------------------------------- |
//! | Self-closing | `br`, `hr`, `input`    | `<br>` or `<br />`, content ignored |
//! | Multi-line   | `div`, `ul`, `table`   | content on its own line            |
//! | Single-line  | `h1`, `li`, `span`     | content next to the tags           |
//! | Anything else| `textarea`, `section`  | content as given                   |
//!
//! Boolean attributes such as `checked` and `selected` are mirrored (`checked="checked"`) when
//! set and left out otherwise. The reserved `newline` attribute overrides the whitespace policy
//! for one call and is never rendered.
//!
//! # Example
//!
//! ```
//! use tagsmith::{attrs, Config, Tag, TagRenderer};
//!
//! let renderer = TagRenderer::new();
//!
//! assert_eq!(renderer.render("h1", Some("Header"), &attrs! {}), "<h1>Header</h1>\n");
//! assert_eq!(
//!     renderer.render("div", None, &attrs! { "id" => "comment" }),
//!     "<div id=\"comment\"></div>\n"
//! );
//!
//! let xhtml = TagRenderer::with_config(Config {
//!     output_format_is_xhtml: true,
//!     ..Config::default()
//! });
//!
//! assert_eq!(
//!     xhtml.render_tag(Tag::new("input").attributes(attrs! { "type" => "checkbox", "checked" => true })),
//!     "<input type=\"checkbox\" checked=\"checked\" />\n"
//! );
//! ```
//!
//! Nested blocks render through a [`Template`], which owns the output buffer of a render pass.
//! The [`TagHelper`] exposes the same operation to [`handlebars`] templates as `{{tag ...}}` and
//! `{{#tag ...}}...{{/tag}}`.
//!
//! No escaping is performed on content or attribute values.

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]

use std::fmt;

use tracing::log::*;

pub mod attributes;
mod buffer;
mod config;
pub mod helper;
pub mod tags;

pub use crate::attributes::{to_html_attributes, AttrValue, Attributes, Empties};
pub use crate::buffer::{Emit, Mark, OutputBuffer, Template};
pub use crate::config::Config;
pub use crate::helper::TagHelper;

use crate::attributes::{newline_override, normalize_html_attributes};
use crate::tags::TagKind;

/// The version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns a human-readable version string, e.g. `tagsmith v0.1.1`.
pub fn version() -> String {
    format!("tagsmith v{}", VERSION)
}

/// A nested block. It appends markup to the template it is given; the appended markup becomes
/// the content of the enclosing tag.
pub type Block<'a> = Box<dyn FnOnce(&mut Template<'_>) + 'a>;

/// A single call to the renderer.
pub struct Tag<'a> {
    /// The element name. Not validated.
    pub name: String,

    /// Literal content. `None` leaves the tag empty, while `Some("")` still receives the newline
    /// wrapping of its kind.
    pub content: Option<String>,

    /// Attributes, possibly including the reserved `newline` key.
    pub attributes: Attributes,

    /// Nested block. Takes precedence over `content`.
    pub block: Option<Block<'a>>,
}

impl<'a> Tag<'a> {
    /// A tag with no content, attributes or block.
    pub fn new(name: impl Into<String>) -> Tag<'a> {
        Tag {
            name: name.into(),
            content: None,
            attributes: Attributes::new(),
            block: None,
        }
    }

    /// Sets the literal content.
    pub fn content(mut self, content: impl Into<String>) -> Tag<'a> {
        self.content = Some(content.into());
        self
    }

    /// Replaces the attributes.
    pub fn attributes(mut self, attributes: Attributes) -> Tag<'a> {
        self.attributes = attributes;
        self
    }

    /// Adds a single attribute.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Tag<'a> {
        self.attributes.insert(key, value);
        self
    }

    /// Overrides the whitespace policy for this tag only.
    pub fn newline(self, newline: bool) -> Tag<'a> {
        self.attr(attributes::NEWLINE, newline)
    }

    /// Sets the nested block.
    pub fn block<F>(mut self, block: F) -> Tag<'a>
    where
        F: FnOnce(&mut Template<'_>) + 'a,
    {
        self.block = Some(Box::new(block));
        self
    }
}

impl fmt::Debug for Tag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Tag")
            .field("name", &self.name)
            .field("content", &self.content)
            .field("attributes", &self.attributes)
            .field("block", &self.block.as_ref().map(|_| "(dyn FnOnce)"))
            .finish()
    }
}

/// Renders tags according to a [`Config`].
#[derive(Debug, Clone, Default)]
pub struct TagRenderer {
    config: Config,
}

impl TagRenderer {
    /// A renderer with the default configuration: HTML output, newlines after tags.
    pub fn new() -> TagRenderer {
        TagRenderer::default()
    }

    /// A renderer with the given configuration.
    pub fn with_config(config: Config) -> TagRenderer {
        TagRenderer { config }
    }

    /// The current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Switch between HTML (`<br>`) and XHTML (`<br />`) output.
    pub fn set_xhtml(&mut self, xhtml: bool) {
        self.config.output_format_is_xhtml = xhtml;
    }

    /// Set whether newlines are added after tags and around multi-line content.
    pub fn set_newlines_after_tags(&mut self, newlines: bool) {
        self.config.add_newlines_after_tags = newlines;
    }

    /// Starts a render pass backed by a fresh [`OutputBuffer`].
    pub fn template(&self) -> Template<'_> {
        Template::new(self)
    }

    /// Renders a [`Tag`], running its block (if any) in a render pass of its own.
    pub fn render_tag(&self, tag: Tag<'_>) -> String {
        self.template().tag(tag)
    }

    /// Renders the markup for tag `name`.
    ///
    /// Content is ignored for self-closing tags. The `newline` attribute, if present, decides the
    /// newlines around the content of this call and the newline after a self-closing tag. The
    /// newline after a closing tag always follows the configuration.
    pub fn render(&self, name: &str, content: Option<&str>, attributes: &Attributes) -> String {
        let newline = newline_override(attributes);
        let attributes = normalize_html_attributes(attributes);
        let kind = TagKind::of(name);

        trace!("rendering <{}> as {:?}", name, kind);

        let content_len = content.map_or(0, str::len);
        let mut html = String::with_capacity(name.len() * 2 + attributes.len() + content_len + 8);

        html.push('<');
        html.push_str(name);
        html.push_str(&attributes);

        if kind == TagKind::SelfClosing {
            html.push_str(if self.config.output_format_is_xhtml {
                " />"
            } else {
                ">"
            });
            html.push_str(self.newline(newline));
            return html;
        }

        html.push('>');

        match (kind, content) {
            (_, None) => (),
            (TagKind::MultiLine, Some(content)) => {
                let newline = self.newline(newline);
                html.push_str(newline);
                html.push_str(content);
                html.push_str(newline);
            }
            (TagKind::SingleLine, Some(content)) if newline == Some(true) => {
                html.push('\n');
                html.push_str(content);
                html.push('\n');
            }
            (_, Some(content)) => html.push_str(content),
        }

        html.push_str("</");
        html.push_str(name);
        html.push('>');
        html.push_str(self.newline(None));

        html
    }

    fn newline(&self, over: Option<bool>) -> &'static str {
        if over.unwrap_or(self.config.add_newlines_after_tags) {
            "\n"
        } else {
            ""
        }
    }
}
