//! The `tag` helper for [`handlebars`] templates.
//!
//! ```
//! use handlebars::Handlebars;
//! use tagsmith::{helper, Config};
//!
//! let mut registry = Handlebars::new();
//! helper::register(&mut registry, Config::default());
//!
//! let html = registry
//!     .render_template(r#"{{#tag "ul"}}{{tag "li" "A"}}{{tag "li" "B"}}{{/tag}}"#, &())
//!     .unwrap();
//!
//! assert_eq!(html, "<ul>\n<li>A</li>\n<li>B</li>\n\n</ul>\n");
//! ```
//!
//! Handlebars hands hash arguments over sorted by key, so attributes set from a template render
//! in alphabetical order.

use std::io;

use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, JsonValue, Output, RenderContext,
    RenderError, Renderable,
};
use tracing::log::*;

use crate::{AttrValue, Attributes, Config, TagRenderer};

/// Name the helper is registered under by [`register`].
pub const HELPER_NAME: &str = "tag";

/// Renders tags from handlebars templates.
///
/// The first parameter is the tag name, the optional second parameter is the content, and hash
/// arguments become attributes. Used as a block helper, the rendered block replaces the content.
#[derive(Debug, Clone, Default)]
pub struct TagHelper {
    renderer: TagRenderer,
}

impl TagHelper {
    /// Creates a helper that renders with `config`.
    pub fn new(config: Config) -> TagHelper {
        TagHelper {
            renderer: TagRenderer::with_config(config),
        }
    }

    /// The renderer backing this helper.
    pub fn renderer(&self) -> &TagRenderer {
        &self.renderer
    }
}

/// Registers a [`TagHelper`] as `tag` on `registry`.
pub fn register(registry: &mut Handlebars<'_>, config: Config) {
    registry.register_helper(HELPER_NAME, Box::new(TagHelper::new(config)));
}

impl HelperDef for TagHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        r: &'reg Handlebars<'reg>,
        ctx: &'rc Context,
        rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let name = h
            .param(0)
            .and_then(|param| param.value().as_str())
            .ok_or_else(|| RenderError::new("tag: expected a tag name as the first parameter"))?;

        let attributes: Attributes = h
            .hash()
            .iter()
            .map(|(key, value)| (*key, attr_value(value.value())))
            .collect();

        let content = match h.template() {
            Some(template) => {
                if h.param(1).is_some() {
                    debug!("<{}> has a block, ignoring its literal content", name);
                }

                let mut captured = Capture::default();
                template.render(r, ctx, rc, &mut captured)?;

                Some(String::from_utf8(captured.0).map_err(|e| {
                    RenderError::new(format!("tag: block output is not valid UTF-8: {}", e))
                })?)
            }
            None => h.param(1).map(|param| json_text(param.value())),
        };

        out.write(&self.renderer.render(name, content.as_deref(), &attributes))?;

        Ok(())
    }
}

/// Collects the output of a rendered block.
#[derive(Debug, Default)]
struct Capture(Vec<u8>);

impl Output for Capture {
    fn write(&mut self, seg: &str) -> Result<(), io::Error> {
        self.0.extend_from_slice(seg.as_bytes());
        Ok(())
    }
}

fn attr_value(json: &JsonValue) -> AttrValue {
    match json {
        JsonValue::Null => AttrValue::Nil,
        JsonValue::Bool(flag) => AttrValue::Bool(*flag),
        JsonValue::String(value) => AttrValue::String(value.clone()),
        JsonValue::Array(values) => AttrValue::Array(values.iter().map(json_text).collect()),
        other => AttrValue::String(other.to_string()),
    }
}

fn json_text(json: &JsonValue) -> String {
    match json {
        JsonValue::Null => String::new(),
        JsonValue::String(value) => value.clone(),
        other => other.to_string(),
    }
}
