//! Output buffering for a single template render pass.

use tracing::log::*;

use crate::{Tag, TagRenderer};

/// Append-only output of a render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputBuffer {
    buf: String,
}

/// A position in an [`OutputBuffer`], marking the start of a capture region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark(usize);

impl OutputBuffer {
    /// Creates an empty buffer.
    pub fn new() -> OutputBuffer {
        OutputBuffer::default()
    }

    /// Appends `text` to the end of the buffer.
    pub fn append(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Marks the current end of the buffer.
    pub fn mark(&self) -> Mark {
        Mark(self.buf.len())
    }

    /// Removes everything appended since `mark` and returns it.
    ///
    /// A mark left stale by an earlier capture that no longer falls on a character boundary
    /// captures nothing.
    pub fn capture_since(&mut self, mark: Mark) -> String {
        if mark.0 >= self.buf.len() || !self.buf.is_char_boundary(mark.0) {
            return String::new();
        }

        self.buf.split_off(mark.0)
    }

    /// Length of the buffered output in bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The buffered output.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consumes the buffer, returning its output.
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Where [`Template::emit`] sends a rendered tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    /// Append the markup to the template's buffer.
    Append,
    /// Hand the markup back to the caller.
    Return,
}

/// A render pass: a [`TagRenderer`] bound to the buffer it writes into.
///
/// Nested blocks receive the same template, so tags appended inside a block land in the block's
/// capture region and become the content of the enclosing tag.
///
/// ```
/// use tagsmith::{attrs, Tag, TagRenderer};
///
/// let renderer = TagRenderer::new();
/// let mut template = renderer.template();
///
/// template.append(Tag::new("ul").attributes(attrs! { "class" => "list" }).block(|t| {
///     t.append(Tag::new("li").content("A"));
///     t.append(Tag::new("li").content("B"));
/// }));
///
/// assert_eq!(
///     template.into_string(),
///     "<ul class=\"list\">\n<li>A</li>\n<li>B</li>\n\n</ul>\n"
/// );
/// ```
#[derive(Debug)]
pub struct Template<'r> {
    renderer: &'r TagRenderer,
    buffer: OutputBuffer,
}

impl<'r> Template<'r> {
    /// Starts a render pass with an empty buffer.
    pub fn new(renderer: &'r TagRenderer) -> Template<'r> {
        Template {
            renderer,
            buffer: OutputBuffer::new(),
        }
    }

    /// The renderer this template renders tags with.
    pub fn renderer(&self) -> &'r TagRenderer {
        self.renderer
    }

    /// Appends literal markup.
    pub fn push(&mut self, text: &str) {
        self.buffer.append(text);
    }

    /// Runs `f` inside a fresh capture region and returns what it appended.
    ///
    /// The captured output is removed from the buffer.
    pub fn capture<F>(&mut self, f: F) -> String
    where
        F: FnOnce(&mut Template<'r>),
    {
        let mark = self.buffer.mark();
        f(self);
        self.buffer.capture_since(mark)
    }

    /// Renders `tag`, then appends it or returns it depending on `emit`.
    ///
    /// If the tag has a block, the block's captured output replaces any literal content.
    pub fn emit(&mut self, tag: Tag<'_>, emit: Emit) -> Option<String> {
        let Tag {
            name,
            content,
            attributes,
            block,
        } = tag;

        let content = match block {
            Some(block) => {
                if content.is_some() {
                    debug!("<{}> has a block, ignoring its literal content", name);
                }

                Some(self.capture(|template| block(template)))
            }
            None => content,
        };

        let html = self
            .renderer
            .render(&name, content.as_deref(), &attributes);

        match emit {
            Emit::Append => {
                self.buffer.append(&html);
                None
            }
            Emit::Return => Some(html),
        }
    }

    /// Renders `tag` and returns the markup without touching the buffer.
    pub fn tag(&mut self, tag: Tag<'_>) -> String {
        self.emit(tag, Emit::Return).unwrap_or_default()
    }

    /// Renders `tag` into the buffer.
    pub fn append(&mut self, tag: Tag<'_>) {
        self.emit(tag, Emit::Append);
    }

    /// The output rendered so far.
    pub fn as_str(&self) -> &str {
        self.buffer.as_str()
    }

    /// Ends the render pass and returns its buffer.
    pub fn into_buffer(self) -> OutputBuffer {
        self.buffer
    }

    /// Ends the render pass and returns its output.
    pub fn into_string(self) -> String {
        self.buffer.into_string()
    }
}
