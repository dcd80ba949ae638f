//! Tag and attribute classification tables.

/// Tags rendered across multiple lines, like...
///
/// ```html
/// <body>
/// ...
/// </body>
/// ```
pub const MULTI_LINE_TAGS: &[&str] = &[
    "a", "address", "applet", "bdo", "big", "blockquote", "body", "button", "caption", "center",
    "colgroup", "dd", "dir", "div", "dl", "dt", "fieldset", "form", "frameset", "head", "html",
    "iframe", "map", "noframes", "noscript", "object", "ol", "optgroup", "pre", "script",
    "select", "small", "style", "table", "tbody", "td", "tfoot", "th", "thead", "title", "tr",
    "tt", "ul",
];

/// Tags without a closing form, like `<hr>` or `<hr />`.
pub const SELF_CLOSING_TAGS: &[&str] = &[
    "area", "base", "br", "col", "frame", "hr", "img", "input", "link", "meta", "param",
];

/// Tags rendered on a single line, like `<h1>Header</h1>`.
pub const SINGLE_LINE_TAGS: &[&str] = &[
    "abbr", "acronym", "b", "cite", "code", "del", "dfn", "em", "h1", "h2", "h3", "h4", "h5", "h6",
    "i", "kbd", "label", "legend", "li", "option", "p", "q", "samp", "span", "strong", "sub",
    "sup", "var",
];

/// Attributes whose presence alone is the flag, e.g. `checked="checked"`.
pub const BOOLEAN_ATTRIBUTES: &[&str] = &["selected", "checked", "disabled", "readonly", "multiple"];

/// The whitespace policy a tag is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// No closing tag and no content.
    SelfClosing,
    /// Content goes on its own line by default.
    MultiLine,
    /// Content stays on the same line as the tags unless asked otherwise.
    SingleLine,
    /// Anything else. Content is emitted with no added whitespace.
    Plain,
}

impl TagKind {
    /// Classifies a tag name. Lookup is case-sensitive.
    pub fn of(name: &str) -> TagKind {
        if SELF_CLOSING_TAGS.contains(&name) {
            TagKind::SelfClosing
        } else if MULTI_LINE_TAGS.contains(&name) {
            TagKind::MultiLine
        } else if SINGLE_LINE_TAGS.contains(&name) {
            TagKind::SingleLine
        } else {
            TagKind::Plain
        }
    }
}

/// Returns `true` if `name` is one of the [`BOOLEAN_ATTRIBUTES`].
pub fn is_boolean_attribute(name: &str) -> bool {
    BOOLEAN_ATTRIBUTES.contains(&name)
}
