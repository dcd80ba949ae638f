use serde::{Deserialize, Serialize};

/// Output options for rendered tags.
///
/// Missing fields take their default when deserialized, so a host can load a partial table from
/// its own settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Close void elements XHTML-style (`<br />`) instead of HTML-style (`<br>`). Defaults to
    /// `false`.
    pub output_format_is_xhtml: bool,

    /// Add a newline after each tag, and around the content of multi-line tags. Defaults to
    /// `true`.
    pub add_newlines_after_tags: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_format_is_xhtml: false,
            add_newlines_after_tags: true,
        }
    }
}
