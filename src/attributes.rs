//! HTML attribute mappings and their serialization.

use std::fmt;
use std::vec;

use crate::tags::is_boolean_attribute;

/// Reserved attribute that controls the whitespace policy of a single call. It is never rendered.
pub const NEWLINE: &str = "newline";

/// The value of a single attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// No value. Rendered as an empty string.
    Nil,
    /// A flag.
    Bool(bool),
    /// A plain string.
    String(String),
    /// A list of strings, rendered joined by `_`.
    Array(Vec<String>),
}

impl AttrValue {
    /// Returns `true` for nil, `false`, empty or whitespace-only strings, and empty arrays.
    pub fn is_blank(&self) -> bool {
        match self {
            AttrValue::Nil => true,
            AttrValue::Bool(flag) => !flag,
            AttrValue::String(value) => value.trim().is_empty(),
            AttrValue::Array(values) => values.is_empty(),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AttrValue::Nil => Ok(()),
            AttrValue::Bool(flag) => write!(f, "{}", flag),
            AttrValue::String(value) => f.write_str(value),
            AttrValue::Array(values) => f.write_str(&values.join("_")),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> AttrValue {
        AttrValue::String(value.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> AttrValue {
        AttrValue::String(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> AttrValue {
        AttrValue::String(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> AttrValue {
        AttrValue::Bool(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> AttrValue {
        AttrValue::String(value.to_string())
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> AttrValue {
        AttrValue::String(value.to_string())
    }
}

impl From<usize> for AttrValue {
    fn from(value: usize) -> AttrValue {
        AttrValue::String(value.to_string())
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(values: Vec<String>) -> AttrValue {
        AttrValue::Array(values)
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(values: Vec<&str>) -> AttrValue {
        AttrValue::Array(values.into_iter().map(String::from).collect())
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> AttrValue {
        value.map_or(AttrValue::Nil, Into::into)
    }
}

/// An insertion-ordered mapping of attribute names to values.
///
/// Inserting a key that is already present replaces its value without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    /// Creates an empty mapping.
    pub fn new() -> Attributes {
        Attributes::default()
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Attributes {
        self.insert(key, value);
        self
    }

    /// Inserts an attribute, returning the previous value of `key` if there was one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Option<AttrValue> {
        let key = key.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    /// Returns the value of `key`.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Attributes {
        let mut attributes = Attributes::new();
        attributes.extend(iter);
        attributes
    }
}

impl<K, V> Extend<(K, V)> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    fn from(entries: [(K, V); N]) -> Attributes {
        entries.into_iter().collect()
    }
}

impl IntoIterator for Attributes {
    type Item = (String, AttrValue);
    type IntoIter = vec::IntoIter<(String, AttrValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Builds [`Attributes`] from `key => value` pairs, keeping their order.
///
/// ```
/// use tagsmith::attrs;
///
/// let attributes = attrs! { "type" => "checkbox", "checked" => true };
/// assert_eq!(attributes.len(), 2);
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::Attributes::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Attributes::from([
            $(($key, $crate::AttrValue::from($value)),)+
        ])
    };
}

/// Whether [`to_html_attributes`] should render entries with blank values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Empties {
    /// Render every entry, blank or not.
    Keep,
    /// Skip entries whose value [is blank](AttrValue::is_blank).
    Drop,
}

/// Serializes attributes as space-separated `key="value"` pairs.
///
/// Values are not escaped.
///
/// ```
/// use tagsmith::{attrs, to_html_attributes, Empties};
///
/// let attributes = attrs! { "class" => vec!["big", "red"], "title" => "" };
/// assert_eq!(to_html_attributes(&attributes, Empties::Keep), r#"class="big_red" title="""#);
/// assert_eq!(to_html_attributes(&attributes, Empties::Drop), r#"class="big_red""#);
/// ```
pub fn to_html_attributes(attributes: &Attributes, empties: Empties) -> String {
    let mut out = String::new();

    for (key, value) in attributes.iter() {
        if empties == Empties::Drop && value.is_blank() {
            continue;
        }

        if !out.is_empty() {
            out.push(' ');
        }

        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&value.to_string());
        out.push('"');
    }

    out
}

/// Reads the per-call `newline` override.
///
/// A missing or nil value means no override. `true` turns newlines on; any other value turns them
/// off.
pub fn newline_override(attributes: &Attributes) -> Option<bool> {
    match attributes.get(NEWLINE)? {
        AttrValue::Nil => None,
        AttrValue::Bool(true) => Some(true),
        _ => Some(false),
    }
}

/// Renders the attribute section of an opening tag, including its leading space.
///
/// The `newline` key is dropped. Boolean attributes are mirrored (`checked="checked"`) when set
/// and omitted otherwise. Returns an empty string if nothing is left to render.
pub fn normalize_html_attributes(attributes: &Attributes) -> String {
    let normalized: Attributes = attributes
        .iter()
        .filter(|(key, _)| *key != NEWLINE)
        .filter_map(|(key, value)| {
            if !is_boolean_attribute(key) {
                Some((key, value.clone()))
            } else if value.is_blank() {
                None
            } else {
                Some((key, AttrValue::from(key)))
            }
        })
        .collect();

    if normalized.is_empty() {
        String::new()
    } else {
        format!(" {}", to_html_attributes(&normalized, Empties::Keep))
    }
}
