//! Boundary narrowing for loosely typed image references.

use serde_json::Value;

/// An image reference as handed to the rewriter, before any validation.
///
/// Callers that hold arbitrary data (JSON payloads, optional fields) narrow
/// it into this type first; only `Text` can ever be rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageInput<'a> {
    /// Absent or null.
    Missing,
    /// A text string (possibly empty).
    Text(&'a str),
    /// Present but not a string (number, bool, array, object).
    Other,
}

impl<'a> ImageInput<'a> {
    pub fn from_json(value: &'a Value) -> Self {
        match value {
            Value::Null => ImageInput::Missing,
            Value::String(s) => ImageInput::Text(s),
            _ => ImageInput::Other,
        }
    }

    /// The non-empty text, if any.
    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            ImageInput::Text(s) if !s.is_empty() => Some(s),
            _ => None,
        }
    }
}

impl<'a> From<Option<&'a str>> for ImageInput<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(ImageInput::Missing, ImageInput::Text)
    }
}

impl<'a> From<&'a str> for ImageInput<'a> {
    fn from(value: &'a str) -> Self {
        ImageInput::Text(value)
    }
}

impl<'a> From<&'a Value> for ImageInput<'a> {
    fn from(value: &'a Value) -> Self {
        ImageInput::from_json(value)
    }
}
