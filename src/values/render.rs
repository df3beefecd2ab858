//! Debug rendering
//!
//! Plain-text and JSON renderings of arbitrary values for log lines. None of
//! these fail: a value that cannot be rendered produces a description of the
//! failure instead.

use super::text_resource::{resource_as_string, TextResource};
use serde::Serialize;
use std::fmt;

/// Rendering of an absent value
pub const NIL: &str = "<nil>";

/// Longest rendered text resource, in characters
pub const MAX_RESOURCE_CHARS: usize = 256;

const TRUNCATED_SUFFIX: &str = "... (truncated)";

/// A value to render, tagged with the capability used to render it
#[derive(Clone, Copy)]
pub enum DebugValue<'a> {
    /// Absent value
    Nil,
    /// Text resource, rendered as its (truncated) content
    Resource(&'a dyn TextResource),
    /// Self-describing value
    Display(&'a dyn fmt::Display),
    /// Anything else, rendered with its `Debug` form
    Debug(&'a dyn fmt::Debug),
}

impl<'a> DebugValue<'a> {
    pub fn resource<R: TextResource + 'a>(resource: &'a R) -> Self {
        DebugValue::Resource(resource)
    }

    pub fn display<D: fmt::Display + 'a>(value: &'a D) -> Self {
        DebugValue::Display(value)
    }

    pub fn debug<D: fmt::Debug + 'a>(value: &'a D) -> Self {
        DebugValue::Debug(value)
    }
}

impl<'a> From<&'a dyn TextResource> for DebugValue<'a> {
    fn from(resource: &'a dyn TextResource) -> Self {
        DebugValue::Resource(resource)
    }
}

impl<'a> From<&'a dyn fmt::Display> for DebugValue<'a> {
    fn from(value: &'a dyn fmt::Display) -> Self {
        DebugValue::Display(value)
    }
}

impl<'a> From<&'a dyn fmt::Debug> for DebugValue<'a> {
    fn from(value: &'a dyn fmt::Debug) -> Self {
        DebugValue::Debug(value)
    }
}

/// Absent at any level of nesting renders as [`NIL`]
impl<'a, T: Into<DebugValue<'a>>> From<Option<T>> for DebugValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(DebugValue::Nil, Into::into)
    }
}

impl fmt::Display for DebugValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebugValue::Nil => f.write_str(NIL),
            DebugValue::Resource(resource) => match resource_as_string(*resource) {
                Ok(s) => f.write_str(&truncate_resource(s)),
                Err(e) => write!(f, "error converting resource to string: {}", e),
            },
            DebugValue::Display(value) => write!(f, "{}", value),
            DebugValue::Debug(value) => write!(f, "{:?}", value),
        }
    }
}

fn truncate_resource(mut s: String) -> String {
    if let Some((idx, _)) = s.char_indices().nth(MAX_RESOURCE_CHARS) {
        s.truncate(idx);
        s.push_str(TRUNCATED_SUFFIX);
    }
    s
}

/// Render a value for a log line
pub fn debug_print<'a>(value: impl Into<DebugValue<'a>>) -> String {
    value.into().to_string()
}

/// Compact JSON for a log line
pub fn debug_as_json_string<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(s) => s,
        Err(e) => format!("error marshaling: {}", e),
    }
}

/// Indented JSON for a log line
pub fn debug_as_json_string_indent<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(s) => s,
        Err(e) => format!("error marshaling: {}", e),
    }
}
