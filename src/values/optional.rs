//! Optional value conversions
//!
//! Cloud APIs distinguish a field that is unset from one that is set to its
//! zero value, so these helpers keep `Option` in play instead of collapsing
//! to defaults early.

/// Observable state of an optional scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence {
    /// Not set at all
    Absent,
    /// Set to the type's zero value
    Zero,
    /// Set to anything else
    Set,
}

/// Classify an optional value into its three states
pub fn presence<T: Default + PartialEq>(value: &Option<T>) -> Presence {
    match value {
        None => Presence::Absent,
        Some(v) if *v == T::default() => Presence::Zero,
        Some(_) => Presence::Set,
    }
}

/// Wrap a concrete value
#[inline]
pub fn optional_of<T>(value: T) -> Option<T> {
    Some(value)
}

/// Unwrap an optional value, substituting the type's zero value when absent
#[inline]
pub fn value_of<T: Default>(value: Option<T>) -> T {
    value.unwrap_or_default()
}

/// Keep the present entries of a sequence of optional strings
///
/// Absent entries are dropped, so this is not an inverse of
/// [`to_optional_strings`].
pub fn to_concrete_strings<S: AsRef<str>>(values: &[Option<S>]) -> Vec<String> {
    values
        .iter()
        .flatten()
        .map(|s| s.as_ref().to_string())
        .collect()
}

/// One independently owned optional per element
pub fn to_optional_strings<S: AsRef<str>>(values: &[S]) -> Vec<Option<String>> {
    values.iter().map(|s| Some(s.as_ref().to_string())).collect()
}

/// Absent and blank both count as empty
pub fn is_none_or_empty<S: AsRef<str>>(value: Option<S>) -> bool {
    value.map_or(true, |s| s.as_ref().is_empty())
}

/// Exact-match membership test
pub fn contains_str<S: AsRef<str>>(values: &[S], word: &str) -> bool {
    values.iter().any(|item| item.as_ref() == word)
}

/// Parse an optional decimal string
///
/// Malformed text yields `None` rather than an error; only use this for
/// fields where a best-effort value is acceptable.
pub fn to_int64<S: AsRef<str>>(value: Option<S>) -> Option<i64> {
    value.and_then(|s| s.as_ref().parse::<i64>().ok())
}

/// Format an optional integer as a decimal string
pub fn int64_to_string(value: Option<i64>) -> Option<String> {
    value.map(|v| v.to_string())
}
