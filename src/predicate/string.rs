//! String predicates.
//!
//! Lengths are measured in `char`s, not bytes.

/// Holds for the empty string.
#[must_use]
pub fn is_empty(value: &str) -> bool {
    value.is_empty()
}

/// Holds for strings containing `needle`.
pub fn includes(needle: impl Into<String>) -> impl Fn(&str) -> bool {
    let needle = needle.into();
    move |value| value.contains(needle.as_str())
}

/// Holds for strings starting with `prefix`.
pub fn starts_with(prefix: impl Into<String>) -> impl Fn(&str) -> bool {
    let prefix = prefix.into();
    move |value| value.starts_with(prefix.as_str())
}

/// Holds for strings ending with `suffix`.
pub fn ends_with(suffix: impl Into<String>) -> impl Fn(&str) -> bool {
    let suffix = suffix.into();
    move |value| value.ends_with(suffix.as_str())
}

/// Holds for strings of at most `count` characters.
pub fn max_len(count: usize) -> impl Fn(&str) -> bool {
    move |value| value.chars().count() <= count
}

/// Holds for strings of at least `count` characters.
pub fn min_len(count: usize) -> impl Fn(&str) -> bool {
    move |value| value.chars().count() >= count
}

/// Holds for strings of exactly `count` characters.
pub fn len(count: usize) -> impl Fn(&str) -> bool {
    move |value| value.chars().count() == count
}
