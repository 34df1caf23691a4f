//! String trimming and filtering helpers.

use std::sync::LazyLock;

use regex::Regex;

static NON_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Zа-яА-Я]+").expect("letters pattern is valid"));

/// ASCII whitespace only; Unicode spaces inside the text are kept.
static ASCII_WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t\n\x0C\r ]+").expect("whitespace pattern is valid"));

static NON_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9]+").expect("digits pattern is valid"));

/// Keep the first `length` chars of `text`.
///
/// Counts Unicode scalar values, so multi-byte characters are never split.
pub fn cut_string(text: &str, length: usize) -> String {
    match text.char_indices().nth(length) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Trim both ends and collapse inner runs of ASCII whitespace to a single
/// space.
///
/// Unlike [`sanitize_html`](crate::sanitize_html), non-ASCII spaces such as
/// U+00A0 inside the text are left alone. Trimming still removes them at
/// the ends.
pub fn clear_string(text: &str) -> String {
    ASCII_WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Keep only Latin and Russian letters.
///
/// `ё`/`Ё` fall outside `а-я` and are dropped.
pub fn filter_letters(text: &str) -> String {
    NON_LETTERS.replace_all(text.trim(), "").into_owned()
}

/// Keep only ASCII digits.
pub fn filter_digits(text: &str) -> String {
    NON_DIGITS.replace_all(text.trim(), "").into_owned()
}

/// Whether the char count of `text` lies within `[min, max]`.
pub fn check_string_length(text: &str, min: usize, max: usize) -> bool {
    let length = text.chars().count();
    length >= min && length <= max
}
