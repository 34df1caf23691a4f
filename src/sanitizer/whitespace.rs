//! Whitespace normalization, the last pass of every pipeline.

use std::sync::LazyLock;

use regex::Regex;

use super::Sanitizer;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// A line break, any carriage returns before it, and everything blank after
/// it: further line breaks and the next line's indentation.
static LINE_BREAK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r*\n\s*").expect("line break pattern is valid"));

/// How whitespace is normalized after markup has been stripped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WhitespaceMode {
    /// Every whitespace run, line breaks included, becomes one space.
    #[default]
    Flat,
    /// Line-break runs become a single `\n`. Blank lines and leading
    /// indentation go away; spaces and tabs inside a line are kept.
    Paragraph,
}

impl WhitespaceMode {
    /// Apply this mode to `text`, trimming both ends.
    pub fn normalize(self, text: &str) -> String {
        let collapsed = match self {
            Self::Flat => WHITESPACE_RUN.replace_all(text, " "),
            Self::Paragraph => LINE_BREAK_RUN.replace_all(text, "\n"),
        };
        collapsed.trim().to_string()
    }
}

impl Sanitizer for WhitespaceMode {
    fn sanitize(&self, text: &str) -> String {
        self.normalize(text)
    }
}
