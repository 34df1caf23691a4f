//! Regex-based find-and-replace sanitizer for custom passes.

use std::borrow::Cow;

use regex::Regex;

use super::Sanitizer;
use crate::error::Result;

/// Sanitizer that applies a series of regex find-and-replace rules.
///
/// Rules are applied in order; each rule operates on the output of the
/// previous one. Useful as an extra pass on a
/// [`CleanerBuilder`](crate::CleanerBuilder).
///
/// # Example
///
/// ```
/// use helpers::{RegexSanitizer, Sanitizer};
///
/// let sanitizer = RegexSanitizer::new(vec![(r"\b\d{4}-\d{4}-\d{4}-\d{4}\b", "[CARD]")]);
/// assert_eq!(sanitizer.sanitize("Card: 4111-1111-1111-1111"), "Card: [CARD]");
/// ```
pub struct RegexSanitizer {
    rules: Vec<Rule>,
}

struct Rule {
    pattern: Regex,
    replacement: String,
}

impl RegexSanitizer {
    /// Create a new `RegexSanitizer` from a list of `(pattern, replacement)` pairs.
    ///
    /// Replacements may refer to capture groups as `$1` or `${name}`.
    ///
    /// # Panics
    ///
    /// Panics if any regex pattern is invalid. Use [`try_new`](Self::try_new)
    /// for a fallible alternative.
    pub fn new(rules: Vec<(&str, &str)>) -> Self {
        Self::try_new(rules).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Fallible constructor that returns
    /// [`HelpersError::InvalidPattern`](crate::HelpersError::InvalidPattern)
    /// for the first invalid pattern.
    pub fn try_new(rules: Vec<(&str, &str)>) -> Result<Self> {
        let rules = rules
            .into_iter()
            .map(|(pattern, replacement)| {
                Ok(Rule {
                    pattern: Regex::new(pattern)?,
                    replacement: replacement.to_owned(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Sanitizer for RegexSanitizer {
    fn sanitize(&self, text: &str) -> String {
        let mut out = text.to_owned();
        for rule in &self.rules {
            // Borrowed means no match
            let replaced = match rule.pattern.replace_all(&out, rule.replacement.as_str()) {
                Cow::Owned(replaced) => replaced,
                Cow::Borrowed(_) => continue,
            };
            out = replaced;
        }
        out
    }
}
