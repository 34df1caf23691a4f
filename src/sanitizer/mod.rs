//! Markup-to-plain-text sanitization.
//!
//! Sanitizers implement the [`Sanitizer`] trait and are composed into a
//! [`SanitizerPipeline`] that runs them sequentially. The crate ships two
//! fixed pipelines behind [`sanitize_html`] and
//! [`sanitize_html_with_textarea`]:
//!
//! 1. [`StyleScriptStripper`] -- drops `<style>`/`<script>` blocks with their
//!    content, plus `class="..."` and `style="..."` attributes.
//! 2. [`TagStripper`] -- drops every remaining tag and comment.
//! 3. [`WhitespaceMode`] -- flat or paragraph-preserving normalization.
//!
//! The order is fixed: block removal must see the raw markup, before the
//! tag pass splits it apart.
//!
//! This is a best-effort regex stripper, not an HTML parser. It never fails.
//! Every input produces some output, and malformed fragments the patterns
//! do not recognise are left verbatim.

mod emoji;
mod markup;
mod regex;
mod whitespace;

use std::sync::LazyLock;

pub use self::regex::RegexSanitizer;
pub use emoji::EmojiStripper;
pub use markup::{StyleScriptStripper, TagStripper};
pub use whitespace::WhitespaceMode;

/// Trait for text sanitizers.
///
/// Each sanitizer receives a string and returns a transformed version.
/// Implementations must be `Send + Sync` so a pipeline can live in a
/// `static` and be shared across threads.
pub trait Sanitizer: Send + Sync {
    /// Transform the given text, returning the sanitized result.
    fn sanitize(&self, text: &str) -> String;
}

/// An ordered chain of [`Sanitizer`] implementations applied sequentially.
///
/// Each sanitizer receives the output of the previous one. An empty pipeline
/// is a no-op.
pub struct SanitizerPipeline {
    sanitizers: Vec<Box<dyn Sanitizer>>,
}

impl SanitizerPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self {
            sanitizers: Vec::new(),
        }
    }

    /// The markup-stripping pipeline finished with the given whitespace pass.
    pub fn markup(mode: WhitespaceMode) -> Self {
        let mut pipeline = Self::new();
        pipeline.add(StyleScriptStripper);
        pipeline.add(TagStripper);
        pipeline.add(mode);
        pipeline
    }

    /// Append a sanitizer to the end of the pipeline.
    pub fn add(&mut self, sanitizer: impl Sanitizer + 'static) {
        self.sanitizers.push(Box::new(sanitizer));
    }

    /// Run the full pipeline on the given text, returning the final result.
    pub fn sanitize(&self, text: &str) -> String {
        self.sanitizers
            .iter()
            .fold(text.to_string(), |acc, s| s.sanitize(&acc))
    }

    /// Returns `true` if no sanitizers have been added.
    pub fn is_empty(&self) -> bool {
        self.sanitizers.is_empty()
    }

    /// Number of passes in the pipeline.
    pub fn len(&self) -> usize {
        self.sanitizers.len()
    }
}

impl Default for SanitizerPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Sanitizer for SanitizerPipeline {
    fn sanitize(&self, text: &str) -> String {
        SanitizerPipeline::sanitize(self, text)
    }
}

static FLAT: LazyLock<SanitizerPipeline> =
    LazyLock::new(|| SanitizerPipeline::markup(WhitespaceMode::Flat));

static PARAGRAPH: LazyLock<SanitizerPipeline> =
    LazyLock::new(|| SanitizerPipeline::markup(WhitespaceMode::Paragraph));

/// Strip markup and collapse all whitespace to single spaces.
///
/// # Example
///
/// ```
/// use helpers::sanitize_html;
///
/// let text = sanitize_html("<style>body{color:red}</style><p>Hello,\n  <b>world</b></p>");
/// assert_eq!(text, "Hello, world");
/// ```
pub fn sanitize_html(text: &str) -> String {
    FLAT.sanitize(text)
}

/// Strip markup but keep single line breaks between paragraphs.
///
/// Blank lines and line-leading indentation are dropped. Runs of spaces or
/// tabs inside a line are left alone, unlike [`sanitize_html`].
///
/// # Example
///
/// ```
/// use helpers::sanitize_html_with_textarea;
///
/// assert_eq!(sanitize_html_with_textarea("Line 1\n\n   Line  2"), "Line 1\nLine  2");
/// ```
pub fn sanitize_html_with_textarea(text: &str) -> String {
    PARAGRAPH.sanitize(text)
}

/// Remove emoji and pictographic code points, then collapse whitespace.
///
/// Only a fixed set of Unicode blocks is recognised (see [`EmojiStripper`]).
/// Code points from newer blocks pass through untouched.
///
/// ```
/// use helpers::remove_emojis;
///
/// assert_eq!(remove_emojis("Hello, 😃 World!"), "Hello, World!");
/// ```
pub fn remove_emojis(text: &str) -> String {
    WhitespaceMode::Flat.sanitize(&EmojiStripper.sanitize(text))
}
