//! Builder for assembling a configurable [`TextCleaner`].

use crate::error::{HelpersError, Result};
use crate::sanitizer::{
    EmojiStripper, Sanitizer, SanitizerPipeline, StyleScriptStripper, TagStripper, WhitespaceMode,
};
use crate::strings::cut_string;

/// Builder for configuring a [`TextCleaner`].
///
/// Provides a fluent API for choosing the whitespace mode, toggling the
/// markup and emoji passes, bounding input length, and appending custom
/// sanitizers. The compiled patterns are shared process-wide, so building
/// a cleaner never recompiles a regex.
///
/// # Example
///
/// ```
/// use helpers::{CleanerBuilder, RegexSanitizer, WhitespaceMode};
///
/// let cleaner = CleanerBuilder::new()
///     .whitespace(WhitespaceMode::Paragraph)
///     .strip_emojis(true)
///     .max_chars(10_000)
///     .add_sanitizer(RegexSanitizer::new(vec![(r"\d{16}", "[CARD]")]))
///     .build();
///
/// assert_eq!(cleaner.clean("<p>Paid😃</p>\n\n<p>4111111111111111</p>"), "Paid\n[CARD]");
/// ```
pub struct CleanerBuilder {
    whitespace: WhitespaceMode,
    strip_markup: bool,
    strip_emojis: bool,
    max_chars: Option<usize>,
    extra: SanitizerPipeline,
}

impl CleanerBuilder {
    /// Create a new builder with defaults matching [`sanitize_html`](crate::sanitize_html).
    ///
    /// Defaults: flat whitespace, markup stripping on, emoji stripping off,
    /// no input bound, no extra sanitizers.
    pub fn new() -> Self {
        Self {
            whitespace: WhitespaceMode::Flat,
            strip_markup: true,
            strip_emojis: false,
            max_chars: None,
            extra: SanitizerPipeline::new(),
        }
    }

    /// Whitespace normalization applied as the final built-in pass.
    pub fn whitespace(mut self, mode: WhitespaceMode) -> Self {
        self.whitespace = mode;
        self
    }

    /// Whether to run the style/script and tag/comment passes.
    pub fn strip_markup(mut self, enabled: bool) -> Self {
        self.strip_markup = enabled;
        self
    }

    /// Whether to remove emoji code points before whitespace normalization.
    pub fn strip_emojis(mut self, enabled: bool) -> Self {
        self.strip_emojis = enabled;
        self
    }

    /// Cut input to at most `limit` chars before any pass runs.
    ///
    /// A limit of zero is invalid: [`build`](Self::build) ignores it and
    /// [`try_build`](Self::try_build) rejects it.
    pub fn max_chars(mut self, limit: usize) -> Self {
        self.max_chars = Some(limit);
        self
    }

    /// Append a [`Sanitizer`] that runs after the built-in passes.
    ///
    /// Sanitizers run in the order they are added, each receiving the output
    /// of the previous one.
    pub fn add_sanitizer(mut self, sanitizer: impl Sanitizer + 'static) -> Self {
        self.extra.add(sanitizer);
        self
    }

    /// Consume the builder and return a [`TextCleaner`].
    ///
    /// An invalid setting is logged and replaced by its default.
    pub fn build(mut self) -> TextCleaner {
        if let Err(e) = self.check() {
            tracing::warn!("{e}; keeping input unbounded");
            self.max_chars = None;
        }
        self.assemble()
    }

    /// Like [`build`](Self::build), but returns
    /// [`HelpersError::Config`] for an invalid setting.
    pub fn try_build(self) -> Result<TextCleaner> {
        self.check()?;
        Ok(self.assemble())
    }

    fn check(&self) -> Result<()> {
        if self.max_chars == Some(0) {
            return Err(HelpersError::Config("max_chars must be positive".into()));
        }
        Ok(())
    }

    fn assemble(self) -> TextCleaner {
        let mut pipeline = SanitizerPipeline::new();
        if self.strip_markup {
            pipeline.add(StyleScriptStripper);
            pipeline.add(TagStripper);
        }
        if self.strip_emojis {
            pipeline.add(EmojiStripper);
        }
        pipeline.add(self.whitespace);
        if !self.extra.is_empty() {
            pipeline.add(self.extra);
        }

        tracing::debug!(
            "Built text cleaner with {} passes (whitespace: {:?}, max_chars: {:?})",
            pipeline.len(),
            self.whitespace,
            self.max_chars
        );

        TextCleaner {
            pipeline,
            max_chars: self.max_chars,
        }
    }
}

impl Default for CleanerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A configured sanitization pipeline produced by [`CleanerBuilder`].
///
/// Cheap to share: it holds no mutable state and is `Send + Sync`.
pub struct TextCleaner {
    pipeline: SanitizerPipeline,
    max_chars: Option<usize>,
}

impl TextCleaner {
    /// Run the configured passes over `text`.
    pub fn clean(&self, text: &str) -> String {
        match self.max_chars {
            Some(limit) => self.pipeline.sanitize(&cut_string(text, limit)),
            None => self.pipeline.sanitize(text),
        }
    }
}

impl Sanitizer for TextCleaner {
    fn sanitize(&self, text: &str) -> String {
        self.clean(text)
    }
}
