//! # helpers
//!
//! Small, dependency-backed utilities for web backends: markup-to-text
//! sanitization, deterministic cache keys, hashing, random identifiers,
//! format validators and a few string, number and date helpers.
//!
//! ## Overview
//!
//! The centrepiece is a [`SanitizerPipeline`] of regex passes that turns
//! user-supplied HTML into plain text, in either a flat single-line form
//! ([`sanitize_html`]) or a paragraph-preserving form
//! ([`sanitize_html_with_textarea`]). The same passes can be recombined with
//! [`CleanerBuilder`].
//!
//! [`create_cache_key`] turns any [`CacheKey`] value into a reproducible
//! string by dispatching on its shape.
//!
//! Helpers follow one convention: on bad input they return a sentinel
//! (`""`, `0.0`, `false`, an `"error:"` key) rather than an error. Where the
//! cause matters there is a `try_*` or `validate_*` sibling returning
//! [`Result`].
//!
//! ## Quick start
//!
//! ```rust
//! use helpers::{create_cache_key, sanitize_html, sanitize_html_with_textarea};
//!
//! let html = "<div class=\"post\">Hello <b>there</b><script>track()</script></div>";
//! assert_eq!(sanitize_html(html), "Hello there");
//!
//! let comment = "<p>First line</p>\n\n<p>Second line</p>";
//! assert_eq!(sanitize_html_with_textarea(comment), "First line\nSecond line");
//!
//! assert_eq!(create_cache_key(&[1, 2, 3]), "123");
//! ```
//!
//! All functions are pure and thread-safe. Compiled patterns are built once
//! per process on first use.

pub mod cache_key;
pub mod config;
pub mod dates;
pub mod encoding;
pub mod error;
pub mod hashes;
pub mod numbers;
pub mod random;
pub mod sanitizer;
pub mod strings;
pub mod validators;

pub use cache_key::{CacheKey, Integer, KeyShape, Structured, create_cache_key};
pub use config::{CleanerBuilder, TextCleaner};
pub use error::{HelpersError, Result};
pub use hashes::{HashAlgorithm, hash};
pub use random::CharSet;
pub use sanitizer::{
    EmojiStripper, RegexSanitizer, Sanitizer, SanitizerPipeline, StyleScriptStripper, TagStripper,
    WhitespaceMode, remove_emojis, sanitize_html, sanitize_html_with_textarea,
};
