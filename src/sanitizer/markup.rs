//! Regex passes that remove markup structure.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::Sanitizer;

/// Whole `<style>`/`<script>` blocks in the `block` group, otherwise a
/// single tag.
static STYLE_SCRIPT_OR_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)(?P<block><style\b[^>]*>.*?</style\s*>|<script\b[^>]*>.*?</script\s*>)|<[^>]*>",
    )
    .expect("style/script pattern is valid")
});

/// `class`/`style` attributes with their leading whitespace. Only applied
/// inside a tag.
static CLASS_STYLE_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s+(?:class|style)="[^"]*""#).expect("attribute pattern is valid")
});

/// Any tag, then any `<!--...-->` comment.
///
/// The tag alternative comes first: a conditional comment such as
/// `<!--[if IE]>` ends at its own `>` and the text after it survives.
static TAG_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<[^>]*>|<!--.*?-->").expect("tag/comment pattern is valid")
});

/// First pass: removes `<style>` and `<script>` blocks including their
/// content, and strips `class="..."` / `style="..."` attributes from the
/// remaining tags. Text outside a tag is never touched.
///
/// Matching is case-insensitive and spans line breaks. A block without a
/// closing tag is left for [`TagStripper`], which drops only its tags.
#[derive(Clone, Copy, Debug, Default)]
pub struct StyleScriptStripper;

impl Sanitizer for StyleScriptStripper {
    fn sanitize(&self, text: &str) -> String {
        STYLE_SCRIPT_OR_TAG
            .replace_all(text, |caps: &Captures| {
                if caps.name("block").is_some() {
                    String::new()
                } else {
                    CLASS_STYLE_ATTR.replace_all(&caps[0], "").into_owned()
                }
            })
            .into_owned()
    }
}

/// Second pass: removes every `<...>` tag and `<!--...-->` comment.
///
/// Opening, closing and self-closing tags are all removed, whatever their
/// attributes. A stray `<` with no closing `>` is kept.
#[derive(Clone, Copy, Debug, Default)]
pub struct TagStripper;

impl Sanitizer for TagStripper {
    fn sanitize(&self, text: &str) -> String {
        TAG_COMMENT.replace_all(text, "").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_style_block_with_content() {
        let html = "<head><style type=\"text/css\">\np { margin: 0 }\n</style></head>";
        assert_eq!(StyleScriptStripper.sanitize(html), "<head></head>");
    }

    #[test]
    fn removes_multiple_script_blocks_lazily() {
        let html = "<script>a()</script>keep<script src=\"x.js\"></script>";
        assert_eq!(StyleScriptStripper.sanitize(html), "keep");
    }

    #[test]
    fn removes_class_and_style_attributes() {
        let html = r#"<p class="lead"  style="font-weight:bold" id="intro">Hi</p>"#;
        assert_eq!(StyleScriptStripper.sanitize(html), r#"<p id="intro">Hi</p>"#);
    }

    #[test]
    fn attribute_text_outside_tags_is_kept() {
        let html = r#"a <i></i>class="x" b"#;
        assert_eq!(StyleScriptStripper.sanitize(html), html);
        assert_eq!(
            StyleScriptStripper.sanitize(r#"<b class="x">class="y"</b>"#),
            r#"<b>class="y"</b>"#
        );
    }

    #[test]
    fn unclosed_script_is_left_for_tag_pass() {
        let html = "<script>var x = 1;";
        assert_eq!(StyleScriptStripper.sanitize(html), html);
        assert_eq!(TagStripper.sanitize(html), "var x = 1;");
    }

    #[test]
    fn strips_tags_of_every_kind() {
        let html = r#"<div data-x="1"><br/><img src="a.png" /><span>t</span></div>"#;
        assert_eq!(TagStripper.sanitize(html), "t");
    }

    #[test]
    fn strips_multiline_tag() {
        let html = "<a\n  href=\"/x\"\n>link</a>";
        assert_eq!(TagStripper.sanitize(html), "link");
    }

    #[test]
    fn strips_plain_comment() {
        assert_eq!(TagStripper.sanitize("a<!-- note -->b"), "ab");
    }

    #[test]
    fn keeps_lone_angle_bracket() {
        assert_eq!(TagStripper.sanitize("1 < 2"), "1 < 2");
    }
}
