//! Fixed-range emoji removal.

use std::sync::LazyLock;

use regex::Regex;

use super::Sanitizer;

/// Emoticons, misc symbols and pictographs, transport and map symbols,
/// misc symbols, dingbats, variation selectors, supplemental symbols and
/// pictographs, regional indicators, symbols and pictographs extended-A,
/// and the zero-width joiner.
static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"[",
        r"\x{1F600}-\x{1F64F}",
        r"\x{1F300}-\x{1F5FF}",
        r"\x{1F680}-\x{1F6FF}",
        r"\x{2600}-\x{26FF}",
        r"\x{2700}-\x{27BF}",
        r"\x{FE00}-\x{FE0F}",
        r"\x{1F900}-\x{1F9FF}",
        r"\x{1F1E6}-\x{1F1FF}",
        r"\x{1FA70}-\x{1FAFF}",
        r"\x{200D}",
        r"]+",
    ))
    .expect("emoji pattern is valid")
});

/// Removes code points from a fixed list of emoji-related Unicode blocks.
///
/// This is not a Unicode emoji-property classifier. Pictographs outside the
/// listed blocks are kept. It does not touch whitespace, so the gaps left
/// behind remain. [`remove_emojis`](crate::remove_emojis) collapses them.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmojiStripper;

impl Sanitizer for EmojiStripper {
    fn sanitize(&self, text: &str) -> String {
        EMOJI.replace_all(text, "").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_emoticons_and_leaves_gap() {
        assert_eq!(EmojiStripper.sanitize("Hi 😊 there"), "Hi  there");
    }

    #[test]
    fn strips_zwj_family_sequence() {
        // man, ZWJ, woman, ZWJ, girl
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
        assert_eq!(EmojiStripper.sanitize(&format!("[{family}]")), "[]");
    }

    #[test]
    fn strips_flags_and_dingbats() {
        // regional indicators R + U, heavy check mark, sun with variation selector
        let text = "\u{1F1F7}\u{1F1FA}ok\u{2714}\u{2600}\u{FE0F}";
        assert_eq!(EmojiStripper.sanitize(text), "ok");
    }

    #[test]
    fn keeps_non_emoji_text() {
        let text = "Привет, мир! こんにちは 123";
        assert_eq!(EmojiStripper.sanitize(text), text);
    }

    #[test]
    fn keeps_code_points_outside_listed_blocks() {
        // U+1FAE8 SHAKING FACE sits in extended-A and is removed;
        // U+2B50 WHITE MEDIUM STAR is in Misc Symbols and Arrows, not listed.
        assert_eq!(EmojiStripper.sanitize("\u{1FAE8}\u{2B50}"), "\u{2B50}");
    }
}
