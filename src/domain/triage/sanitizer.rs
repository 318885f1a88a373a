//! Removal of backend-internal reasoning markup.
//!
//! Some models wrap their deliberation in `<think>...</think>`. Those
//! blocks are stripped before a reply is stored or shown.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a complete reasoning block, shortest match, across newlines.
///
/// Flat removal only: a nested opening marker ends at the first closing
/// marker. An opening marker with no closing marker never matches and is
/// kept as literal text.
static REASONING_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<think>.*?</think>").expect("reasoning pattern is valid"));

/// Strips every reasoning block from `raw` and trims surrounding whitespace.
pub fn clean_response(raw: &str) -> String {
    REASONING_BLOCK.replace_all(raw, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn removes_single_block() {
        assert_eq!(clean_response("A<think>secret</think>B"), "AB");
    }

    #[test]
    fn removes_every_block() {
        let raw = "<think>one</think>Do you<think>two</think> have a fever?<think>three</think>";
        assert_eq!(clean_response(raw), "Do you have a fever?");
    }

    #[test]
    fn removes_multiline_block_and_trims() {
        let raw = "<think>\nThe patient reports\npain.\n</think>\n\nWhere is the pain?  ";
        assert_eq!(clean_response(raw), "Where is the pain?");
    }

    #[test]
    fn unterminated_block_is_literal_text() {
        assert_eq!(
            clean_response("  Where does it hurt? <think>still going"),
            "Where does it hurt? <think>still going"
        );
    }

    #[test]
    fn stray_closing_marker_is_literal_text() {
        assert_eq!(clean_response("done</think> ok"), "done</think> ok");
    }

    #[test]
    fn nested_markers_use_flat_removal() {
        assert_eq!(
            clean_response("<think>a<think>b</think>c</think>D"),
            "c</think>D"
        );
    }

    #[test]
    fn reply_of_only_reasoning_becomes_empty() {
        assert_eq!(clean_response("<think>nothing to say</think>"), "");
    }

    proptest! {
        #[test]
        fn text_without_markers_is_only_trimmed(raw in "[^<>]*") {
            prop_assert_eq!(clean_response(&raw), raw.trim());
        }

        #[test]
        fn wrapped_block_is_removed(prefix in "[a-z ]{0,10}", inner in "[a-z\n ]{0,20}", suffix in "[a-z ]{0,10}") {
            let raw = format!("{}<think>{}</think>{}", prefix, inner, suffix);
            let expected = format!("{}{}", prefix, suffix);
            prop_assert_eq!(clean_response(&raw), expected.trim());
        }
    }
}
