//! Inline word diff, GNU wdiff style.

use crate::align::{Delta, DeltaOp};

/// Marker strings wrapped around deleted and inserted regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMarkers {
    /// Start of a delete region.
    pub start_delete: String,
    /// End of a delete region.
    pub end_delete: String,
    /// Start of an insert region.
    pub start_insert: String,
    /// End of an insert region.
    pub end_insert: String,
}

impl Default for WordMarkers {
    fn default() -> Self {
        Self {
            start_delete: "[-".to_string(),
            end_delete: "-]".to_string(),
            start_insert: "{+".to_string(),
            end_insert: "+}".to_string(),
        }
    }
}

/// Render an alignment as an inline word diff.
///
/// Common blocks pass through literally, one-sided blocks are wrapped in
/// the delete or insert markers, and a differing block emits the wrapped
/// old text immediately followed by the wrapped new text, keeping the new
/// side's separator. Identical inputs therefore reproduce the input text.
#[must_use]
pub fn render_word(deltas: &[Delta], markers: &WordMarkers) -> String {
    let mut out = String::new();
    for delta in deltas {
        match delta.op {
            DeltaOp::Common => {
                out.push_str(&delta.lhs.word);
                out.push_str(&delta.lhs.sep);
            }
            DeltaOp::LeftOnly => {
                out.push_str(&markers.start_delete);
                out.push_str(&delta.lhs.word);
                out.push_str(&markers.end_delete);
                out.push_str(&delta.lhs.sep);
            }
            DeltaOp::RightOnly => {
                out.push_str(&markers.start_insert);
                out.push_str(&delta.rhs.word);
                out.push_str(&markers.end_insert);
                out.push_str(&delta.rhs.sep);
            }
            DeltaOp::Differing => {
                out.push_str(&markers.start_delete);
                out.push_str(&delta.lhs.word);
                out.push_str(&markers.end_delete);
                out.push_str(&markers.start_insert);
                out.push_str(&delta.rhs.word);
                out.push_str(&markers.end_insert);
                out.push_str(&delta.rhs.sep);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::align;
    use pretty_assertions::assert_eq;

    fn word_diff(lhs: &str, rhs: &str) -> String {
        let deltas = align(lhs, rhs, r"\s+", false).unwrap();
        render_word(&deltas, &WordMarkers::default())
    }

    #[test]
    fn changed_word_is_marked_both_ways() {
        assert_eq!(word_diff("foo bar", "foo baz"), "foo [-bar-]{+baz+}");
    }

    #[test]
    fn deleted_word_keeps_left_separator() {
        assert_eq!(word_diff("foo bar baz", "foo baz"), "foo [-bar-] baz");
    }

    #[test]
    fn inserted_word() {
        assert_eq!(word_diff("foo baz", "foo bar baz"), "foo {+bar+} baz");
    }

    #[test]
    fn identical_inputs_reproduce_the_text() {
        assert_eq!(word_diff("foo  bar\n", "foo  bar\n"), "foo  bar\n");
    }

    #[test]
    fn custom_markers() {
        let deltas = align("a b", "a c", r"\s+", false).unwrap();
        let markers = WordMarkers {
            start_delete: "<del>".to_string(),
            end_delete: "</del>".to_string(),
            start_insert: "<ins>".to_string(),
            end_insert: "</ins>".to_string(),
        };
        assert_eq!(render_word(&deltas, &markers), "a <del>b</del><ins>c</ins>");
    }

    #[test]
    fn whole_input_replaced() {
        assert_eq!(word_diff("old", "new"), "[-old-]{+new+}");
    }
}
