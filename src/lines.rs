//! Re-expression of a fine-grained alignment as a line-oriented one.
//!
//! The normal, context, and unified renderers all operate on lines. When
//! the configured boundary is anything other than plain newline splitting,
//! the word-level alignment is first regrouped into two full-line texts
//! and re-aligned on newlines; that is how a word-level change shows up as
//! a changed line in hunk output.

use crate::align::{self, Delta, DeltaOp};
use anyhow::Result;

/// Regroup an alignment into full-line lhs/rhs texts.
///
/// `common` blocks contribute the same text to both outputs (the right
/// side's text when `reverse` is set), one-sided blocks contribute to
/// their own side only, and `differing` blocks emit each side's word with
/// a single shared separator, taken from the right side when `reverse` is
/// set. The shared separator is what resolves the ambiguity when the two
/// sides disagree about the whitespace at a change boundary.
#[must_use]
pub fn reduce_to_lines(deltas: &[Delta], reverse: bool) -> (String, String) {
    let mut lhs = String::new();
    let mut rhs = String::new();
    for delta in deltas {
        match delta.op {
            DeltaOp::Common => {
                let text = if reverse {
                    delta.rhs.text()
                } else {
                    delta.lhs.text()
                };
                lhs.push_str(&text);
                rhs.push_str(&text);
            }
            DeltaOp::LeftOnly => lhs.push_str(&delta.lhs.text()),
            DeltaOp::RightOnly => rhs.push_str(&delta.rhs.text()),
            DeltaOp::Differing => {
                let sep = if reverse { &delta.rhs.sep } else { &delta.lhs.sep };
                lhs.push_str(&delta.lhs.word);
                lhs.push_str(sep);
                rhs.push_str(&delta.rhs.word);
                rhs.push_str(sep);
            }
        }
    }
    (lhs, rhs)
}

/// Produce a line-oriented alignment of `lhs` and `rhs`.
///
/// With the plain newline boundary this is a direct line alignment; any
/// other boundary goes through a word-level alignment and
/// [`reduce_to_lines`] first.
///
/// # Errors
///
/// Returns an error if `boundary` is not a valid regex.
pub fn line_align(
    lhs: &str,
    rhs: &str,
    boundary: &str,
    ignore_case: bool,
    reverse: bool,
) -> Result<Vec<Delta>> {
    if boundary == crate::NEWLINE_BOUNDARY {
        return align::align(lhs, rhs, crate::NEWLINE_BOUNDARY, ignore_case);
    }
    let word_deltas = align::align(lhs, rhs, boundary, ignore_case)?;
    let (left_text, right_text) = reduce_to_lines(&word_deltas, reverse);
    align::align(
        &left_text,
        &right_text,
        crate::NEWLINE_BOUNDARY,
        ignore_case,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reduction_reconstructs_unchanged_input() {
        let text = "one two three\n";
        let deltas = align::align(text, text, r"\s+", false).unwrap();
        let (lhs, rhs) = reduce_to_lines(&deltas, false);
        assert_eq!(lhs, text);
        assert_eq!(rhs, text);
    }

    #[test]
    fn differing_block_uses_left_separator_by_default() {
        // "bar" vs "baz" differ; lhs separator is a space, rhs a tab.
        let deltas = align::align("foo bar x", "foo baz\tx", r"\s+", false).unwrap();
        let (lhs, rhs) = reduce_to_lines(&deltas, false);
        assert_eq!(lhs, "foo bar x");
        assert_eq!(rhs, "foo baz x");
    }

    #[test]
    fn differing_block_uses_right_separator_in_reverse() {
        let deltas = align::align("foo bar x", "foo baz\tx", r"\s+", false).unwrap();
        let (lhs, rhs) = reduce_to_lines(&deltas, true);
        assert_eq!(lhs, "foo bar\tx");
        assert_eq!(rhs, "foo baz\tx");
    }

    #[test]
    fn common_block_prefers_right_spacing_in_reverse() {
        let deltas = align::align("a  b", "a b", r"\s+", false).unwrap();
        let (lhs, rhs) = reduce_to_lines(&deltas, true);
        assert_eq!(lhs, "a b");
        assert_eq!(rhs, "a b");
    }

    #[test]
    fn word_change_becomes_line_change() {
        let deltas = line_align("one two\nthree four\n", "one tvo\nthree four\n", r"\s+", false, false).unwrap();
        let ops: Vec<DeltaOp> = deltas.iter().map(|d| d.op).collect();
        assert_eq!(ops, [DeltaOp::Differing, DeltaOp::Common]);
        assert_eq!(deltas[0].lhs.word, "one two");
        assert_eq!(deltas[0].rhs.word, "one tvo");
    }

    #[test]
    fn newline_boundary_is_passed_through() {
        let deltas = line_align("a\nb\n", "a\nc\n", crate::NEWLINE_BOUNDARY, false, false).unwrap();
        let ops: Vec<DeltaOp> = deltas.iter().map(|d| d.op).collect();
        assert_eq!(ops, [DeltaOp::Common, DeltaOp::Differing]);
    }
}
