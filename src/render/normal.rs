//! Normal (old-style) diff rendering.

use super::preface;
use crate::align::{Delta, DeltaOp};
use crate::token::{count_lines, Token};

/// One-based inclusive line range of a token: `start[,end]`, with the end
/// omitted for a single line. An empty placeholder token renders as the
/// line it anchors after, which is how `0a1` headers come out for changes
/// before the first line.
fn line_range(tok: &Token) -> String {
    let count = count_lines(&tok.word) as isize;
    if count > 1 {
        format!("{},{}", tok.idx + 1, tok.idx + count)
    } else {
        format!("{}", tok.idx + 1)
    }
}

/// Render a linewise alignment as a normal diff.
///
/// Each change block becomes a `L[,L2]dacL R[,R2]`-style header followed
/// by the old lines prefixed `< `, a `---` separator when both sides are
/// present, and the new lines prefixed `> `. Identical inputs render as
/// the empty string.
#[must_use]
pub fn render_normal(deltas: &[Delta]) -> String {
    let mut out = String::new();
    for block in deltas {
        let op = match block.op {
            DeltaOp::Common => continue,
            DeltaOp::LeftOnly => 'd',
            DeltaOp::RightOnly => 'a',
            DeltaOp::Differing => 'c',
        };
        out.push_str(&format!(
            "{}{}{}\n",
            line_range(&block.lhs),
            op,
            line_range(&block.rhs)
        ));
        if block.lhs.is_present() {
            out.push_str(&preface("< ", &block.lhs));
            if block.rhs.is_present() {
                out.push_str("---\n");
            }
        }
        if block.rhs.is_present() {
            out.push_str(&preface("> ", &block.rhs));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::line_align;
    use pretty_assertions::assert_eq;

    fn normal_diff(lhs: &str, rhs: &str) -> String {
        let deltas = line_align(lhs, rhs, crate::NEWLINE_BOUNDARY, false, false).unwrap();
        render_normal(&deltas)
    }

    #[test]
    fn changed_line() {
        assert_eq!(normal_diff("a\nb\nc\n", "a\nx\nc\n"), "2c2\n< b\n---\n> x\n");
    }

    #[test]
    fn deleted_lines() {
        assert_eq!(normal_diff("a\nb\nc\n", "a\n"), "2,3d1\n< b\n< c\n");
    }

    #[test]
    fn appended_line() {
        assert_eq!(normal_diff("a\n", "a\nb\n"), "1a2\n> b\n");
    }

    #[test]
    fn insertion_into_empty_input() {
        assert_eq!(normal_diff("", "a\n"), "0a1\n> a\n");
    }

    #[test]
    fn identical_inputs_render_empty() {
        assert_eq!(normal_diff("a\nb\n", "a\nb\n"), "");
    }

    #[test]
    fn missing_trailing_newline_is_marked() {
        assert_eq!(
            normal_diff("a\nb\n", "a\nc"),
            "2c2\n< b\n---\n> c\n\\ No newline at end of file\n"
        );
    }

    #[test]
    fn trailing_newline_only_difference_stays_common() {
        // Words are equal, only the final separator differs; the alignment
        // is a single common block and nothing is rendered.
        assert_eq!(normal_diff("a\nb\n", "a\nb"), "");
    }

    #[test]
    fn multi_line_change_ranges() {
        assert_eq!(
            normal_diff("a\nb\nc\nd\n", "a\nx\ny\nd\n"),
            "2,3c2,3\n< b\n< c\n---\n> x\n> y\n"
        );
    }
}
