//! Context diff rendering, `diff -c` style.

use super::{hunk_blocks, preface, Side};
use crate::align::{Delta, DeltaOp};

/// One-based inclusive line range of a hunk on one side: `start[,end]`,
/// end omitted when the hunk covers a single line.
fn line_range(blocks: &[Delta], side: Side) -> String {
    let idx = side.token(&blocks[0]).idx;
    let count: isize = blocks
        .iter()
        .map(|b| side.token(b).line_count() as isize)
        .sum();
    if count > 1 {
        format!("{},{}", idx + 1, idx + count)
    } else {
        format!("{}", idx + 1)
    }
}

/// Render one side of a hunk, or nothing if that side has no own changes.
fn hunk_side(blocks: &[Delta], side: Side) -> String {
    if !blocks
        .iter()
        .any(|b| b.op == side.own_op() || b.op == DeltaOp::Differing)
    {
        return String::new();
    }
    let sign = match side {
        Side::Lhs => "- ",
        Side::Rhs => "+ ",
    };
    blocks
        .iter()
        .map(|b| {
            if b.op == DeltaOp::Common {
                preface("  ", &b.lhs)
            } else if b.op == DeltaOp::Differing {
                preface("! ", side.token(b))
            } else if b.op == side.own_op() {
                preface(sign, side.token(b))
            } else {
                String::new()
            }
        })
        .collect()
}

/// Render a linewise alignment as a context diff with `context` lines of
/// context. Identical inputs render as the empty string.
#[must_use]
pub fn render_context(deltas: &[Delta], context: usize) -> String {
    hunk_blocks(deltas, context)
        .iter()
        .map(|blocks| {
            format!(
                "***************\n*** {} ****\n{}--- {} ----\n{}",
                line_range(blocks, Side::Lhs),
                hunk_side(blocks, Side::Lhs),
                line_range(blocks, Side::Rhs),
                hunk_side(blocks, Side::Rhs)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::line_align;
    use pretty_assertions::assert_eq;

    fn context_diff(lhs: &str, rhs: &str, context: usize) -> String {
        let deltas = line_align(lhs, rhs, crate::NEWLINE_BOUNDARY, false, false).unwrap();
        render_context(&deltas, context)
    }

    #[test]
    fn changed_line_with_context() {
        assert_eq!(
            context_diff("1\n2\n3\n4\n5\n", "1\n2\nX\n4\n5\n", 1),
            "***************\n\
             *** 2,4 ****\n\
             \x20 2\n\
             ! 3\n\
             \x20 4\n\
             --- 2,4 ----\n\
             \x20 2\n\
             ! X\n\
             \x20 4\n"
        );
    }

    #[test]
    fn deletion_omits_right_lines() {
        assert_eq!(
            context_diff("a\nb\nc\n", "a\nc\n", 1),
            "***************\n\
             *** 1,3 ****\n\
             \x20 a\n\
             - b\n\
             \x20 c\n\
             --- 1,2 ----\n"
        );
    }

    #[test]
    fn insertion_omits_left_lines() {
        assert_eq!(
            context_diff("a\nc\n", "a\nb\nc\n", 1),
            "***************\n\
             *** 1,2 ****\n\
             --- 1,3 ----\n\
             \x20 a\n\
             + b\n\
             \x20 c\n"
        );
    }

    #[test]
    fn identical_inputs_render_empty() {
        assert_eq!(context_diff("a\nb\n", "a\nb\n", 3), "");
    }

    #[test]
    fn single_line_range_omits_end() {
        assert_eq!(
            context_diff("a\n", "b\n", 3),
            "***************\n\
             *** 1 ****\n\
             ! a\n\
             --- 1 ----\n\
             ! b\n"
        );
    }

    #[test]
    fn long_common_run_splits_hunks() {
        let lhs = "a\n1\n2\n3\n4\n5\n6\n7\n8\nb\n";
        let rhs = "A\n1\n2\n3\n4\n5\n6\n7\n8\nB\n";
        let out = context_diff(lhs, rhs, 2);
        assert_eq!(out.matches("***************\n").count(), 2);
        assert!(out.starts_with("***************\n*** 1,3 ****\n! a\n"));
        assert!(out.contains("*** 8,10 ****\n\x20 7\n\x20 8\n! b\n"));
    }

    #[test]
    fn missing_trailing_newline_is_marked() {
        let out = context_diff("a\nb\n", "a\nc", 1);
        assert!(out.ends_with("! c\n\\ No newline at end of file\n"));
    }
}
