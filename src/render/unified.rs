//! Unified diff rendering, `diff -u` style.

use super::{hunk_blocks, preface, Side};
use crate::align::{Delta, DeltaOp};

/// Line range of a hunk on one side: one-based `start[,count]`, count
/// omitted when it is one.
fn line_range(blocks: &[Delta], side: Side) -> String {
    let idx = side.token(&blocks[0]).idx;
    let count: isize = blocks
        .iter()
        .map(|b| side.token(b).line_count() as isize)
        .sum();
    if count > 1 {
        format!("{},{}", idx + 1, count)
    } else {
        format!("{}", idx + 1)
    }
}

/// Render the interleaved lines of one hunk: ` ` for common, `-`/`+` for
/// one-sided blocks, and both a `-` and a `+` run for a differing block.
fn hunk_lines(blocks: &[Delta]) -> String {
    blocks
        .iter()
        .map(|b| match b.op {
            DeltaOp::Common => preface(" ", &b.lhs),
            DeltaOp::LeftOnly => preface("-", &b.lhs),
            DeltaOp::RightOnly => preface("+", &b.rhs),
            DeltaOp::Differing => format!("{}{}", preface("-", &b.lhs), preface("+", &b.rhs)),
        })
        .collect()
}

/// Render a linewise alignment as a unified diff with `context` lines of
/// context. Identical inputs render as the empty string.
#[must_use]
pub fn render_unified(deltas: &[Delta], context: usize) -> String {
    hunk_blocks(deltas, context)
        .iter()
        .map(|blocks| {
            format!(
                "@@ -{} +{} @@\n{}",
                line_range(blocks, Side::Lhs),
                line_range(blocks, Side::Rhs),
                hunk_lines(blocks)
            )
        })
        .collect()
}
