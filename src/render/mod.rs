//! Renderers for the four output grammars.
//!
//! All renderers consume an already-computed block sequence and never
//! re-run alignment:
//! - [`word`]: inline word diff with configurable markers
//! - [`normal`]: old-style `NdLcN2` diff
//! - [`context`]: `diff -c` style hunks with a variable context window
//! - [`unified`]: `diff -u` style hunks
//!
//! The context and unified renderers share the hunk grouping and trimming
//! logic in this module.

pub mod context;
pub mod normal;
pub mod unified;
pub mod word;

pub use context::render_context;
pub use normal::render_normal;
pub use unified::render_unified;
pub use word::{render_word, WordMarkers};

use crate::align::{Delta, DeltaOp};
use crate::token::{count_lines, Token};

/// Marker line appended after a block whose text lacks a final newline.
pub const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";

/// Close a rendered block, appending the no-newline marker line if the
/// block's text is not newline-terminated.
fn close_block(mut block: String) -> String {
    if !block.ends_with('\n') {
        block.push('\n');
        block.push_str(NO_NEWLINE_MARKER);
        block.push('\n');
    }
    block
}

/// Render a token's text with `prefix` prepended to every line, closing
/// the block with [`close_block`].
fn preface(prefix: &str, tok: &Token) -> String {
    let mut out = String::new();
    for (i, line) in tok.word.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(prefix);
        out.push_str(line);
    }
    out.push_str(&tok.sep);
    close_block(out)
}

/// Which side of a block a renderer is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    /// The left (old) input.
    Lhs,
    /// The right (new) input.
    Rhs,
}

impl Side {
    /// The token of `delta` on this side.
    fn token<'a>(self, delta: &'a Delta) -> &'a Token {
        match self {
            Side::Lhs => &delta.lhs,
            Side::Rhs => &delta.rhs,
        }
    }

    /// The one-sided op belonging to this side.
    fn own_op(self) -> DeltaOp {
        match self {
            Side::Lhs => DeltaOp::LeftOnly,
            Side::Rhs => DeltaOp::RightOnly,
        }
    }
}

/// Which end of a common block gets trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrimEnd {
    /// Keep the first `context` lines (outgoing context of a hunk).
    Head,
    /// Keep the last `context` lines (leading context of a hunk).
    Tail,
}

/// Trim a common block against the context window.
///
/// An inner block (one joining two changes inside a hunk) is only trimmed
/// when it exceeds `2 * context` lines; trimming it is what terminates the
/// hunk. Returns the possibly-trimmed block and whether trimming happened.
fn trim(delta: &Delta, end: TrimEnd, inner: bool, context: usize) -> (Delta, bool) {
    debug_assert_eq!(delta.op, DeltaOp::Common);
    // This is a common block in a linewise alignment, so the separators
    // are single newlines and counting lines on the lhs suffices.
    let lines = count_lines(&delta.lhs.text());
    let limit = if inner { context * 2 } else { context };
    if lines <= limit {
        return (delta.clone(), false);
    }
    let all: Vec<&str> = delta.lhs.word.split('\n').collect();
    let word = match end {
        TrimEnd::Head => all[..context].join("\n"),
        TrimEnd::Tail => all[all.len() - context..].join("\n"),
    };
    let adjust = match end {
        TrimEnd::Head => 0,
        TrimEnd::Tail => (lines - context) as isize,
    };
    let trimmed = Delta {
        op: DeltaOp::Common,
        lhs: Token {
            word: word.clone(),
            sep: delta.lhs.sep.clone(),
            idx: delta.lhs.idx + adjust,
        },
        rhs: Token {
            word,
            sep: delta.rhs.sep.clone(),
            idx: delta.rhs.idx + adjust,
        },
    };
    (trimmed, true)
}

/// Group a linewise block stream into hunks with trimmed context.
///
/// A hunk starts at the first change block (after trimming a preceding
/// common block down to its last `context` lines) and keeps absorbing
/// change blocks as long as the common blocks between them fit inside
/// `2 * context` lines; a longer common block is trimmed to `context`
/// head lines and terminates the hunk, with its untrimmed form carried
/// over as the next hunk's leading context.
fn hunk_blocks(deltas: &[Delta], context: usize) -> Vec<Vec<Delta>> {
    let mut stream = deltas.iter().cloned();
    let mut before: Option<Delta> = None;
    let mut next_delta = stream.next();
    if next_delta.as_ref().is_some_and(|d| d.op == DeltaOp::Common) {
        before = next_delta.take();
        next_delta = stream.next();
    }

    let mut hunks = Vec::new();
    while next_delta.is_some() {
        let mut blocks = Vec::new();
        if let Some(b) = before.take() {
            let (lead, _) = trim(&b, TrimEnd::Tail, false, context);
            // With a zero-width context there is no context block at all.
            if context > 0 {
                blocks.push(lead);
            }
        }
        while let Some(delta) = next_delta.take() {
            let after = stream.next();
            next_delta = stream.next();
            blocks.push(delta);
            before = after.clone();
            if let Some(a) = after {
                let (tail, trimmed) = trim(&a, TrimEnd::Head, next_delta.is_some(), context);
                if context > 0 {
                    blocks.push(tail);
                }
                if trimmed {
                    break;
                }
            }
        }
        hunks.push(blocks);
    }
    hunks
}
