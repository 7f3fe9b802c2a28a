//! Alignment of two token sequences into typed change blocks.
//!
//! The matcher is a direct implementation of the classic matching-blocks
//! LCS routine (recursive longest-match split over a position index of the
//! right side). It is fully deterministic: the longest run wins, ties go
//! to the earliest start on the left side, then the earliest start on the
//! right side. No popularity/junk heuristics are applied, so identical
//! inputs always produce identical alignments.

use crate::token::{Token, Tokenizer};
use anyhow::Result;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::debug;

/// Classification of one aligned block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaOp {
    /// Equal words on both sides (separators may still differ).
    Common,
    /// Content present only on the left side.
    LeftOnly,
    /// Content present only on the right side.
    RightOnly,
    /// Content present on both sides but unequal.
    Differing,
}

/// One aligned change block.
///
/// For [`DeltaOp::LeftOnly`] the `rhs` token is an empty placeholder
/// carrying the position index one before the alignment cursor, and
/// symmetrically for [`DeltaOp::RightOnly`]; that index is what the
/// renderers use for line numbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delta {
    /// Block classification.
    pub op: DeltaOp,
    /// Left-side token.
    pub lhs: Token,
    /// Right-side token.
    pub rhs: Token,
}

/// A maximal run of equal elements: `len` elements starting at `a` on the
/// left and `b` on the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRun {
    /// Start index in the left sequence.
    pub a: usize,
    /// Start index in the right sequence.
    pub b: usize,
    /// Run length; zero only for the trailing sentinel.
    pub len: usize,
}

/// Longest match within `a[alo..ahi]` and `b[blo..bhi]`, using `b2j` as
/// the element-to-positions index of `b`.
fn find_longest_match<T: Eq + Hash>(
    a: &[T],
    b2j: &HashMap<&T, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> MatchRun {
    let (mut besti, mut bestj, mut bestsize) = (alo, blo, 0);
    // j2len maps a position j in b to the length of the longest run ending
    // at a[i-1] and b[j]; rebuilt for every i.
    let mut j2len: HashMap<usize, usize> = HashMap::new();
    for i in alo..ahi {
        let mut next_j2len = HashMap::new();
        if let Some(positions) = b2j.get(&a[i]) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let k = if j > 0 {
                    j2len.get(&(j - 1)).copied().unwrap_or(0) + 1
                } else {
                    1
                };
                // Strict comparison keeps the earliest tie in both
                // dimensions.
                if k > bestsize {
                    besti = i + 1 - k;
                    bestj = j + 1 - k;
                    bestsize = k;
                }
                next_j2len.insert(j, k);
            }
        }
        j2len = next_j2len;
    }
    MatchRun {
        a: besti,
        b: bestj,
        len: bestsize,
    }
}

/// Compute the maximal sequence of non-overlapping matching runs between
/// `a` and `b`, in increasing order on both sides, terminated by a
/// zero-length sentinel at the end of both sequences.
pub fn matching_blocks<T: Eq + Hash>(a: &[T], b: &[T]) -> Vec<MatchRun> {
    let mut b2j: HashMap<&T, Vec<usize>> = HashMap::new();
    for (j, elem) in b.iter().enumerate() {
        b2j.entry(elem).or_default().push(j);
    }

    let mut pending = vec![(0, a.len(), 0, b.len())];
    let mut runs = Vec::new();
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let m = find_longest_match(a, &b2j, alo, ahi, blo, bhi);
        if m.len > 0 {
            if alo < m.a && blo < m.b {
                pending.push((alo, m.a, blo, m.b));
            }
            if m.a + m.len < ahi && m.b + m.len < bhi {
                pending.push((m.a + m.len, ahi, m.b + m.len, bhi));
            }
            runs.push(m);
        }
    }
    runs.sort_unstable_by_key(|m| (m.a, m.b));

    // Merge runs that turned out to be adjacent.
    let mut blocks: Vec<MatchRun> = Vec::new();
    for m in runs {
        match blocks.last_mut() {
            Some(last) if last.a + last.len == m.a && last.b + last.len == m.b => {
                last.len += m.len;
            }
            _ => blocks.push(m),
        }
    }
    blocks.push(MatchRun {
        a: a.len(),
        b: b.len(),
        len: 0,
    });
    blocks
}

/// Tokenize both inputs on `boundary` and align them into change blocks.
///
/// # Errors
///
/// Returns an error if `boundary` is not a valid regex.
pub fn align(lhs: &str, rhs: &str, boundary: &str, ignore_case: bool) -> Result<Vec<Delta>> {
    let atoks = Tokenizer::new(lhs, boundary)?;
    let btoks = Tokenizer::new(rhs, boundary)?;
    Ok(align_tokens(&atoks, &btoks, ignore_case))
}

/// Align two already-built token sequences into change blocks.
///
/// The concatenated `lhs` sides of the result reconstruct the left input
/// and the `rhs` sides the right input; blocks appear in monotonically
/// increasing token-index order on both sides.
#[must_use]
pub fn align_tokens(atoks: &Tokenizer, btoks: &Tokenizer, ignore_case: bool) -> Vec<Delta> {
    let fold = |word: &str| {
        if ignore_case {
            word.to_lowercase()
        } else {
            word.to_string()
        }
    };
    let awords: Vec<String> = atoks.iter().map(|t| fold(&t.word)).collect();
    let bwords: Vec<String> = btoks.iter().map(|t| fold(&t.word)).collect();

    let mut deltas = Vec::new();
    let (mut curi, mut curj) = (0, 0);
    for run in matching_blocks(&awords, &bwords) {
        // Everything strictly between the previous match and this one is a
        // change block; the sentinel run flushes the final change.
        let lhs = atoks.join(curi, run.a);
        let rhs = btoks.join(curj, run.b);
        match (lhs, rhs) {
            (Some(lhs), Some(rhs)) => deltas.push(Delta {
                op: DeltaOp::Differing,
                lhs,
                rhs,
            }),
            (Some(lhs), None) => deltas.push(Delta {
                op: DeltaOp::LeftOnly,
                lhs,
                rhs: Token::empty(run.b as isize - 1),
            }),
            (None, Some(rhs)) => deltas.push(Delta {
                op: DeltaOp::RightOnly,
                lhs: Token::empty(run.a as isize - 1),
                rhs,
            }),
            (None, None) => {}
        }
        if run.len > 0 {
            // Words are equal across the run; only separators can differ
            // (e.g. trailing-newline presence).
            if let (Some(lhs), Some(rhs)) = (
                atoks.join(run.a, run.a + run.len),
                btoks.join(run.b, run.b + run.len),
            ) {
                deltas.push(Delta {
                    op: DeltaOp::Common,
                    lhs,
                    rhs,
                });
            }
        }
        curi = run.a + run.len;
        curj = run.b + run.len;
    }
    debug!(blocks = deltas.len(), "alignment complete");
    deltas
}
