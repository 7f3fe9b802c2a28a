//! Tokenization of input text into `(word, separator, index)` units.
//!
//! A [`Tokenizer`] owns the ordered token sequence built from one input
//! string. Concatenating `word + sep` over all tokens reconstructs the
//! input exactly, which is what lets the renderers reproduce the original
//! formatting byte for byte.

use crate::split::split;
use anyhow::{Context, Result};
use regex::Regex;
use std::fmt;

/// One addressable unit of an input: the content between two boundary
/// matches plus the exact separator text that follows it.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    /// Content between boundaries.
    pub word: String,
    /// Exact separator following the word; empty for a final token with no
    /// trailing separator.
    pub sep: String,
    /// Zero-based position in the source sequence. Placeholder tokens for
    /// one-sided change blocks sit one before the alignment cursor, so
    /// this can be `-1`.
    pub idx: isize,
}

impl Token {
    /// Placeholder token standing in for "no content" at a known position.
    #[must_use]
    pub fn empty(idx: isize) -> Self {
        Self {
            word: String::new(),
            sep: String::new(),
            idx,
        }
    }

    /// Whether this token carries any text at all.
    #[must_use]
    pub fn is_present(&self) -> bool {
        !self.word.is_empty() || !self.sep.is_empty()
    }

    /// The token's full text, `word` followed by `sep`.
    #[must_use]
    pub fn text(&self) -> String {
        format!("{}{}", self.word, self.sep)
    }

    /// Number of lines in the token's full text, counting a final
    /// unterminated line as one.
    #[must_use]
    pub fn line_count(&self) -> usize {
        count_lines(&self.text())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.word, self.sep)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Token idx={} word={:?} sep={:?}>",
            self.idx,
            shorten(&self.word),
            self.sep
        )
    }
}

/// Count the lines in `s`, treating a trailing unterminated line as one.
///
/// `""` has zero lines; `"a"` and `"a\n"` both have one.
#[must_use]
pub fn count_lines(s: &str) -> usize {
    s.matches('\n').count() + usize::from(!s.is_empty() && !s.ends_with('\n'))
}

/// Truncate long words for debug output.
fn shorten(s: &str) -> String {
    const MAX: usize = 20;
    let len = s.chars().count();
    if len <= MAX {
        return s.to_string();
    }
    let half = MAX / 2 - 2;
    let head: String = s.chars().take(half).collect();
    let tail: String = s.chars().skip(len - half).collect();
    format!("{head}...{tail}")
}

/// Ordered token sequence built from one input string.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Tokens in input order, with sequential indices starting at zero.
    tokens: Vec<Token>,
}

impl Tokenizer {
    /// Tokenize `text` on the `boundary` regex.
    ///
    /// # Errors
    ///
    /// Returns an error if `boundary` is not a valid regex; no partial
    /// tokenization is produced in that case.
    pub fn new(text: &str, boundary: &str) -> Result<Self> {
        let pattern = Regex::new(boundary)
            .with_context(|| format!("invalid boundary pattern {boundary:?}"))?;
        let mut pieces: Vec<&str> = split(&pattern, text).collect();

        // The split stream has odd length. Normalize it to even so every
        // word pairs with exactly one separator: append an empty trailing
        // separator, or drop a trailing empty content piece.
        if let Some(&last) = pieces.last() {
            if last.is_empty() {
                pieces.pop();
            } else {
                pieces.push("");
            }
        }

        let tokens = pieces
            .chunks_exact(2)
            .enumerate()
            .map(|(i, pair)| Token {
                word: pair[0].to_string(),
                sep: pair[1].to_string(),
                idx: i as isize,
            })
            .collect();
        Ok(Self { tokens })
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the input produced no tokens at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over the tokens in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Build a single token from the range `[first, limit)`.
    ///
    /// Internal separators are preserved, the last token's separator
    /// becomes the result's separator, and the result carries `first` as
    /// its index. An empty range yields `None`, signaling absence of
    /// content on that side of a block.
    ///
    /// # Panics
    ///
    /// Panics if `first > limit` or `limit` exceeds the token count; an
    /// invalid range is a defect in the caller, not a recoverable error.
    #[must_use]
    pub fn join(&self, first: usize, limit: usize) -> Option<Token> {
        assert!(
            first <= limit && limit <= self.tokens.len(),
            "token range {first}..{limit} out of bounds for {} tokens",
            self.tokens.len()
        );
        if limit == first {
            return None;
        }
        let last = limit - 1;
        if last == first {
            return Some(self.tokens[first].clone());
        }
        debug_assert_eq!(self.tokens[first].idx, first as isize);
        let mut word = String::new();
        for tok in &self.tokens[first..last] {
            word.push_str(&tok.word);
            word.push_str(&tok.sep);
        }
        word.push_str(&self.tokens[last].word);
        Some(Token {
            word,
            sep: self.tokens[last].sep.clone(),
            idx: first as isize,
        })
    }
}

impl<'a> IntoIterator for &'a Tokenizer {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
