//! Lazy boundary splitting with zero-width match support.
//!
//! [`split`] behaves like splitting on a capturing pattern: the stream
//! alternates content, separator, content, ... and always starts and ends
//! with content, so it always has an odd number of items. Unlike the usual
//! regex split primitives it handles zero-width separator matches, which is
//! what makes boundary patterns like `\s+|\b` usable.

use regex::{Matches, Regex};
use std::iter::Peekable;

/// Split `text` on `pattern`, yielding alternating content and separator
/// pieces.
///
/// The returned iterator is lazy and single-pass. Two zero-width special
/// cases are handled:
///
/// 1. A zero-width separator immediately following another separator (or
///    the start of string) is skipped, so no spurious empty content piece
///    is produced.
/// 2. A zero-width separator sharing its start position with the next
///    match yields to that non-zero-width candidate. This is best-effort:
///    the match stream has usually already moved past the position, so
///    pattern authors should order alternatives with the non-zero-width
///    branch first (`\s+|\b` rather than `\b|\s+`).
pub fn split<'r, 't>(pattern: &'r Regex, text: &'t str) -> Split<'r, 't> {
    Split {
        text,
        matches: pattern.find_iter(text).peekable(),
        prev_end: 0,
        queued_sep: None,
        done: false,
    }
}

/// Iterator returned by [`split`].
pub struct Split<'r, 't> {
    /// Text being split.
    text: &'t str,
    /// Underlying separator match stream.
    matches: Peekable<Matches<'r, 't>>,
    /// End offset of the previously accepted separator.
    prev_end: usize,
    /// Separator piece to yield before advancing again.
    queued_sep: Option<&'t str>,
    /// Set once the trailing content piece has been yielded.
    done: bool,
}

impl<'t> Iterator for Split<'_, 't> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        if let Some(sep) = self.queued_sep.take() {
            return Some(sep);
        }
        if self.done {
            return None;
        }
        loop {
            let Some(m) = self.matches.next() else {
                // Content following the last separator, possibly empty.
                self.done = true;
                return Some(&self.text[self.prev_end..]);
            };
            let (mut start, mut end) = (m.start(), m.end());

            if start == end && start == self.prev_end {
                // Zero-width separator right after another separator or at
                // the start of string.
                continue;
            }

            while start == end {
                // Prefer a non-zero-width separator at the same position
                // over a zero-width one.
                match self.matches.peek() {
                    Some(n) if n.start() == start => {
                        let n = self.matches.next().unwrap_or(m);
                        start = n.start();
                        end = n.end();
                    }
                    _ => break,
                }
            }

            let content = &self.text[self.prev_end..start];

            if start == self.text.len() {
                // A zero-width match at end of string is not a separator.
                self.done = true;
                return Some(content);
            }

            self.prev_end = end;
            self.queued_sep = Some(&self.text[start..end]);
            return Some(content);
        }
    }
}
