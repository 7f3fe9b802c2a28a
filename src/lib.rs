#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![allow(clippy::cast_possible_wrap)] // Token counts fit comfortably in isize

//! # Wordiff - Word- and Line-Granular Text Diff
//!
//! Wordiff compares two text documents and renders their differences in
//! one of four grammars: inline word diff (GNU wdiff style), normal
//! (old-style) diff, context diff, and unified diff.
//!
//! ## Pipeline
//!
//! Raw strings are split on a boundary pattern into tokens that preserve
//! the exact separator text, the two token sequences are aligned with a
//! deterministic longest-common-subsequence matcher, and the resulting
//! block sequence is rendered:
//!
//! - [`split`]: lazy, zero-width-aware boundary splitting
//! - [`token`]: token construction and range joining
//! - [`align`]: matching-blocks alignment into typed change blocks
//! - [`lines`]: regrouping a word-level alignment into full lines
//! - [`render`]: the four output renderers
//! - [`header`]: file-header lines for context/unified output
//!
//! Every comparison is a pure function of its two inputs and options;
//! independent comparisons can run in parallel without coordination.
//!
//! ## Example
//!
//! ```
//! use wordiff::{render_diff, DiffOptions, DiffStyle};
//!
//! # fn main() -> anyhow::Result<()> {
//! let out = render_diff("foo bar", "foo baz", DiffStyle::Word, &DiffOptions::default())?;
//! assert_eq!(out, "foo [-bar-]{+baz+}");
//! # Ok(())
//! # }
//! ```

/// Alignment of token sequences into typed change blocks.
pub mod align;

/// Command-line interface definitions (argument parsing structures).
pub mod cli;

/// File-header lines for context and unified diffs.
pub mod header;

/// Line-oriented re-expression of fine-grained alignments.
pub mod lines;

/// Renderers for the four output grammars.
pub mod render;

/// Lazy boundary splitting with zero-width match support.
pub mod split;

/// Tokenization of input text into word/separator units.
pub mod token;

use anyhow::Result;
use tracing::{debug, debug_span};

pub use render::WordMarkers;

/// Current version of the wordiff binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default boundary pattern: runs of whitespace.
pub const WS_BOUNDARY: &str = r"\s+";

/// Boundary pattern that also breaks at word boundaries.
pub const WORD_BOUNDARY: &str = r"\s+|\b";

/// Boundary pattern for plain line splitting. A diff configured with this
/// exact pattern skips the word-level pass entirely.
pub const NEWLINE_BOUNDARY: &str = r"\n";

/// Selected output grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffStyle {
    /// Inline word diff with delete/insert markers.
    Word,
    /// Normal (old-style) diff.
    Normal,
    /// Context diff with a variable context window.
    Context,
    /// Unified diff with a variable context window.
    Unified,
}

/// Options for one comparison.
#[derive(Debug, Clone)]
pub struct DiffOptions {
    /// Boundary regex used to tokenize both inputs.
    pub boundary: String,
    /// Fold character case while comparing.
    pub ignore_case: bool,
    /// Prefer the new side's separators in line-reduced output.
    pub reverse: bool,
    /// Context window for context/unified output.
    pub context: usize,
    /// Delete/insert markers for word output.
    pub markers: WordMarkers,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            boundary: WS_BOUNDARY.to_string(),
            ignore_case: false,
            reverse: false,
            context: 3,
            markers: WordMarkers::default(),
        }
    }
}

/// Compare `lhs` and `rhs` and render the result in `style`.
///
/// Returns the rendered diff, which is the empty string for identical
/// inputs in the line-oriented styles; the word style reproduces the
/// input text in that case. Callers printing file headers should suppress
/// them when the returned diff is empty.
///
/// # Errors
///
/// Returns an error if the configured boundary pattern is not a valid
/// regex.
pub fn render_diff(lhs: &str, rhs: &str, style: DiffStyle, opts: &DiffOptions) -> Result<String> {
    let span = debug_span!("render_diff", style = ?style, boundary = %opts.boundary);
    let _guard = span.enter();

    let out = match style {
        DiffStyle::Word => {
            let deltas = align::align(lhs, rhs, &opts.boundary, opts.ignore_case)?;
            render::render_word(&deltas, &opts.markers)
        }
        DiffStyle::Normal => {
            let deltas =
                lines::line_align(lhs, rhs, &opts.boundary, opts.ignore_case, opts.reverse)?;
            render::render_normal(&deltas)
        }
        DiffStyle::Context => {
            let deltas =
                lines::line_align(lhs, rhs, &opts.boundary, opts.ignore_case, opts.reverse)?;
            render::render_context(&deltas, opts.context)
        }
        DiffStyle::Unified => {
            let deltas =
                lines::line_align(lhs, rhs, &opts.boundary, opts.ignore_case, opts.reverse)?;
            render::render_unified(&deltas, opts.context)
        }
    };
    debug!(bytes = out.len(), "diff rendered");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_style_scenario() {
        let out =
            render_diff("foo bar", "foo baz", DiffStyle::Word, &DiffOptions::default()).unwrap();
        assert_eq!(out, "foo [-bar-]{+baz+}");
    }

    #[test]
    fn normal_style_scenario() {
        let out = render_diff(
            "a\nb\nc\n",
            "a\nx\nc\n",
            DiffStyle::Normal,
            &DiffOptions::default(),
        )
        .unwrap();
        assert_eq!(out, "2c2\n< b\n---\n> x\n");
    }

    #[test]
    fn unified_style_scenario() {
        let opts = DiffOptions {
            context: 1,
            ..DiffOptions::default()
        };
        let out = render_diff(
            "1\n2\n3\n4\n5\n",
            "1\n2\nX\n4\n5\n",
            DiffStyle::Unified,
            &opts,
        )
        .unwrap();
        assert_eq!(out, "@@ -2,3 +2,3 @@\n 2\n-3\n+X\n 4\n");
    }

    #[test]
    fn identical_inputs_render_empty_line_styles() {
        for style in [DiffStyle::Normal, DiffStyle::Context, DiffStyle::Unified] {
            let out = render_diff("same\n", "same\n", style, &DiffOptions::default()).unwrap();
            assert_eq!(out, "", "style {style:?}");
        }
    }

    #[test]
    fn bad_boundary_pattern_is_surfaced() {
        let opts = DiffOptions {
            boundary: "(".to_string(),
            ..DiffOptions::default()
        };
        assert!(render_diff("a", "b", DiffStyle::Word, &opts).is_err());
    }
}
