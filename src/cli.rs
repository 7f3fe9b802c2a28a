//! Command-line interface definitions for wordiff.
//!
//! This module contains the CLI argument parsing structure using clap's
//! derive macros, mirroring the classic wdiff/diff option surface.
//!
//! Note: Field-level documentation is provided via clap doc comments, so
//! missing_docs is allowed here to avoid redundant documentation.

#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use crate::{DiffOptions, DiffStyle, WordMarkers};
use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// Main CLI structure for wordiff.
#[derive(Parser)]
#[command(
    name = "wordiff",
    version = crate::VERSION,
    about = "Word- and line-granular text diff",
    long_about = "Compares two files at word or line granularity and renders \
                  wdiff-style, normal, context, or unified diff output"
)]
pub struct Cli {
    /// Older file
    #[arg(required_unless_present = "completions")]
    pub file1: Option<PathBuf>,

    /// Newer file
    #[arg(required_unless_present = "completions")]
    pub file2: Option<PathBuf>,

    /// Fold character case while comparing
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Override the whitespace boundary regex
    #[arg(short = 'r', long = "regex", value_name = "RE", default_value = crate::WS_BOUNDARY)]
    pub regex: String,

    /// Break at word boundaries (same as -r '\s+|\b')
    #[arg(short = 'b', long)]
    pub word_boundaries: bool,

    /// Prefer the new spacing in diff output
    #[arg(long)]
    pub reverse: bool,

    /// Output a word diff (default)
    #[arg(long)]
    pub wdiff: bool,

    /// Output a normal (old-style) diff
    #[arg(long)]
    pub normal: bool,

    /// Output a context diff
    #[arg(short = 'c')]
    pub context: bool,

    /// Output a context diff with NUM (default 3) lines of context
    #[arg(
        short = 'C',
        long = "context",
        value_name = "NUM",
        num_args = 0..=1,
        default_missing_value = "3"
    )]
    pub context_lines: Option<usize>,

    /// Output a unified diff
    #[arg(short = 'u')]
    pub unified: bool,

    /// Output a unified diff with NUM (default 3) lines of context
    #[arg(
        short = 'U',
        long = "unified",
        value_name = "NUM",
        num_args = 0..=1,
        default_missing_value = "3"
    )]
    pub unified_context: Option<usize>,

    /// String to mark start of delete region
    #[arg(short = 'w', long, value_name = "STR", default_value = "[-")]
    pub start_delete: String,

    /// String to mark end of delete region
    #[arg(short = 'x', long, value_name = "STR", default_value = "-]")]
    pub end_delete: String,

    /// String to mark start of insert region
    #[arg(short = 'y', long, value_name = "STR", default_value = "{+")]
    pub start_insert: String,

    /// String to mark end of insert region
    #[arg(short = 'z', long, value_name = "STR", default_value = "+}")]
    pub end_insert: String,

    /// Show debug output on stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Resolve the selected diff style. Explicit style flags win over the
    /// context-size options; the word diff is the default.
    #[must_use]
    pub fn style(&self) -> DiffStyle {
        if self.unified {
            DiffStyle::Unified
        } else if self.context {
            DiffStyle::Context
        } else if self.normal {
            DiffStyle::Normal
        } else if self.wdiff {
            DiffStyle::Word
        } else if self.unified_context.is_some() {
            DiffStyle::Unified
        } else if self.context_lines.is_some() {
            DiffStyle::Context
        } else {
            DiffStyle::Word
        }
    }

    /// The effective boundary pattern.
    #[must_use]
    pub fn boundary(&self) -> &str {
        if self.word_boundaries {
            crate::WORD_BOUNDARY
        } else {
            &self.regex
        }
    }

    /// Collect the comparison options.
    #[must_use]
    pub fn options(&self) -> DiffOptions {
        let context = match self.style() {
            DiffStyle::Unified => self.unified_context.unwrap_or(3),
            _ => self.context_lines.unwrap_or(3),
        };
        DiffOptions {
            boundary: self.boundary().to_string(),
            ignore_case: self.ignore_case,
            reverse: self.reverse,
            context,
            markers: WordMarkers {
                start_delete: self.start_delete.clone(),
                end_delete: self.end_delete.clone(),
                start_insert: self.start_insert.clone(),
                end_insert: self.end_insert.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("wordiff").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn default_style_is_word_diff() {
        let cli = parse(&["a", "b"]);
        assert_eq!(cli.style(), DiffStyle::Word);
        assert_eq!(cli.boundary(), crate::WS_BOUNDARY);
    }

    #[test]
    fn unified_with_context_size() {
        let cli = parse(&["-U", "1", "a", "b"]);
        assert_eq!(cli.style(), DiffStyle::Unified);
        assert_eq!(cli.options().context, 1);
    }

    #[test]
    fn unified_flag_without_size_defaults_to_three() {
        let cli = parse(&["-u", "a", "b"]);
        assert_eq!(cli.style(), DiffStyle::Unified);
        assert_eq!(cli.options().context, 3);
    }

    #[test]
    fn context_flag_selects_context_style() {
        let cli = parse(&["-c", "a", "b"]);
        assert_eq!(cli.style(), DiffStyle::Context);
    }

    #[test]
    fn word_boundaries_flag_overrides_regex() {
        let cli = parse(&["-b", "a", "b"]);
        assert_eq!(cli.boundary(), crate::WORD_BOUNDARY);
    }

    #[test]
    fn custom_markers_are_collected() {
        let cli = parse(&["-w", "<", "-x", ">", "a", "b"]);
        let opts = cli.options();
        assert_eq!(opts.markers.start_delete, "<");
        assert_eq!(opts.markers.end_delete, ">");
        assert_eq!(opts.markers.start_insert, "{+");
    }

    #[test]
    fn files_required_without_completions() {
        assert!(Cli::try_parse_from(["wordiff"]).is_err());
        assert!(Cli::try_parse_from(["wordiff", "--completions", "bash"]).is_ok());
    }
}
