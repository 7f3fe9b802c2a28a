//! File-header lines for context and unified diffs.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::path::Path;

/// Build a file-header line for context/unified output, e.g.
/// `+++ foo\t2011-05-08 11:42:48.123456789 -0400`.
///
/// The timestamp is the file's modification time in the local timezone
/// with nine fractional-second digits, followed by the `±HHMM` UTC
/// offset.
///
/// # Errors
///
/// Returns an error if the file's metadata cannot be read.
pub fn file_header(path: &Path, prefix: &str) -> Result<String> {
    let modified = std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .with_context(|| format!("failed to stat {}", path.display()))?;
    let mtime: DateTime<Local> = modified.into();
    Ok(format!(
        "{} {}\t{}",
        prefix,
        path.display(),
        mtime.format("%Y-%m-%d %H:%M:%S%.9f %z")
    ))
}
