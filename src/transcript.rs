//! Transcript loading and source-text cleanup.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::AlignError;

/// A verse-number marker (e.g. `१॥`) stranded at the start of a line by the
/// source formatting; it belongs at the end of the previous line.
static STRANDED_VERSE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n(१॥|२॥|३॥|४॥|५॥|६॥|७॥|८॥|९॥|१०॥)\s*").unwrap());

/// Read a transcript into trimmed, non-blank lines (one verse per line).
pub fn load_lines(path: &Path) -> Result<Vec<String>, AlignError> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Rewrite a transcript file in place, folding stranded verse-number markers
/// back onto the line they terminate and separating verses with a blank line.
pub fn cleanup_file(path: &Path) -> Result<(), AlignError> {
    let content = fs::read_to_string(path)?;
    let cleaned = STRANDED_VERSE_NUMBER.replace_all(&content, " $1\n\n");
    fs::write(path, cleaned.trim())?;
    Ok(())
}
