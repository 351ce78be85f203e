//! Data file loading.
//!
//! File names are checked before touching the filesystem, resolved under the
//! data directory, read whole and split into lines.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::LineEndings;
use crate::error::{FeedError, FeedResult, FormatError};

/// Check that a data file name carries the required extension.
///
/// This is a substring check, so `users.txt.bak` passes.
pub fn check_file_name(name: &str, extension: &str) -> Result<(), FormatError> {
    if name.contains(extension) {
        Ok(())
    } else {
        Err(FormatError::NotTextFile {
            name: name.to_string(),
            extension: extension.to_string(),
        })
    }
}

/// Resolve a data file name against the data directory.
pub fn resolve_path(data_dir: &Path, name: &str) -> PathBuf {
    data_dir.join(name)
}

/// Split file content into lines.
///
/// Surrounding whitespace of the whole content is trimmed first. Blank lines
/// are kept so line numbers stay meaningful; the parsers skip them.
///
/// # Errors
///
/// * `EmptyContent` if `content` is empty.
/// * `NoLines` if nothing but whitespace remains.
pub fn split_lines(content: &str, line_endings: LineEndings) -> Result<Vec<&str>, FormatError> {
    if content.is_empty() {
        return Err(FormatError::EmptyContent);
    }

    let trimmed = content.trim();
    let lines: Vec<&str> = match line_endings {
        LineEndings::Crlf => trimmed.split("\r\n").collect(),
        LineEndings::Any => trimmed
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect(),
    };

    if lines.iter().all(|line| line.trim().is_empty()) {
        return Err(FormatError::NoLines);
    }

    Ok(lines)
}

/// Check, resolve and read a data file.
///
/// The name check runs before any read is attempted.
pub fn read_data_file(data_dir: &Path, name: &str, extension: &str) -> FeedResult<String> {
    check_file_name(name, extension)?;

    let path = resolve_path(data_dir, name);
    tracing::debug!(path = %path.display(), "reading data file");

    fs::read_to_string(&path).map_err(|source| FeedError::Io { path, source })
}
