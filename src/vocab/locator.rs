//! Heuristic locator for vocabulary definitions in their source file.
//!
//! This is a best-effort line scanner, not a parser. On a line containing
//! the marker it enters the table, tracks brace depth by counting `{` and
//! `}`, and returns the first line inside the table that quotes the target
//! as a key. Arbitrary source formatting can defeat it.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while reading a vocabulary source.
#[derive(Debug, Error)]
pub enum LocateError {
    /// The source file could not be read.
    #[error("cannot read vocabulary source {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source path cannot be expressed as a `file://` URI.
    #[error("vocabulary source path is not absolute: {}", .0.display())]
    UnsupportedPath(PathBuf),
}

/// Locate `target` inside the table opened by `marker` in the file at `path`.
///
/// Returns the 0-based line number, `Ok(None)` when the table does not
/// mention the target, or an error when the file cannot be read.
pub fn try_locate(path: &Path, marker: &str, target: &str) -> Result<Option<u32>, LocateError> {
    let text = std::fs::read_to_string(path).map_err(|source| LocateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(locate_in_text(&text, marker, target))
}

/// Like [`try_locate`], with read failures logged and treated as "no location".
pub fn locate(path: &Path, marker: &str, target: &str) -> Option<u32> {
    match try_locate(path, marker, target) {
        Ok(line) => line,
        Err(LocateError::Io { ref source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("vocabulary source {} not found", path.display());
            None
        }
        Err(err) => {
            tracing::warn!("{err}");
            None
        }
    }
}

/// The `file://` URI of a vocabulary source path.
pub fn file_uri(path: &Path) -> Result<String, LocateError> {
    url::Url::from_file_path(path)
        .map(String::from)
        .map_err(|()| LocateError::UnsupportedPath(path.to_path_buf()))
}

/// Scan `text` for `target` inside the table opened by `marker`.
pub fn locate_in_text(text: &str, marker: &str, target: &str) -> Option<u32> {
    let lowered_target = target.to_lowercase();
    let mut in_table = false;
    let mut depth: i64 = 0;

    for (i, line) in text.lines().enumerate() {
        if line.contains(marker) {
            in_table = true;
            depth = 0;
        }
        if !in_table {
            continue;
        }

        depth += line.matches('{').count() as i64;
        depth -= line.matches('}').count() as i64;

        if has_quoted_key(&line.to_lowercase(), &lowered_target) || has_quoted(line, target) {
            return Some(i as u32);
        }

        if depth <= 0 {
            in_table = false;
        }
    }
    None
}

/// `'target':`, `"target":` or `"target" =>`, compared case-insensitively
/// by the caller lowering both sides.
fn has_quoted_key(line: &str, target: &str) -> bool {
    ['"', '\''].into_iter().any(|quote| {
        let needle = format!("{quote}{target}{quote}");
        line.match_indices(&needle).any(|(at, _)| {
            let rest = line[at + needle.len()..].trim_start();
            rest.starts_with(':') || rest.starts_with("=>")
        })
    })
}

/// The target quoted anywhere on the line.
fn has_quoted(line: &str, target: &str) -> bool {
    line.contains(&format!("'{target}'")) || line.contains(&format!("\"{target}\""))
}
