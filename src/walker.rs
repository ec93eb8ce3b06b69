//! Directory traversal for template capture.

use crate::error::{Error, Result};
use crate::ignore::IgnoreMatcher;
use log::{debug, warn};
use std::path::Path;
use walkdir::WalkDir;

/// Directory that is never captured.
pub const GIT_DIR: &str = ".git";

/// Relative path of `path` under `root`, slash-separated.
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts = relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>();
    Some(parts.join("/"))
}

fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("'{}' is not valid UTF-8, invalid bytes were replaced", path.display());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    })
}

/// Lists every file under `root` as `(relative path, content)` pairs in
/// lexical order.
///
/// `.git` directories and anything `ignore` excludes are skipped without
/// being descended into. Files whose relative path contains a backslash are
/// skipped with a warning since they could not be created again.
///
/// # Arguments
/// * `root` - Project directory to capture
/// * `ignore` - Compiled ignore patterns
///
/// # Returns
/// * `Result<Vec<(String, String)>>` - Slash-separated relative paths and file text
///
/// # Errors
/// * `Error::IoError` if a directory cannot be read or a file cannot be opened
pub fn list_files<P: AsRef<Path>>(root: P, ignore: &IgnoreMatcher) -> Result<Vec<(String, String)>> {
    let root = root.as_ref();
    let mut files = Vec::new();

    let walker = WalkDir::new(root).sort_by_file_name().into_iter().filter_entry(|entry| {
        if entry.depth() == 0 {
            return true;
        }
        let is_dir = entry.file_type().is_dir();
        if is_dir && entry.file_name() == GIT_DIR {
            return false;
        }
        match relative_path(root, entry.path()) {
            Some(relative) if ignore.is_ignored(&relative, is_dir) => {
                debug!("Skipping ignored path '{relative}'");
                false
            }
            _ => true,
        }
    });

    for entry in walker {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if entry.file_type().is_dir() {
            continue;
        }
        let path = entry.path();
        if !path.is_file() {
            debug!("Skipping '{}', not a regular file", path.display());
            continue;
        }

        let Some(relative) = relative_path(root, path) else {
            continue;
        };
        if relative.contains('\\') {
            warn!("Skipping '{}', backslashes cannot be stored in a template path", path.display());
            continue;
        }
        debug!("Capturing '{relative}'");
        files.push((relative, read_text(path)?));
    }

    Ok(files)
}
