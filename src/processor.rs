//! Project materialization.
//! Turns a loaded template plus bound values into files under an output
//! directory.

use crate::binder::{ValueBinder, ValueMap};
use crate::error::{Error, Result};
use crate::rewriter::Rewriter;
use crate::scanner::scan;
use crate::template::{FileRecord, Template};
use log::debug;
use std::path::{Path, PathBuf};

/// A file ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOperation {
    pub target: PathBuf,
    pub content: String,
}

/// Ensures the output directory is safe to write to.
///
/// # Errors
/// * `Error::OutputDirectoryExistsError` if the directory exists and `force` is false
pub fn ensure_output_dir<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() && !force {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(output_dir.to_path_buf())
}

fn is_drive_prefix(component: &str) -> bool {
    let mut chars = component.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(letter), Some(':'), None) if letter.is_ascii_alphabetic()
    )
}

/// Whether a stored template path can be materialized under an output root.
///
/// The path must be relative and slash-separated. It must not contain a
/// backslash, a drive prefix, or `.`, `..` and empty components.
pub fn is_record_path_valid(path: &str) -> bool {
    if path.is_empty() || path.starts_with('/') || path.contains('\\') {
        return false;
    }
    let mut components = path.split('/').peekable();
    if components.peek().is_some_and(|first| is_drive_prefix(first)) {
        return false;
    }
    components.all(|component| !matches!(component, "" | "." | ".."))
}

/// Maps a stored template path onto `output_root` using host separators.
///
/// # Arguments
/// * `path` - Slash-separated path as stored in the template
/// * `output_root` - Directory the project is created in
///
/// # Returns
/// * `Result<PathBuf>` - Target file path strictly below `output_root`
///
/// # Errors
/// * `Error::InvalidPathError` if [`is_record_path_valid`] rejects `path`
pub fn resolve_target_path<P: AsRef<Path>>(path: &str, output_root: P) -> Result<PathBuf> {
    if !is_record_path_valid(path) {
        return Err(Error::InvalidPathError { path: path.to_string() });
    }
    let mut target = output_root.as_ref().to_path_buf();
    target.extend(path.split('/'));
    Ok(target)
}

/// Writes `content` to `path`, creating parent directories as needed.
pub fn write_file<P: AsRef<Path>>(content: &str, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content).map_err(Error::IoError)
}

/// Plans and writes the files of one template under an output root.
pub struct Processor<'a> {
    rewriter: &'a Rewriter,
    output_root: &'a Path,
    values: &'a ValueMap,
}

impl<'a> Processor<'a> {
    /// Creates a new Processor instance.
    ///
    /// # Arguments
    /// * `rewriter` - Rewriter applied to every file body
    /// * `output_root` - Directory the project is created in
    /// * `values` - Bound placeholder values
    pub fn new(rewriter: &'a Rewriter, output_root: &'a Path, values: &'a ValueMap) -> Self {
        Self { rewriter, output_root, values }
    }

    /// Resolves the target of one record and rewrites its content.
    ///
    /// # Arguments
    /// * `record` - File record from the template
    ///
    /// # Returns
    /// * `Result<FileOperation>` - Target path and rewritten content
    ///
    /// # Errors
    /// * `Error::InvalidPathError` if the stored path cannot be materialized
    pub fn process(&self, record: &FileRecord) -> Result<FileOperation> {
        let target = resolve_target_path(&record.path, self.output_root)?;
        debug!("Rendering '{}' to '{}'", record.path, target.display());
        let content = self.rewriter.rewrite(&record.content, self.values);
        Ok(FileOperation { target, content })
    }

    /// Plans every file of `template`. Nothing is written, so an invalid
    /// path anywhere aborts before the output directory is touched.
    pub fn plan(&self, template: &Template) -> Result<Vec<FileOperation>> {
        template.files().map(|record| self.process(record)).collect()
    }

    /// Plans and writes every file of `template`.
    ///
    /// # Returns
    /// * `Result<Vec<PathBuf>>` - Paths written, in template order
    ///
    /// # Errors
    /// * `Error::InvalidPathError` from planning, before anything is written
    /// * `Error::IoError` if a directory or file cannot be created
    pub fn apply(&self, template: &Template) -> Result<Vec<PathBuf>> {
        let operations = self.plan(template)?;
        std::fs::create_dir_all(self.output_root)?;

        let mut written = Vec::with_capacity(operations.len());
        for operation in operations {
            write_file(&operation.content, &operation.target)?;
            written.push(operation.target);
        }
        Ok(written)
    }
}

/// Runs the full create flow: scan, bind, rewrite and write.
///
/// The binder runs to completion before any file is rewritten.
///
/// # Arguments
/// * `template` - Loaded template
/// * `binder` - Source of placeholder values
/// * `rewriter` - Rewriter applied to every file body
/// * `output_root` - Directory the project is created in
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - Paths written, in template order
///
/// # Errors
/// * Any error from the binder, in which case nothing is written
/// * Any error from [`Processor::apply`]
pub fn create_project<P: AsRef<Path>>(
    template: &Template,
    binder: &dyn ValueBinder,
    rewriter: &Rewriter,
    output_root: P,
) -> Result<Vec<PathBuf>> {
    let names = scan(template.contents());
    debug!("Template '{}' references {} variable(s)", template.name(), names.len());

    let values = binder.bind(&names)?;
    Processor::new(rewriter, output_root.as_ref(), &values).apply(template)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_drive_prefix() {
        assert!(is_drive_prefix("C:"));
        assert!(is_drive_prefix("z:"));
        assert!(!is_drive_prefix("C:x"));
        assert!(!is_drive_prefix("1:"));
        assert!(!is_drive_prefix("src"));
    }

    #[test]
    fn test_process_rewrites_content() {
        let rewriter = Rewriter::default();
        let values: ValueMap = [("NAME".to_string(), "demo".to_string())].into_iter().collect();
        let processor = Processor::new(&rewriter, Path::new("out"), &values);

        let operation =
            processor.process(&FileRecord::new("src/main.rs", "// @NAME@\n")).unwrap();
        assert_eq!(operation.target, Path::new("out").join("src").join("main.rs"));
        assert_eq!(operation.content, "// demo\n");
    }

    #[test]
    fn test_plan_rejects_escaping_path() {
        let rewriter = Rewriter::default();
        let values = ValueMap::new();
        let processor = Processor::new(&rewriter, Path::new("out"), &values);
        let template = Template::new(
            "bad",
            vec![FileRecord::new("ok.txt", ""), FileRecord::new("../evil.txt", "")],
        );

        match processor.plan(&template) {
            Err(Error::InvalidPathError { path }) => assert_eq!(path, "../evil.txt"),
            other => panic!("Expected InvalidPathError, got {other:?}"),
        }
    }
}
