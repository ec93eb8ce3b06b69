//! The serialized template model.
//! A template is a name plus the ordered list of files captured from a
//! project directory. This module owns the JSON document shape and nothing
//! else: substitution lives in the rewriter.

use crate::error::{Error, Result};
use crate::ignore::IgnoreMatcher;
use crate::walker::list_files;
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// A single captured file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Slash-separated path relative to the captured root.
    pub path: String,
    /// Raw file text.
    pub content: String,
}

impl FileRecord {
    /// Creates a record, normalizing host path separators to `/`.
    pub fn new<P: Into<String>, C: Into<String>>(path: P, content: C) -> Self {
        let path: String = path.into();
        Self { path: to_slash(&path), content: content.into() }
    }
}

/// A captured project: its name and files in stored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub files: Vec<FileRecord>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<FileRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<FileRecord>>::deserialize(deserializer)?.unwrap_or_default())
}

fn to_slash(path: &str) -> String {
    if std::path::MAIN_SEPARATOR == '/' {
        path.to_string()
    } else {
        path.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

impl Template {
    pub fn new<S: Into<String>>(name: S, files: Vec<FileRecord>) -> Self {
        Self { name: name.into(), files }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterates over the file records in stored order.
    pub fn files(&self) -> impl Iterator<Item = &FileRecord> {
        self.files.iter()
    }

    /// Iterates over every file body, in stored order.
    pub fn contents(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|file| file.content.as_str())
    }

    /// Builds a template from the files found under `root`.
    ///
    /// # Arguments
    /// * `name` - Template name stored in the document
    /// * `root` - Project directory to capture
    /// * `ignore` - Compiled ignore patterns
    ///
    /// # Returns
    /// * `Result<Template>` - Template with files in lexical path order
    ///
    /// # Errors
    /// * `Error::ProjectDirDoesNotExistError` if `root` is not a directory
    /// * Any traversal error from [`list_files`]
    pub fn capture<S, P>(name: S, root: P, ignore: &IgnoreMatcher) -> Result<Self>
    where
        S: Into<String>,
        P: AsRef<Path>,
    {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(Error::ProjectDirDoesNotExistError {
                project_dir: root.display().to_string(),
            });
        }

        let files = list_files(root, ignore)?
            .into_iter()
            .map(|(path, content)| FileRecord::new(path, content))
            .collect::<Vec<_>>();
        debug!("Captured {} file(s) from '{}'", files.len(), root.display());

        Ok(Self::new(name, files))
    }

    /// Parses the JSON document form.
    ///
    /// # Errors
    /// * `Error::TemplateError` if the document does not match the template shape
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::TemplateError(format!("malformed template document: {e}")))
    }

    /// Renders the JSON document form with two-space indentation.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads a template document from disk.
    ///
    /// # Errors
    /// * `Error::IoError` if the file cannot be read
    /// * `Error::TemplateError` if its content is malformed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading template from '{}'", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Writes the template document to disk.
    ///
    /// # Arguments
    /// * `path` - Destination file
    /// * `force` - Whether to overwrite an existing file
    ///
    /// # Errors
    /// * `Error::IoError` if the file cannot be written
    /// * `Error::TemplateFileExistsError` if `path` exists and `force` is false
    pub fn save<P: AsRef<Path>>(&self, path: P, force: bool) -> Result<()> {
        let path = path.as_ref();
        if path.exists() && !force {
            return Err(Error::TemplateFileExistsError { path: path.display().to_string() });
        }
        std::fs::write(path, self.to_json()?)?;
        debug!("Saved template '{}' to '{}'", self.name, path.display());
        Ok(())
    }
}

/// The file name a captured template is saved under when no explicit
/// output path is given.
pub fn default_template_file(name: &str) -> String {
    format!("{name}.json")
}
