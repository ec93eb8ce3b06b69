//! File and directory ignore pattern handling for template capture.
//! This module turns `.gitignore` lines into glob matchers so ignored paths
//! never end up in a captured template.

use crate::error::{Error, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use log::debug;
use std::path::Path;

/// Ignore file read from the root of the captured project
pub const IGNORE_FILE: &str = ".gitignore";

/// Patterns applied to every capture unless disabled in configuration.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[".DS_Store"];

#[derive(Debug, Clone, Copy)]
struct Rule {
    negated: bool,
}

#[derive(Debug, Clone, Copy)]
struct Target {
    rule: usize,
    dir_only: bool,
}

/// Compiled ignore patterns. The last matching pattern decides.
#[derive(Debug)]
pub struct IgnoreMatcher {
    set: GlobSet,
    rules: Vec<Rule>,
    targets: Vec<Target>,
}

impl Default for IgnoreMatcher {
    fn default() -> Self {
        Self { set: GlobSet::empty(), rules: Vec::new(), targets: Vec::new() }
    }
}

fn compile(glob: &str) -> Result<globset::Glob> {
    GlobBuilder::new(glob)
        .literal_separator(true)
        .build()
        .map_err(|e| Error::IgnoreError(format!("invalid pattern '{glob}': {e}")))
}

impl IgnoreMatcher {
    /// Compiles gitignore-style lines. Blank lines and `#` comments are
    /// skipped.
    ///
    /// # Errors
    /// * `Error::IgnoreError` if a pattern is not a valid glob
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GlobSetBuilder::new();
        let mut rules = Vec::new();
        let mut targets = Vec::new();

        for line in patterns {
            let line = line.as_ref().trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (negated, pattern) = match line.strip_prefix('!') {
                Some(rest) => (true, rest),
                None => (false, line),
            };
            let (dir_only, pattern) = match pattern.strip_suffix('/') {
                Some(rest) => (true, rest),
                None => (false, pattern),
            };
            if pattern.is_empty() {
                continue;
            }

            let base = if pattern.contains('/') {
                pattern.trim_start_matches('/').to_string()
            } else {
                format!("**/{pattern}")
            };

            let rule = rules.len();
            rules.push(Rule { negated });

            builder.add(compile(&base)?);
            targets.push(Target { rule, dir_only });
            builder.add(compile(&format!("{base}/**"))?);
            targets.push(Target { rule, dir_only: false });
        }

        let set = builder
            .build()
            .map_err(|e| Error::IgnoreError(format!("ignore patterns failed to build: {e}")))?;

        Ok(Self { set, rules, targets })
    }

    /// Reads `<project_dir>/.gitignore` (when present) and appends `extra`.
    pub fn for_project<P: AsRef<Path>>(
        project_dir: P,
        extra: &[String],
        include_defaults: bool,
    ) -> Result<Self> {
        let ignore_path = project_dir.as_ref().join(IGNORE_FILE);
        let mut patterns: Vec<String> = Vec::new();
        if include_defaults {
            patterns.extend(DEFAULT_IGNORE_PATTERNS.iter().map(|p| p.to_string()));
        }

        if ignore_path.exists() {
            let contents = std::fs::read_to_string(&ignore_path)?;
            debug!("Loaded ignore patterns from {}", ignore_path.display());
            patterns.extend(contents.lines().map(str::to_string));
        } else {
            debug!("{IGNORE_FILE} does not exist");
        }
        patterns.extend(extra.iter().cloned());

        Self::new(patterns)
    }

    /// Whether the slash-separated relative `path` is excluded.
    pub fn is_ignored(&self, path: &str, is_dir: bool) -> bool {
        self.set
            .matches(path)
            .into_iter()
            .map(|index| self.targets[index])
            .filter(|target| is_dir || !target.dir_only)
            .map(|target| target.rule)
            .max()
            .is_some_and(|rule| !self.rules[rule].negated)
    }
}
