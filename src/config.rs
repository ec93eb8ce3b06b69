//! Configuration handling for pt.
//! Settings are optional. They are read from the first of `pt.json`,
//! `pt.yml` or `pt.yaml` found in the working directory, or from a file
//! passed with `--config`.

use crate::error::{Error, Result};
use crate::rewriter::DEFAULT_MARKERS;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Supported configuration file names
pub const CONFIG_FILES: [&str; 3] = ["pt.json", "pt.yml", "pt.yaml"];

fn default_markers() -> Vec<String> {
    DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Annotation markers recognized when creating a project.
    pub markers: Vec<String>,
    /// Ignore patterns applied on top of the project's `.gitignore`.
    pub ignore: Vec<String>,
    /// Disables the built-in ignore patterns.
    pub skip_defaults: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self { markers: default_markers(), ignore: Vec::new(), skip_defaults: false }
    }
}

/// Parses configuration content, trying JSON first and then YAML.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
///   for the configuration schema
pub fn parse_config(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Reads configuration from an explicit file.
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::ConfigError(format!("cannot read '{}': {e}", path.display()))
    })?;
    parse_config(&content)
}

/// Looks for one of [`CONFIG_FILES`] in `dir`. Missing configuration yields
/// the defaults.
pub fn load_config<P: AsRef<Path>>(dir: P) -> Result<Config> {
    for file in CONFIG_FILES {
        let config_path = dir.as_ref().join(file);
        if config_path.exists() {
            return load_config_file(config_path);
        }
    }
    debug!("No configuration file found (tried: {})", CONFIG_FILES.join(", "));
    Ok(Config::default())
}

/// Resolves the configuration for a run: the explicit file when given,
/// otherwise whatever sits in `dir`.
pub fn get_config<P: AsRef<Path>>(explicit: Option<&Path>, dir: P) -> Result<Config> {
    match explicit {
        Some(path) => load_config_file(path),
        None => load_config(dir),
    }
}
