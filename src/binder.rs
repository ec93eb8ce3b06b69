//! Placeholder value collection.
//! The create flow asks a [`ValueBinder`] for one value per placeholder name
//! before any file is rewritten.

use crate::error::{Error, Result};
use crate::scanner::VariableNames;
use dialoguer::Input;
use indexmap::IndexMap;
use log::debug;
use std::io::Read;

/// Placeholder name to bound value.
pub type ValueMap = IndexMap<String, String>;

/// Source of placeholder values.
///
/// Implementations must return an entry for every requested name. An empty
/// string is a valid value.
pub trait ValueBinder {
    /// Binds a value to each placeholder name.
    ///
    /// # Arguments
    /// * `names` - Distinct placeholder names, in the order to ask for them
    ///
    /// # Returns
    /// * `Result<ValueMap>` - One entry per name, in the same order
    ///
    /// # Errors
    /// * Implementation specific, e.g. `Error::PromptError` when input fails
    fn bind(&self, names: &VariableNames) -> Result<ValueMap>;
}

/// Prompts for each value on the terminal.
pub struct DialoguerBinder;

impl DialoguerBinder {
    /// Creates a new DialoguerBinder instance.
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerBinder {
    fn default() -> Self {
        DialoguerBinder::new()
    }
}

impl ValueBinder for DialoguerBinder {
    fn bind(&self, names: &VariableNames) -> Result<ValueMap> {
        let mut values = ValueMap::with_capacity(names.len());
        if names.is_empty() {
            return Ok(values);
        }

        println!("Provide values for the following template variables:");
        for name in names {
            let input: String = Input::new()
                .with_prompt(name.as_str())
                .allow_empty(true)
                .interact_text()
                .map_err(|e| Error::PromptError(e.to_string()))?;
            values.insert(name.clone(), input.trim().to_string());
        }

        Ok(values)
    }
}

/// Answers taken from a JSON object, for scripted runs and tests.
#[derive(Debug, Default)]
pub struct PresetBinder {
    answers: serde_json::Map<String, serde_json::Value>,
}

impl PresetBinder {
    /// Creates a binder answering from `answers`.
    pub fn new(answers: serde_json::Map<String, serde_json::Value>) -> Self {
        Self { answers }
    }

    /// Builds a binder from a parsed JSON document.
    ///
    /// # Arguments
    /// * `value` - Parsed answers document
    ///
    /// # Errors
    /// * `Error::ConfigError` if `value` is not a JSON object
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Object(answers) => Ok(Self::new(answers)),
            other => Err(Error::ConfigError(format!(
                "answers must be a JSON object, got: {other}"
            ))),
        }
    }

    /// Parses the answers document from text.
    ///
    /// # Errors
    /// * `Error::ConfigError` if `json` is not valid JSON or not an object
    pub fn from_json(json: &str) -> Result<Self> {
        let value = serde_json::from_str(json.trim())
            .map_err(|e| Error::ConfigError(format!("failed to parse answers as JSON: {e}")))?;
        Self::from_value(value)
    }

    /// Reads the answers document from stdin.
    ///
    /// # Errors
    /// * `Error::IoError` if stdin cannot be read
    /// * `Error::ConfigError` if the input is not a JSON object
    pub fn from_stdin() -> Result<Self> {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Self::from_json(&buffer)
    }
}

fn answer_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

impl ValueBinder for PresetBinder {
    fn bind(&self, names: &VariableNames) -> Result<ValueMap> {
        Ok(names
            .iter()
            .map(|name| {
                let value = match self.answers.get(name) {
                    Some(answer) => answer_to_string(answer),
                    None => {
                        debug!("No answer for '{name}', using an empty value");
                        String::new()
                    }
                };
                (name.clone(), value)
            })
            .collect())
    }
}
