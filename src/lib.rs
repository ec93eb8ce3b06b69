//! pt captures a project directory as a single JSON template and creates new
//! projects from it, filling `@NAME@` placeholders and stripping
//! `// @replace` annotations along the way.

/// Placeholder value collection (interactive or preset)
pub mod binder;

/// Command-line interface module for the pt application
pub mod cli;

/// Optional settings loaded from pt.json, pt.yml or pt.yaml
pub mod config;

/// Error types and handling for the pt application
pub mod error;

/// `.gitignore`-style patterns excluding paths from capture
pub mod ignore;

/// Writing a created project to disk
pub mod processor;

/// Placeholder substitution and annotation stripping
pub mod rewriter;

/// Placeholder discovery
pub mod scanner;

/// The serialized template document
pub mod template;

/// Directory traversal for capture
pub mod walker;
