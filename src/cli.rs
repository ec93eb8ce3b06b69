//! Command-line interface implementation for pt.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, Args as ClapArgs, Command, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for pt.
#[derive(Parser, Debug)]
#[command(author, version, about = "pt: capture projects as templates and create new projects from them", long_about = None)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to pt.json, pt.yml or pt.yaml in the current directory)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Capture a project directory as a template file
    Template(TemplateArgs),
    /// Create a new project directory from a template file
    Create(CreateArgs),
}

#[derive(ClapArgs, Debug)]
pub struct TemplateArgs {
    /// Name of the template
    #[arg(short, long)]
    pub name: String,

    /// Where to write the template (defaults to <NAME>.json)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite an existing template file
    #[arg(short, long)]
    pub force: bool,

    /// Project directory to capture
    #[arg(value_name = "PROJECT_DIR")]
    pub project_dir: PathBuf,
}

#[derive(ClapArgs, Debug)]
pub struct CreateArgs {
    /// Path to the template JSON file
    #[arg(short, long, value_name = "TEMPLATE")]
    pub template: PathBuf,

    /// Write into the output directory even if it already exists
    #[arg(short, long)]
    pub force: bool,

    /// Read answers as a JSON object from stdin instead of prompting
    #[arg(short, long)]
    pub stdin: bool,

    /// Directory where the new project will be created
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,
}

/// Builds the command used to print usage when arguments are missing.
pub fn usage_command() -> Command {
    Args::command().help_template(
        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
    )
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 after printing help if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument
                || e.kind() == ErrorKind::MissingSubcommand
            {
                if let Err(err) = usage_command().print_help() {
                    eprintln!("Failed to print help: {err}");
                }
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
