//! pt's main application entry point and orchestration logic.
//! Handles command-line argument parsing and dispatches to the capture and
//! create flows.

use std::path::PathBuf;

use pt::{
    binder::{DialoguerBinder, PresetBinder, ValueBinder},
    cli::{get_args, Args, Commands, CreateArgs, TemplateArgs},
    config::{get_config, Config},
    error::{default_error_handler, Result},
    ignore::IgnoreMatcher,
    processor::{create_project, ensure_output_dir},
    rewriter::Rewriter,
    template::{default_template_file, Template},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
fn run(args: Args) -> Result<()> {
    let config = get_config(args.config.as_deref(), ".")?;

    match args.command {
        Commands::Template(template_args) => run_template(template_args, &config),
        Commands::Create(create_args) => run_create(create_args, &config),
    }
}

/// Captures a project directory into a template file.
fn run_template(args: TemplateArgs, config: &Config) -> Result<()> {
    let ignore =
        IgnoreMatcher::for_project(&args.project_dir, &config.ignore, !config.skip_defaults)?;
    let template = Template::capture(&args.name, &args.project_dir, &ignore)?;

    let output =
        args.output.unwrap_or_else(|| PathBuf::from(default_template_file(&args.name)));
    template.save(&output, args.force)?;

    println!("Template '{}' saved to '{}'.", template.name(), output.display());
    Ok(())
}

/// Creates a project from a template file.
///
/// # Flow
/// 1. Validates the output directory
/// 2. Loads the template document
/// 3. Collects a value for every placeholder
/// 4. Rewrites and writes each file
fn run_create(args: CreateArgs, config: &Config) -> Result<()> {
    let output_root = ensure_output_dir(&args.output_dir, args.force)?;
    let template = Template::load(&args.template)?;

    let binder: Box<dyn ValueBinder> = if args.stdin {
        Box::new(PresetBinder::from_stdin()?)
    } else {
        Box::new(DialoguerBinder::new())
    };
    let rewriter = Rewriter::new(config.markers.iter().cloned());

    for target in create_project(&template, &*binder, &rewriter, &output_root)? {
        log::debug!("Created '{}'", target.display());
    }

    println!("Template '{}' applied to '{}'.", template.name(), output_root.display());
    Ok(())
}
