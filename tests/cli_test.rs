use clap::Parser;
use pt::cli::{usage_command, Args, Commands};
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("pt")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_template_args() {
    let args = make_args(&["template", "-n", "web", "./project"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(!parsed.verbose);
    assert!(parsed.config.is_none());
    match parsed.command {
        Commands::Template(template) => {
            assert_eq!(template.name, "web");
            assert_eq!(template.project_dir, PathBuf::from("./project"));
            assert!(template.output.is_none());
            assert!(!template.force);
        }
        _ => panic!("Expected template subcommand"),
    }
}

#[test]
fn test_create_args() {
    let args = make_args(&["create", "--template", "web.json", "--stdin", "./output"]);
    let parsed = Args::try_parse_from(args).unwrap();

    match parsed.command {
        Commands::Create(create) => {
            assert_eq!(create.template, PathBuf::from("web.json"));
            assert_eq!(create.output_dir, PathBuf::from("./output"));
            assert!(create.stdin);
            assert!(!create.force);
        }
        _ => panic!("Expected create subcommand"),
    }
}

#[test]
fn test_global_flags_after_subcommand() {
    let args = make_args(&["create", "-t", "web.json", "-f", "-v", "-c", "pt.yml", "./output"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.verbose);
    assert_eq!(parsed.config, Some(PathBuf::from("pt.yml")));
    match parsed.command {
        Commands::Create(create) => assert!(create.force),
        _ => panic!("Expected create subcommand"),
    }
}

#[test]
fn test_template_output_flag() {
    let args = make_args(&["template", "--name", "web", "-o", "out/web.json", "-f", "."]);
    let parsed = Args::try_parse_from(args).unwrap();

    match parsed.command {
        Commands::Template(template) => {
            assert_eq!(template.output, Some(PathBuf::from("out/web.json")));
            assert!(template.force);
        }
        _ => panic!("Expected template subcommand"),
    }
}

#[test]
fn test_missing_required_flag() {
    assert!(Args::try_parse_from(make_args(&["template", "./project"])).is_err());
    assert!(Args::try_parse_from(make_args(&["create", "./output"])).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["create", "-t", "web.json", "./output", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_missing_subcommand() {
    assert!(Args::try_parse_from(make_args(&[])).is_err());
}

#[test]
fn test_usage_lists_subcommands() {
    let help = usage_command().render_help().to_string();

    assert!(help.contains("Usage:"));
    assert!(help.contains("template"));
    assert!(help.contains("create"));
    assert!(help.contains("--verbose"));
}
