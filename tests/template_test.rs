use pt::error::Error;
use pt::ignore::IgnoreMatcher;
use pt::template::{FileRecord, Template};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_capture_project() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("project");
    fs::create_dir_all(root.join("src")).unwrap();
    fs::create_dir_all(root.join(".git")).unwrap();
    fs::write(root.join(".git/config"), "[core]\n").unwrap();
    fs::write(root.join(".gitignore"), "*.log\n").unwrap();
    fs::write(root.join("debug.log"), "noise").unwrap();
    fs::write(root.join("Cargo.toml"), "[package]\nname = \"@NAME@\"\n").unwrap();
    fs::write(root.join("src/main.rs"), "fn main() {}\n").unwrap();

    let ignore = IgnoreMatcher::for_project(&root, &[], true).unwrap();
    let template = Template::capture("rust-bin", &root, &ignore).unwrap();

    assert_eq!(template.name(), "rust-bin");
    assert_eq!(
        template.files().cloned().collect::<Vec<_>>(),
        vec![
            FileRecord::new(".gitignore", "*.log\n"),
            FileRecord::new("Cargo.toml", "[package]\nname = \"@NAME@\"\n"),
            FileRecord::new("src/main.rs", "fn main() {}\n"),
        ]
    );
}

#[test]
fn test_capture_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let result = Template::capture("x", temp_dir.path().join("missing"), &IgnoreMatcher::default());
    assert!(matches!(result, Err(Error::ProjectDirDoesNotExistError { .. })));
}

#[test]
fn test_save_and_load_preserve_content() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("t.json");
    let content = "tabs\tand \"quotes\"\r\nunicode: \u{00e9}\u{1f980} <html> & \\ \n\nno trailing";
    let template = Template::new("roundtrip", vec![FileRecord::new("a/b.txt", content)]);

    template.save(&path, false).unwrap();
    let loaded = Template::load(&path).unwrap();

    assert_eq!(loaded, template);
    assert_eq!(loaded.files[0].content, content);
}

#[test]
fn test_save_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("t.json");
    fs::write(&path, "{}").unwrap();

    let template = Template::new("t", Vec::new());
    assert!(matches!(
        template.save(&path, false),
        Err(Error::TemplateFileExistsError { .. })
    ));
    template.save(&path, true).unwrap();
    assert_eq!(Template::load(&path).unwrap(), template);
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    assert!(matches!(
        Template::load(temp_dir.path().join("missing.json")),
        Err(Error::IoError(_))
    ));
}

#[test]
fn test_load_document_written_elsewhere() {
    let json = r#"{
  "name": "go-service",
  "files": [
    {
      "path": "main.go",
      "content": "package main\n\nconst name = \"@NAME@\" <>\n"
    }
  ]
}"#;
    let template = Template::from_json(json).unwrap();
    assert_eq!(template.name(), "go-service");
    assert_eq!(template.files[0].content, "package main\n\nconst name = \"@NAME@\" <>\n");
}
