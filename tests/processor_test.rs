use std::path::{Path, PathBuf};

use pt::error::Error;
use pt::processor::{ensure_output_dir, is_record_path_valid, resolve_target_path};
use tempfile::TempDir;

#[test]
fn test_ensure_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    // Test non-existent directory
    let new_dir = path.join("new_dir");
    assert!(ensure_output_dir(&new_dir, false).is_ok());

    // Test existing directory without force
    assert!(matches!(
        ensure_output_dir(path, false),
        Err(Error::OutputDirectoryExistsError { .. })
    ));

    // Test existing directory with force
    assert!(ensure_output_dir(path, true).is_ok());
}

#[test]
fn test_is_record_path_valid() {
    assert!(is_record_path_valid("README.md"));
    assert!(is_record_path_valid("src/main.rs"));
    assert!(is_record_path_valid(".github/workflows/ci.yml"));

    assert!(!is_record_path_valid(""));
    assert!(!is_record_path_valid("/etc/passwd"));
    assert!(!is_record_path_valid("src\\main.rs"));
    assert!(!is_record_path_valid("C:/Windows/x"));
    assert!(!is_record_path_valid("../outside"));
    assert!(!is_record_path_valid("src/../../outside"));
    assert!(!is_record_path_valid("src//main.rs"));
    assert!(!is_record_path_valid("src/"));
    assert!(!is_record_path_valid("."));
    assert!(!is_record_path_valid("./src/main.rs"));
    assert!(!is_record_path_valid("src/./main.rs"));
}

#[test]
fn test_resolve_target_path() {
    let path = resolve_target_path("src/bin/tool.rs", "output").unwrap();
    assert_eq!(path, PathBuf::from("output").join("src").join("bin").join("tool.rs"));

    let path = resolve_target_path("README.md", Path::new("output")).unwrap();
    assert_eq!(path, PathBuf::from("output").join("README.md"));

    // A path resolving to the output root itself is never a file target
    assert!(matches!(
        resolve_target_path(".", "output"),
        Err(Error::InvalidPathError { .. })
    ));

    assert!(matches!(
        resolve_target_path("../x", "output"),
        Err(Error::InvalidPathError { .. })
    ));
}
