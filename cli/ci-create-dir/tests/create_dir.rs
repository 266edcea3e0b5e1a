use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const CREATE_DIR: &str = env!("CARGO_BIN_EXE_create-dir");

fn create_dir(path: &Path) -> Output {
    Command::new(CREATE_DIR)
        .arg("--path")
        .arg(path)
        .env_remove("CI_STEPS_LOG")
        .output()
        .expect("failed to run create-dir")
}

#[test]
fn creates_all_missing_segments() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("ci").join("build").join("artifacts");

    let output = create_dir(&target);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("Creating directory: {}\n", target.display())
    );
    assert!(tmp.path().join("ci").is_dir());
    assert!(tmp.path().join("ci").join("build").is_dir());
    assert!(target.is_dir());
}

#[test]
fn running_twice_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("again");

    assert_eq!(create_dir(&target).status.code(), Some(0));
    assert_eq!(create_dir(&target).status.code(), Some(0));
    assert!(target.is_dir());
}

#[test]
fn existing_directory_succeeds() {
    let tmp = TempDir::new().unwrap();

    let output = create_dir(tmp.path());

    assert_eq!(output.status.code(), Some(0));
    assert!(tmp.path().is_dir());
}

#[test]
fn file_in_the_way_fails_and_is_kept() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("artifacts");
    fs::write(&target, "not a directory").unwrap();

    let output = create_dir(&target);

    assert_ne!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to create directory"));
    assert_eq!(fs::read_to_string(&target).unwrap(), "not a directory");
}

#[test]
fn missing_flag_is_a_usage_error() {
    let output = Command::new(CREATE_DIR)
        .env_remove("CI_STEPS_LOG")
        .output()
        .expect("failed to run create-dir");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--path"));
}

#[test]
fn failure_is_reported_once() {
    let tmp = TempDir::new().unwrap();
    let target = tmp.path().join("blocked");
    fs::write(&target, "").unwrap();

    let output = create_dir(&target);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr.matches("Failed to create directory").count(), 1, "{stderr}");
}
