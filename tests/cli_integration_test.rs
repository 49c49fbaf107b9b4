use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Read;
use tempfile::TempDir;

fn cli(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("plugin-packer").expect("Failed to locate binary");
    cmd.current_dir(dir);
    cmd
}

#[test]
fn test_default_invocation_packages_plugin() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("universalis_price_checker.py"),
        "print('hello')",
    )
    .unwrap();

    cli(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Plugin packaged as UniversalisPriceChecker.zip",
        ));

    let archive_path = temp_dir.path().join("UniversalisPriceChecker.zip");
    assert!(archive_path.exists());

    let zip_data = fs::read(&archive_path).unwrap();
    let cursor = std::io::Cursor::new(zip_data);
    let mut archive = zip::ZipArchive::new(cursor).unwrap();
    assert_eq!(archive.len(), 1);

    let mut entry = archive.by_name("universalis_price_checker.py").unwrap();
    let mut content = String::new();
    entry.read_to_string(&mut content).unwrap();
    assert_eq!(content, "print('hello')");
}

#[test]
fn test_custom_source_and_output() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("my_plugin.py"), "pass").unwrap();

    cli(temp_dir.path())
        .args(["--source", "my_plugin.py", "--output", "dist/MyPlugin.zip"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Plugin packaged as dist/MyPlugin.zip",
        ));

    let archive_path = temp_dir.path().join("dist").join("MyPlugin.zip");
    assert!(archive_path.exists());

    let zip_data = fs::read(&archive_path).unwrap();
    let cursor = std::io::Cursor::new(zip_data);
    let mut archive = zip::ZipArchive::new(cursor).unwrap();
    assert_eq!(archive.by_index(0).unwrap().name(), "my_plugin.py");
}

#[test]
fn test_missing_source_exits_nonzero_without_artifact() {
    let temp_dir = TempDir::new().unwrap();

    cli(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));

    assert!(!temp_dir.path().join("UniversalisPriceChecker.zip").exists());
}

#[test]
fn test_empty_source_argument_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    cli(temp_dir.path())
        .args(["--source", ""])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Path cannot be empty"));
}
