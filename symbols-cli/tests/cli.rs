use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn resource_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(
        dir.path().join("Shapes.txt"),
        "loose\n\n## Shapes\nsquare\ncircle\n## Empty\n## Arrows\narrow.up\n",
    )
    .expect("write resource");
    fs::write(dir.path().join("Tiny.txt"), "square\n").expect("write resource");
    fs::write(dir.path().join("README.md"), "not a resource").expect("write readme");
    dir
}

fn crate_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn symbols_in(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("symbols");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_outline_of_resource() {
    let dir = resource_dir();
    symbols_in(dir.path())
        .arg("Shapes")
        .arg("--resources")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("⧉ Symbols (7 identifiers, 3 sections)")
                .and(predicate::str::contains("§ (ungrouped) (1)"))
                .and(predicate::str::contains("§ Shapes (2)"))
                .and(predicate::str::contains("§ Arrows (1)"))
                .and(predicate::str::contains("Empty").not()),
        );
}

#[test]
fn prints_source_format() {
    let dir = resource_dir();
    symbols_in(dir.path())
        .args(["Shapes", "--format", "source", "--resources"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout("loose\n\n## Shapes\nsquare\ncircle\n\n## Arrows\narrow.up\n");
}

#[test]
fn prints_json_with_custom_name() {
    let dir = resource_dir();
    let output = symbols_in(dir.path())
        .args(["Tiny", "-f", "json", "--name", "Just one", "-r"])
        .arg(dir.path())
        .output()
        .expect("run symbols");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert!(stdout.contains("\"name\": \"Just one\""));
    assert!(stdout.contains("\"square\""));
}

#[test]
fn missing_resource_prints_empty_catalogue() {
    let dir = resource_dir();
    symbols_in(dir.path())
        .args(["Nope", "--resources"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(0 identifiers, 0 sections)"))
        .stderr(predicate::str::contains("unavailable"));
}

#[test]
fn loads_default_resource_from_working_directory() {
    symbols_in(&crate_dir())
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("⧉ Symbols")
                .and(predicate::str::contains("§ Shapes"))
                .and(predicate::str::contains("• arrow.up")),
        );
}

#[test]
fn local_config_file_is_layered() {
    let dir = resource_dir();
    fs::write(
        dir.path().join("symbols.toml"),
        "[catalogue]\nresource = \"Tiny\"\nname = \"Local\"\n\n[resources]\ndirectory = \".\"\n\n[output]\nformat = \"yaml\"\n",
    )
    .expect("write config");

    symbols_in(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("name: Local").and(predicate::str::contains("- square")));
}

#[test]
fn explicit_config_file_overrides_local_one() {
    let dir = resource_dir();
    let config = dir.path().join("other.toml");
    fs::write(&config, "[output]\nformat = \"source\"\n").expect("write config");

    symbols_in(dir.path())
        .args(["Tiny", "--resources", "."])
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout("square\n");
}

#[test]
fn missing_explicit_config_file_fails() {
    let dir = resource_dir();
    symbols_in(dir.path())
        .args(["Tiny", "--config", "absent.toml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn unknown_format_fails() {
    let dir = resource_dir();
    symbols_in(dir.path())
        .args(["Tiny", "--format", "xml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown format 'xml'"));
}

#[test]
fn lists_resources() {
    let dir = resource_dir();
    symbols_in(dir.path())
        .arg("--list-resources")
        .arg("--resources")
        .arg(dir.path())
        .assert()
        .success()
        .stdout("Shapes\nTiny\n");
}

#[test]
fn listing_missing_resource_directory_fails() {
    let dir = resource_dir();
    symbols_in(dir.path())
        .args(["--list-resources", "--resources", "no-such-dir"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Cannot list resources"));
}

#[test]
fn lists_formats() {
    let dir = resource_dir();
    symbols_in(dir.path())
        .arg("--list-formats")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("source")
                .and(predicate::str::contains("outline"))
                .and(predicate::str::contains("json"))
                .and(predicate::str::contains("yaml")),
        );
}

#[test]
fn verbose_logs_parse_summary() {
    let dir = resource_dir();
    symbols_in(dir.path())
        .args(["Shapes", "-v", "--resources"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("parsed catalogue text"));
}
