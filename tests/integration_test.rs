use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command with an empty temporary home, so no real config is picked up
fn mycli(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mycli").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("MYCLI_LOG")
        .env_remove("CLICOLOR_FORCE");
    cmd
}

#[test]
fn test_version_prints_build_identity() {
    let home = tempfile::tempdir().unwrap();
    mycli(&home)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mycli version: dev"))
        .stdout(predicate::str::contains("Build time: unknown"))
        .stderr(predicate::str::contains("Failed to load config").not());
}

#[test]
fn test_version_flag() {
    let home = tempfile::tempdir().unwrap();
    mycli(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dev (built at unknown)"));
}

#[test]
fn test_informational_commands_ignore_broken_config() {
    let home = tempfile::tempdir().unwrap();
    fs::write(home.path().join(".mycli.yaml"), "color: [broken").unwrap();

    for args in [
        &["--verbose", "version"][..],
        &["help"][..],
        &["completion", "bash"][..],
    ] {
        mycli(&home)
            .args(args)
            .assert()
            .success()
            .stdout(predicate::str::contains("Using config file").not())
            .stderr(predicate::str::contains("Failed to load config").not());
    }
}

#[test]
fn test_verbose_without_config_file_warns_and_reports_path() {
    let home = tempfile::tempdir().unwrap();
    let expected_path = home.path().join(".mycli.yaml");

    let output = mycli(&home)
        .args(["--verbose", "config", "show"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Failed to load config").count(), 1);
    assert_eq!(stdout.matches("Using config file:").count(), 1);
    assert!(stdout.contains(&expected_path.display().to_string()));
    // Defaults are in effect
    assert!(stdout.contains("color: true"));
}

#[test]
fn test_no_path_line_without_verbose() {
    let home = tempfile::tempdir().unwrap();
    mycli(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Using config file").not());
}

#[test]
fn test_valid_config_is_used() {
    let home = tempfile::tempdir().unwrap();
    fs::write(
        home.path().join(".mycli.yaml"),
        "color: false\noutput: text\n",
    )
    .unwrap();

    mycli(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout("color: false\noutput: text\n")
        .stderr(predicate::str::contains("Warning").not());
}

#[test]
fn test_malformed_config_falls_back_to_defaults() {
    let home = tempfile::tempdir().unwrap();
    fs::write(home.path().join(".mycli.yaml"), "output: [yaml").unwrap();

    mycli(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(default)"))
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_explicit_config_overrides_home() {
    let home = tempfile::tempdir().unwrap();
    fs::write(home.path().join(".mycli.yaml"), "output: text\n").unwrap();

    let elsewhere = tempfile::tempdir().unwrap();
    let custom = elsewhere.path().join("custom.yaml");
    fs::write(&custom, "output: yaml\ncolor: false\n").unwrap();

    mycli(&home)
        .arg("--config")
        .arg(&custom)
        .args(["-v", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Using config file: {}",
            custom.display()
        )))
        .stdout(predicate::str::contains("output: yaml"));
}

#[test]
fn test_missing_explicit_config_does_not_fall_back_to_home() {
    let home = tempfile::tempdir().unwrap();
    fs::write(home.path().join(".mycli.yaml"), "color: false\n").unwrap();
    let missing = home.path().join("nope.yaml");

    mycli(&home)
        .arg("--config")
        .arg(&missing)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout("color: true\noutput: text\n")
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let home = tempfile::tempdir().unwrap();
    mycli(&home).arg("frobnicate").assert().failure().code(2);
}

#[test]
fn test_root_prints_help() {
    let home = tempfile::tempdir().unwrap();
    mycli(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: mycli"))
        .stderr(predicate::str::contains("Failed to load config").not());
}

#[test]
fn test_piped_stderr_has_no_escape_codes() {
    let home = tempfile::tempdir().unwrap();
    mycli(&home)
        .args(["--verbose", "config", "show"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: Failed to load config"))
        .stderr(predicate::str::contains("DEBUG"))
        .stderr(predicate::str::contains("\u{1b}").not());
}
