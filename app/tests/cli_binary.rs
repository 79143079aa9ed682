use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

fn studio() -> Command {
    Command::cargo_bin("image-studio").unwrap()
}

#[test]
fn help_lists_options() {
    studio()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--delay-ms"))
        .stdout(predicate::str::contains("--print-config"));
}

#[test]
fn print_config_uses_defaults_for_missing_file() {
    let temp = TempDir::new().unwrap();
    let missing = temp.child("missing.toml");
    studio()
        .args(["--print-config", "--config"])
        .arg(missing.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("generation_delay_ms = 3000"));
    missing.assert(predicate::path::missing());
}

#[test]
fn command_line_overrides_file() {
    let temp = TempDir::new().unwrap();
    let cfg = temp.child("settings.toml");
    cfg.write_str("generation_delay_ms = 1200\ntheme = \"light\"\n").unwrap();
    studio()
        .args(["--print-config", "--delay-ms", "5", "--config"])
        .arg(cfg.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("generation_delay_ms = 5"))
        .stdout(predicate::str::contains("theme = \"light\""));
}

#[test]
fn malformed_config_fails() {
    let temp = TempDir::new().unwrap();
    let cfg = temp.child("settings.toml");
    cfg.write_str("generation_delay_ms = \"soon\"\n").unwrap();
    studio()
        .args(["--print-config", "--config"])
        .arg(cfg.path())
        .assert()
        .failure();
}

#[test]
fn write_config_saves_effective_settings() {
    let temp = TempDir::new().unwrap();
    let cfg = temp.child("nested/settings.toml");
    studio()
        .args(["--write-config", "--seed", "11", "--config"])
        .arg(cfg.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("settings written to"));
    cfg.assert(predicate::str::contains("seed = 11"));
}
