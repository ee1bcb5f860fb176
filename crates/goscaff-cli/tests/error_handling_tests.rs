//! Tests for error messages, suggestions and exit codes.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn goscaff(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("goscaff");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("GOSCAFF_LOG_FILE");
    cmd
}

#[test]
fn invalid_project_name_is_a_user_error() {
    let tmp = TempDir::new().unwrap();
    goscaff(tmp.path())
        .args(["new", "Order_API", "--yes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid configuration"))
        .stderr(predicate::str::contains("project name must start with lowercase"));

    assert!(!tmp.path().join("Order_API").exists());
}

#[test]
fn unsupported_framework_lists_alternatives() {
    let tmp = TempDir::new().unwrap();
    goscaff(tmp.path())
        .args(["new", "svc", "--framework", "rails"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("framework must be one of"))
        .stderr(predicate::str::contains("chi"))
        .stderr(predicate::str::contains("fiber"));
}

#[test]
fn unsupported_database_is_rejected() {
    let tmp = TempDir::new().unwrap();
    goscaff(tmp.path())
        .args(["new", "svc", "-d", "postgres,cassandra"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("database must be one of"));
}

#[test]
fn unsupported_config_format_is_rejected() {
    let tmp = TempDir::new().unwrap();
    goscaff(tmp.path())
        .args(["new", "svc", "--config-format", "xml"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("config format must be one of"))
        .stderr(predicate::str::contains("toml"));
    assert!(!tmp.path().join("svc").exists());
}

#[test]
fn unsupported_ci_provider_is_rejected() {
    let tmp = TempDir::new().unwrap();
    goscaff(tmp.path())
        .args(["new", "svc", "--ci", "jenkins"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("CI provider must be one of"))
        .stderr(predicate::str::contains("gitlab"));
}

#[test]
fn unsupported_go_version_is_rejected() {
    let tmp = TempDir::new().unwrap();
    goscaff(tmp.path())
        .args(["new", "svc", "--go-version", "1.18"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Go version must be one of"));
}

#[test]
fn invalid_module_path_is_rejected() {
    let tmp = TempDir::new().unwrap();
    goscaff(tmp.path())
        .args(["new", "svc", "--module", "svc"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("module path must be a valid Go module path"));
}

#[test]
fn bad_value_in_config_file_names_the_choice() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join(".goscaff.toml"), "[defaults]\nlogger = \"log4j\"\n").unwrap();

    goscaff(tmp.path())
        .args(["new", "svc", "--yes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("logger must be one of"));
}

#[test]
fn missing_config_file_is_a_configuration_error() {
    let tmp = TempDir::new().unwrap();
    goscaff(tmp.path())
        .args(["--config", "absent.toml", "version"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn unknown_config_key_is_a_configuration_error() {
    let tmp = TempDir::new().unwrap();
    goscaff(tmp.path())
        .args(["config", "get", "defaults.lang"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn output_path_that_is_a_file_is_rejected() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("taken"), "x").unwrap();

    goscaff(tmp.path())
        .args(["new", "svc", "--yes", "-o", "taken"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn missing_name_is_a_usage_error() {
    let tmp = TempDir::new().unwrap();
    goscaff(tmp.path())
        .arg("new")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("NAME"));
}

#[test]
fn verbose_errors_omit_the_hint() {
    let tmp = TempDir::new().unwrap();
    goscaff(tmp.path())
        .args(["-v", "new", "svc", "--logger", "glog"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Use -v / --verbose").not());
}
