//! Exit codes and error messages.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn sygen(workdir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("sygen");
    cmd.current_dir(workdir)
        .env("XDG_CONFIG_HOME", workdir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn invalid_name_exits_two_and_writes_nothing() {
    let temp = TempDir::new().unwrap();

    sygen(temp.path())
        .args(["generate:store", "9lives"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid input: store name"))
        .stderr(predicate::str::contains("Suggestions:"));

    assert!(!temp.path().join("src").exists());
}

#[test]
fn zero_count_exits_two() {
    let temp = TempDir::new().unwrap();

    sygen(temp.path())
        .args(["generate:feature-components", "billing", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("component count"));
}

#[test]
fn missing_argument_exits_two() {
    let temp = TempDir::new().unwrap();

    sygen(temp.path())
        .args(["generate:feature-components", "billing"])
        .assert()
        .code(2);
}

#[test]
fn bad_model_field_exits_two() {
    let temp = TempDir::new().unwrap();

    sygen(temp.path())
        .args(["generate:model", "invoice", "--field", "total:money"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown type 'money'"));
}

#[test]
fn missing_config_file_exits_four() {
    let temp = TempDir::new().unwrap();

    sygen(temp.path())
        .args(["--config", "nope.toml", "list"])
        .assert()
        .code(4);
}

#[test]
fn absolute_directory_in_config_exits_four() {
    let temp = TempDir::new().unwrap();

    sygen(temp.path())
        .env("SYGEN_PATHS__STORES_DIR", "/etc/stores")
        .args(["generate:store", "cart"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn failed_file_exits_one_after_summary() {
    let temp = TempDir::new().unwrap();
    // a directory where the store file should go
    fs::create_dir_all(temp.path().join("src/stores/cartStore.ts")).unwrap();

    sygen(temp.path())
        .args(["generate:store", "cart"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("0 files generated, 1 failed"))
        .stderr(predicate::str::contains("1 of 1 files could not be generated"));

    assert!(!temp.path().join("src/stores/index.ts").exists());
}

#[test]
fn unparseable_barrel_is_a_warning() {
    let temp = TempDir::new().unwrap();
    let stores = temp.path().join("src/stores");
    fs::create_dir_all(&stores).unwrap();
    fs::write(stores.join("index.ts"), "module.exports = {};\n").unwrap();

    sygen(temp.path())
        .args(["generate:store", "cart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("left unchanged"));

    assert!(stores.join("cartStore.ts").is_file());
    assert_eq!(
        fs::read_to_string(stores.join("index.ts")).unwrap(),
        "module.exports = {};\n"
    );
}
