//! Integration tests for the `sygen` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// `sygen` isolated from the user's config and colours.
fn sygen(workdir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("sygen");
    cmd.current_dir(workdir)
        .env("XDG_CONFIG_HOME", workdir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    sygen(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn feature_components_writes_components_and_barrel() {
    let temp = TempDir::new().unwrap();

    sygen(temp.path())
        .args(["generate:feature-components", "billing", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BillingComponent3.tsx"))
        .stdout(predicate::str::contains("4 files generated, 0 failed"));

    let components = temp.path().join("src/features/billing/components");
    assert_eq!(fs::read_dir(&components).unwrap().count(), 4);
    let index = fs::read_to_string(components.join("index.ts")).unwrap();
    assert_eq!(index.lines().count(), 3);
    assert!(index.contains("export { BillingComponent2 } from './BillingComponent2';"));
}

#[test]
fn root_flag_and_env_override_layout() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("web");

    sygen(temp.path())
        .env("SYGEN_PATHS__HOOKS_DIR", "app/hooks")
        .args(["--root", "web", "generate:hook", "useCart"])
        .assert()
        .success();

    assert!(project.join("app/hooks/useCart.ts").is_file());
    assert_eq!(
        fs::read_to_string(project.join("app/hooks/index.ts")).unwrap(),
        "export { useCart } from './useCart';\n"
    );
}

#[test]
fn local_config_file_is_picked_up() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".sygen.toml"),
        "[paths]\nstores_dir = \"state\"\n",
    )
    .unwrap();

    sygen(temp.path())
        .args(["generate:store", "cart"])
        .assert()
        .success();

    assert!(temp.path().join("state/cartStore.ts").is_file());
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    sygen(temp.path())
        .args(["generate:feature", "billing", "2", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(dry run)"))
        .stdout(predicate::str::contains("BillingPage.tsx"));

    assert!(!temp.path().join("src").exists());
}

#[test]
fn json_summary() {
    let temp = TempDir::new().unwrap();

    let assert = sygen(temp.path())
        .args(["--output-format", "json", "generate:component", "button"])
        .assert()
        .success();

    let summary: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(summary["generated"], 4);
    assert_eq!(summary["failed"], 0);
    assert_eq!(summary["entries"][0]["kind"], "component");
    assert_eq!(summary["index_updates"][0]["status"], "updated");
}

#[test]
fn json_format_from_local_config() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".sygen.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let assert = sygen(temp.path())
        .args(["generate:store", "cart"])
        .assert()
        .success();

    let summary: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(summary["generated"], 1);
    assert_eq!(summary["entries"][0]["kind"], "store");
}

#[test]
fn no_color_env_values_are_accepted() {
    let temp = TempDir::new().unwrap();
    for value in ["1", "true", ""] {
        sygen(temp.path())
            .env("NO_COLOR", value)
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("component-basic"));
    }
}

#[test]
fn list_json_has_every_template() {
    let temp = TempDir::new().unwrap();

    let assert = sygen(temp.path())
        .args(["list", "--format", "json"])
        .assert()
        .success();

    let templates: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let templates = templates.as_array().unwrap();
    assert_eq!(templates.len(), 21);
    assert!(templates.iter().any(|t| t["id"] == "index-suite"));
}

#[test]
fn init_then_config_get() {
    let temp = TempDir::new().unwrap();

    sygen(temp.path())
        .args(["init", "--local"])
        .assert()
        .success();
    assert!(temp.path().join(".sygen.toml").is_file());

    sygen(temp.path())
        .args(["config", "get", "paths.features_dir"])
        .assert()
        .success()
        .stdout(predicate::str::contains("src/features"));
}

#[test]
fn completions_mention_binary() {
    let temp = TempDir::new().unwrap();
    sygen(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sygen"));
}
