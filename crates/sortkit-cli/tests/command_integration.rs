//! Integration tests for CLI commands.
//!
//! Every test points `--project`, `HOME` and `XDG_CONFIG_HOME` at a fresh
//! temp dir so neither a stray sortkit.toml nor the developer's user config
//! leaks in.

#![allow(deprecated)] // Command::cargo_bin is deprecated but replacement requires newer assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn sortkit(project: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sortkit").unwrap();
    cmd.env_remove("RUST_LOG")
        .env("HOME", project.path())
        .env("XDG_CONFIG_HOME", project.path())
        .args(["--no-color", "--project"])
        .arg(project.path());
    cmd
}

// ============================================================================
// Sort Commands
// ============================================================================

#[test]
fn numbers_are_sorted_ascending() {
    let project = TempDir::new().unwrap();
    sortkit(&project)
        .args(["numbers", "10", "3", "-5", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[10, 3, -5, 0]"))
        .stdout(predicate::str::contains("[-5, 0, 3, 10]"));
}

#[test]
fn chars_ignore_case_and_keep_it() {
    let project = TempDir::new().unwrap();
    sortkit(&project)
        .args(["chars", "AsDfGh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ADfGhs"));
}

#[test]
fn list_is_sorted_by_value() {
    let project = TempDir::new().unwrap();
    sortkit(&project)
        .args(["list", "10", "3", "-5", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Linked list collection sorted:"))
        .stdout(predicate::str::contains("[-5, 0, 3, 10]"));
}

#[test]
fn empty_list_sorts_to_empty() {
    let project = TempDir::new().unwrap();
    sortkit(&project)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn demo_runs_both_strategies() {
    let project = TempDir::new().unwrap();
    let output = sortkit(&project)
        .args(["--strategy", "both", "demo"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("(standalone)").count(), 3);
    assert_eq!(stdout.matches("(inherited)").count(), 3);
    assert_eq!(stdout.matches("[-5, 0, 3, 10]").count(), 4);
    assert_eq!(stdout.matches("ADfGhs").count(), 2);
}

#[test]
fn json_output_is_parseable() {
    let project = TempDir::new().unwrap();
    let output = sortkit(&project)
        .args(["--format", "json", "--strategy", "both", "numbers", "10", "3", "-5", "0"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let reports = reports.as_array().unwrap();

    assert_eq!(reports.len(), 2);
    for report in reports {
        assert_eq!(report["collection"], "numbers");
        assert_eq!(report["after"], "[-5, 0, 3, 10]");
        assert_eq!(report["compares"], 6);
        assert_eq!(report["swaps"], 5);
    }
    assert_eq!(reports[0]["strategy"], "standalone");
    assert_eq!(reports[1]["strategy"], "inherited");
}

#[test]
fn stats_flag_prints_table() {
    let project = TempDir::new().unwrap();
    sortkit(&project)
        .args(["--stats", "chars", "AsDfGh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("compares"))
        .stdout(predicate::str::contains("15"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn project_config_selects_strategy() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join("sortkit.toml"),
        "[sort]\nstrategy = \"inherited\"\n",
    )
    .unwrap();

    sortkit(&project)
        .args(["numbers", "2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(inherited)"));
}

#[test]
fn cli_strategy_overrides_config() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join("sortkit.toml"),
        "[sort]\nstrategy = \"inherited\"\n",
    )
    .unwrap();

    sortkit(&project)
        .args(["--strategy", "standalone", "numbers", "2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(standalone)"))
        .stdout(predicate::str::contains("(inherited)").not());
}

#[test]
fn environment_overrides_project_config() {
    let project = TempDir::new().unwrap();
    sortkit(&project)
        .env("SORTKIT_SORT__STRATEGY", "inherited")
        .args(["numbers", "2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(inherited)"));
}

#[test]
#[cfg(target_os = "linux")]
fn user_config_is_read_from_xdg_config_home() {
    let project = TempDir::new().unwrap();
    let user_dir = project.path().join("sortkit");
    fs::create_dir_all(&user_dir).unwrap();
    fs::write(
        user_dir.join("config.toml"),
        "[sort]\nstrategy = \"inherited\"\n",
    )
    .unwrap();

    sortkit(&project)
        .args(["numbers", "2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(inherited)"));
}

#[test]
fn project_config_overrides_user_config() {
    let project = TempDir::new().unwrap();
    let user_dir = project.path().join("sortkit");
    fs::create_dir_all(&user_dir).unwrap();
    fs::write(
        user_dir.join("config.toml"),
        "[sort]\nstrategy = \"inherited\"\n",
    )
    .unwrap();
    fs::write(
        project.path().join("sortkit.toml"),
        "[sort]\nstrategy = \"standalone\"\n",
    )
    .unwrap();

    sortkit(&project)
        .args(["numbers", "2", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(standalone)"))
        .stdout(predicate::str::contains("(inherited)").not());
}

#[test]
fn demo_uses_configured_inputs() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join("sortkit.toml"),
        r#"
[demo]
numbers = [3, 1, 2]
characters = "cBa"
linked_list = [9, -9]
"#,
    )
    .unwrap();

    sortkit(&project)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1, 2, 3]"))
        .stdout(predicate::str::contains("aBc"))
        .stdout(predicate::str::contains("[-9, 9]"));
}

#[test]
fn input_longer_than_max_len_is_rejected() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join("sortkit.toml"),
        r#"
[sort]
max_len = 3

[demo]
numbers = [2, 1]
characters = "ba"
linked_list = [1]
"#,
    )
    .unwrap();

    sortkit(&project)
        .args(["numbers", "4", "3", "2", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_len"));
}

#[test]
fn config_show_toml_reflects_project_file() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join("sortkit.toml"),
        "[project]\nname = \"sorted-things\"\n",
    )
    .unwrap();

    sortkit(&project)
        .args(["config", "show", "--output", "toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name = \"sorted-things\""))
        .stdout(predicate::str::contains("strategy = \"standalone\""));
}

#[test]
fn config_show_text_lists_sections() {
    let project = TempDir::new().unwrap();
    sortkit(&project)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sort:"))
        .stdout(predicate::str::contains("AsDfGh"));
}

#[test]
fn config_validate_accepts_good_file() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join("sortkit.toml"),
        "[logging]\nlevel = \"debug\"\n",
    )
    .unwrap();

    sortkit(&project)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn config_validate_names_broken_file() {
    let project = TempDir::new().unwrap();
    fs::write(project.path().join("sortkit.local.toml"), "[sort\n").unwrap();

    sortkit(&project)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sortkit.local.toml"));
}

#[test]
fn config_validate_rejects_bad_level() {
    let project = TempDir::new().unwrap();
    fs::write(
        project.path().join("sortkit.toml"),
        "[logging]\nlevel = \"shouty\"\n",
    )
    .unwrap();

    sortkit(&project)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("logging.level"));
}
