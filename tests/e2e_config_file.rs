/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Copy the sample graph into `dir` as `graph.json`.
fn write_graph(dir: &Path) {
    let fixture = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample-graph.json");
    fs::copy(fixture, dir.join("graph.json")).unwrap();
}

fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Auto-discovery
// ============================================================================

#[test]
fn test_config_auto_discovered_in_current_dir() {
    let temp_dir = TempDir::new().unwrap();
    write_graph(temp_dir.path());
    write_config(
        temp_dir.path(),
        "mdep.config.yml",
        "graph: graph.json\nincludes:\n  - \"org.hamcrest\"\n",
    );

    cargo_bin_cmd!("mdep")
        .current_dir(temp_dir.path())
        .arg("tree")
        .assert()
        .success()
        .stdout(
            "com.example:webapp:jar:1.0\n\
             \\- junit:junit:jar:4.13.2:test\n   \
             \\- org.hamcrest:hamcrest-core:jar:1.3:test\n",
        );
}

#[test]
fn test_no_config_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    write_graph(temp_dir.path());

    cargo_bin_cmd!("mdep")
        .current_dir(temp_dir.path())
        .args(["tree", "-g", "graph.json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("com.example:webapp:jar:1.0\n+- "));
}

// ============================================================================
// Explicit --config
// ============================================================================

#[test]
fn test_explicit_config_path() {
    let temp_dir = TempDir::new().unwrap();
    write_graph(temp_dir.path());
    let config = write_config(temp_dir.path(), "custom.yml", "output_type: dot\n");

    cargo_bin_cmd!("mdep")
        .current_dir(temp_dir.path())
        .args(["tree", "-g", "graph.json", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("digraph "));
}

#[test]
fn test_explicit_config_missing_file() {
    let temp_dir = TempDir::new().unwrap();

    cargo_bin_cmd!("mdep")
        .current_dir(temp_dir.path())
        .args(["tree", "--config", "missing.yml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_invalid_yaml_is_application_error() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), "mdep.config.yml", "includes: [[[broken");

    cargo_bin_cmd!("mdep")
        .current_dir(temp_dir.path())
        .args(["tree", "-g", "graph.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_invalid_scope_in_config() {
    let temp_dir = TempDir::new().unwrap();
    write_graph(temp_dir.path());
    write_config(temp_dir.path(), "mdep.config.yml", "include_scope: everything\n");

    cargo_bin_cmd!("mdep")
        .current_dir(temp_dir.path())
        .args(["resolve", "-g", "graph.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("include_scope"));
}

// ============================================================================
// CLI precedence
// ============================================================================

#[test]
fn test_cli_overrides_config() {
    let temp_dir = TempDir::new().unwrap();
    write_graph(temp_dir.path());
    write_config(
        temp_dir.path(),
        "mdep.config.yml",
        "graph: graph.json\noutput_type: dot\nincludes:\n  - junit\n",
    );

    cargo_bin_cmd!("mdep")
        .current_dir(temp_dir.path())
        .args(["tree", "-t", "text", "--includes", "org.slf4j"])
        .assert()
        .success()
        .stdout(
            "com.example:webapp:jar:1.0\n\
             \\- org.slf4j:slf4j-api:jar:2.0.9:compile\n",
        );
}

#[test]
fn test_config_filters_apply_to_resolve() {
    let temp_dir = TempDir::new().unwrap();
    write_graph(temp_dir.path());
    let repo = temp_dir.path().join("repo");
    fs::create_dir_all(&repo).unwrap();
    write_config(
        temp_dir.path(),
        "mdep.config.yml",
        r#"
graph: graph.json
local_repository: repo
include_scope: runtime
include_group_ids:
  - org.slf4j
"#,
    );

    cargo_bin_cmd!("mdep")
        .current_dir(temp_dir.path())
        .arg("resolve")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "The following files have NOT been resolved:\n   org.slf4j:slf4j-api:jar:2.0.9:compile\n",
        ))
        .stdout(predicate::str::contains("com.example:core").not());
}

#[test]
fn test_config_naming_block_applies_to_name() {
    let temp_dir = TempDir::new().unwrap();
    write_config(
        temp_dir.path(),
        "mdep.config.yml",
        "output_dir: libs\nnaming:\n  remove_version: true\n",
    );

    cargo_bin_cmd!("mdep")
        .current_dir(temp_dir.path())
        .args(["name", "g:lib:1.0", "--prepend-group-id"])
        .assert()
        .success()
        .stdout(format!("{}\n", Path::new("libs").join("g-lib.jar").display()));
}

// ============================================================================
// Unknown fields
// ============================================================================

#[test]
fn test_unknown_field_warning() {
    let temp_dir = TempDir::new().unwrap();
    write_graph(temp_dir.path());
    write_config(
        temp_dir.path(),
        "mdep.config.yml",
        "graph: graph.json\nformat: json\n",
    );

    cargo_bin_cmd!("mdep")
        .current_dir(temp_dir.path())
        .arg("tree")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Unknown config field 'format' will be ignored.",
        ));
}
