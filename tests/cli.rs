//! CLI integration tests
//!
//! Each test builds a small wiki in a temp directory and runs the binary with
//! that directory as the working directory, the same way a site build would.

use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a command instance running inside `dir`
fn wiki_cmd(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("wiki-manifest"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn write(dir: &Path, rel: &str, content: &str) {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Three categories: A and C with one article each, B with a tagged one
fn setup_wiki() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Wiki/A/first.md", "# First Article\n");
    write(
        dir.path(),
        "Wiki/B/tagged.md",
        "---\ntitle: Tagged\ndate: 2026-02-26\ntags: [x, y]\n---\nbody\n",
    );
    write(dir.path(), "Wiki/C/third.md", "no heading\n");
    dir
}

fn read_manifest(dir: &Path) -> serde_json::Value {
    let text = fs::read_to_string(dir.join("wiki_manifest.json")).unwrap();
    serde_json::from_str(&text).unwrap()
}

fn section_names(manifest: &serde_json::Value) -> Vec<String> {
    manifest["sections"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap().to_string())
        .collect()
}

fn category_names(section: &serde_json::Value) -> Vec<String> {
    section["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Build
// =============================================================================

#[test]
fn zero_argument_run_writes_manifest() {
    let dir = setup_wiki();

    wiki_cmd(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Generated wiki_manifest.json: 1 section, 3 categories, 3 articles",
        ))
        .stdout(predicate::str::contains("Tagged  [x, y]"));

    let manifest = read_manifest(dir.path());
    assert_eq!(section_names(&manifest), vec!["All"]);
    assert_eq!(manifest["sections"][0]["id"], "all");
    assert_eq!(category_names(&manifest["sections"][0]), vec!["A", "B", "C"]);

    let tagged = &manifest["sections"][0]["categories"][1]["articles"][0];
    assert_eq!(tagged["id"], "b-tagged");
    assert_eq!(tagged["title"], "Tagged");
    assert_eq!(tagged["path"], "Wiki/B/tagged.md");
    assert_eq!(tagged["date"], "2026-02-26");
    assert_eq!(tagged["tags"], serde_json::json!(["x", "y"]));

    let third = &manifest["sections"][0]["categories"][2]["articles"][0];
    assert_eq!(third["title"], "third");
    assert!(third.get("tags").is_none());
}

#[test]
fn build_subcommand_is_the_default() {
    let dir = setup_wiki();
    wiki_cmd(dir.path()).arg("build").assert().success();
    assert!(dir.path().join("wiki_manifest.json").is_file());
}

#[test]
fn output_uses_four_space_indent_and_trailing_newline() {
    let dir = setup_wiki();
    wiki_cmd(dir.path()).assert().success();

    let text = fs::read_to_string(dir.path().join("wiki_manifest.json")).unwrap();
    assert!(text.starts_with("{\n    \"sections\": [\n        {\n"));
    assert!(text.ends_with("}\n"));
}

#[test]
fn non_ascii_is_not_escaped() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "Wiki/Notizen/ubersicht.md", "# Übersicht\n");

    wiki_cmd(dir.path()).assert().success();

    let text = fs::read_to_string(dir.path().join("wiki_manifest.json")).unwrap();
    assert!(text.contains("\"title\": \"Übersicht\""));
}

#[test]
fn sections_file_groups_with_fallback() {
    let dir = setup_wiki();
    write(
        dir.path(),
        "wiki_sections.json",
        r#"[{"name": "S1", "folders": ["A", "C"]}]"#,
    );

    wiki_cmd(dir.path()).assert().success();

    let manifest = read_manifest(dir.path());
    assert_eq!(section_names(&manifest), vec!["S1", "Other"]);
    assert_eq!(category_names(&manifest["sections"][0]), vec!["A", "C"]);
    assert_eq!(category_names(&manifest["sections"][1]), vec!["B"]);
    assert_eq!(manifest["sections"][1]["id"], "other");
}

#[test]
fn malformed_sections_file_warns_and_falls_back() {
    let dir = setup_wiki();
    write(dir.path(), "wiki_sections.json", "[{\"name\": ");

    wiki_cmd(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("wiki_sections.json"));

    let manifest = read_manifest(dir.path());
    assert_eq!(section_names(&manifest), vec!["All"]);
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = setup_wiki();

    wiki_cmd(dir.path()).assert().success();
    let first = fs::read(dir.path().join("wiki_manifest.json")).unwrap();
    wiki_cmd(dir.path()).assert().success();
    let second = fs::read(dir.path().join("wiki_manifest.json")).unwrap();

    assert_eq!(first, second);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn missing_content_root_fails_without_writing() {
    let dir = TempDir::new().unwrap();

    wiki_cmd(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("'Wiki' not found"));

    assert!(!dir.path().join("wiki_manifest.json").exists());
}

#[test]
fn unreadable_document_fails_and_keeps_old_manifest() {
    let dir = setup_wiki();
    write(dir.path(), "wiki_manifest.json", "previous\n");
    fs::write(dir.path().join("Wiki/A/binary.md"), [0xffu8, 0xfe, 0x80]).unwrap();

    wiki_cmd(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("binary.md"));

    let text = fs::read_to_string(dir.path().join("wiki_manifest.json")).unwrap();
    assert_eq!(text, "previous\n");
}

#[test]
fn invalid_tool_config_fails() {
    let dir = setup_wiki();
    write(dir.path(), "wiki-manifest.toml", "unknown_key = true\n");

    wiki_cmd(dir.path()).assert().failure();
    assert!(!dir.path().join("wiki_manifest.json").exists());
}

// =============================================================================
// Configuration and flags
// =============================================================================

#[test]
fn tool_config_changes_paths_and_names() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "docs/Guides/intro.md", "# Intro\n");
    write(
        dir.path(),
        "wiki-manifest.toml",
        "content_root = \"docs\"\nmanifest_file = \"out/index.json\"\ndefault_section = \"Everything\"\n",
    );

    wiki_cmd(dir.path()).assert().success();

    let text = fs::read_to_string(dir.path().join("out/index.json")).unwrap();
    let manifest: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(section_names(&manifest), vec!["Everything"]);
    assert_eq!(
        manifest["sections"][0]["categories"][0]["articles"][0]["path"],
        "docs/Guides/intro.md"
    );
}

#[test]
fn flags_override_tool_config() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "content/Guides/intro.md", "# Intro\n");
    write(dir.path(), "wiki-manifest.toml", "content_root = \"elsewhere\"\n");

    wiki_cmd(dir.path())
        .args(["--source", "content", "--output", "manifest.json"])
        .assert()
        .success();

    assert!(dir.path().join("manifest.json").is_file());
    assert!(!dir.path().join("wiki_manifest.json").exists());
}

#[test]
fn check_prints_summary_without_writing() {
    let dir = setup_wiki();

    wiki_cmd(dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked Wiki: 1 section, 3 categories, 3 articles"))
        .stdout(predicate::str::contains("001 First Article"));

    assert!(!dir.path().join("wiki_manifest.json").exists());
}

#[test]
fn gen_config_prints_stock_toml() {
    let dir = TempDir::new().unwrap();

    wiki_cmd(dir.path())
        .arg("gen-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("content_root = \"Wiki\""))
        .stdout(predicate::str::contains("fallback_section = \"Other\""));
}
