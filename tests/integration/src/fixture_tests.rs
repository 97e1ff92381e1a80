//! Golden-file tests using test-fixtures/
//!
//! A fixture project is copied into a temporary directory, synced with a
//! fixed date, and the resulting hub document compared with the expected
//! output.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use skills_core::{HelperConfig, SyncOptions, sync_skill};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Normalize line endings to LF for cross-platform comparison.
fn normalize_line_endings(s: &str) -> String {
    s.replace("\r\n", "\n")
}

/// Path to the test-fixtures directory (relative to the workspace root).
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures")
}

/// Copy a fixture project into a fresh temporary directory.
fn copy_fixture(name: &str) -> TempDir {
    let source = fixtures_dir().join("projects").join(name);
    let temp = TempDir::new().unwrap();
    for entry in WalkDir::new(&source) {
        let entry = entry.unwrap();
        let relative = entry.path().strip_prefix(&source).unwrap();
        let target = temp.path().join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            let content = fs::read_to_string(entry.path()).unwrap();
            fs::write(&target, normalize_line_endings(&content)).unwrap();
        }
    }
    temp
}

fn load_expected(name: &str) -> String {
    let path = fixtures_dir().join("expected").join(name).join("SKILL.md");
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read expected output at {}: {}", path.display(), e));
    normalize_line_endings(&content)
}

fn skill_file(root: &Path, config: &HelperConfig) -> PathBuf {
    config.layout(root).skill_file().to_native()
}

fn options() -> SyncOptions {
    SyncOptions {
        today: NaiveDate::from_ymd_opt(2024, 7, 15),
        ..Default::default()
    }
}

#[test]
fn test_fixture_config_is_picked_up() {
    let temp = copy_fixture("mapped-project");
    let config = HelperConfig::load(temp.path()).unwrap();
    assert_eq!(config.skill_name, "mapping-code");
    assert_eq!(config.link_label, "详情");
}

#[test]
fn test_sync_matches_golden_file() {
    let temp = copy_fixture("mapped-project");
    let config = HelperConfig::load(temp.path()).unwrap();

    let report = sync_skill(temp.path(), &config, &options()).unwrap();

    assert!(report.changed);
    assert_eq!(report.commit, "0f3e2a1");
    let actual = fs::read_to_string(skill_file(temp.path(), &config)).unwrap();
    assert_eq!(actual, load_expected("mapped-project"));
}

#[test]
fn test_golden_file_is_a_fixed_point() {
    let temp = copy_fixture("mapped-project");
    let config = HelperConfig::load(temp.path()).unwrap();

    sync_skill(temp.path(), &config, &options()).unwrap();
    let report = sync_skill(temp.path(), &config, &options()).unwrap();

    assert!(!report.changed);
}

#[test]
fn test_module_metadata_from_fixture() {
    let temp = copy_fixture("mapped-project");
    let config = HelperConfig::load(temp.path()).unwrap();

    let report = sync_skill(
        temp.path(),
        &config,
        &SyncOptions {
            dry_run: true,
            ..options()
        },
    )
    .unwrap();

    let auth = &report.modules[0];
    assert_eq!(auth.name, "auth");
    assert_eq!(
        auth.config.get("tracked_paths").and_then(|v| v.as_str_list()),
        Some(vec!["src/auth/", "src/session/"])
    );
    let payments = &report.modules[1];
    assert!(payments.config.is_empty());
    assert_eq!(payments.description.as_deref(), Some("payments module"));
}
