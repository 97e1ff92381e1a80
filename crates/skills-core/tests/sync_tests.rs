//! Tests for hub document synchronisation

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use skills_core::{Error, HelperConfig, SyncOptions, sync_skill};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SKILL: &str = "---
name: exploring-project
description: Explains the project.
---

# Exploring Project

Hand-written intro.

## Core Modules

| Module | Description | Doc |
|--------|-------------|-----|
| stale | old row | [Details](references/module_stale.md) |

*Run `skills sync` to refresh this table.*

## References

<!-- region Generated References Start -->
- stale entry
<!-- region Generated References End -->

## Config

<!-- region Generated Config Start -->
```yaml
last_tracked_commit: \"abc123\"
last_updated: \"2000-01-01\"
```
<!-- region Generated Config End -->

Footer kept verbatim.
";

const EXPECTED: &str = "---
name: exploring-project
description: Explains the project.
---

# Exploring Project

Hand-written intro.

## Core Modules

| Module | Description | Doc |
|--------|-------------|-----|
| api | HTTP layer | [Details](references/module_api.md) |
| auth | auth module | [Details](references/module_auth.md) |

*Run `skills sync` to refresh this table.*

## References

<!-- region Generated References Start -->
- [overview.md](references/overview.md) - Project Overview
- [module_api.md](references/module_api.md) - HTTP layer
- [module_auth.md](references/module_auth.md) - auth module
<!-- region Generated References End -->

## Config

<!-- region Generated Config Start -->
```yaml
last_tracked_commit: \"abc123\"
last_updated: \"2024-06-01\"
```
<!-- region Generated Config End -->

Footer kept verbatim.
";

const API_MODULE: &str = "# Api

<!-- region Generated Config Start -->
```yaml
description: \"HTTP layer\"
tracked_paths:
  - \"src/api/\"
```
<!-- region Generated Config End -->
";

fn skill_dir(root: &Path) -> std::path::PathBuf {
    root.join(".claude/skills/exploring-project")
}

fn setup() -> TempDir {
    let temp = TempDir::new().unwrap();
    let skill = skill_dir(temp.path());
    fs::create_dir_all(skill.join("references")).unwrap();
    fs::write(skill.join("SKILL.md"), SKILL).unwrap();
    fs::write(skill.join("references/overview.md"), "# Project Overview\n").unwrap();
    fs::write(skill.join("references/module_api.md"), API_MODULE).unwrap();
    fs::write(skill.join("references/module_auth.md"), "# Auth\nno config yet\n").unwrap();
    fs::write(skill.join("references/notes.txt"), "ignored").unwrap();
    temp
}

fn options() -> SyncOptions {
    SyncOptions {
        today: NaiveDate::from_ymd_opt(2024, 6, 1),
        ..Default::default()
    }
}

fn read_skill(root: &Path) -> String {
    fs::read_to_string(skill_dir(root).join("SKILL.md")).unwrap()
}

#[test]
fn test_sync_rewrites_generated_parts_only() {
    let temp = setup();

    let report = sync_skill(temp.path(), &HelperConfig::default(), &options()).unwrap();

    assert_eq!(read_skill(temp.path()), EXPECTED);
    assert!(report.changed);
    assert_eq!(report.commit, "abc123");
    assert_eq!(
        report.updated_regions,
        vec!["References", "Config", "Core Modules"]
    );
    let names: Vec<_> = report.modules.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["api", "auth"]);
    assert_eq!(report.other_files.len(), 1);
}

#[test]
fn test_sync_is_idempotent() {
    let temp = setup();
    let config = HelperConfig::default();

    sync_skill(temp.path(), &config, &options()).unwrap();
    let first = read_skill(temp.path());
    let report = sync_skill(temp.path(), &config, &options()).unwrap();

    assert!(!report.changed);
    assert_eq!(read_skill(temp.path()), first);
}

#[test]
fn test_sync_records_new_commit() {
    let temp = setup();
    let options = SyncOptions {
        commit: Some("def456".into()),
        ..options()
    };

    let report = sync_skill(temp.path(), &HelperConfig::default(), &options).unwrap();

    assert_eq!(report.commit, "def456");
    assert!(read_skill(temp.path()).contains("last_tracked_commit: \"def456\""));
}

#[test]
fn test_dry_run_leaves_file_untouched() {
    let temp = setup();
    let options = SyncOptions {
        dry_run: true,
        ..options()
    };

    let report = sync_skill(temp.path(), &HelperConfig::default(), &options).unwrap();

    assert!(report.changed);
    assert!(report.dry_run);
    assert_eq!(read_skill(temp.path()), SKILL);
}

#[test]
fn test_custom_link_label() {
    let temp = setup();
    let config = HelperConfig {
        link_label: "详情".into(),
        ..Default::default()
    };

    sync_skill(temp.path(), &config, &options()).unwrap();

    assert!(read_skill(temp.path()).contains("| api | HTTP layer | [详情](references/module_api.md) |"));
}

#[test]
fn test_missing_skill_file() {
    let temp = TempDir::new().unwrap();
    let err = sync_skill(temp.path(), &HelperConfig::default(), &options()).unwrap_err();
    assert!(matches!(err, Error::SkillNotFound { .. }));
}

#[test]
fn test_missing_references_dir_empties_lists() {
    let temp = setup();
    fs::remove_dir_all(skill_dir(temp.path()).join("references")).unwrap();

    let report = sync_skill(temp.path(), &HelperConfig::default(), &options()).unwrap();

    assert!(report.modules.is_empty());
    let content = read_skill(temp.path());
    assert!(content.contains(
        "<!-- region Generated References Start -->\n\n<!-- region Generated References End -->"
    ));
    assert!(content.contains("|--------|-------------|-----|\n\n*Run"));
}
