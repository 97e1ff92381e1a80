//! End-to-end workflow across the library crates
//!
//! init -> create-module -> sync -> validate, plus region edits in between.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use skills_blocks::{read_region, write_region};
use skills_core::{
    HelperConfig, InitOptions, ModuleRequest, SyncOptions, create_module, init_project, sync_skill,
    validate_init,
};
use skills_fs::{EditOutcome, NormalizedPath, edit_document};
use std::fs;
use tempfile::TempDir;

fn git_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    git2::Repository::init(temp.path()).unwrap();
    temp
}

fn today() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2024, 9, 1)
}

#[test]
fn test_full_workflow() {
    let temp = git_project();
    let root = temp.path();
    let config = HelperConfig::default();

    init_project(root, &config, &InitOptions::default()).unwrap();
    assert!(validate_init(root, &config).is_success());

    for (name, description) in [("billing", "Invoices"), ("auth-system", "Login")] {
        create_module(
            root,
            &config,
            &ModuleRequest {
                name: name.to_string(),
                description: Some(description.to_string()),
                tracked_paths: vec![format!("src/{name}/")],
                today: today(),
            },
        )
        .unwrap();
    }

    let report = sync_skill(
        root,
        &config,
        &SyncOptions {
            commit: Some("1234abc".into()),
            today: today(),
            dry_run: false,
        },
    )
    .unwrap();

    let names: Vec<_> = report.modules.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["auth-system", "billing"]);

    let skill = fs::read_to_string(config.layout(root).skill_file()).unwrap();
    let references = read_region(&skill, "References").unwrap();
    assert_eq!(
        references,
        "- [overview.md](references/overview.md) - Project Overview\n\
         - [module_auth-system.md](references/module_auth-system.md) - Login\n\
         - [module_billing.md](references/module_billing.md) - Invoices"
    );
    assert!(skill.contains("| billing | Invoices | [Details](references/module_billing.md) |"));
    assert!(skill.contains("last_updated: \"2024-09-01\""));

    // Syncing never breaks validation.
    assert!(validate_init(root, &config).is_success());
}

#[test]
fn test_hand_edits_survive_sync() {
    let temp = git_project();
    let root = temp.path();
    let config = HelperConfig::default();
    init_project(root, &config, &InitOptions::default()).unwrap();

    let skill = config.layout(root).skill_file();
    let original = fs::read_to_string(&skill).unwrap();
    let edited = original.replace(
        "# Exploring Project\n",
        "# Exploring Project\n\nTeam notes: deploys happen on Tuesdays.\n",
    );
    fs::write(&skill, &edited).unwrap();

    let options = SyncOptions {
        today: today(),
        ..Default::default()
    };
    sync_skill(root, &config, &options).unwrap();

    let synced = fs::read_to_string(&skill).unwrap();
    assert!(synced.contains("Team notes: deploys happen on Tuesdays.\n"));
    assert!(synced.starts_with("---\nname: exploring-project\n"));
}

#[test]
fn test_edit_document_region_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("doc.md"));
    let doc = "intro\n<!-- region Generated Notes Start -->\nold\n<!-- region Generated Notes End -->\noutro\n";
    fs::write(path.to_native(), doc).unwrap();

    let outcome = edit_document(&path, |text| -> skills_fs::Result<Option<String>> {
        Ok(Some(write_region(text, "Notes", "new")))
    })
    .unwrap();
    assert_eq!(outcome, EditOutcome::Written);

    let again = edit_document(&path, |text| -> skills_fs::Result<Option<String>> {
        Ok(Some(write_region(text, "Notes", "new")))
    })
    .unwrap();
    assert_eq!(again, EditOutcome::Unchanged);

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(read_region(&content, "Notes").as_deref(), Some("new"));
    assert!(content.starts_with("intro\n") && content.ends_with("outro\n"));
}
