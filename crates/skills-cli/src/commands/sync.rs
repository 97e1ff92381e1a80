//! Sync command implementation

use colored::Colorize;
use std::path::Path;

use skills_core::{HelperConfig, SyncOptions, sync_skill};

use super::{print_json, resolve_dir};
use crate::error::Result;

/// Run the sync command
pub fn run_sync(target: &Path, commit: Option<String>, dry_run: bool, json: bool) -> Result<()> {
    let root = resolve_dir(target)?;
    let config = HelperConfig::load(&root)?;
    let options = SyncOptions {
        commit,
        today: None,
        dry_run,
    };

    let report = sync_skill(&root, &config, &options)?;

    if json {
        return print_json(&report);
    }

    let status = match (report.dry_run, report.changed) {
        (true, true) => "DRY RUN".yellow().bold(),
        (false, true) => "OK".green().bold(),
        (_, false) => "UNCHANGED".dimmed().bold(),
    };
    println!("{} {}", status, report.skill_file.cyan());

    println!();
    println!("Modules ({}):", report.modules.len());
    for module in &report.modules {
        println!(
            "   {} {} {}",
            "-".dimmed(),
            module.name,
            module.description.as_deref().unwrap_or("").dimmed()
        );
    }
    if !report.other_files.is_empty() {
        println!("Other references ({}):", report.other_files.len());
        for file in &report.other_files {
            println!("   {} {} {}", "-".dimmed(), file.file, file.title.dimmed());
        }
    }

    println!();
    if report.updated_regions.is_empty() {
        println!(
            "{} No generated regions found in SKILL.md",
            "WARN".yellow().bold()
        );
    } else {
        println!("Updated: {}", report.updated_regions.join(", "));
    }
    if !report.commit.is_empty() {
        println!("Tracked commit: {}", report.commit);
    }
    if report.dry_run && report.changed {
        println!("Run without {} to apply.", "--dry-run".cyan());
    }
    Ok(())
}
