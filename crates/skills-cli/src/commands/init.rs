//! Init command implementation

use colored::Colorize;
use std::path::{Path, PathBuf};

use skills_core::{HelperConfig, InitOptions, init_project};

use super::{print_json, resolve_dir};
use crate::error::Result;

/// Run the init command
pub fn run_init(target: &Path, force: bool, templates: Option<PathBuf>, json: bool) -> Result<()> {
    let root = resolve_dir(target)?;
    let config = HelperConfig::load(&root)?;
    let options = InitOptions { force, templates };

    let report = init_project(&root, &config, &options)?;

    if json {
        return print_json(&report);
    }

    println!("{} Project initialised", "OK".green().bold());
    println!("   Target: {}", report.target_dir.cyan());

    let groups = [
        ("Created", "+".green(), &report.created),
        ("Updated", "~".yellow(), &report.updated),
        ("Skipped", "-".dimmed(), &report.skipped),
    ];
    for (label, marker, files) in groups {
        if files.is_empty() {
            continue;
        }
        println!();
        println!("{} ({}):", label.bold(), files.len());
        for file in files {
            println!("   {} {}", marker, file);
        }
    }

    println!();
    println!("{} file(s) written", report.written());
    if !report.skipped.is_empty() && !force {
        println!("Run with {} to overwrite existing files.", "--force".cyan());
    }
    Ok(())
}
