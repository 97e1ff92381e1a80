//! Create-module command implementation

use colored::Colorize;
use std::path::Path;

use skills_core::module::split_paths;
use skills_core::{HelperConfig, ModuleRequest, create_module};

use super::{print_json, resolve_dir};
use crate::error::Result;

/// Run the create-module command
pub fn run_create_module(
    target: &Path,
    name: &str,
    description: Option<String>,
    paths: &[String],
    json: bool,
) -> Result<()> {
    let root = resolve_dir(target)?;
    let config = HelperConfig::load(&root)?;
    let request = ModuleRequest {
        name: name.to_string(),
        description,
        tracked_paths: split_paths(paths),
        today: None,
    };

    let report = create_module(&root, &config, &request)?;

    if json {
        return print_json(&report);
    }

    println!("{} Module document created", "OK".green().bold());
    println!("   File:   {}", report.file_path.cyan());
    println!("   Module: {}", report.module_name);
    println!();
    println!("Next steps:");
    println!("   1. Explore the module and fill in each SECTION");
    println!("   2. Run {} to refresh SKILL.md", "skills sync".cyan());
    Ok(())
}
