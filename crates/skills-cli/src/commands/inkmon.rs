//! Validate-inkmon command implementation

use colored::Colorize;
use std::path::Path;

use skills_fs::NormalizedPath;
use skills_inkmon::{load_file, validate};

use crate::error::{CliError, Result};

/// Run the validate-inkmon command
pub fn run_validate_inkmon(file: &Path) -> Result<()> {
    let path = NormalizedPath::new(file);
    if !path.is_file() {
        return Err(CliError::user(format!("File not found: {}", file.display())));
    }

    let document = load_file(&path)?;
    let errors = validate(&document);

    if errors.is_empty() {
        let name = document["inkmon"]["name_en"].as_str().unwrap_or("Unknown");
        println!("{} Validation passed: {}", "[OK]".green().bold(), name);
        return Ok(());
    }

    println!("Found {} error(s):", errors.len());
    println!();
    for error in &errors {
        println!("  {}", error.to_string().red());
    }
    println!();
    println!("Fix the errors and return to the corresponding step.");
    Err(CliError::user(format!("{} validation error(s)", errors.len())))
}
