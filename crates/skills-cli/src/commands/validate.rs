//! Validate-init command implementation

use colored::Colorize;
use std::path::Path;

use skills_core::{HelperConfig, ValidationReport, validate_init};

use super::{print_json, resolve_dir};
use crate::error::{CliError, Result};

/// Run the validate-init command
///
/// Fails when any check fails, after printing the report.
pub fn run_validate_init(root: &Path, json: bool) -> Result<()> {
    let root = resolve_dir(root)?;
    let config = HelperConfig::load(&root)?;

    let report = validate_init(&root, &config);

    if json {
        print_json(&report)?;
    } else {
        print_report(&report);
    }

    if report.is_success() {
        Ok(())
    } else {
        Err(CliError::user(format!(
            "{} of {} checks failed",
            report.failed(),
            report.checks.len()
        )))
    }
}

fn print_report(report: &ValidationReport) {
    println!("{} Validating {}", "=>".blue().bold(), report.root.cyan());

    let mut section = None;
    for check in &report.checks {
        if section != Some(check.section) {
            section = Some(check.section);
            println!();
            println!("{}", check.section.to_string().bold());
        }
        if check.passed {
            println!("   {} {}", "OK".green(), check.message);
        } else {
            println!("   {} {}", "FAIL".red(), check.message);
            if let Some(suggestion) = &check.suggestion {
                println!("        {}", suggestion.dimmed());
            }
        }
    }

    println!();
    println!(
        "{}/{} checks passed",
        report.passed(),
        report.checks.len()
    );
    if report.is_success() {
        println!("{} All checks passed", "OK".green().bold());
    }
}
