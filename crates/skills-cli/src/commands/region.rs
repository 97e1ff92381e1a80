//! Region get/set command implementations

use std::io::Read;
use std::path::Path;

use skills_blocks::{extract_yaml_fence, has_region, read_region, write_region};
use skills_fs::{NormalizedPath, edit_document, io};

use super::print_json;
use crate::error::{CliError, Result};

fn not_found(name: &str, file: &NormalizedPath) -> CliError {
    CliError::user(format!("Region '{name}' not found in {file}"))
}

/// Run `region get`
///
/// Prints the trimmed region content, or with `yaml` the region's fenced
/// YAML block parsed into JSON.
pub fn run_region_get(file: &Path, name: &str, yaml: bool) -> Result<()> {
    let path = NormalizedPath::new(file);
    let content = io::read_text(&path)?;
    let region = read_region(&content, name).ok_or_else(|| not_found(name, &path))?;

    if !yaml {
        println!("{region}");
        return Ok(());
    }

    let block = extract_yaml_fence(&region)
        .ok_or_else(|| CliError::user(format!("Region '{name}' has no ```yaml block")))?;
    print_json(&skills_yaml::parse(block))
}

/// Run `region set`
///
/// Replaces the region content with `content`, or with stdin when omitted.
pub fn run_region_set(file: &Path, name: &str, content: Option<String>) -> Result<()> {
    let path = NormalizedPath::new(file);
    let new_content = match content {
        Some(content) => content,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    let outcome = edit_document(&path, |document| -> Result<Option<String>> {
        if !has_region(document, name) {
            return Err(not_found(name, &path));
        }
        Ok(Some(write_region(document, name, &new_content)))
    })?;

    tracing::debug!(region = name, written = outcome.is_written(), "region set");
    Ok(())
}
