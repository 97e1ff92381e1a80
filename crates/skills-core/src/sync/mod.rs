//! Synchronisation of the hub document with its references.
//!
//! A sync run scans `references/`, then rewrites three parts of `SKILL.md`:
//! the `References` region, the `Config` region and the Core Modules table.
//! Everything else in the document is preserved byte-for-byte. The whole
//! rewrite happens in memory and the file is written once, atomically.

mod render;
mod scan;

pub use render::{render_config, render_references, render_table_rows};
pub use scan::{CONFIG_REGION, ModuleEntry, ReferenceFile, parse_module_config, scan_references};

use chrono::{Local, NaiveDate};
use serde::Serialize;
use skills_blocks::{extract_yaml_fence, has_module_table, has_region, read_region, update_table_rows, write_region};
use skills_fs::edit_document;
use std::path::Path;

use crate::{Error, HelperConfig, Result};

/// Region listing every document in `references/`.
pub const REFERENCES_REGION: &str = "References";

/// Name reported for the Core Modules table.
pub const MODULE_TABLE: &str = "Core Modules";

/// Options for a sync run.
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// New `last_tracked_commit`; the existing value is kept when `None`
    pub commit: Option<String>,
    /// Date written to `last_updated`; defaults to today
    pub today: Option<NaiveDate>,
    /// Compute the result without writing the file
    pub dry_run: bool,
}

/// Outcome of a sync run.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub skill_file: String,
    pub modules: Vec<ModuleEntry>,
    pub other_files: Vec<ReferenceFile>,
    /// Regions and tables whose markers were found and rewritten
    pub updated_regions: Vec<String>,
    /// `last_tracked_commit` written to the Config region
    pub commit: String,
    /// Whether the rewritten document differs from the original
    pub changed: bool,
    pub dry_run: bool,
}

/// The rewritten document plus what was touched.
#[derive(Debug, Default)]
struct Rendered {
    content: String,
    updated_regions: Vec<String>,
    commit: String,
    changed: bool,
}

/// Synchronise `SKILL.md` of the project at `root` with its references.
///
/// # Errors
/// Returns [`Error::SkillNotFound`] if the hub document does not exist, or a
/// filesystem error if it cannot be read or written.
pub fn sync_skill(root: &Path, config: &HelperConfig, options: &SyncOptions) -> Result<SyncReport> {
    let layout = config.layout(root);
    let skill_file = layout.skill_file();
    if !skill_file.is_file() {
        return Err(Error::SkillNotFound {
            path: skill_file.to_native(),
        });
    }

    let (modules, other_files) = scan_references(&layout.references_dir())?;
    let date = options
        .today
        .unwrap_or_else(|| Local::now().date_naive())
        .format("%Y-%m-%d")
        .to_string();

    // Dry runs still go through the edit cycle but decline the write.
    let mut rendered = Rendered::default();
    edit_document(&skill_file, |original| -> Result<Option<String>> {
        rendered = render_document(original, &modules, &other_files, config, options, &date);
        rendered.changed = rendered.content != original;
        Ok((!options.dry_run).then(|| rendered.content.clone()))
    })?;
    let changed = rendered.changed;

    tracing::info!(
        path = %skill_file,
        modules = modules.len(),
        changed,
        dry_run = options.dry_run,
        "synced skill document"
    );

    Ok(SyncReport {
        skill_file: skill_file.to_string(),
        modules,
        other_files,
        updated_regions: rendered.updated_regions,
        commit: rendered.commit,
        changed,
        dry_run: options.dry_run,
    })
}

fn render_document(
    original: &str,
    modules: &[ModuleEntry],
    others: &[ReferenceFile],
    config: &HelperConfig,
    options: &SyncOptions,
    date: &str,
) -> Rendered {
    let mut content = original.to_string();
    let mut updated_regions = Vec::new();

    if has_region(&content, REFERENCES_REGION) {
        content = write_region(&content, REFERENCES_REGION, &render_references(modules, others));
        updated_regions.push(REFERENCES_REGION.to_string());
    }

    let commit = options
        .commit
        .clone()
        .unwrap_or_else(|| tracked_commit(&content).unwrap_or_default());
    if has_region(&content, CONFIG_REGION) {
        content = write_region(&content, CONFIG_REGION, &render_config(&commit, date));
        updated_regions.push(CONFIG_REGION.to_string());
    }

    if has_module_table(&content) {
        content = update_table_rows(&content, &render_table_rows(modules, &config.link_label));
        updated_regions.push(MODULE_TABLE.to_string());
    }

    Rendered {
        content,
        updated_regions,
        commit,
        changed: false,
    }
}

/// `last_tracked_commit` from the document's Config region.
pub fn tracked_commit(content: &str) -> Option<String> {
    let region = read_region(content, CONFIG_REGION)?;
    let yaml = extract_yaml_fence(&region)?;
    skills_yaml::parse(yaml)
        .get_str("last_tracked_commit")
        .map(str::to_string)
}
