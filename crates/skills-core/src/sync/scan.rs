//! Scanning of the `references/` directory.

use serde::Serialize;
use skills_blocks::{extract_yaml_fence, first_heading, read_region};
use skills_fs::{MODULE_PREFIX, NormalizedPath, io};
use skills_yaml::Mapping;
use walkdir::WalkDir;

use crate::Result;

/// Region of a module document that holds its YAML metadata.
pub const CONFIG_REGION: &str = "Config";

/// A `module_<name>.md` document and the metadata read from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleEntry {
    /// Module name, taken from the file name without the `module_` prefix
    pub name: String,
    /// File name inside `references/`
    pub file: String,
    /// `description` from the document's config, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Everything parsed from the document's config block
    pub config: Mapping,
}

impl ModuleEntry {
    /// Entry for a module document whose config could not be read.
    fn fallback(name: String, file: String) -> Self {
        let description = format!("{name} module");
        Self {
            name,
            file,
            description: Some(description),
            config: Mapping::new(),
        }
    }
}

/// Any other markdown document in `references/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceFile {
    pub file: String,
    pub title: String,
}

/// Parse the `Config` region of a module document.
///
/// Returns `None` when the region is missing or empty, or holds no
/// ```` ```yaml ```` block.
pub fn parse_module_config(content: &str) -> Option<Mapping> {
    let region = read_region(content, CONFIG_REGION).filter(|r| !r.is_empty())?;
    let yaml = extract_yaml_fence(&region)?;
    Some(skills_yaml::parse(yaml))
}

/// Scan `references_dir` for markdown documents, sorted by file name.
///
/// A missing directory yields two empty lists.
pub fn scan_references(references_dir: &NormalizedPath) -> Result<(Vec<ModuleEntry>, Vec<ReferenceFile>)> {
    let mut modules = Vec::new();
    let mut others = Vec::new();

    if !references_dir.is_dir() {
        tracing::debug!(path = %references_dir, "references directory missing");
        return Ok((modules, others));
    }

    let walker = WalkDir::new(references_dir.to_native())
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = NormalizedPath::new(entry.path());
        if path.extension() != Some("md") {
            continue;
        }
        let (Some(file), Some(stem)) = (path.file_name(), path.file_stem()) else {
            continue;
        };
        let file = file.to_string();

        match stem.strip_prefix(MODULE_PREFIX) {
            Some(name) => modules.push(read_module(&path, name.to_string(), file)),
            None => others.push(read_reference(&path, file)),
        }
    }

    tracing::debug!(modules = modules.len(), others = others.len(), "scanned references");
    Ok((modules, others))
}

fn read_module(path: &NormalizedPath, name: String, file: String) -> ModuleEntry {
    let content = match io::read_text(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %path, error = %e, "could not read module document");
            return ModuleEntry::fallback(name, file);
        }
    };

    match parse_module_config(&content) {
        Some(config) => ModuleEntry {
            description: config.get_str("description").map(str::to_string),
            name,
            file,
            config,
        },
        None => {
            tracing::debug!(path = %path, "module document has no config block");
            ModuleEntry::fallback(name, file)
        }
    }
}

fn read_reference(path: &NormalizedPath, file: String) -> ReferenceFile {
    let title = match io::read_text(path) {
        Ok(content) => first_heading(&content).map(str::to_string),
        Err(e) => {
            tracing::warn!(path = %path, error = %e, "could not read reference document");
            None
        }
    };

    ReferenceFile {
        title: title.unwrap_or_else(|| file.clone()),
        file,
    }
}
