//! Project initialisation.
//!
//! Copies a template set into a project that is already under git.

use serde::Serialize;
use skills_fs::{NormalizedPath, io};
use std::path::{Path, PathBuf};

use crate::templates::{builtin_templates, load_template_dir, render_templates};
use crate::{Error, HelperConfig, Result};

/// Options for [`init_project`].
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Overwrite files that already exist
    pub force: bool,
    /// Directory to copy instead of the built-in template set
    pub templates: Option<PathBuf>,
}

/// Files touched by [`init_project`], as `/`-separated relative paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InitReport {
    pub target_dir: String,
    pub created: Vec<String>,
    pub updated: Vec<String>,
    pub skipped: Vec<String>,
}

impl InitReport {
    /// Number of files written.
    pub fn written(&self) -> usize {
        self.created.len() + self.updated.len()
    }
}

/// Whether `path` is inside a git working tree.
pub fn is_git_repository(path: &Path) -> bool {
    git2::Repository::discover(path).is_ok()
}

/// Copy the template set into `target`.
///
/// # Errors
/// Returns [`Error::GitNotInitialized`] if `target` is not inside a git
/// repository, [`Error::TemplateNotFound`] if a custom template directory
/// does not exist, or a filesystem error if a file cannot be written.
pub fn init_project(target: &Path, config: &HelperConfig, options: &InitOptions) -> Result<InitReport> {
    if !is_git_repository(target) {
        return Err(Error::GitNotInitialized {
            path: target.to_path_buf(),
        });
    }

    let templates = match &options.templates {
        Some(dir) => load_template_dir(dir)?,
        None => builtin_templates(),
    };

    let root = NormalizedPath::new(target);
    let mut report = InitReport {
        target_dir: root.to_string(),
        ..Default::default()
    };

    for file in render_templates(templates, &config.skill_name) {
        let destination = root.join(&file.path);
        if !destination.exists() {
            io::write_text(&destination, &file.content)?;
            report.created.push(file.path);
        } else if options.force {
            io::write_text(&destination, &file.content)?;
            report.updated.push(file.path);
        } else {
            tracing::debug!(path = %destination, "file exists, skipping");
            report.skipped.push(file.path);
        }
    }

    tracing::info!(
        target = %root,
        created = report.created.len(),
        updated = report.updated.len(),
        skipped = report.skipped.len(),
        "initialised project"
    );
    Ok(report)
}
