//! Scaffolding of module tracking documents.
//!
//! A module document lives at `references/module_<name>.md` and carries a
//! `Config` region whose YAML block (`description`, `tracked_paths`) is read
//! back by [`sync_skill`](crate::sync_skill).

use chrono::{Local, NaiveDate};
use regex::Regex;
use serde::Serialize;
use skills_fs::io;
use std::path::Path;
use std::sync::LazyLock;

use crate::templates::{MODULE_TEMPLATE, substitute};
use crate::{Error, HelperConfig, Result};

static MODULE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9]*(-[a-z0-9]+)*$").expect("Invalid module name regex")
});

/// Tracked path written when none are given.
const PLACEHOLDER_PATH: &str = "path/to/module/";

/// A module document to create.
#[derive(Debug, Clone, Default)]
pub struct ModuleRequest {
    /// Kebab-case module name, e.g. `auth-system`
    pub name: String,
    /// Defaults to `"{Title} module"`
    pub description: Option<String>,
    pub tracked_paths: Vec<String>,
    /// Date written to the document; defaults to today
    pub today: Option<NaiveDate>,
}

/// A created module document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleReport {
    pub module_name: String,
    pub file_path: String,
}

/// Check that `name` is kebab-case.
pub fn validate_module_name(name: &str) -> Result<()> {
    if MODULE_NAME_REGEX.is_match(name) {
        Ok(())
    } else {
        Err(Error::InvalidModuleName {
            name: name.to_string(),
        })
    }
}

/// `auth-system` -> `Auth System`.
pub fn kebab_to_title(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Flatten repeated and comma-separated path arguments.
///
/// ```
/// use skills_core::module::split_paths;
///
/// let paths = split_paths(["src/auth/, src/middleware/", "src/api/"]);
/// assert_eq!(paths, vec!["src/auth/", "src/middleware/", "src/api/"]);
/// ```
pub fn split_paths<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .flat_map(|arg| {
            arg.as_ref()
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Fill the module template for `request`.
pub fn render_module(template: &str, request: &ModuleRequest) -> String {
    let title = kebab_to_title(&request.name);
    let description = request
        .description
        .clone()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| format!("{title} module"));

    let paths = if request.tracked_paths.is_empty() {
        vec![PLACEHOLDER_PATH.to_string()]
    } else {
        request.tracked_paths.clone()
    };
    let paths_yaml = paths
        .iter()
        .map(|p| format!("  - \"{p}\""))
        .collect::<Vec<_>>()
        .join("\n");

    let date = request
        .today
        .unwrap_or_else(|| Local::now().date_naive())
        .format("%Y-%m-%d")
        .to_string();

    substitute(
        template,
        &[
            ("${MODULE_TITLE}", title.as_str()),
            ("${DESCRIPTION}", description.as_str()),
            ("${TRACKED_PATHS}", paths_yaml.as_str()),
            ("${DATE}", date.as_str()),
        ],
    )
}

/// Create `references/module_<name>.md` in the project at `root`.
///
/// # Errors
/// Fails if the name is not kebab-case, the references directory is
/// missing, the document already exists, or a configured template cannot be
/// found.
pub fn create_module(root: &Path, config: &HelperConfig, request: &ModuleRequest) -> Result<ModuleReport> {
    validate_module_name(&request.name)?;

    let layout = config.layout(root);
    let references_dir = layout.references_dir();
    if !references_dir.is_dir() {
        return Err(Error::ReferencesDirMissing {
            path: references_dir.to_native(),
        });
    }

    let output = layout.module_file(&request.name);
    if output.exists() {
        return Err(Error::ModuleExists {
            path: output.to_native(),
        });
    }

    let template = match config.module_template_path(root) {
        Some(path) if !path.is_file() => {
            return Err(Error::TemplateNotFound {
                path: path.to_native(),
            });
        }
        Some(path) => io::read_text(&path)?,
        None => MODULE_TEMPLATE.to_string(),
    };

    io::write_text(&output, &render_module(&template, request))?;
    tracing::info!(module = %request.name, path = %output, "created module document");

    Ok(ModuleReport {
        module_name: request.name.clone(),
        file_path: output.to_string(),
    })
}
