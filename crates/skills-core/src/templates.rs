//! Built-in and on-disk template sets.
//!
//! A template set is a tree of files copied into a project by `init`. Any
//! path segment named `SKILL_NAME` is replaced by the configured skill name,
//! and `${SKILL_NAME}` inside file contents is substituted the same way.

use skills_fs::{NormalizedPath, io};
use std::path::Path;
use walkdir::WalkDir;

use crate::{Error, Result};

/// Path segment replaced by the skill name.
pub const SKILL_NAME_SEGMENT: &str = "SKILL_NAME";

/// Content placeholder replaced by the skill name.
pub const SKILL_NAME_PLACEHOLDER: &str = "${SKILL_NAME}";

/// Built-in template for new module documents.
pub const MODULE_TEMPLATE: &str = include_str!("../templates/module_template.md");

macro_rules! builtin {
    ($($path:literal),* $(,)?) => {
        &[$(($path, include_str!(concat!("../templates/project/", $path)))),*]
    };
}

const BUILTIN_PROJECT: &[(&str, &str)] = builtin![
    ".claude-plugin/plugin.json",
    ".claude/commands/session-summary.md",
    ".claude/commands/update-arch.md",
    ".claude/commands/whats-next.md",
    ".claude/skills/SKILL_NAME/SKILL.md",
    ".claude/skills/SKILL_NAME/references/overview.md",
    "CLAUDE.md",
    "project-notes/.gitkeep",
];

/// A file of a template set, keyed by its `/`-separated relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: String,
    pub content: String,
}

/// The template set compiled into the binary.
pub fn builtin_templates() -> Vec<TemplateFile> {
    BUILTIN_PROJECT
        .iter()
        .map(|(path, content)| TemplateFile {
            path: (*path).to_string(),
            content: (*content).to_string(),
        })
        .collect()
}

/// Load every file under `dir` as a template set, sorted by path.
///
/// # Errors
/// Returns [`Error::TemplateNotFound`] if `dir` is not a directory.
pub fn load_template_dir(dir: &Path) -> Result<Vec<TemplateFile>> {
    if !dir.is_dir() {
        return Err(Error::TemplateNotFound {
            path: dir.to_path_buf(),
        });
    }

    let root = NormalizedPath::new(dir);
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = NormalizedPath::new(entry.path());
        let Some(relative) = path.strip_prefix(&root) else {
            continue;
        };
        files.push(TemplateFile {
            path: relative.to_string(),
            content: io::read_text(&path)?,
        });
    }

    tracing::debug!(dir = %root, files = files.len(), "loaded template directory");
    Ok(files)
}

/// Resolve the skill name in the paths and contents of a template set.
pub fn render_templates(files: Vec<TemplateFile>, skill_name: &str) -> Vec<TemplateFile> {
    files
        .into_iter()
        .map(|file| TemplateFile {
            path: file
                .path
                .split('/')
                .map(|segment| {
                    if segment == SKILL_NAME_SEGMENT {
                        skill_name
                    } else {
                        segment
                    }
                })
                .collect::<Vec<_>>()
                .join("/"),
            content: substitute(&file.content, &[(SKILL_NAME_PLACEHOLDER, skill_name)]),
        })
        .collect()
}

/// Replace each `(placeholder, value)` pair in `template`, in order.
pub fn substitute(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter()
        .fold(template.to_string(), |text, (placeholder, value)| {
            text.replace(placeholder, value)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_set_covers_layout() {
        let paths: Vec<_> = builtin_templates().into_iter().map(|f| f.path).collect();
        assert!(paths.contains(&".claude/skills/SKILL_NAME/SKILL.md".to_string()));
        assert!(paths.contains(&"project-notes/.gitkeep".to_string()));
        assert_eq!(paths.len(), 8);
    }

    #[test]
    fn test_render_replaces_segment_and_placeholder() {
        let files = vec![TemplateFile {
            path: ".claude/skills/SKILL_NAME/SKILL.md".into(),
            content: "name: ${SKILL_NAME}".into(),
        }];
        let rendered = render_templates(files, "mapping-code");
        assert_eq!(rendered[0].path, ".claude/skills/mapping-code/SKILL.md");
        assert_eq!(rendered[0].content, "name: mapping-code");
    }

    #[test]
    fn test_segment_must_match_whole() {
        let files = vec![TemplateFile {
            path: "docs/SKILL_NAMES.md".into(),
            content: String::new(),
        }];
        assert_eq!(render_templates(files, "x")[0].path, "docs/SKILL_NAMES.md");
    }

    #[test]
    fn test_substitute_in_order() {
        assert_eq!(substitute("${A}-${B}", &[("${A}", "1"), ("${B}", "2")]), "1-2");
    }
}
