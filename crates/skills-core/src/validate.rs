//! Validation of an initialised project.
//!
//! Every rule produces a [`Check`], passed or failed, so the report doubles
//! as a checklist. Nothing here returns an error: unreadable files become
//! failed checks.

use regex::Regex;
use serde::Serialize;
use skills_blocks::{FrontmatterError, split_frontmatter};
use skills_fs::{COMMAND_NAMES, NormalizedPath, SkillLayout, io};
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use crate::HelperConfig;

static SKILL_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("Invalid skill name regex"));

const MAX_NAME_CHARS: usize = 64;
const MAX_DESCRIPTION_CHARS: usize = 1024;
const MAX_BODY_LINES: usize = 500;

/// Openers that mark a description as first or second person.
const PERSONAL_OPENERS: [&str; 4] = ["I ", "You ", "我", "你"];

/// Part of the project a check belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Structure,
    SkillMd,
    ClaudeMd,
    PluginJson,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Structure => "Directory structure",
            Self::SkillMd => "SKILL.md",
            Self::ClaudeMd => "CLAUDE.md",
            Self::PluginJson => "plugin.json",
        };
        f.write_str(label)
    }
}

/// One validation rule and its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Check {
    pub section: Section,
    pub passed: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// All checks run against a project.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub root: String,
    pub checks: Vec<Check>,
}

impl ValidationReport {
    fn check(&mut self, section: Section, passed: bool, message: impl Into<String>) {
        self.checks.push(Check {
            section,
            passed,
            message: message.into(),
            suggestion: None,
        });
    }

    fn ok(&mut self, section: Section, message: impl Into<String>) {
        self.check(section, true, message);
    }

    fn fail(&mut self, section: Section, message: impl Into<String>) {
        self.check(section, false, message);
    }

    fn fail_with(&mut self, section: Section, message: impl Into<String>, suggestion: impl Into<String>) {
        self.checks.push(Check {
            section,
            passed: false,
            message: message.into(),
            suggestion: Some(suggestion.into()),
        });
    }

    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.checks.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &Check> {
        self.checks.iter().filter(|c| !c.passed)
    }
}

/// Validate the project at `root` against the standard layout.
pub fn validate_init(root: &Path, config: &HelperConfig) -> ValidationReport {
    let layout = config.layout(root);
    let mut report = ValidationReport {
        root: layout.root().to_string(),
        checks: Vec::new(),
    };

    validate_structure(&layout, &mut report);
    validate_skill_md(&layout, &mut report);
    validate_claude_md(&layout, &mut report);
    validate_plugin_json(&layout, &mut report);

    tracing::debug!(
        passed = report.passed(),
        failed = report.failed(),
        "validated project"
    );
    report
}

fn validate_structure(layout: &SkillLayout, report: &mut ValidationReport) {
    let mut required = vec![
        (layout.plugin_manifest(), false),
        (layout.skill_file(), false),
        (layout.references_dir(), true),
    ];
    required.extend(
        COMMAND_NAMES
            .iter()
            .map(|name| (layout.command_file(name), false)),
    );
    required.push((layout.project_notes_dir(), true));
    required.push((layout.claude_md(), false));

    for (path, is_dir) in required {
        let relative = path
            .strip_prefix(layout.root())
            .map_or_else(|| path.to_string(), |p| p.to_string());
        let exists = if is_dir { path.is_dir() } else { path.is_file() };
        match (exists, is_dir) {
            (true, _) => report.ok(Section::Structure, relative),
            (false, false) => report.fail_with(
                Section::Structure,
                format!("{relative} does not exist"),
                "run `skills init` to create it",
            ),
            (false, true) => report.fail_with(
                Section::Structure,
                format!("{relative}/ directory does not exist"),
                format!("run `mkdir -p {relative}`"),
            ),
        }
    }
}

fn read_or_fail(path: &NormalizedPath, section: Section, report: &mut ValidationReport) -> Option<String> {
    if !path.is_file() {
        report.fail(section, format!("{section} does not exist, skipping content checks"));
        return None;
    }
    match io::read_text(path) {
        Ok(content) => Some(content),
        Err(e) => {
            report.fail(section, format!("could not read {section}: {e}"));
            None
        }
    }
}

fn validate_skill_md(layout: &SkillLayout, report: &mut ValidationReport) {
    const S: Section = Section::SkillMd;
    let Some(content) = read_or_fail(&layout.skill_file(), S, report) else {
        return;
    };

    let frontmatter = match split_frontmatter(&content) {
        Ok(fm) => fm,
        Err(FrontmatterError::Missing) => {
            report.fail_with(S, "missing YAML frontmatter", "start the file with `---`");
            return;
        }
        Err(FrontmatterError::Unclosed) => {
            report.fail_with(S, "frontmatter is not closed", "wrap it in `---` lines");
            return;
        }
    };
    let fields = skills_yaml::parse(frontmatter.raw);

    match fields.get_str("name").filter(|n| !n.is_empty()) {
        Some(name) => {
            let expected = layout.skill_name();
            if name == expected {
                report.ok(S, format!("name: {name}"));
            } else {
                report.fail(S, format!("name should be '{expected}', found '{name}'"));
            }

            let len = name.chars().count();
            report.check(
                S,
                len <= MAX_NAME_CHARS,
                format!("name length ({len}/{MAX_NAME_CHARS})"),
            );
            report.check(
                S,
                SKILL_NAME_REGEX.is_match(name),
                "name is kebab-case (lowercase letters, digits, hyphens)",
            );
        }
        None => report.fail(S, "missing name field"),
    }

    match fields.get_str("description").filter(|d| !d.is_empty()) {
        Some(description) => {
            let len = description.chars().count();
            report.check(
                S,
                len <= MAX_DESCRIPTION_CHARS,
                format!("description length ({len}/{MAX_DESCRIPTION_CHARS})"),
            );
            if PERSONAL_OPENERS.iter().any(|o| description.starts_with(*o)) {
                report.fail_with(
                    S,
                    "description should be written in the third person",
                    "do not start it with 'I' or 'You'",
                );
            } else {
                report.ok(S, "description is written in the third person");
            }
        }
        None => report.fail(S, "missing description field"),
    }

    let body_lines = frontmatter.body.trim().split('\n').count();
    if body_lines <= MAX_BODY_LINES {
        report.ok(S, format!("body lines ({body_lines}/{MAX_BODY_LINES})"));
    } else {
        report.fail_with(
            S,
            format!("body exceeds {MAX_BODY_LINES} lines ({body_lines})"),
            "move details into references/",
        );
    }

    if content.to_lowercase().contains("references/") {
        report.ok(S, "links to references/");
    } else {
        report.fail_with(
            S,
            "no link to references/",
            "add links to the documents in references/",
        );
    }
}

fn validate_claude_md(layout: &SkillLayout, report: &mut ValidationReport) {
    const S: Section = Section::ClaudeMd;
    let Some(content) = read_or_fail(&layout.claude_md(), S, report) else {
        return;
    };

    report.check(
        S,
        content.contains("## Dev Helper") || content.to_lowercase().contains("## dev-helper"),
        "has a `## Dev Helper` section",
    );

    let activation = format!("skill:{}", layout.skill_name());
    if content.contains(&activation) {
        report.ok(S, format!("activates {activation}"));
    } else {
        report.fail_with(
            S,
            format!("missing {activation}"),
            format!("add a `{activation}` activation line"),
        );
    }

    for name in COMMAND_NAMES {
        let command = format!("/{name}");
        report.check(S, content.contains(&command), format!("lists the {command} command"));
    }
}

fn validate_plugin_json(layout: &SkillLayout, report: &mut ValidationReport) {
    const S: Section = Section::PluginJson;
    let Some(content) = read_or_fail(&layout.plugin_manifest(), S, report) else {
        return;
    };

    let manifest: serde_json::Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            report.fail(S, format!("invalid JSON: {e}"));
            return;
        }
    };
    report.ok(S, "valid JSON");

    match manifest.get("name") {
        Some(name) => report.ok(S, format!("name: {}", display_json(name))),
        None => report.fail(S, "missing name field"),
    }
    if let Some(version) = manifest.get("version") {
        report.ok(S, format!("version: {}", display_json(version)));
    }
    if manifest.get("description").is_some() {
        report.ok(S, "has a description");
    }
}

fn display_json(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
