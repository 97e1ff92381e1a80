//! Standard on-disk layout of a project using a skill.

use crate::NormalizedPath;

/// Skill name used when no configuration overrides it.
pub const DEFAULT_SKILL_NAME: &str = "exploring-project";

/// Commands every initialised project ships, without the `.md` extension.
pub const COMMAND_NAMES: [&str; 3] = ["update-arch", "session-summary", "whats-next"];

/// Prefix marking a reference document as a tracked module.
pub const MODULE_PREFIX: &str = "module_";

/// Resolves the well-known paths of a skill inside a project root.
///
/// ```text
/// <root>/
///   .claude-plugin/plugin.json
///   .claude/skills/<skill>/SKILL.md
///   .claude/skills/<skill>/references/
///   .claude/commands/<command>.md
///   .claude/dev-helper.toml
///   project-notes/
///   CLAUDE.md
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillLayout {
    root: NormalizedPath,
    skill_name: String,
}

impl SkillLayout {
    pub fn new(root: impl Into<NormalizedPath>, skill_name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            skill_name: skill_name.into(),
        }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn skill_name(&self) -> &str {
        &self.skill_name
    }

    /// `.claude/skills/<skill>` relative to the root.
    pub fn skill_dir_relative(&self) -> String {
        format!(".claude/skills/{}", self.skill_name)
    }

    pub fn skill_dir(&self) -> NormalizedPath {
        self.root.join(&self.skill_dir_relative())
    }

    pub fn skill_file(&self) -> NormalizedPath {
        self.skill_dir().join("SKILL.md")
    }

    pub fn references_dir(&self) -> NormalizedPath {
        self.skill_dir().join("references")
    }

    /// Path of the tracking document for `module`.
    pub fn module_file(&self, module: &str) -> NormalizedPath {
        self.references_dir()
            .join(&format!("{MODULE_PREFIX}{module}.md"))
    }

    pub fn command_file(&self, command: &str) -> NormalizedPath {
        self.root.join(&format!(".claude/commands/{command}.md"))
    }

    pub fn plugin_manifest(&self) -> NormalizedPath {
        self.root.join(".claude-plugin/plugin.json")
    }

    pub fn project_notes_dir(&self) -> NormalizedPath {
        self.root.join("project-notes")
    }

    pub fn claude_md(&self) -> NormalizedPath {
        self.root.join("CLAUDE.md")
    }

    /// Candidate configuration files, in lookup order.
    pub fn config_candidates(&self) -> Vec<NormalizedPath> {
        ["dev-helper.toml", "dev-helper.json", "dev-helper.yaml", "dev-helper.yml"]
            .iter()
            .map(|name| self.root.join(&format!(".claude/{name}")))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_follow_skill_name() {
        let layout = SkillLayout::new("/work/app", "mapping-code");
        assert_eq!(
            layout.skill_file().as_str(),
            "/work/app/.claude/skills/mapping-code/SKILL.md"
        );
        assert_eq!(
            layout.module_file("auth-system").as_str(),
            "/work/app/.claude/skills/mapping-code/references/module_auth-system.md"
        );
        assert_eq!(
            layout.command_file("whats-next").as_str(),
            "/work/app/.claude/commands/whats-next.md"
        );
    }
}
