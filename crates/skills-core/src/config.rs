//! Project-level configuration
//!
//! Read from `.claude/dev-helper.toml` (or `.json` / `.yaml` / `.yml`).
//! Every field is optional; a project without a config file gets the
//! defaults.

use serde::{Deserialize, Serialize};
use skills_fs::{ConfigStore, DEFAULT_SKILL_NAME, NormalizedPath, SkillLayout};
use std::path::{Path, PathBuf};

use crate::Result;

/// Settings shared by sync, scaffolding, init and validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelperConfig {
    /// Name of the skill directory under `.claude/skills/`
    pub skill_name: String,
    /// Link text of the Doc column in the Core Modules table
    pub link_label: String,
    /// Template used for new module documents, relative to the project root
    pub module_template: Option<PathBuf>,
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            skill_name: DEFAULT_SKILL_NAME.to_string(),
            link_label: "Details".to_string(),
            module_template: None,
        }
    }
}

impl HelperConfig {
    /// Load the configuration of the project at `root`, or the defaults.
    pub fn load(root: &Path) -> Result<Self> {
        let layout = SkillLayout::new(root, DEFAULT_SKILL_NAME);
        let config = ConfigStore::new().load_first(&layout.config_candidates())?;
        Ok(config.unwrap_or_default())
    }

    /// The skill layout of the project at `root`.
    pub fn layout(&self, root: &Path) -> SkillLayout {
        SkillLayout::new(root, self.skill_name.clone())
    }

    /// Resolved path of the configured module template, if any.
    pub fn module_template_path(&self, root: &Path) -> Option<NormalizedPath> {
        self.module_template
            .as_ref()
            .map(|template| NormalizedPath::new(root.join(template)))
    }
}
