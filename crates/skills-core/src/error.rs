//! Error types for skills-core

use std::path::PathBuf;

/// Result type for skills-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in skills-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The hub document of the skill does not exist
    #[error("SKILL.md not found: {path}")]
    SkillNotFound { path: PathBuf },

    /// Module names must be kebab-case
    #[error("Invalid module name '{name}' (expected kebab-case, e.g. auth-system)")]
    InvalidModuleName { name: String },

    /// The references directory has not been created yet
    #[error("References directory not found: {path} (run `skills init` first)")]
    ReferencesDirMissing { path: PathBuf },

    /// A module document with this name already exists
    #[error("Module document already exists: {path}")]
    ModuleExists { path: PathBuf },

    /// A template file or directory could not be found
    #[error("Template not found: {path}")]
    TemplateNotFound { path: PathBuf },

    /// The init target is not inside a git repository
    #[error("Git not initialized in {path} (run `git init` first)")]
    GitNotInitialized { path: PathBuf },

    // Transparent wrappers for underlying errors
    /// Filesystem error from skills-fs
    #[error(transparent)]
    Fs(#[from] skills_fs::Error),

    /// Directory traversal error
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}
