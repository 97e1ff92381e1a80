//! Filesystem layer for the skills tooling
//!
//! Provides normalized paths, whole-file reads, atomic writes, the scoped
//! read-modify-write cycle used by every document rewrite, and the standard
//! project layout of a skill.

pub mod config;
pub mod edit;
pub mod error;
pub mod io;
pub mod layout;
pub mod path;

pub use config::ConfigStore;
pub use edit::{EditOutcome, edit_document};
pub use error::{Error, Result};
pub use layout::{COMMAND_NAMES, DEFAULT_SKILL_NAME, MODULE_PREFIX, SkillLayout};
pub use path::NormalizedPath;
