//! Sync, scaffolding, init and validation for skill documentation
//!
//! This crate implements the operations behind the `skills` CLI on top of
//! the lower layers:
//!
//! - **Sync**: rebuild the generated regions and module table of `SKILL.md`
//!   from the documents in `references/`
//! - **Module scaffolding**: create `module_<name>.md` tracking documents
//! - **Init**: copy the documentation skeleton into a project
//! - **Validation**: check an initialised project against the convention
//!
//! ```text
//!                  skills-cli
//!                      |
//!                 skills-core
//!                      |
//!      +---------------+---------------+
//!      |               |               |
//!  skills-fs     skills-blocks    skills-yaml
//! ```

pub mod config;
pub mod error;
pub mod init;
pub mod module;
pub mod sync;
pub mod templates;
pub mod validate;

pub use config::HelperConfig;
pub use error::{Error, Result};
pub use init::{InitOptions, InitReport, init_project, is_git_repository};
pub use module::{ModuleReport, ModuleRequest, create_module, kebab_to_title, validate_module_name};
pub use sync::{ModuleEntry, ReferenceFile, SyncOptions, SyncReport, scan_references, sync_skill};
pub use validate::{Check, Section, ValidationReport, validate_init};
