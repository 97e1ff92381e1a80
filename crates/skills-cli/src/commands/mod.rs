//! Command implementations for skills-cli

pub mod init;
pub mod inkmon;
pub mod module;
pub mod region;
pub mod sync;
pub mod validate;

pub use init::run_init;
pub use inkmon::run_validate_inkmon;
pub use module::run_create_module;
pub use region::{run_region_get, run_region_set};
pub use sync::run_sync;
pub use validate::run_validate_init;

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{CliError, Result};

/// Canonical form of a project directory given on the command line.
pub fn resolve_dir(path: &Path) -> Result<PathBuf> {
    let resolved = dunce::canonicalize(path)
        .map_err(|_| CliError::user(format!("Directory not found: {}", path.display())))?;
    if !resolved.is_dir() {
        return Err(CliError::user(format!("Not a directory: {}", path.display())));
    }
    Ok(resolved)
}

/// Print a report as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
