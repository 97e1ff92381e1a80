//! Scoped read-modify-write of whole documents
//!
//! A document is read whole, transformed in memory and written back whole.
//! The write only happens when the transform succeeds and actually produced
//! different text; any error leaves the file untouched.

use crate::{NormalizedPath, io};

/// What [`edit_document`] did with the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The transform produced new text and it was written.
    Written,
    /// The transform produced identical text, or declined to edit.
    Unchanged,
}

impl EditOutcome {
    pub fn is_written(self) -> bool {
        self == Self::Written
    }
}

/// Read `path`, run `transform` over its text and atomically write the result.
///
/// The transform returns `Ok(None)` to leave the file alone. Errors from the
/// transform propagate without touching the file.
///
/// # Example
/// ```no_run
/// use skills_fs::{NormalizedPath, edit_document};
///
/// let path = NormalizedPath::new("SKILL.md");
/// let outcome = edit_document(&path, |text| -> skills_fs::Result<Option<String>> {
///     Ok(Some(text.replace("old", "new")))
/// })?;
/// # Ok::<(), skills_fs::Error>(())
/// ```
pub fn edit_document<F, E>(path: &NormalizedPath, transform: F) -> std::result::Result<EditOutcome, E>
where
    F: FnOnce(&str) -> std::result::Result<Option<String>, E>,
    E: From<crate::Error>,
{
    let original = io::read_text(path)?;

    let Some(updated) = transform(&original)? else {
        return Ok(EditOutcome::Unchanged);
    };

    if updated == original {
        tracing::debug!(path = %path, "document unchanged, skipping write");
        return Ok(EditOutcome::Unchanged);
    }

    io::write_text(path, &updated)?;
    Ok(EditOutcome::Written)
}
