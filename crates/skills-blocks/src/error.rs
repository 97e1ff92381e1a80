//! Error types for skills-blocks

/// Why a document's frontmatter could not be extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FrontmatterError {
    #[error("document does not start with a `---` frontmatter delimiter")]
    Missing,

    #[error("frontmatter is not closed by a second `---` delimiter")]
    Unclosed,
}
