//! Extraction of fenced YAML blocks, frontmatter and headings.

use crate::error::FrontmatterError;
use regex::Regex;
use std::sync::LazyLock;

static YAML_FENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```yaml\s*(.*?)\s*```").expect("Invalid yaml fence regex")
});

static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#\s+(.+)$").expect("Invalid heading regex"));

const FRONTMATTER_DELIMITER: &str = "---";

/// Body of the first ```` ```yaml ```` fenced block, trimmed.
///
/// # Example
/// ```
/// use skills_blocks::fence::extract_yaml_fence;
///
/// let region = "```yaml\ndescription: \"Auth\"\n```";
/// assert_eq!(extract_yaml_fence(region), Some("description: \"Auth\""));
/// assert_eq!(extract_yaml_fence("no fence"), None);
/// ```
pub fn extract_yaml_fence(text: &str) -> Option<&str> {
    YAML_FENCE_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Text of the first level-one `# Heading` line.
pub fn first_heading(text: &str) -> Option<&str> {
    HEADING_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end())
}

/// A document split into its frontmatter and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frontmatter<'a> {
    /// The text between the `---` delimiters, trimmed.
    pub raw: &'a str,
    /// Everything after the closing delimiter.
    pub body: &'a str,
}

/// Splits a document that starts with a `---` delimited frontmatter.
///
/// The frontmatter ends at the next `---` after the opening one.
///
/// # Example
/// ```
/// use skills_blocks::fence::split_frontmatter;
///
/// let doc = "---\nname: exploring-project\n---\n# Body";
/// let fm = split_frontmatter(doc).unwrap();
/// assert_eq!(fm.raw, "name: exploring-project");
/// assert_eq!(fm.body, "\n# Body");
/// ```
pub fn split_frontmatter(content: &str) -> Result<Frontmatter<'_>, FrontmatterError> {
    let rest = content
        .strip_prefix(FRONTMATTER_DELIMITER)
        .ok_or(FrontmatterError::Missing)?;
    let close = rest
        .find(FRONTMATTER_DELIMITER)
        .ok_or(FrontmatterError::Unclosed)?;

    Ok(Frontmatter {
        raw: rest[..close].trim(),
        body: &rest[close + FRONTMATTER_DELIMITER.len()..],
    })
}
