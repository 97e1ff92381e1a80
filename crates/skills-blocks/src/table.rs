//! Core Modules table rewriting.
//!
//! The hub document carries a table of modules that is regenerated on every
//! sync. It is not wrapped in region markers; instead it is found by its
//! fixed header and the `*Run ...` hint line that follows it:
//!
//! ```text
//! | Module | Description | Doc |
//! |--------|-------------|-----|
//! | auth | Login flow | [Details](references/module_auth.md) |
//!
//! *Run `skills sync` to refresh this table.*
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// Header row identifying the table.
pub const TABLE_HEADER: &str = "| Module | Description | Doc |";

/// Start of the line that terminates the table rows.
pub const TABLE_SENTINEL: &str = "*Run";

/// Header + separator, existing rows, then the sentinel line.
static TABLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?m)(\| Module \| Description \| Doc \|\s*\|[-\s|]+\|)\s*",
        r"((?:\|[^\n]+\|\s*)*)",
        r"(\n\*Run)",
    ))
    .expect("Invalid table regex")
});

/// Whether the document contains a Core Modules table followed by its sentinel line.
pub fn has_module_table(content: &str) -> bool {
    TABLE_REGEX.is_match(content)
}

/// Replaces the rows of the Core Modules table with `rows`.
///
/// Each row is emitted on its own line. The header, separator and sentinel
/// line are kept verbatim. If the table is not found the document is
/// returned unchanged.
///
/// # Example
/// ```
/// use skills_blocks::table::update_table_rows;
///
/// let doc = "| Module | Description | Doc |\n|---|---|---|\n| old | x | y |\n\n*Run sync*";
/// let updated = update_table_rows(doc, &["| auth | Login | [Details](references/module_auth.md) |".to_string()]);
/// assert_eq!(
///     updated,
///     "| Module | Description | Doc |\n|---|---|---|\n| auth | Login | [Details](references/module_auth.md) |\n\n*Run sync*"
/// );
/// ```
pub fn update_table_rows(content: &str, rows: &[String]) -> String {
    let Some(caps) = TABLE_REGEX.captures(content) else {
        tracing::debug!("module table not found, leaving document unchanged");
        return content.to_string();
    };
    let (Some(whole), Some(header), Some(sentinel)) = (caps.get(0), caps.get(1), caps.get(3))
    else {
        return content.to_string();
    };

    let mut output = String::with_capacity(content.len());
    output.push_str(&content[..whole.start()]);
    output.push_str(header.as_str());
    output.push('\n');
    for row in rows {
        output.push_str(row);
        output.push('\n');
    }
    output.push_str(sentinel.as_str());
    output.push_str(&content[whole.end()..]);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sentinel_leaves_document() {
        let doc = "| Module | Description | Doc |\n|---|---|---|\n| a | b | c |\n";
        assert_eq!(update_table_rows(doc, &["| x | y | z |".into()]), doc);
    }

    #[test]
    fn test_has_module_table() {
        assert!(has_module_table("| Module | Description | Doc |\n|-|-|-|\n*Run"));
        assert!(!has_module_table("| Module | Description | Doc |\n|-|-|-|\n"));
    }

    #[test]
    fn test_empty_rows() {
        let doc = "| Module | Description | Doc |\n|---|---|---|\n| a | b | c |\n\n*Run it*";
        assert_eq!(
            update_table_rows(doc, &[]),
            "| Module | Description | Doc |\n|---|---|---|\n\n*Run it*"
        );
    }
}
