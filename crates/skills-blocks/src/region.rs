//! Region parsing for generated document sections.
//!
//! Parses named regions in markdown text with the format:
//! ```text
//! <!-- region Generated Name Start -->
//! content here
//! <!-- region Generated Name End -->
//! ```
//!
//! Lookup is first-match: if a name appears more than once, the first start
//! marker that has a matching end marker after it wins.

use regex::Regex;
use std::sync::LazyLock;

/// A located region with its name, content, and position information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// The region name between `Generated` and `Start`/`End`.
    pub name: String,
    /// The text between the markers with surrounding whitespace trimmed.
    pub content: String,
    /// Byte offset where the start marker begins.
    pub start: usize,
    /// Byte offset just past the end marker.
    pub end: usize,
    /// The 1-based line number of the start marker.
    pub start_line: usize,
    /// The 1-based line number of the end marker.
    pub end_line: usize,
}

/// Regex for matching start markers of any region.
static START_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!-- region Generated (\w+) Start -->").expect("Invalid start marker regex")
});

/// Creates the start marker for a region.
pub fn start_marker(name: &str) -> String {
    format!("<!-- region Generated {} Start -->", name)
}

/// Creates the end marker for a region.
pub fn end_marker(name: &str) -> String {
    format!("<!-- region Generated {} End -->", name)
}

/// Locate the marker pair of `name` starting the search at `from`.
///
/// Returns `(start_marker_start, start_marker_end, end_marker_start, end_marker_end)`.
pub(crate) fn locate(content: &str, name: &str, from: usize) -> Option<(usize, usize, usize, usize)> {
    let open = start_marker(name);
    let close = end_marker(name);

    let open_start = from + content[from..].find(&open)?;
    let open_end = open_start + open.len();
    let close_start = open_end + content[open_end..].find(&close)?;
    let close_end = close_start + close.len();

    Some((open_start, open_end, close_start, close_end))
}

/// One-based line number of the byte at `offset`.
fn line_of(content: &str, offset: usize) -> usize {
    content[..offset].matches('\n').count() + 1
}

fn build_region(content: &str, name: &str, span: (usize, usize, usize, usize)) -> Region {
    let (open_start, open_end, close_start, close_end) = span;
    Region {
        name: name.to_string(),
        content: content[open_end..close_start].trim().to_string(),
        start: open_start,
        end: close_end,
        start_line: line_of(content, open_start),
        end_line: line_of(content, close_end),
    }
}

/// Finds the first region called `name`.
///
/// # Example
/// ```
/// use skills_blocks::region::find_region;
///
/// let doc = "<!-- region Generated Config Start -->\nx\n<!-- region Generated Config End -->";
/// let region = find_region(doc, "Config").unwrap();
/// assert_eq!(region.content, "x");
/// assert_eq!(region.end_line, 3);
/// ```
pub fn find_region(content: &str, name: &str) -> Option<Region> {
    locate(content, name, 0).map(|span| build_region(content, name, span))
}

/// Reads the trimmed content of the first region called `name`.
///
/// Returns `None` when either marker is missing.
///
/// # Example
/// ```
/// use skills_blocks::region::read_region;
///
/// let doc = r#"# Skill
/// <!-- region Generated References Start -->
///
/// - [overview.md](references/overview.md) - Overview
///
/// <!-- region Generated References End -->"#;
///
/// assert_eq!(
///     read_region(doc, "References").as_deref(),
///     Some("- [overview.md](references/overview.md) - Overview")
/// );
/// assert_eq!(read_region(doc, "Missing"), None);
/// ```
pub fn read_region(content: &str, name: &str) -> Option<String> {
    find_region(content, name).map(|region| region.content)
}

/// Checks if a complete region called `name` exists in the content.
pub fn has_region(content: &str, name: &str) -> bool {
    locate(content, name, 0).is_some()
}

/// Parses every complete region in the content, in order of appearance.
///
/// Start markers without a matching end marker are skipped.
pub fn parse_regions(content: &str) -> Vec<Region> {
    let mut regions = Vec::new();

    for caps in START_MARKER_REGEX.captures_iter(content) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        match locate(content, name.as_str(), whole.start()) {
            Some(span) => regions.push(build_region(content, name.as_str(), span)),
            None => tracing::debug!(region = name.as_str(), "start marker without end marker"),
        }
    }

    regions
}
