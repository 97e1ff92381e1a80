//! Region writing.
//!
//! Replaces the text between a region's markers. The markers themselves and
//! every byte outside the pair are preserved.

use crate::region::{end_marker, locate, start_marker};

/// Replaces the content of the first region called `name`.
///
/// The span from the start marker through the end marker becomes
/// `start\n{new_content}\nend`. Whatever whitespace used to pad the old
/// content is normalised to a single newline on each side, so writing the
/// same content twice gives the same document as writing it once.
///
/// If the markers are not found the document is returned unchanged; no
/// markers are inserted. `new_content` is inserted literally.
///
/// # Example
/// ```
/// use skills_blocks::writer::write_region;
///
/// let doc = "intro\n<!-- region Generated Config Start -->\nold\n<!-- region Generated Config End -->\noutro";
/// let updated = write_region(doc, "Config", "new");
/// assert_eq!(
///     updated,
///     "intro\n<!-- region Generated Config Start -->\nnew\n<!-- region Generated Config End -->\noutro"
/// );
///
/// assert_eq!(write_region(doc, "Missing", "new"), doc);
/// ```
pub fn write_region(content: &str, name: &str, new_content: &str) -> String {
    let Some((open_start, _, _, close_end)) = locate(content, name, 0) else {
        tracing::debug!(region = name, "region markers not found, leaving document unchanged");
        return content.to_string();
    };

    let mut output = String::with_capacity(content.len() + new_content.len());
    output.push_str(&content[..open_start]);
    output.push_str(&start_marker(name));
    output.push('\n');
    output.push_str(new_content);
    output.push('\n');
    output.push_str(&end_marker(name));
    output.push_str(&content[close_end..]);
    output
}
