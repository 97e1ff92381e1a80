//! Generated-region parsing and rewriting for skill documents.
//!
//! Hub documents mix hand-written text with regions that tooling owns:
//!
//! ```text
//! <!-- region Generated References Start -->
//! - [overview.md](references/overview.md) - Overview
//! <!-- region Generated References End -->
//! ```
//!
//! The [`region`] module locates such regions, [`writer`] replaces their
//! content while leaving every other byte of the document alone, [`table`]
//! rewrites the rows of the Core Modules table, and [`fence`] pulls fenced
//! YAML blocks, frontmatter and headings out of markdown text.
//!
//! All operations are pure `&str -> String` transformations. A missing
//! marker is never an error: reads return `None` and writes return the
//! document unchanged.

pub mod error;
pub mod fence;
pub mod region;
pub mod table;
pub mod writer;

pub use error::FrontmatterError;
pub use fence::{Frontmatter, extract_yaml_fence, first_heading, split_frontmatter};
pub use region::{Region, end_marker, find_region, has_region, parse_regions, read_region, start_marker};
pub use table::{TABLE_HEADER, TABLE_SENTINEL, has_module_table, update_table_rows};
pub use writer::write_region;
