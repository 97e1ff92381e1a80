//! Restricted YAML reader for skill document metadata.
//!
//! Parses the small YAML subset that appears in generated `Config` regions
//! and document frontmatter: top-level scalars, inline `[a, b]` lists, block
//! `-` lists, and block lists of flat objects introduced by `- name:`.
//! It is deliberately not a YAML implementation. Input it does not
//! understand is skipped rather than reported.

pub mod reader;
pub mod value;

pub use reader::{parse, unquote};
pub use value::{Mapping, YamlValue};
