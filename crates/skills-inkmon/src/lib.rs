//! Validation of InkMon creature design documents
//!
//! A design document is a JSON file of the form `{"inkmon": {...}}`. The
//! validator checks the required fields, names, evolution stage, base stats
//! against the stage's total range, elements, design palette, diet and the
//! style anchors of the image prompt. Each violation names the field and the
//! workflow step where it is fixed:
//!
//! ```text
//! [ERROR] [stats.bst] BST mismatch: sum of stats is 320, declared 300 -> Step 3
//! ```

pub mod error;
pub mod rules;
pub mod validator;

pub use error::{Error, Result};
pub use rules::Stage;
pub use validator::{ValidationError, load_file, validate, validate_file};
