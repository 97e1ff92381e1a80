//! Line-oriented reader for the restricted YAML subset.
//!
//! Understands:
//!
//! ```yaml
//! description: "Auth module"          # scalar, quotes stripped
//! tags: [api, "core"]                  # inline list of scalars
//! tracked_paths:                       # block list of scalars
//!   - "src/auth/"
//! items:                               # block list of flat objects
//!   - name: foo
//!     tags: [x, y]
//! ```
//!
//! Everything else is skipped without error.

use crate::value::{Mapping, YamlValue};
use regex::Regex;
use std::sync::LazyLock;

static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*)-\s*(.*)$").expect("Invalid list item regex"));

static PROPERTY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s+)(\w+):\s*(.*)$").expect("Invalid property regex"));

static TOP_LEVEL_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+):\s*(.*)$").expect("Invalid key regex"));

/// The one list currently receiving `-` items.
///
/// There is a single cursor for the whole document, not one per key: a later
/// list-shaped key flushes this list into the mapping and takes over.
struct OpenList {
    key: String,
    items: Vec<YamlValue>,
}

impl OpenList {
    fn last_object_mut(&mut self) -> Option<&mut Mapping> {
        match self.items.last_mut() {
            Some(YamlValue::Map(map)) => Some(map),
            _ => None,
        }
    }

    fn ends_with_object(&self) -> bool {
        matches!(self.items.last(), Some(YamlValue::Map(_)))
    }
}

/// Parse restricted YAML text into an ordered mapping.
///
/// Never fails; lines that fit none of the supported shapes are dropped.
///
/// # Example
/// ```
/// use skills_yaml::{YamlValue, parse};
///
/// let map = parse("description: \"Auth\"\ntags: [a, b]");
/// assert_eq!(map.get_str("description"), Some("Auth"));
/// assert_eq!(map.get("tags"), Some(&YamlValue::scalar_list(["a", "b"])));
/// ```
pub fn parse(text: &str) -> Mapping {
    let mut result = Mapping::new();
    let mut open: Option<OpenList> = None;

    for raw in text.trim().lines() {
        let line = raw.trim_end();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = LIST_ITEM.captures(line) {
            let payload = caps.get(2).map_or("", |m| m.as_str());
            push_list_item(open.as_mut(), payload, line);
            continue;
        }

        if let Some(object) = open.as_mut().and_then(OpenList::last_object_mut) {
            if let Some(caps) = PROPERTY.captures(line) {
                let key = &caps[2];
                let value = caps[3].trim();
                object.insert(key, property_value(value));
                continue;
            }
        }

        if let Some(caps) = TOP_LEVEL_KEY.captures(line) {
            let key = caps[1].to_string();
            let value = caps[2].trim();
            if value.is_empty() || value == "[]" {
                if let Some(previous) = open.take() {
                    result.insert(previous.key, YamlValue::List(previous.items));
                }
                result.insert(key.clone(), YamlValue::List(Vec::new()));
                open = Some(OpenList {
                    key,
                    items: Vec::new(),
                });
            } else {
                if open.as_ref().is_some_and(|list| list.key == key) {
                    // The key was redefined; its pending list is superseded.
                    open = None;
                }
                result.insert(key, property_value(value));
            }
            continue;
        }

        tracing::trace!(line, "skipping unrecognised line");
    }

    if let Some(list) = open {
        result.insert(list.key, YamlValue::List(list.items));
    }

    result
}

fn push_list_item(open: Option<&mut OpenList>, payload: &str, line: &str) {
    let Some(list) = open else {
        tracing::trace!(line, "list item outside of a list");
        return;
    };

    if let Some(name) = payload.strip_prefix("name:") {
        let mut object = Mapping::new();
        object.insert("name", unquote(name.trim()));
        list.items.push(YamlValue::Map(object));
    } else if !list.ends_with_object() {
        list.items.push(YamlValue::scalar(unquote(payload.trim())));
    } else {
        tracing::trace!(line, "scalar item after object entry");
    }
}

/// A scalar, or an inline `[a, b]` list of scalars.
fn property_value(value: &str) -> YamlValue {
    match value
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        Some(inner) => YamlValue::List(
            inner
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(|item| YamlValue::scalar(unquote(item)))
                .collect(),
        ),
        None => YamlValue::scalar(unquote(value)),
    }
}

/// Remove one pair of matching surrounding quotes.
pub fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
