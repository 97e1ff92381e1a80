//! Rule checks over a parsed design document.

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};
use skills_fs::{NormalizedPath, io};
use std::fmt;
use std::sync::LazyLock;

use crate::rules::{
    REQUIRED_FIELDS, STAT_FIELDS, STAT_RANGE, STYLE_ANCHORS, Stage, VALID_DIETS, VALID_ELEMENTS,
    step,
};
use crate::{Error, Result};

static NAME_EN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("Invalid english name regex"));

static HEX_COLOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid hex colour regex"));

const MAX_NAME_EN_CHARS: usize = 12;

/// A broken rule, pointing at the field and the workflow step that fixes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix_step: Option<u8>,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            fix_step: None,
        }
    }

    fn at_step(field: impl Into<String>, message: impl Into<String>, step: u8) -> Self {
        Self {
            fix_step: Some(step),
            ..Self::new(field, message)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ERROR] [{}] {}", self.field, self.message)?;
        if let Some(step) = self.fix_step {
            write!(f, " -> Step {step}")?;
        }
        Ok(())
    }
}

/// Load and parse a design document from disk.
pub fn load_file(path: &NormalizedPath) -> Result<Value> {
    let content = io::read_text(path)?;
    serde_json::from_str(&content).map_err(|source| Error::Json {
        path: path.to_native(),
        source,
    })
}

/// Load the document at `path` and validate it.
///
/// # Errors
/// Returns an error only if the file cannot be read or is not JSON; rule
/// violations are returned in the `Ok` list.
pub fn validate_file(path: &NormalizedPath) -> Result<Vec<ValidationError>> {
    let document = load_file(path)?;
    let errors = validate(&document);
    tracing::debug!(path = %path, errors = errors.len(), "validated design document");
    Ok(errors)
}

/// Validate a `{"inkmon": {...}}` document.
///
/// Missing top-level fields and an unknown evolution stage stop validation
/// early, since the remaining rules depend on them.
pub fn validate(document: &Value) -> Vec<ValidationError> {
    let Some(inkmon) = document.get("inkmon") else {
        return vec![ValidationError::new("root", "missing 'inkmon' root field")];
    };
    let Some(inkmon) = inkmon.as_object() else {
        return vec![ValidationError::new("root", "'inkmon' must be an object")];
    };

    let missing: Vec<_> = REQUIRED_FIELDS
        .iter()
        .filter(|field| !inkmon.contains_key(**field))
        .map(|field| ValidationError::new(*field, format!("missing required field '{field}'")))
        .collect();
    if !missing.is_empty() {
        return missing;
    }

    let mut errors = Vec::new();
    check_names(inkmon, &mut errors);

    let stage_value = str_at(inkmon, &["evolution", "stage"]).unwrap_or_default();
    let Some(stage) = Stage::parse(stage_value) else {
        errors.push(ValidationError::at_step(
            "evolution.stage",
            format!("invalid stage '{stage_value}', must be baby/mature/adult"),
            step::STAGE,
        ));
        return errors;
    };

    check_stats(inkmon, stage, &mut errors);
    check_elements(inkmon, &mut errors);
    check_design(inkmon, &mut errors);
    check_ecology(inkmon, &mut errors);
    check_prompts(inkmon, &mut errors);
    errors
}

fn value_at<'a>(inkmon: &'a Map<String, Value>, path: &[&str]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    rest.iter()
        .try_fold(inkmon.get(*first)?, |value, key| value.get(*key))
        .filter(|value| !value.is_null())
}

fn str_at<'a>(inkmon: &'a Map<String, Value>, path: &[&str]) -> Option<&'a str> {
    value_at(inkmon, path).and_then(Value::as_str)
}

/// Renders a JSON value for messages; strings without quotes.
fn describe(value: Option<&Value>) -> String {
    match value {
        None => "none".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn check_names(inkmon: &Map<String, Value>, errors: &mut Vec<ValidationError>) {
    let name_len = str_at(inkmon, &["name"]).map_or(0, |n| n.chars().count());
    if !(2..=4).contains(&name_len) {
        errors.push(ValidationError::at_step(
            "name",
            format!("name must be 2-4 characters, found {name_len}"),
            step::IDENTITY,
        ));
    }

    let name_en = str_at(inkmon, &["name_en"]).unwrap_or_default();
    if !NAME_EN_REGEX.is_match(name_en) {
        errors.push(ValidationError::at_step(
            "name_en",
            "english name may only contain letters",
            step::IDENTITY,
        ));
    }
    let name_en_len = name_en.chars().count();
    if name_en_len > MAX_NAME_EN_CHARS {
        errors.push(ValidationError::at_step(
            "name_en",
            format!("english name is at most {MAX_NAME_EN_CHARS} characters, found {name_en_len}"),
            step::IDENTITY,
        ));
    }
}

fn check_stats(inkmon: &Map<String, Value>, stage: Stage, errors: &mut Vec<ValidationError>) {
    let mut values = Vec::with_capacity(STAT_FIELDS.len());
    let mut complete = true;
    for stat in STAT_FIELDS {
        match value_at(inkmon, &["stats", stat]) {
            None => {
                complete = false;
                errors.push(ValidationError::at_step(
                    format!("stats.{stat}"),
                    format!("missing {stat} value"),
                    step::STATS,
                ));
            }
            Some(value) => match value.as_i64() {
                Some(n) => values.push((stat, n)),
                None => {
                    complete = false;
                    errors.push(ValidationError::at_step(
                        format!("stats.{stat}"),
                        format!("{stat} must be an integer, found {value}"),
                        step::STATS,
                    ));
                }
            },
        }
    }
    if !complete {
        return;
    }

    let declared = value_at(inkmon, &["stats", "bst"])
        .and_then(Value::as_i64)
        .unwrap_or(0);
    match values
        .iter()
        .try_fold(0i64, |total, (_, n)| total.checked_add(*n))
    {
        Some(calculated) if calculated == declared => {}
        Some(calculated) => errors.push(ValidationError::at_step(
            "stats.bst",
            format!("BST mismatch: sum of stats is {calculated}, declared {declared}"),
            step::STATS,
        )),
        None => errors.push(ValidationError::at_step(
            "stats.bst",
            "BST mismatch: sum of stats overflows",
            step::STATS,
        )),
    }

    let (min, max) = stage.bst_range();
    if !(min..=max).contains(&declared) {
        errors.push(ValidationError::at_step(
            "stats.bst",
            format!(
                "BST {declared} is outside the {} range ({min}-{max})",
                stage.as_str()
            ),
            step::STATS,
        ));
    }

    let (low, high) = STAT_RANGE;
    for (stat, value) in values {
        if !(low..=high).contains(&value) {
            errors.push(ValidationError::at_step(
                format!("stats.{stat}"),
                format!("{stat} value {value} is outside the valid range ({low}-{high})"),
                step::STATS,
            ));
        }
    }
}

fn check_elements(inkmon: &Map<String, Value>, errors: &mut Vec<ValidationError>) {
    let primary = value_at(inkmon, &["elements", "primary"]);
    if !primary
        .and_then(Value::as_str)
        .is_some_and(|e| VALID_ELEMENTS.contains(&e))
    {
        errors.push(ValidationError::at_step(
            "elements.primary",
            format!(
                "invalid primary element '{}', valid values: {}",
                describe(primary),
                VALID_ELEMENTS.join(", ")
            ),
            step::STATS,
        ));
    }

    if let Some(secondary) = value_at(inkmon, &["elements", "secondary"]) {
        if !secondary
            .as_str()
            .is_some_and(|e| VALID_ELEMENTS.contains(&e))
        {
            errors.push(ValidationError::at_step(
                "elements.secondary",
                format!("invalid secondary element '{}'", describe(Some(secondary))),
                step::STATS,
            ));
        }
    }
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
    }
}

fn check_design(inkmon: &Map<String, Value>, errors: &mut Vec<ValidationError>) {
    if !is_truthy(value_at(inkmon, &["design", "base_animal"])) {
        errors.push(ValidationError::at_step(
            "design.base_animal",
            "missing base animal",
            step::IDENTITY,
        ));
    }

    if !is_truthy(value_at(inkmon, &["design", "features"])) {
        errors.push(ValidationError::at_step(
            "design.features",
            "at least one design feature is required",
            step::IDENTITY,
        ));
    }

    let colors = value_at(inkmon, &["design", "color_palette"])
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    for (i, color) in colors.iter().enumerate() {
        if !color.as_str().is_some_and(|c| HEX_COLOR_REGEX.is_match(c)) {
            errors.push(ValidationError::at_step(
                format!("design.color_palette[{i}]"),
                format!("invalid HEX colour: {}", describe(Some(color))),
                step::IDENTITY,
            ));
        }
    }
}

fn check_ecology(inkmon: &Map<String, Value>, errors: &mut Vec<ValidationError>) {
    let diet = value_at(inkmon, &["ecology", "diet"]);
    if !diet
        .and_then(Value::as_str)
        .is_some_and(|d| VALID_DIETS.contains(&d))
    {
        errors.push(ValidationError::at_step(
            "ecology.diet",
            format!(
                "invalid diet '{}', valid values: {}",
                describe(diet),
                VALID_DIETS.join(", ")
            ),
            step::ECOLOGY,
        ));
    }
}

fn check_prompts(inkmon: &Map<String, Value>, errors: &mut Vec<ValidationError>) {
    let prompt = str_at(inkmon, &["image_prompts", "design"])
        .unwrap_or_default()
        .to_lowercase();
    if prompt.is_empty() {
        errors.push(ValidationError::at_step(
            "image_prompts.design",
            "missing design prompt",
            step::PROMPTS,
        ));
        return;
    }

    let missing: Vec<_> = STYLE_ANCHORS
        .iter()
        .filter(|anchor| !prompt.contains(**anchor))
        .copied()
        .collect();
    if !missing.is_empty() {
        errors.push(ValidationError::at_step(
            "image_prompts.design",
            format!("prompt is missing style anchors: {}", missing.join(", ")),
            step::PROMPTS,
        ));
    }
}
