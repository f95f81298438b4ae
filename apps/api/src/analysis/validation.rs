//! Structural validation of the model's JSON against the analysis response schema.
//!
//! Parsing and validation are separate steps so that "not JSON at all" and
//! "JSON of the wrong shape" surface as different error kinds.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::analysis::models::{AnalysisResult, BiasedPhrase};

/// A required field is missing or has the wrong type. `path` points at the offending value.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{path}: expected {expected}, found {found}")]
pub struct SchemaViolation {
    pub path: String,
    pub expected: &'static str,
    pub found: &'static str,
}

fn kind(value: Option<&Value>) -> &'static str {
    match value {
        None => "nothing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

fn violation(path: impl Into<String>, expected: &'static str, found: Option<&Value>) -> SchemaViolation {
    SchemaViolation {
        path: path.into(),
        expected,
        found: kind(found),
    }
}

fn require_string(obj: &Map<String, Value>, key: &str, path: &str) -> Result<String, SchemaViolation> {
    match obj.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        other => Err(violation(path, "string", other)),
    }
}

/// Checks `value` against the response schema and converts it.
///
/// `biased_phrases` and `rewritten_description` are required; `tips` may be absent or null.
/// Unknown fields are ignored.
pub fn validate_analysis(value: &Value) -> Result<AnalysisResult, SchemaViolation> {
    let root = value
        .as_object()
        .ok_or_else(|| violation("$", "object", Some(value)))?;

    let phrases = match root.get("biased_phrases") {
        Some(Value::Array(items)) => items,
        other => return Err(violation("biased_phrases", "array", other)),
    };

    let biased_phrases = phrases
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let entry = item
                .as_object()
                .ok_or_else(|| violation(format!("biased_phrases[{i}]"), "object", Some(item)))?;
            Ok(BiasedPhrase {
                phrase: require_string(entry, "phrase", &format!("biased_phrases[{i}].phrase"))?,
                reason: require_string(entry, "reason", &format!("biased_phrases[{i}].reason"))?,
            })
        })
        .collect::<Result<Vec<_>, SchemaViolation>>()?;

    let rewritten_description =
        require_string(root, "rewritten_description", "rewritten_description")?;

    let tips = match root.get("tips") {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(
            items
                .iter()
                .enumerate()
                .map(|(i, tip)| match tip {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(violation(format!("tips[{i}]"), "string", Some(other))),
                })
                .collect::<Result<Vec<_>, SchemaViolation>>()?,
        ),
        other => return Err(violation("tips", "array", other)),
    };

    Ok(AnalysisResult {
        biased_phrases,
        rewritten_description,
        tips,
    })
}
