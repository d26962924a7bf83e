//! Normalization of raw model output into the shapes the frontend renders.

use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::{DomainError, RecommendationResult};

/// Fields the frontend renders as lists, whatever shape the model chose.
pub const LIST_FIELDS: [&str; 3] = ["market_value", "packages", "roadmap"];

/// Shape of a list-typed field as it arrived from the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListField<'a> {
    /// Key missing or explicitly `null`.
    Absent,
    /// A single string, usually comma separated.
    Text(&'a str),
    /// Already a sequence. Elements are not inspected.
    Sequence(&'a [Value]),
    /// Number, boolean or object.
    Other(&'a Value),
}

impl<'a> ListField<'a> {
    pub fn classify(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => ListField::Absent,
            Some(Value::String(s)) => ListField::Text(s),
            Some(Value::Array(items)) => ListField::Sequence(items),
            Some(other) => ListField::Other(other),
        }
    }

    pub fn into_list(self) -> Vec<Value> {
        match self {
            ListField::Absent => Vec::new(),
            ListField::Text(text) => text
                .split(',')
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .map(|piece| Value::String(piece.to_string()))
                .collect(),
            ListField::Sequence(items) => items.to_vec(),
            ListField::Other(value) => vec![value.clone()],
        }
    }
}

/// Coerce a string-or-list field into a list.
pub fn coerce_to_string_list(value: Option<&Value>) -> Vec<Value> {
    ListField::classify(value).into_list()
}

/// Parse the model's JSON reply and rewrite the list fields.
pub fn normalize_recommendation(raw: &str) -> Result<RecommendationResult, DomainError> {
    let parsed: Value = serde_json::from_str(raw).map_err(|e| DomainError::malformed(e.to_string()))?;

    let mut object = match parsed {
        Value::Object(map) => map,
        other => {
            return Err(DomainError::malformed(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            )))
        }
    };

    for field in LIST_FIELDS {
        coerce_field(&mut object, field);
    }

    serde_json::from_value(Value::Object(object))
        .map_err(|e| DomainError::internal(format!("failed to build recommendation: {e}")))
}

/// Strip asterisks and surrounding whitespace from a plain-text reply.
///
/// Whitespace left inside the text by a removed `*` is kept as is.
pub fn normalize_chat_reply(raw: &str) -> String {
    raw.trim().replace('*', "").trim().to_string()
}

fn coerce_field(object: &mut Map<String, Value>, field: &str) {
    let list = coerce_to_string_list(object.get(field));

    if list.iter().any(|item| !item.is_string()) {
        warn!("Model returned non-string items in '{field}'; passing them through");
    }

    object.insert(field.to_string(), Value::Array(list));
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
