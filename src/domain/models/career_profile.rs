use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Profile fields a student submits to get a career recommendation.
///
/// Every field is optional on the wire and defaults to an empty string.
/// Non-string JSON values are accepted and rendered as their JSON text, so a
/// numeric aptitude score still reaches the prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerProfileRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    interests: String,
    #[serde(default, deserialize_with = "lenient_string")]
    education: String,
    #[serde(default, deserialize_with = "lenient_string")]
    aptitude: String,
}

impl CareerProfileRequest {
    pub fn new(
        interests: impl Into<String>,
        education: impl Into<String>,
        aptitude: impl Into<String>,
    ) -> Self {
        Self {
            interests: interests.into(),
            education: education.into(),
            aptitude: aptitude.into(),
        }
    }

    pub fn interests(&self) -> &str {
        &self.interests
    }

    pub fn education(&self) -> &str {
        &self.education
    }

    pub fn aptitude(&self) -> &str {
        &self.aptitude
    }
}

/// Accept any JSON value where a string is expected: strings pass through,
/// `null` becomes empty, everything else is rendered as compact JSON.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}
