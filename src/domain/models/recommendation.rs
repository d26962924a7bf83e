use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::career_profile::lenient_string;

/// Career guide returned to the frontend.
///
/// `roadmap`, `market_value` and `packages` are always present and always
/// sequences. The remaining schema fields, and any extra keys the model adds,
/// are passed through exactly as the model produced them, explicit `null`
/// included. A schema key the model left out stays absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    profile_bullets: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    recommended_career: Option<Value>,
    #[serde(default)]
    roadmap: Vec<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    required_skills: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    companies: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    course_guidance: Option<Value>,
    #[serde(default)]
    market_value: Vec<Value>,
    #[serde(default)]
    packages: Vec<Value>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// A hiring company as described by the model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub kind: String,
}

/// A course suggestion as described by the model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseGuidance {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub platform: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub link: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub paid_or_free: String,
}

impl RecommendationResult {
    pub fn roadmap(&self) -> &[Value] {
        &self.roadmap
    }

    pub fn market_value(&self) -> &[Value] {
        &self.market_value
    }

    pub fn packages(&self) -> &[Value] {
        &self.packages
    }

    pub fn recommended_career(&self) -> Option<String> {
        self.recommended_career
            .as_ref()
            .filter(|value| !value.is_null())
            .map(display_value)
    }

    pub fn profile_bullets(&self) -> Vec<String> {
        text_items(self.profile_bullets.as_ref())
    }

    pub fn required_skills(&self) -> Vec<String> {
        text_items(self.required_skills.as_ref())
    }

    /// Companies that have the expected object shape; anything else is skipped.
    pub fn companies(&self) -> Vec<Company> {
        typed_items(self.companies.as_ref())
    }

    /// Courses that have the expected object shape; anything else is skipped.
    pub fn course_guidance(&self) -> Vec<CourseGuidance> {
        typed_items(self.course_guidance.as_ref())
    }
}

/// Mark a key as present even when its value is `null`; absent keys fall back to `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Render a JSON value for display: strings without quotes, everything else as JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn text_items(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().map(display_value).collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => vec![display_value(other)],
    }
}

fn typed_items<T: serde::de::DeserializeOwned>(value: Option<&Value>) -> Vec<T> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter(|item| item.is_object())
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_keys_survive_serialization() {
        let value = json!({
            "recommended_career": "Data Analyst",
            "roadmap": ["Month 1-3: Learn SQL"],
            "market_value": [],
            "packages": [],
            "salary_outlook": "growing"
        });
        let result: RecommendationResult = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(serde_json::to_value(&result).unwrap(), value);
    }

    #[test]
    fn explicit_null_schema_fields_are_kept() {
        let value = json!({
            "recommended_career": null,
            "companies": null,
            "roadmap": [],
            "market_value": [],
            "packages": [],
            "notes": null
        });
        let result: RecommendationResult = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(serde_json::to_value(&result).unwrap(), value);
        assert_eq!(result.recommended_career(), None);
        assert!(result.companies().is_empty());
    }

    #[test]
    fn missing_schema_fields_stay_absent() {
        let result: RecommendationResult = serde_json::from_value(json!({})).unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("companies").is_none());
        assert!(value.get("profile_bullets").is_none());
    }

    #[test]
    fn companies_skip_malformed_entries() {
        let result: RecommendationResult = serde_json::from_value(json!({
            "companies": [
                {"name": "Infosys", "type": "IT Services"},
                "just a string",
                {"name": "Zerodha"}
            ]
        }))
        .unwrap();
        let companies = result.companies();
        assert_eq!(companies.len(), 2);
        assert_eq!(companies[0].kind, "IT Services");
        assert_eq!(companies[1].name, "Zerodha");
        assert_eq!(companies[1].kind, "");
    }

    #[test]
    fn text_views_render_non_string_items() {
        let result: RecommendationResult = serde_json::from_value(json!({
            "recommended_career": "ML Engineer",
            "required_skills": ["Python", 3],
            "profile_bullets": "Curious learner"
        }))
        .unwrap();
        assert_eq!(result.recommended_career().as_deref(), Some("ML Engineer"));
        assert_eq!(result.required_skills(), vec!["Python", "3"]);
        assert_eq!(result.profile_bullets(), vec!["Curious learner"]);
    }
}
