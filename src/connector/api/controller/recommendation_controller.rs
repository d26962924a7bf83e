use anyhow::Result;

use crate::domain::{display_value, CareerProfileRequest, RecommendationResult};
use crate::OutputFormat;

use super::super::Container;

pub struct RecommendationController<'a> {
    container: &'a Container,
}

impl<'a> RecommendationController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn recommend(
        &self,
        interests: String,
        education: String,
        aptitude: String,
        format: OutputFormat,
    ) -> Result<String> {
        let profile = CareerProfileRequest::new(interests, education, aptitude);
        let use_case = self.container.recommend_use_case();
        let result = use_case.execute(&profile).await?;

        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&result)?),
            OutputFormat::Text => Ok(format_recommendation(&result)),
        }
    }
}

fn format_recommendation(result: &RecommendationResult) -> String {
    let mut output = String::new();

    if let Some(career) = result.recommended_career() {
        output.push_str(&format!("Recommended career: {}\n", career));
    }

    push_section(&mut output, "Profile", result.profile_bullets());
    push_section(
        &mut output,
        "Roadmap",
        result.roadmap().iter().map(display_value).collect(),
    );
    push_section(&mut output, "Required skills", result.required_skills());
    push_section(
        &mut output,
        "Companies",
        result
            .companies()
            .iter()
            .map(|c| format!("{} ({})", c.name, c.kind))
            .collect(),
    );
    push_section(
        &mut output,
        "Courses",
        result
            .course_guidance()
            .iter()
            .map(|c| format!("{} on {} [{}] {}", c.title, c.platform, c.paid_or_free, c.link))
            .collect(),
    );
    push_section(
        &mut output,
        "Market value",
        result.market_value().iter().map(display_value).collect(),
    );
    push_section(
        &mut output,
        "Packages",
        result.packages().iter().map(display_value).collect(),
    );

    output.trim_end().to_string()
}

fn push_section(output: &mut String, title: &str, items: Vec<String>) {
    if items.is_empty() {
        return;
    }
    output.push_str(&format!("\n{}:\n", title));
    for item in items {
        output.push_str(&format!("  - {}\n", item));
    }
}
