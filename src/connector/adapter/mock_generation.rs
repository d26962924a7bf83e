use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::GenerationService;
use crate::domain::{DomainError, GenerationMode};

const CANNED_RECOMMENDATION: &str = r#"{
    "profile_bullets": ["Curious about how software systems work", "Comfortable with maths and logic"],
    "recommended_career": "Software Developer",
    "roadmap": "Month 1-3: Learn Python and SQL basics, Months 4-6: Build projects and gain internship experience, Months 7-12: Prepare for placements",
    "required_skills": ["Python", "SQL", "Git", "Data Structures"],
    "companies": [
        {"name": "<span class='important'>Infosys</span>", "type": "IT Services"},
        {"name": "<span class='important'>Zoho</span>", "type": "Product"}
    ],
    "course_guidance": [
        {"title": "Programming in Python", "platform": "NPTEL", "link": "https://nptel.ac.in", "paid_or_free": "Free"}
    ],
    "market_value": "High demand, Steady growth",
    "packages": "Fresher: 4-8 LPA, Mid-level: 10-18 LPA"
}"#;

const CANNED_CHAT_REPLY: &str =
    "This is a mock reply. Start the server without --mock-llm to talk to the real model.";

enum Script {
    Canned,
    Reply(String),
    Fail(String),
}

/// In-process [`GenerationService`] that never leaves the machine.
///
/// The default instance returns a fixed career guide (with comma-separated list
/// fields so normalization is exercised) and a fixed chat reply. Scripted
/// instances return one reply or one error for every call. Every prompt is
/// recorded and can be inspected with [`MockGeneration::calls`].
pub struct MockGeneration {
    script: Script,
    calls: Mutex<Vec<(String, GenerationMode)>>,
}

impl MockGeneration {
    pub fn new() -> Self {
        Self::from_script(Script::Canned)
    }

    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self::from_script(Script::Reply(reply.into()))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::from_script(Script::Fail(message.into()))
    }

    fn from_script(script: Script) -> Self {
        Self {
            script,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, with the mode each was requested in.
    pub fn calls(&self) -> Vec<(String, GenerationMode)> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl Default for MockGeneration {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationService for MockGeneration {
    async fn generate(&self, prompt: &str, mode: GenerationMode) -> Result<String, DomainError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((prompt.to_string(), mode));
        }
        debug!("MockGeneration: {} prompt of {} chars", mode, prompt.len());

        match &self.script {
            Script::Canned => Ok(match mode {
                GenerationMode::Json => CANNED_RECOMMENDATION.to_string(),
                GenerationMode::PlainText => CANNED_CHAT_REPLY.to_string(),
            }),
            Script::Reply(reply) => Ok(reply.clone()),
            Script::Fail(message) => Err(DomainError::upstream(message.clone())),
        }
    }

    fn name(&self) -> &str {
        "mock-generation"
    }
}
