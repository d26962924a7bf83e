use std::fmt;

use serde::{Deserialize, Serialize};

/// Output format requested from the generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationMode {
    Json,
    PlainText,
}

impl GenerationMode {
    pub fn mime_type(&self) -> &'static str {
        match self {
            GenerationMode::Json => "application/json",
            GenerationMode::PlainText => "text/plain",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMode::Json => "json",
            GenerationMode::PlainText => "plain-text",
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
