use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// The model was asked for JSON and returned something that is not a JSON object.
    #[error("Malformed model output: {0}")]
    MalformedModelOutput(String),

    #[error("Upstream call failed: {0}")]
    UpstreamCallFailure(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedModelOutput(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::UpstreamCallFailure(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn is_malformed_output(&self) -> bool {
        matches!(self, Self::MalformedModelOutput(_))
    }
}
