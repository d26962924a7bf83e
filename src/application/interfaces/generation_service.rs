use async_trait::async_trait;

use crate::domain::{DomainError, GenerationMode};

/// An interface for sending a prompt to a generative model and receiving its raw reply.
///
/// Implementors encapsulate transport, authentication and vendor-specific API
/// details. Use cases only see the text the model produced; normalization of
/// that text happens in the domain layer.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Generate a reply for `prompt` in the requested output `mode`.
    ///
    /// Any failure reaching or reading the model must be reported as
    /// [`DomainError::UpstreamCallFailure`]. Implementations call the model once
    /// and do not retry.
    async fn generate(&self, prompt: &str, mode: GenerationMode) -> Result<String, DomainError>;

    /// Short label for logs.
    fn name(&self) -> &str;
}
