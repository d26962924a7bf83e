use std::sync::Arc;

use tracing::{debug, info};

use crate::application::GenerationService;
use crate::domain::{
    chat_prompt, normalize_chat_reply, ChatMessage, ChatReply, DomainError, GenerationMode,
};

pub struct ChatUseCase {
    generation: Arc<dyn GenerationService>,
}

impl ChatUseCase {
    pub fn new(generation: Arc<dyn GenerationService>) -> Self {
        Self { generation }
    }

    pub async fn execute(&self, message: &ChatMessage) -> Result<ChatReply, DomainError> {
        info!(
            "Chat message received ({} chars)",
            message.message().chars().count()
        );

        let prompt = chat_prompt(message);
        let raw = self
            .generation
            .generate(&prompt, GenerationMode::PlainText)
            .await?;
        debug!("Raw chat output: {raw}");

        Ok(ChatReply::new(normalize_chat_reply(&raw)))
    }

    /// Like [`execute`](Self::execute), but folds any failure into an apology reply.
    pub async fn reply(&self, message: &ChatMessage) -> ChatReply {
        match self.execute(message).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("Chat request failed: {e}");
                ChatReply::from_error(&e)
            }
        }
    }
}
