use anyhow::Result;

use crate::domain::ChatMessage;

use super::super::Container;

pub struct ChatController<'a> {
    container: &'a Container,
}

impl<'a> ChatController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Failures are rendered as an apology reply, the same way the HTTP endpoint does.
    pub async fn chat(&self, message: String) -> Result<String> {
        let use_case = self.container.chat_use_case();
        let reply = use_case.reply(&ChatMessage::new(message)).await;
        Ok(reply.reply().to_string())
    }
}
