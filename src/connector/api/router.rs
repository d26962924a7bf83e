use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{ChatController, RecommendationController};

pub struct Router<'a> {
    recommendation_controller: RecommendationController<'a>,
    chat_controller: ChatController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            recommendation_controller: RecommendationController::new(container),
            chat_controller: ChatController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Recommend {
                interests,
                education,
                aptitude,
                format,
            } => {
                self.recommendation_controller
                    .recommend(interests, education, aptitude, format)
                    .await
            }
            Commands::Chat { message } => self.chat_controller.chat(message).await,
            Commands::Serve { .. } => unreachable!("serve command is handled separately in main"),
        }
    }
}
