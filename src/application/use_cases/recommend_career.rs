use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info};

use crate::application::GenerationService;
use crate::domain::{
    normalize_recommendation, recommendation_prompt, CareerProfileRequest, DomainError,
    GenerationMode, RecommendationResult,
};

pub struct RecommendCareerUseCase {
    generation: Arc<dyn GenerationService>,
}

impl RecommendCareerUseCase {
    pub fn new(generation: Arc<dyn GenerationService>) -> Self {
        Self { generation }
    }

    pub async fn execute(
        &self,
        profile: &CareerProfileRequest,
    ) -> Result<RecommendationResult, DomainError> {
        info!(
            "Recommendation requested: interests={:?}, education={:?}, aptitude={:?}",
            profile.interests(),
            profile.education(),
            profile.aptitude()
        );

        let prompt = recommendation_prompt(profile);
        let start_time = Instant::now();

        info!("Sending recommendation prompt to {}", self.generation.name());
        let raw = self.generation.generate(&prompt, GenerationMode::Json).await?;
        info!(
            "Response received from {} in {:?}",
            self.generation.name(),
            start_time.elapsed()
        );
        debug!("Raw recommendation output: {raw}");

        normalize_recommendation(&raw).inspect_err(|e| {
            if e.is_malformed_output() {
                error!("Could not parse model output as JSON: {e}");
            }
        })
    }
}
