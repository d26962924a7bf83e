use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::application::{ChatUseCase, GenerationService, RecommendCareerUseCase};
use crate::connector::adapter::{MockGeneration, VertexConfig, VertexGeminiClient};

pub struct ContainerConfig {
    pub mock_llm: bool,
    pub vertex: VertexConfig,
    /// Directory holding the frontend's `index.html`.
    pub static_dir: PathBuf,
}

/// Long-lived services shared by every request.
///
/// The generation client is created here once at startup and reused; it is
/// dropped together with the container when the process shuts down.
pub struct Container {
    generation_service: Arc<dyn GenerationService>,
    static_dir: PathBuf,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let generation_service: Arc<dyn GenerationService> = if config.mock_llm {
            debug!("Using mock generation service");
            Arc::new(MockGeneration::new())
        } else {
            debug!(
                "Initializing Vertex AI client for project {} in {} (model {})",
                config.vertex.project, config.vertex.location, config.vertex.model
            );
            Arc::new(VertexGeminiClient::new(&config.vertex)?)
        };

        Ok(Self {
            generation_service,
            static_dir: config.static_dir,
        })
    }

    /// Build a container around an already constructed generation service.
    pub fn with_generation_service(
        generation_service: Arc<dyn GenerationService>,
        static_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            generation_service,
            static_dir: static_dir.into(),
        }
    }

    pub fn recommend_use_case(&self) -> RecommendCareerUseCase {
        RecommendCareerUseCase::new(self.generation_service.clone())
    }

    pub fn chat_use_case(&self) -> ChatUseCase {
        ChatUseCase::new(self.generation_service.clone())
    }

    pub fn generation_service_name(&self) -> &str {
        self.generation_service.name()
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }
}
