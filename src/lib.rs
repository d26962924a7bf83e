pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use cli::{Commands, OutputFormat};

pub use application::{ChatUseCase, GenerationService, RecommendCareerUseCase};

pub use connector::{
    build_router, Container, ContainerConfig, MockGeneration, VertexConfig, VertexGeminiClient,
};

pub use domain::{
    CareerProfileRequest, ChatMessage, ChatReply, Company, CourseGuidance, DomainError,
    GenerationMode, RecommendationResult,
};
