pub mod chat_controller;
pub mod recommendation_controller;

pub use chat_controller::ChatController;
pub use recommendation_controller::RecommendationController;
