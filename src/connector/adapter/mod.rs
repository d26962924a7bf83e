mod mock_generation;
mod vertex_gemini_client;

pub use mock_generation::*;
pub use vertex_gemini_client::*;
