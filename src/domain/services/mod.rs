//! Domain services: prompt construction and model-output normalization.

mod error;
pub mod prompt_builder;
pub mod response_normalizer;

pub use error::*;
pub use prompt_builder::{chat_prompt, recommendation_prompt};
pub use response_normalizer::{
    coerce_to_string_list, normalize_chat_reply, normalize_recommendation, ListField,
};
