mod chat;
mod recommend_career;

pub use chat::*;
pub use recommend_career::*;
