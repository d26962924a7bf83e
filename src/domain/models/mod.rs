mod career_profile;
mod chat;
mod generation_mode;
mod recommendation;

pub use career_profile::*;
pub use chat::*;
pub use generation_mode::*;
pub use recommendation::*;
