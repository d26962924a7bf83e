//! # Domain Layer
//!
//! Request/response models, error taxonomy and the pure services that turn
//! a student profile into a prompt and a model reply into a response.
//! This layer is independent of HTTP and of any particular model vendor.

pub mod models;
pub mod services;

pub use models::*;
pub use services::*;
