//! # Application Layer
//!
//! Use cases coordinating prompt building, the generation service and
//! response normalization.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
