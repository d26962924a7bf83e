pub mod handlers;
pub mod server;

pub use handlers::{ErrorResponse, MALFORMED_OUTPUT_MESSAGE};
pub use server::{build_router, serve};
