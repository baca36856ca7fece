//! HTTP server layer
//!
//! Axum server with:
//! - Request tracing
//! - Graceful shutdown
//! - JSON envelopes for every success and error

pub mod envelope;
pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;
pub mod state;

pub use envelope::{Envelope, StatusMessage};
pub use error::ApiError;
pub use server::{build_router, run_server, serve, ServerConfig, ServerError};
pub use state::AppState;
