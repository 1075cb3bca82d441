//! Axum HTTP API server.
//!
//! This crate provides:
//! - The full WorkLinker route set (jobs, bids, liveness)
//! - Uniform error translation into typed responses
//! - CORS, request-id, and request-logging middleware

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
