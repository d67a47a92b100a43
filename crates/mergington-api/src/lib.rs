//! Activities API server for the Mergington activity sign-up board.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **REST endpoints** for listing activities and signing students up
//! - **Static dashboard** served from a directory under `/static`, with
//!   `GET /` redirecting to it
//!
//! # Architecture
//!
//! Handlers share one [`ActivityStore`] through [`AppState`]. Reads copy a
//! snapshot of the catalog under a read lock; signup holds the write lock
//! for its duplicate check and append.
//!
//! [`ActivityStore`]: mergington_core::ActivityStore

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, serve, start_server};
pub use state::AppState;
