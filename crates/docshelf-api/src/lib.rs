//! # docshelf-api
//!
//! HTTP API layer for Docshelf built on Axum.
//!
//! Provides the REST endpoints for folders and documents, DTOs, and the
//! mapping from domain errors to HTTP responses.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
