//! # linkhub-api
//!
//! HTTP API layer for LinkHub built on Axum.
//!
//! Provides the REST endpoints for folder and link-folder operations,
//! middleware (CORS, logging), extractors, DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use state::AppState;
