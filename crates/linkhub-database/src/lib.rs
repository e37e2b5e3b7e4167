//! # linkhub-database
//!
//! PostgreSQL database connection management and concrete repository
//! implementations for all LinkHub entities.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
