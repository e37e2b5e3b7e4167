//! # linkhub-entity
//!
//! Domain entity models for LinkHub. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.
//!
//! The folder tree builder lives here as pure functions so that the
//! hierarchy view can be recomputed deterministically after every
//! mutation, without touching the database layer.

pub mod folder;
pub mod link;
