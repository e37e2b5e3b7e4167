//! Link-folder association entities.

pub mod association;

pub use association::LinkFolder;
