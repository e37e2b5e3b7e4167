//! Link-folder membership services.

pub mod service;

pub use service::LinkFolderService;
