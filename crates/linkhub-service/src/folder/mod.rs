//! Folder services: mutation engine, tree read model, default-folder
//! guarantee.

pub mod default;
pub mod service;
pub mod tree;

pub use default::DefaultFolderService;
pub use service::FolderService;
pub use tree::TreeService;
