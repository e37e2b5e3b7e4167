//! Folder domain entities.

pub mod model;
pub mod tree;

pub use model::{CreateFolder, Folder, MoveDirection, DEFAULT_FOLDER_NAME};
pub use tree::{FlatFolder, FolderNode};
