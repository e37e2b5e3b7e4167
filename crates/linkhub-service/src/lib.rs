//! # linkhub-service
//!
//! Business logic service layer for LinkHub. Each service orchestrates
//! repositories to implement application-level use cases: the folder
//! mutation engine, the tree read model, the default-folder guarantee,
//! and link-folder membership.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod folder;
pub mod link;

pub use context::RequestContext;
pub use folder::{DefaultFolderService, FolderService, TreeService};
pub use link::LinkFolderService;
