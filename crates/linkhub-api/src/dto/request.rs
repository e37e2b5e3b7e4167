//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use linkhub_entity::folder::model::MoveDirection;

/// Create folder request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFolderRequest {
    /// Parent folder ID (null for root-level).
    pub parent_id: Option<Uuid>,
    /// Folder name.
    #[validate(length(min = 1, max = 190))]
    pub name: String,
}

/// Rename folder request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RenameFolderRequest {
    /// New folder name.
    #[validate(length(min = 1, max = 190))]
    pub name: String,
}

/// Single-step sibling reorder request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderFolderRequest {
    /// Direction to move the folder.
    pub direction: MoveDirection,
}

/// Reparent request. A null `new_parent_id` promotes the folder to the
/// root level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveFolderRequest {
    /// New parent folder ID.
    pub new_parent_id: Option<Uuid>,
}

/// Replace a link's folder memberships with the given set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaceLinkFoldersRequest {
    /// Desired folder memberships.
    pub folder_ids: Vec<Uuid>,
}

/// Move a batch of links between folders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchMoveRequest {
    /// The links to move.
    pub link_ids: Vec<Uuid>,
    /// Folder to add each link to (null: no addition).
    pub target_folder_id: Option<Uuid>,
    /// Folder to remove each link from (null: the implicit all-links
    /// context; nothing is removed).
    pub source_folder_id: Option<Uuid>,
}
