//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Canonical name of the per-workspace default folder.
///
/// Exactly one folder per workspace carries `is_default = true`; it acts
/// as the unscoped "all links" view and as the reparent target when a
/// folder with children is deleted.
pub const DEFAULT_FOLDER_NAME: &str = "All Links";

/// A folder in the workspace link hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: Uuid,
    /// The workspace this folder belongs to.
    pub workspace_id: Uuid,
    /// The user who created the folder.
    pub user_id: Uuid,
    /// Parent folder ID (null for root folders).
    pub parent_id: Option<Uuid>,
    /// Folder name.
    pub name: String,
    /// Position among siblings; siblings are ordered by
    /// `(position asc, name asc)`.
    pub position: i32,
    /// Whether this is the workspace's non-deletable default folder.
    pub is_default: bool,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Folder {
    /// Check if this is a root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Data required to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolder {
    /// The owning workspace.
    pub workspace_id: Uuid,
    /// The creating user.
    pub user_id: Uuid,
    /// Parent folder (None for root).
    pub parent_id: Option<Uuid>,
    /// Folder name.
    pub name: String,
    /// Whether the new folder is the workspace default.
    pub is_default: bool,
}

/// Direction of a single-step sibling reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    /// Swap with the previous sibling.
    Up,
    /// Swap with the next sibling.
    Down,
}
