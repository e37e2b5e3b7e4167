//! Link-folder association model.
//!
//! A link may live in zero, one, or many folders at once; membership is a
//! plain `(link_id, folder_id)` pair independent of the single-parent
//! folder tree. Links themselves are owned elsewhere — `link_id` is an
//! opaque identifier here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A many-to-many membership record between a link and a folder.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LinkFolder {
    /// The link.
    pub link_id: Uuid,
    /// The folder the link is a member of.
    pub folder_id: Uuid,
    /// The workspace scoping this association.
    pub workspace_id: Uuid,
    /// The user who created the association.
    pub user_id: Uuid,
    /// When the association was created.
    pub created_at: DateTime<Utc>,
}
