//! The per-workspace default-folder guarantee.

use std::sync::Arc;

use tracing::debug;

use linkhub_core::error::AppError;
use linkhub_database::repositories::folder::FolderRepository;
use linkhub_entity::folder::model::{Folder, DEFAULT_FOLDER_NAME};

use crate::context::RequestContext;

/// Ensures every workspace has exactly one non-deletable default folder.
///
/// Safe to call at the start of any workspace-scoped session (it runs on
/// every folder listing): the insert is idempotent, and concurrent calls
/// are serialized by the partial unique index on
/// `(workspace_id) WHERE is_default`, so duplicates cannot be created.
#[derive(Debug, Clone)]
pub struct DefaultFolderService {
    /// Folder repository.
    folder_repo: Arc<FolderRepository>,
}

impl DefaultFolderService {
    /// Creates a new default-folder service.
    pub fn new(folder_repo: Arc<FolderRepository>) -> Self {
        Self { folder_repo }
    }

    /// Ensures the workspace default folder exists and returns it.
    pub async fn ensure_default_folder(
        &self,
        ctx: &RequestContext,
    ) -> Result<Folder, AppError> {
        let folder = self
            .folder_repo
            .ensure_default(ctx.workspace_id, ctx.user_id, DEFAULT_FOLDER_NAME)
            .await?;

        debug!(
            workspace_id = %ctx.workspace_id,
            folder_id = %folder.id,
            "Default folder ensured"
        );

        Ok(folder)
    }
}
