//! Folder mutation engine.
//!
//! Every operation validates against current store state before touching
//! storage and raises the most specific error kind. Multi-step writes are
//! delegated to repository transactions so a failure at any step leaves
//! the tree unchanged.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use linkhub_core::error::AppError;
use linkhub_database::repositories::folder::FolderRepository;
use linkhub_entity::folder::model::{CreateFolder, Folder, MoveDirection};
use linkhub_entity::folder::tree::plan_reorder;

use crate::context::RequestContext;

/// Manages validated, invariant-preserving folder mutations.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Folder repository.
    folder_repo: Arc<FolderRepository>,
}

/// Request to create a new folder.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateFolderRequest {
    /// Parent folder ID (None for root-level).
    pub parent_id: Option<Uuid>,
    /// Folder name.
    pub name: String,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(folder_repo: Arc<FolderRepository>) -> Self {
        Self { folder_repo }
    }

    /// Lists every folder in the caller's workspace, in display order.
    pub async fn list_folders(&self, ctx: &RequestContext) -> Result<Vec<Folder>, AppError> {
        self.folder_repo.find_for_workspace(ctx.workspace_id).await
    }

    /// Gets a folder by ID.
    pub async fn get_folder(
        &self,
        ctx: &RequestContext,
        folder_id: Uuid,
    ) -> Result<Folder, AppError> {
        self.folder_repo
            .find_by_id(ctx.workspace_id, folder_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))
    }

    /// Creates a new folder at the end of its sibling list.
    pub async fn create_folder(
        &self,
        ctx: &RequestContext,
        req: CreateFolderRequest,
    ) -> Result<Folder, AppError> {
        let name = req.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }

        // Parent must exist in the same workspace.
        if let Some(parent_id) = req.parent_id {
            self.get_folder(ctx, parent_id)
                .await
                .map_err(|_| AppError::not_found("Parent folder not found"))?;
        }

        let folder = self
            .folder_repo
            .create(&CreateFolder {
                workspace_id: ctx.workspace_id,
                user_id: ctx.user_id,
                parent_id: req.parent_id,
                name: name.to_string(),
                is_default: false,
            })
            .await?;

        info!(
            user_id = %ctx.user_id,
            workspace_id = %ctx.workspace_id,
            folder_id = %folder.id,
            name = %folder.name,
            "Folder created"
        );

        Ok(folder)
    }

    /// Renames a folder. Renaming to the current name is a permitted no-op.
    pub async fn rename_folder(
        &self,
        ctx: &RequestContext,
        folder_id: Uuid,
        new_name: &str,
    ) -> Result<Folder, AppError> {
        let name = new_name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }

        let folder = self.get_folder(ctx, folder_id).await?;
        if folder.name == name {
            return Ok(folder);
        }

        let folder = self.folder_repo.rename(folder_id, name).await?;

        info!(
            user_id = %ctx.user_id,
            folder_id = %folder_id,
            new_name = %name,
            "Folder renamed"
        );

        Ok(folder)
    }

    /// Deletes a folder.
    ///
    /// Direct children are reparented to the workspace default folder
    /// rather than deleted, and only the targeted folder's own link
    /// associations are dropped. The whole cascade is one transaction.
    pub async fn delete_folder(
        &self,
        ctx: &RequestContext,
        folder_id: Uuid,
    ) -> Result<(), AppError> {
        let folder = self.get_folder(ctx, folder_id).await?;

        if folder.is_default {
            return Err(AppError::forbidden("The default folder cannot be deleted"));
        }

        let default_folder = self
            .folder_repo
            .find_default(ctx.workspace_id)
            .await?
            .ok_or_else(|| AppError::internal("Workspace has no default folder"))?;

        self.folder_repo
            .delete_with_cascade(folder_id, default_folder.id)
            .await?;

        info!(
            user_id = %ctx.user_id,
            folder_id = %folder_id,
            name = %folder.name,
            "Folder deleted"
        );

        Ok(())
    }

    /// Moves a folder one step up or down among its siblings.
    ///
    /// The whole sibling list is renumbered to sequential integers
    /// starting at 1 and every changed row is persisted, so repeated
    /// single-step moves cannot drift positions. Returns the refreshed
    /// sibling list, which callers should treat as authoritative.
    pub async fn reorder_folder(
        &self,
        ctx: &RequestContext,
        folder_id: Uuid,
        direction: MoveDirection,
    ) -> Result<Vec<Folder>, AppError> {
        let folder = self.get_folder(ctx, folder_id).await?;

        let siblings = self
            .folder_repo
            .find_siblings(ctx.workspace_id, folder.parent_id)
            .await?;

        let changes = plan_reorder(&siblings, folder_id, direction)
            .ok_or_else(|| AppError::internal("Folder missing from its own sibling set"))?;

        if !changes.is_empty() {
            self.folder_repo.update_positions(&changes).await?;

            info!(
                user_id = %ctx.user_id,
                folder_id = %folder_id,
                direction = ?direction,
                updated = changes.len(),
                "Folder reordered"
            );
        }

        self.folder_repo
            .find_siblings(ctx.workspace_id, folder.parent_id)
            .await
    }

    /// Moves a folder under a new parent (or to the root when `None`).
    ///
    /// The descendant set of the folder is computed first; moving into it
    /// would create a cycle and is rejected, not silently corrected. The
    /// folder enters the new sibling group at the end.
    pub async fn move_folder_to(
        &self,
        ctx: &RequestContext,
        folder_id: Uuid,
        new_parent_id: Option<Uuid>,
    ) -> Result<Folder, AppError> {
        if new_parent_id == Some(folder_id) {
            return Err(AppError::validation("A folder cannot be its own parent"));
        }

        let folder = self.get_folder(ctx, folder_id).await?;
        if folder.is_default {
            return Err(AppError::forbidden("The default folder cannot be moved"));
        }

        if let Some(parent_id) = new_parent_id {
            self.get_folder(ctx, parent_id)
                .await
                .map_err(|_| AppError::not_found("Target parent folder not found"))?;

            let descendants = self
                .folder_repo
                .find_descendant_ids(ctx.workspace_id, folder_id)
                .await?;
            if descendants.contains(&parent_id) {
                return Err(AppError::cycle(
                    "Cannot move a folder into one of its descendants",
                ));
            }
        }

        let new_siblings = self
            .folder_repo
            .find_siblings(ctx.workspace_id, new_parent_id)
            .await?;
        let new_position = new_siblings
            .iter()
            .filter(|f| f.id != folder_id)
            .map(|f| f.position)
            .max()
            .unwrap_or(0)
            + 1;

        let folder = self
            .folder_repo
            .set_parent(folder_id, new_parent_id, new_position)
            .await?;

        info!(
            user_id = %ctx.user_id,
            folder_id = %folder_id,
            new_parent_id = ?new_parent_id,
            position = new_position,
            "Folder moved"
        );

        Ok(folder)
    }
}
