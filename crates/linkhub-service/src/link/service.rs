//! Link-folder membership operations.
//!
//! Membership is many-to-many and independent of the single-parent folder
//! tree. Adds and removes are idempotent; replace computes the symmetric
//! difference against current state so only the needed writes are applied.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use linkhub_core::error::AppError;
use linkhub_core::types::pagination::{PageRequest, PageResponse};
use linkhub_database::repositories::folder::FolderRepository;
use linkhub_database::repositories::link_folder::LinkFolderRepository;
use linkhub_entity::link::association::LinkFolder;

use crate::context::RequestContext;

/// Manages link-folder membership records.
#[derive(Debug, Clone)]
pub struct LinkFolderService {
    /// Association repository.
    link_folder_repo: Arc<LinkFolderRepository>,
    /// Folder repository, for membership target validation.
    folder_repo: Arc<FolderRepository>,
}

/// Compute the writes needed to turn `current` into `desired`.
///
/// Returns `(additions, removals)` — the symmetric difference split by
/// direction.
fn association_diff(
    current: &HashSet<Uuid>,
    desired: &HashSet<Uuid>,
) -> (Vec<Uuid>, Vec<Uuid>) {
    let additions = desired.difference(current).copied().collect();
    let removals = current.difference(desired).copied().collect();
    (additions, removals)
}

impl LinkFolderService {
    /// Creates a new link-folder service.
    pub fn new(
        link_folder_repo: Arc<LinkFolderRepository>,
        folder_repo: Arc<FolderRepository>,
    ) -> Self {
        Self {
            link_folder_repo,
            folder_repo,
        }
    }

    /// Verify a folder exists in the caller's workspace.
    async fn require_folder(&self, ctx: &RequestContext, folder_id: Uuid) -> Result<(), AppError> {
        self.folder_repo
            .find_by_id(ctx.workspace_id, folder_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))?;
        Ok(())
    }

    /// Lists the current associations for a link.
    pub async fn get_associations(
        &self,
        ctx: &RequestContext,
        link_id: Uuid,
    ) -> Result<Vec<LinkFolder>, AppError> {
        self.link_folder_repo
            .find_for_link(ctx.workspace_id, link_id)
            .await
    }

    /// Lists the link IDs that are members of a folder, paginated.
    pub async fn list_links_in_folder(
        &self,
        ctx: &RequestContext,
        folder_id: Uuid,
        page: PageRequest,
    ) -> Result<PageResponse<Uuid>, AppError> {
        self.require_folder(ctx, folder_id).await?;
        self.link_folder_repo
            .find_links_for_folder(ctx.workspace_id, folder_id, &page)
            .await
    }

    /// Adds a link to a folder. Adding an existing membership is a no-op.
    pub async fn add_association(
        &self,
        ctx: &RequestContext,
        link_id: Uuid,
        folder_id: Uuid,
    ) -> Result<(), AppError> {
        self.require_folder(ctx, folder_id).await?;

        self.link_folder_repo
            .add(ctx.workspace_id, ctx.user_id, link_id, folder_id)
            .await?;

        info!(
            user_id = %ctx.user_id,
            link_id = %link_id,
            folder_id = %folder_id,
            "Link added to folder"
        );

        Ok(())
    }

    /// Removes a link from a folder. Removing a non-existent membership is
    /// a no-op.
    pub async fn remove_association(
        &self,
        ctx: &RequestContext,
        link_id: Uuid,
        folder_id: Uuid,
    ) -> Result<(), AppError> {
        self.link_folder_repo
            .remove(ctx.workspace_id, link_id, folder_id)
            .await?;

        info!(
            user_id = %ctx.user_id,
            link_id = %link_id,
            folder_id = %folder_id,
            "Link removed from folder"
        );

        Ok(())
    }

    /// Replaces a link's memberships with the desired set.
    ///
    /// Only the additions and removals in the symmetric difference are
    /// written, in one transaction. Returns the refreshed association
    /// list.
    pub async fn replace_associations(
        &self,
        ctx: &RequestContext,
        link_id: Uuid,
        folder_ids: HashSet<Uuid>,
    ) -> Result<Vec<LinkFolder>, AppError> {
        for folder_id in &folder_ids {
            self.require_folder(ctx, *folder_id).await?;
        }

        let current: HashSet<Uuid> = self
            .link_folder_repo
            .find_for_link(ctx.workspace_id, link_id)
            .await?
            .into_iter()
            .map(|a| a.folder_id)
            .collect();

        let (additions, removals) = association_diff(&current, &folder_ids);

        self.link_folder_repo
            .apply_diff(ctx.workspace_id, ctx.user_id, link_id, &additions, &removals)
            .await?;

        info!(
            user_id = %ctx.user_id,
            link_id = %link_id,
            added = additions.len(),
            removed = removals.len(),
            "Link folders replaced"
        );

        self.link_folder_repo
            .find_for_link(ctx.workspace_id, link_id)
            .await
    }

    /// Moves a batch of links between folders.
    ///
    /// A null source is the implicit all-links context: nothing is removed
    /// and each link simply gains the target membership.
    pub async fn batch_move(
        &self,
        ctx: &RequestContext,
        link_ids: &[Uuid],
        target_folder_id: Option<Uuid>,
        source_folder_id: Option<Uuid>,
    ) -> Result<(), AppError> {
        if let Some(target_id) = target_folder_id {
            self.require_folder(ctx, target_id).await?;
        }

        self.link_folder_repo
            .batch_move(
                ctx.workspace_id,
                ctx.user_id,
                link_ids,
                target_folder_id,
                source_folder_id,
            )
            .await?;

        info!(
            user_id = %ctx.user_id,
            links = link_ids.len(),
            target_folder_id = ?target_folder_id,
            source_folder_id = ?source_folder_id,
            "Links batch-moved"
        );

        Ok(())
    }

    /// Removes every membership for a link. Called by the external link
    /// owner when the link itself is deleted.
    pub async fn remove_all_for_link(
        &self,
        ctx: &RequestContext,
        link_id: Uuid,
    ) -> Result<u64, AppError> {
        let removed = self
            .link_folder_repo
            .remove_all_for_link(ctx.workspace_id, link_id)
            .await?;

        info!(
            user_id = %ctx.user_id,
            link_id = %link_id,
            removed,
            "Link associations cleared"
        );

        Ok(removed)
    }
}
