//! Folder tree read model.

use std::sync::Arc;

use linkhub_core::error::AppError;
use linkhub_database::repositories::folder::FolderRepository;
use linkhub_database::repositories::link_folder::LinkFolderRepository;
use linkhub_entity::folder::tree::{self, FlatFolder, FolderNode};

use crate::context::RequestContext;

/// Builds the hierarchical folder view consumed by the sidebar and the
/// reorder/move-target UIs.
///
/// The tree is rebuilt from the flat row set on every call rather than
/// incrementally patched; clients refresh their whole view after each
/// mutation.
#[derive(Debug, Clone)]
pub struct TreeService {
    /// Folder repository.
    folder_repo: Arc<FolderRepository>,
    /// Association repository, for per-folder link counts.
    link_folder_repo: Arc<LinkFolderRepository>,
}

impl TreeService {
    /// Creates a new tree service.
    pub fn new(
        folder_repo: Arc<FolderRepository>,
        link_folder_repo: Arc<LinkFolderRepository>,
    ) -> Self {
        Self {
            folder_repo,
            link_folder_repo,
        }
    }

    /// Builds the workspace folder tree, annotated with link counts.
    pub async fn get_tree(&self, ctx: &RequestContext) -> Result<Vec<FolderNode>, AppError> {
        let folders = self
            .folder_repo
            .find_for_workspace(ctx.workspace_id)
            .await?;

        let ids: Vec<_> = folders.iter().map(|f| f.id).collect();
        let link_counts = self.link_folder_repo.count_for_folders(&ids).await?;

        Ok(tree::build_tree_with_counts(&folders, &link_counts))
    }

    /// Builds the tree and flattens it to pre-order `(folder, depth)`
    /// entries for indented list rendering.
    pub async fn get_flat_tree(&self, ctx: &RequestContext) -> Result<Vec<FlatFolder>, AppError> {
        let nodes = self.get_tree(ctx).await?;
        Ok(tree::flatten(&nodes))
    }
}
