//! Folder repository implementation.
//!
//! All queries are scoped to one workspace; cross-workspace reads are not
//! possible through this interface. Multi-step mutations run inside a
//! single transaction so a failure at any step leaves the tree unchanged.

use sqlx::PgPool;
use uuid::Uuid;

use linkhub_core::error::{AppError, ErrorKind};
use linkhub_core::result::AppResult;
use linkhub_entity::folder::model::{CreateFolder, Folder};

/// Repository for folder CRUD and tree queries.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a folder by ID within a workspace.
    pub async fn find_by_id(&self, workspace_id: Uuid, id: Uuid) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE workspace_id = $1 AND id = $2")
            .bind(workspace_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
    }

    /// List every folder in a workspace, in sibling display order.
    pub async fn find_for_workspace(&self, workspace_id: Uuid) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE workspace_id = $1 ORDER BY position ASC, name ASC",
        )
        .bind(workspace_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }

    /// List the siblings sharing a parent (including the folder itself).
    pub async fn find_siblings(
        &self,
        workspace_id: Uuid,
        parent_id: Option<Uuid>,
    ) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders \
             WHERE workspace_id = $1 AND parent_id IS NOT DISTINCT FROM $2 \
             ORDER BY position ASC, name ASC",
        )
        .bind(workspace_id)
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list siblings", e))
    }

    /// Find the workspace's default folder.
    pub async fn find_default(&self, workspace_id: Uuid) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE workspace_id = $1 AND is_default",
        )
        .bind(workspace_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find default folder", e))
    }

    /// Recursive query returning the IDs of all descendants of a folder.
    pub async fn find_descendant_ids(
        &self,
        workspace_id: Uuid,
        folder_id: Uuid,
    ) -> AppResult<Vec<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            "WITH RECURSIVE tree AS ( \
                SELECT id FROM folders WHERE workspace_id = $1 AND id = $2 \
                UNION ALL \
                SELECT f.id FROM folders f INNER JOIN tree t ON f.parent_id = t.id \
             ) SELECT id FROM tree WHERE id != $2",
        )
        .bind(workspace_id)
        .bind(folder_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list descendants", e))
    }

    /// Create a new folder at the end of its sibling list.
    ///
    /// The position is assigned in-query as `max(sibling position) + 1`
    /// (1 when the folder has no siblings).
    pub async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (workspace_id, user_id, parent_id, name, is_default, position) \
             VALUES ($1, $2, $3, $4, $5, ( \
                SELECT COALESCE(MAX(position), 0) + 1 FROM folders \
                WHERE workspace_id = $1 AND parent_id IS NOT DISTINCT FROM $3 \
             )) RETURNING *",
        )
        .bind(data.workspace_id)
        .bind(data.user_id)
        .bind(data.parent_id)
        .bind(&data.name)
        .bind(data.is_default)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("ux_folders_workspace_default") =>
            {
                AppError::conflict("Workspace already has a default folder")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create folder", e),
        })
    }

    /// Rename a folder.
    pub async fn rename(&self, folder_id: Uuid, new_name: &str) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "UPDATE folders SET name = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(folder_id)
        .bind(new_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to rename folder", e))?
        .ok_or_else(|| AppError::not_found(format!("Folder {folder_id} not found")))
    }

    /// Raw position write for a single folder.
    pub async fn set_position(&self, folder_id: Uuid, position: i32) -> AppResult<()> {
        sqlx::query("UPDATE folders SET position = $2, updated_at = NOW() WHERE id = $1")
            .bind(folder_id)
            .bind(position)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to set position", e))?;
        Ok(())
    }

    /// Raw parent write. The caller must have already validated that the
    /// move does not create a cycle.
    pub async fn set_parent(
        &self,
        folder_id: Uuid,
        new_parent_id: Option<Uuid>,
        new_position: i32,
    ) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "UPDATE folders SET parent_id = $2, position = $3, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(folder_id)
        .bind(new_parent_id)
        .bind(new_position)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to move folder", e))?
        .ok_or_else(|| AppError::not_found(format!("Folder {folder_id} not found")))
    }

    /// Persist a batch of `(folder_id, position)` renumberings in one
    /// transaction.
    pub async fn update_positions(&self, changes: &[(Uuid, i32)]) -> AppResult<()> {
        if changes.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        for (folder_id, position) in changes {
            sqlx::query("UPDATE folders SET position = $2, updated_at = NOW() WHERE id = $1")
                .bind(folder_id)
                .bind(position)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to update position", e)
                })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit reorder", e)
        })
    }

    /// Delete a folder in one transaction: reparent its direct children to
    /// the default folder, drop its link associations, then delete the row.
    pub async fn delete_with_cascade(
        &self,
        folder_id: Uuid,
        default_folder_id: Uuid,
    ) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("UPDATE folders SET parent_id = $2, updated_at = NOW() WHERE parent_id = $1")
            .bind(folder_id)
            .bind(default_folder_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to reparent children", e)
            })?;

        sqlx::query("DELETE FROM link_folders WHERE folder_id = $1")
            .bind(folder_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to remove associations", e)
            })?;

        let result = sqlx::query("DELETE FROM folders WHERE id = $1")
            .bind(folder_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete folder", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Folder {folder_id} not found")));
        }

        tx.commit()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit delete", e))
    }

    /// Insert the workspace default folder if it does not exist, then
    /// return it.
    ///
    /// Racing callers are serialized by the partial unique index on
    /// `(workspace_id) WHERE is_default`: the losing insert is a no-op and
    /// the follow-up read returns the winner's row.
    pub async fn ensure_default(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
        name: &str,
    ) -> AppResult<Folder> {
        sqlx::query(
            "INSERT INTO folders (workspace_id, user_id, parent_id, name, is_default, position) \
             VALUES ($1, $2, NULL, $3, TRUE, 1) \
             ON CONFLICT (workspace_id) WHERE is_default DO NOTHING",
        )
        .bind(workspace_id)
        .bind(user_id)
        .bind(name)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to ensure default folder", e)
        })?;

        self.find_default(workspace_id)
            .await?
            .ok_or_else(|| AppError::internal("Default folder missing after ensure"))
    }
}
