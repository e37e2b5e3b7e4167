//! Link-folder association repository implementation.
//!
//! Membership is a plain `(link_id, folder_id)` pair; inserts and deletes
//! are idempotent, and multi-row changes (replace, batch move) run in one
//! transaction.

use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use linkhub_core::error::{AppError, ErrorKind};
use linkhub_core::result::AppResult;
use linkhub_core::types::pagination::{PageRequest, PageResponse};
use linkhub_entity::link::association::LinkFolder;

/// Repository for link-folder membership records.
#[derive(Debug, Clone)]
pub struct LinkFolderRepository {
    pool: PgPool,
}

impl LinkFolderRepository {
    /// Create a new association repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Add an association. Adding an existing pair is a no-op.
    pub async fn add(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
        link_id: Uuid,
        folder_id: Uuid,
    ) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO link_folders (link_id, folder_id, workspace_id, user_id) \
             VALUES ($1, $2, $3, $4) ON CONFLICT (link_id, folder_id) DO NOTHING",
        )
        .bind(link_id)
        .bind(folder_id)
        .bind(workspace_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add association", e))?;
        Ok(())
    }

    /// Remove an association. Removing a non-existent pair is a no-op.
    pub async fn remove(
        &self,
        workspace_id: Uuid,
        link_id: Uuid,
        folder_id: Uuid,
    ) -> AppResult<()> {
        sqlx::query(
            "DELETE FROM link_folders \
             WHERE workspace_id = $1 AND link_id = $2 AND folder_id = $3",
        )
        .bind(workspace_id)
        .bind(link_id)
        .bind(folder_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to remove association", e)
        })?;
        Ok(())
    }

    /// List the associations for a link.
    pub async fn find_for_link(
        &self,
        workspace_id: Uuid,
        link_id: Uuid,
    ) -> AppResult<Vec<LinkFolder>> {
        sqlx::query_as::<_, LinkFolder>(
            "SELECT * FROM link_folders \
             WHERE workspace_id = $1 AND link_id = $2 ORDER BY created_at ASC",
        )
        .bind(workspace_id)
        .bind(link_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list associations", e))
    }

    /// List the link IDs that are members of a folder, paginated.
    pub async fn find_links_for_folder(
        &self,
        workspace_id: Uuid,
        folder_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Uuid>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM link_folders WHERE workspace_id = $1 AND folder_id = $2",
        )
        .bind(workspace_id)
        .bind(folder_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count links", e))?;

        let link_ids = sqlx::query_scalar::<_, Uuid>(
            "SELECT link_id FROM link_folders \
             WHERE workspace_id = $1 AND folder_id = $2 \
             ORDER BY created_at ASC LIMIT $3 OFFSET $4",
        )
        .bind(workspace_id)
        .bind(folder_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list links", e))?;

        Ok(PageResponse::new(
            link_ids,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Count the associations per folder for a set of folders.
    pub async fn count_for_folders(&self, folder_ids: &[Uuid]) -> AppResult<HashMap<Uuid, u64>> {
        let rows: Vec<(Uuid, i64)> = sqlx::query_as(
            "SELECT folder_id, COUNT(*) FROM link_folders \
             WHERE folder_id = ANY($1) GROUP BY folder_id",
        )
        .bind(folder_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count associations", e)
        })?;

        Ok(rows.into_iter().map(|(id, n)| (id, n as u64)).collect())
    }

    /// Apply a computed association diff for one link in one transaction.
    pub async fn apply_diff(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
        link_id: Uuid,
        additions: &[Uuid],
        removals: &[Uuid],
    ) -> AppResult<()> {
        if additions.is_empty() && removals.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        for folder_id in removals {
            sqlx::query(
                "DELETE FROM link_folders \
                 WHERE workspace_id = $1 AND link_id = $2 AND folder_id = $3",
            )
            .bind(workspace_id)
            .bind(link_id)
            .bind(folder_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to remove association", e)
            })?;
        }

        for folder_id in additions {
            sqlx::query(
                "INSERT INTO link_folders (link_id, folder_id, workspace_id, user_id) \
                 VALUES ($1, $2, $3, $4) ON CONFLICT (link_id, folder_id) DO NOTHING",
            )
            .bind(link_id)
            .bind(folder_id)
            .bind(workspace_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to add association", e)
            })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit association diff", e)
        })
    }

    /// Move a batch of links between folders in one transaction.
    ///
    /// For each link: removes the `source_folder_id` association when a
    /// source is given, and adds the `target_folder_id` association when a
    /// target is given. A null source is the implicit all-links context,
    /// so nothing is removed.
    pub async fn batch_move(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
        link_ids: &[Uuid],
        target_folder_id: Option<Uuid>,
        source_folder_id: Option<Uuid>,
    ) -> AppResult<()> {
        if link_ids.is_empty() || (target_folder_id.is_none() && source_folder_id.is_none()) {
            return Ok(());
        }

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        if let Some(source_id) = source_folder_id {
            sqlx::query(
                "DELETE FROM link_folders \
                 WHERE workspace_id = $1 AND folder_id = $2 AND link_id = ANY($3)",
            )
            .bind(workspace_id)
            .bind(source_id)
            .bind(link_ids)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to remove source memberships", e)
            })?;
        }

        if let Some(target_id) = target_folder_id {
            for link_id in link_ids {
                sqlx::query(
                    "INSERT INTO link_folders (link_id, folder_id, workspace_id, user_id) \
                     VALUES ($1, $2, $3, $4) ON CONFLICT (link_id, folder_id) DO NOTHING",
                )
                .bind(link_id)
                .bind(target_id)
                .bind(workspace_id)
                .bind(user_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Database,
                        "Failed to add target membership",
                        e,
                    )
                })?;
            }
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit batch move", e)
        })
    }

    /// Remove every association for a link. Called when the link itself is
    /// deleted by its external owner.
    pub async fn remove_all_for_link(&self, workspace_id: Uuid, link_id: Uuid) -> AppResult<u64> {
        let result =
            sqlx::query("DELETE FROM link_folders WHERE workspace_id = $1 AND link_id = $2")
                .bind(workspace_id)
                .bind(link_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to remove associations", e)
                })?;
        Ok(result.rows_affected())
    }
}
