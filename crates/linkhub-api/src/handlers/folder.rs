//! Folder CRUD, reorder, move, and tree handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use linkhub_core::error::AppError;
use linkhub_service::folder::service::CreateFolderRequest as SvcCreateFolder;

use crate::dto::request::{
    CreateFolderRequest, MoveFolderRequest, RenameFolderRequest, ReorderFolderRequest,
};
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// Tree endpoint query parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeQuery {
    /// Return the tree flattened to pre-order `(folder, depth)` entries.
    #[serde(default)]
    pub flat: bool,
}

/// GET /api/folders
///
/// Runs the default-folder guarantee before listing, so every listing is
/// a workspace-scoped session start the rest of the API can rely on.
pub async fn list_folders(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<serde_json::Value>, AppError> {
    state
        .default_folder_service
        .ensure_default_folder(&auth)
        .await?;

    let folders = state.folder_service.list_folders(&auth).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": folders }),
    ))
}

/// GET /api/folders/tree?flat=true|false
pub async fn get_tree(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<TreeQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    if query.flat {
        let flat = state.tree_service.get_flat_tree(&auth).await?;
        return Ok(Json(serde_json::json!({ "success": true, "data": flat })));
    }

    let tree = state.tree_service.get_tree(&auth).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": tree })))
}

/// GET /api/folders/{id}
pub async fn get_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let folder = state.folder_service.get_folder(&auth, id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": folder })))
}

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateFolderRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let folder = state
        .folder_service
        .create_folder(
            &auth,
            SvcCreateFolder {
                parent_id: req.parent_id,
                name: req.name,
            },
        )
        .await?;

    Ok(Json(serde_json::json!({ "success": true, "data": folder })))
}

/// PUT /api/folders/{id}
pub async fn rename_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<RenameFolderRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let folder = state
        .folder_service
        .rename_folder(&auth, id, &req.name)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": folder })))
}

/// PUT /api/folders/{id}/reorder
///
/// Returns the full renumbered sibling list; clients should replace their
/// local ordering with it rather than applying deltas.
pub async fn reorder_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ReorderFolderRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let siblings = state
        .folder_service
        .reorder_folder(&auth, id, req.direction)
        .await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": siblings }),
    ))
}

/// PUT /api/folders/{id}/move
pub async fn move_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<MoveFolderRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let folder = state
        .folder_service
        .move_folder_to(&auth, id, req.new_parent_id)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": folder })))
}

/// DELETE /api/folders/{id}
pub async fn delete_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.folder_service.delete_folder(&auth, id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "message": "Folder deleted" } }),
    ))
}

/// GET /api/folders/{id}/links
pub async fn list_folder_links(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let page = state
        .link_folder_service
        .list_links_in_folder(&auth, id, params.into_page_request())
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": page })))
}
