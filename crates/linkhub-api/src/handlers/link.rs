//! Link-folder membership handlers.

use std::collections::HashSet;

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use linkhub_core::error::AppError;

use crate::dto::request::{BatchMoveRequest, ReplaceLinkFoldersRequest};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/links/{id}/folders
pub async fn get_link_folders(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let associations = state.link_folder_service.get_associations(&auth, id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": associations }),
    ))
}

/// PUT /api/links/{id}/folders
///
/// Full desired-state replacement; only the symmetric difference is
/// written.
pub async fn replace_link_folders(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ReplaceLinkFoldersRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let desired: HashSet<Uuid> = req.folder_ids.into_iter().collect();
    let associations = state
        .link_folder_service
        .replace_associations(&auth, id, desired)
        .await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": associations }),
    ))
}

/// POST /api/links/{id}/folders/{folder_id}
pub async fn add_link_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, folder_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<serde_json::Value>, AppError> {
    state
        .link_folder_service
        .add_association(&auth, id, folder_id)
        .await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "message": "Link added to folder" } }),
    ))
}

/// DELETE /api/links/{id}/folders/{folder_id}
pub async fn remove_link_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, folder_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<serde_json::Value>, AppError> {
    state
        .link_folder_service
        .remove_association(&auth, id, folder_id)
        .await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "message": "Link removed from folder" } }),
    ))
}

/// DELETE /api/links/{id}/folders
///
/// Link-deletion cleanup hook: the link owner calls this when the link
/// itself is removed.
pub async fn remove_all_link_folders(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let removed = state
        .link_folder_service
        .remove_all_for_link(&auth, id)
        .await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "removed": removed } }),
    ))
}

/// POST /api/links/batch-move
pub async fn batch_move(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<BatchMoveRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    state
        .link_folder_service
        .batch_move(
            &auth,
            &req.link_ids,
            req.target_folder_id,
            req.source_folder_id,
        )
        .await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": { "moved": req.link_ids.len() } }),
    ))
}
