//! Folder handlers: creation, lookup, archive cascade, deletion.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use docshelf_core::types::FolderId;

use crate::dto::request::{CreateFolderRequest, SetArchiveRequest};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    Json(req): Json<CreateFolderRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let folder = state.folder_service.create_folder(&req.name).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": folder })))
}

/// GET /api/folders
pub async fn list_folders(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let folders = state.query.list_folders().await;
    Ok(Json(
        serde_json::json!({ "success": true, "data": folders }),
    ))
}

/// GET /api/folders/{id}
///
/// The path segment may be a folder id or a name; ids take precedence.
pub async fn get_folder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let folder = state.query.find_folder(&id).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": folder })))
}

/// GET /api/folders/by-name/{name}
pub async fn get_folder_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let folder = state.query.find_folder(&name).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": folder })))
}

/// GET /api/folders/{id}/documents
pub async fn list_documents(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let documents = state.query.documents_of(FolderId::from(id)).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": documents }),
    ))
}

/// PUT /api/folders/{id}/archive
pub async fn set_archive(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetArchiveRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let folder = state
        .folder_service
        .set_archive(FolderId::from(id), req.archived)
        .await?;
    Ok(Json(serde_json::json!({ "success": true, "data": folder })))
}

/// DELETE /api/folders/{id}
pub async fn delete_folder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let folder = state.folder_service.delete_folder(FolderId::from(id)).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": folder })))
}
