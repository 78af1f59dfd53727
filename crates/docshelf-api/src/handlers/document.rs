//! Document handlers: creation, lookup, archive updates.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use docshelf_core::types::{DocumentId, FolderId};

use crate::dto::request::{CreateDocumentRequest, SetArchiveRequest};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/documents
pub async fn create_document(
    State(state): State<AppState>,
    Json(req): Json<CreateDocumentRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let document = state
        .document_service
        .create_document(&req.name, FolderId::from(req.folder_id))
        .await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": document }),
    ))
}

/// GET /api/documents/{id}
///
/// The path segment may be a document id or a name; ids take precedence.
pub async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let document = state.query.find_document(&id).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": document }),
    ))
}

/// GET /api/documents/by-name/{name}
pub async fn get_document_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let document = state.query.find_document(&name).await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": document }),
    ))
}

/// PUT /api/documents/{id}/archive
pub async fn set_archive(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetArchiveRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let document = state
        .document_service
        .set_archive(DocumentId::from(id), req.archived)
        .await?;
    Ok(Json(
        serde_json::json!({ "success": true, "data": document }),
    ))
}
