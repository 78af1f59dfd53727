//! In-memory store for the two-level folder/document hierarchy.
//!
//! Every write operation holds the exclusive lock for its whole body, so
//! a reader never observes a folder whose archive flag changed while some
//! of its documents still carry the old value, or a document referencing
//! a deleted folder.

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use docshelf_core::error::AppError;
use docshelf_core::result::AppResult;
use docshelf_core::types::{DocumentId, FolderId};
use docshelf_entity::document::Document;
use docshelf_entity::folder::Folder;

/// Lowercase a display name for uniqueness comparison and index keys.
fn name_key(name: &str) -> String {
    name.to_lowercase()
}

/// Mutable state guarded by the store lock.
///
/// The secondary indexes (`folder_names`, `document_names`,
/// `folder_documents`) must stay consistent with the primary maps; they
/// are only ever touched together under the write guard.
#[derive(Debug, Default)]
struct Inner {
    /// Primary folder map.
    folders: HashMap<FolderId, Folder>,
    /// Primary document map.
    documents: HashMap<DocumentId, Document>,
    /// Normalized folder name -> folder id.
    folder_names: HashMap<String, FolderId>,
    /// Normalized document name -> document id.
    document_names: HashMap<String, DocumentId>,
    /// Folder id -> ids of the documents it owns, in creation order.
    folder_documents: HashMap<FolderId, Vec<DocumentId>>,
    /// Folder ids in creation order, for listing.
    folder_order: Vec<FolderId>,
}

/// In-memory store for folders and documents.
///
/// Writers take the exclusive guard for a whole operation; readers share
/// the read guard. Suitable for single-node deployments only.
#[derive(Debug, Default)]
pub struct HierarchyStore {
    /// Protected inner state.
    inner: RwLock<Inner>,
}

impl HierarchyStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Folders ──────────────────────────────────────────────

    /// Creates a folder with a fresh id and `archived = false`.
    pub async fn create_folder(&self, name: &str) -> AppResult<Folder> {
        let mut inner = self.inner.write().await;

        let key = name_key(name);
        if inner.folder_names.contains_key(&key) {
            return Err(AppError::duplicate_name(format!(
                "Folder '{name}' already exists"
            )));
        }

        let now = Utc::now();
        let folder = Folder {
            id: FolderId::new(),
            name: name.to_string(),
            archived: false,
            created_at: now,
            updated_at: now,
        };

        inner.folder_names.insert(key, folder.id);
        inner.folder_documents.insert(folder.id, Vec::new());
        inner.folder_order.push(folder.id);
        inner.folders.insert(folder.id, folder.clone());

        debug!(folder_id = %folder.id, "Folder inserted");
        Ok(folder)
    }

    /// Looks up a folder by id.
    pub async fn get_folder(&self, id: FolderId) -> Option<Folder> {
        self.inner.read().await.folders.get(&id).cloned()
    }

    /// Looks up a folder by name, case-insensitively.
    pub async fn get_folder_by_name(&self, name: &str) -> Option<Folder> {
        let inner = self.inner.read().await;
        let id = inner.folder_names.get(&name_key(name))?;
        inner.folders.get(id).cloned()
    }

    /// Lists folders in creation order.
    ///
    /// Order is not guaranteed to be stable across deletions.
    pub async fn list_folders(&self) -> Vec<Folder> {
        let inner = self.inner.read().await;
        inner
            .folder_order
            .iter()
            .filter_map(|id| inner.folders.get(id).cloned())
            .collect()
    }

    /// Sets a folder's archive flag and propagates the same value to every
    /// document the folder owns, within one critical section.
    ///
    /// The cascade always resyncs owned documents, including ones whose
    /// flag diverged through document-level updates. Setting the current
    /// value again is a no-op that still succeeds.
    pub async fn set_folder_archived(&self, id: FolderId, archived: bool) -> AppResult<Folder> {
        let mut guard = self.inner.write().await;
        let inner = &mut *guard;

        let folder = inner
            .folders
            .get_mut(&id)
            .ok_or_else(|| AppError::folder_not_found(format!("Folder '{id}' not found")))?;

        let now = Utc::now();
        folder.archived = archived;
        folder.updated_at = now;
        let updated = folder.clone();

        if let Some(doc_ids) = inner.folder_documents.get(&id) {
            for doc_id in doc_ids {
                if let Some(doc) = inner.documents.get_mut(doc_id) {
                    doc.archived = archived;
                    doc.updated_at = now;
                }
            }
        }

        debug!(folder_id = %id, archived, "Folder archive cascade applied");
        Ok(updated)
    }

    /// Deletes a folder and every document it owns, returning the
    /// pre-deletion folder snapshot.
    pub async fn delete_folder(&self, id: FolderId) -> AppResult<Folder> {
        let mut inner = self.inner.write().await;

        let folder = inner
            .folders
            .remove(&id)
            .ok_or_else(|| AppError::folder_not_found(format!("Folder '{id}' not found")))?;

        // Documents go first: a document must never outlive its folder,
        // and the name index must not keep entries for removed documents.
        if let Some(doc_ids) = inner.folder_documents.remove(&id) {
            for doc_id in doc_ids {
                if let Some(doc) = inner.documents.remove(&doc_id) {
                    inner.document_names.remove(&name_key(&doc.name));
                }
            }
        }

        inner.folder_names.remove(&name_key(&folder.name));
        inner.folder_order.retain(|fid| *fid != id);

        debug!(folder_id = %id, "Folder removed");
        Ok(folder)
    }

    // ── Documents ────────────────────────────────────────────

    /// Creates a document under an existing folder.
    ///
    /// The new document starts with `archived = false` even when the
    /// owning folder is archived; only the next folder-level cascade
    /// changes that. This mirrors the observed behavior of the system and
    /// is intentional.
    pub async fn create_document(&self, name: &str, folder_id: FolderId) -> AppResult<Document> {
        let mut inner = self.inner.write().await;

        if !inner.folders.contains_key(&folder_id) {
            return Err(AppError::folder_not_found(format!(
                "Folder '{folder_id}' not found"
            )));
        }

        let key = name_key(name);
        if inner.document_names.contains_key(&key) {
            return Err(AppError::duplicate_name(format!(
                "Document '{name}' already exists"
            )));
        }

        let now = Utc::now();
        let document = Document {
            id: DocumentId::new(),
            name: name.to_string(),
            folder_id,
            archived: false,
            created_at: now,
            updated_at: now,
        };

        inner.document_names.insert(key, document.id);
        inner
            .folder_documents
            .entry(folder_id)
            .or_default()
            .push(document.id);
        inner.documents.insert(document.id, document.clone());

        debug!(document_id = %document.id, folder_id = %folder_id, "Document inserted");
        Ok(document)
    }

    /// Looks up a document by id.
    pub async fn get_document(&self, id: DocumentId) -> Option<Document> {
        self.inner.read().await.documents.get(&id).cloned()
    }

    /// Looks up a document by name, case-insensitively.
    pub async fn get_document_by_name(&self, name: &str) -> Option<Document> {
        let inner = self.inner.read().await;
        let id = inner.document_names.get(&name_key(name))?;
        inner.documents.get(id).cloned()
    }

    /// Lists the documents owned by a folder, in creation order.
    pub async fn list_documents(&self, folder_id: FolderId) -> AppResult<Vec<Document>> {
        let inner = self.inner.read().await;

        if !inner.folders.contains_key(&folder_id) {
            return Err(AppError::folder_not_found(format!(
                "Folder '{folder_id}' not found"
            )));
        }

        Ok(inner
            .folder_documents
            .get(&folder_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| inner.documents.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Sets a single document's archive flag, independent of its folder.
    pub async fn set_document_archived(
        &self,
        id: DocumentId,
        archived: bool,
    ) -> AppResult<Document> {
        let mut inner = self.inner.write().await;

        let document = inner
            .documents
            .get_mut(&id)
            .ok_or_else(|| AppError::document_not_found(format!("Document '{id}' not found")))?;

        document.archived = archived;
        document.updated_at = Utc::now();
        Ok(document.clone())
    }
}
