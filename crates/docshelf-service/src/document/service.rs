//! Document operations: creation and archive updates.

use std::sync::Arc;

use tracing::info;

use docshelf_core::error::AppError;
use docshelf_core::result::AppResult;
use docshelf_core::types::{DocumentId, FolderId};
use docshelf_entity::document::Document;
use docshelf_store::HierarchyStore;

use crate::archive::ArchiveFlag;

/// Manages the document lifecycle on top of the hierarchy store.
#[derive(Debug, Clone)]
pub struct DocumentService {
    /// Shared hierarchy store.
    store: Arc<HierarchyStore>,
}

impl DocumentService {
    /// Creates a new document service.
    pub fn new(store: Arc<HierarchyStore>) -> Self {
        Self { store }
    }

    /// Creates a document under an existing folder after validating its
    /// name. Document names share one global namespace with every other
    /// document, not a per-folder one.
    pub async fn create_document(&self, name: &str, folder_id: FolderId) -> AppResult<Document> {
        if name.trim().is_empty() {
            return Err(AppError::invalid_argument("Document name cannot be empty"));
        }

        let document = self.store.create_document(name, folder_id).await?;
        info!(
            document_id = %document.id,
            folder_id = %folder_id,
            name = %document.name,
            "Document created"
        );
        Ok(document)
    }

    /// Archives or unarchives a single document. The flag may diverge
    /// from the owning folder's until the next folder-level cascade.
    pub async fn set_archive(&self, id: DocumentId, flag: ArchiveFlag) -> AppResult<Document> {
        let archived = flag.into_bool()?;
        let document = self.store.set_document_archived(id, archived).await?;
        info!(document_id = %id, archived, "Document archive flag updated");
        Ok(document)
    }
}
