//! Read-only lookups over the hierarchy store.

use std::sync::Arc;

use docshelf_core::error::AppError;
use docshelf_core::result::AppResult;
use docshelf_core::types::FolderId;
use docshelf_entity::document::Document;
use docshelf_entity::folder::Folder;
use docshelf_store::HierarchyStore;

/// Read path for the external interface layer.
///
/// A selector that parses as a UUID resolves by id; anything else is
/// treated as a case-insensitive name. The facade never mutates state.
#[derive(Debug, Clone)]
pub struct QueryFacade {
    /// Shared hierarchy store.
    store: Arc<HierarchyStore>,
}

impl QueryFacade {
    /// Creates a new query facade.
    pub fn new(store: Arc<HierarchyStore>) -> Self {
        Self { store }
    }

    /// Finds a folder by id or name.
    pub async fn find_folder(&self, selector: &str) -> AppResult<Folder> {
        let folder = match selector.parse::<FolderId>() {
            Ok(id) => self.store.get_folder(id).await,
            Err(_) => self.store.get_folder_by_name(selector).await,
        };
        folder.ok_or_else(|| AppError::folder_not_found(format!("Folder '{selector}' not found")))
    }

    /// Finds a document by id or name.
    pub async fn find_document(&self, selector: &str) -> AppResult<Document> {
        let document = match selector.parse() {
            Ok(id) => self.store.get_document(id).await,
            Err(_) => self.store.get_document_by_name(selector).await,
        };
        document
            .ok_or_else(|| AppError::document_not_found(format!("Document '{selector}' not found")))
    }

    /// Lists the documents owned by a folder.
    pub async fn documents_of(&self, folder_id: FolderId) -> AppResult<Vec<Document>> {
        self.store.list_documents(folder_id).await
    }

    /// Lists all folders in creation order.
    pub async fn list_folders(&self) -> Vec<Folder> {
        self.store.list_folders().await
    }
}
