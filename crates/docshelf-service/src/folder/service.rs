//! Folder operations: creation, archive cascade, deletion.

use std::sync::Arc;

use tracing::info;

use docshelf_core::error::AppError;
use docshelf_core::result::AppResult;
use docshelf_core::types::FolderId;
use docshelf_entity::folder::Folder;
use docshelf_store::HierarchyStore;

use crate::archive::ArchiveFlag;

/// Manages the folder lifecycle on top of the hierarchy store.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Shared hierarchy store.
    store: Arc<HierarchyStore>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(store: Arc<HierarchyStore>) -> Self {
        Self { store }
    }

    /// Creates a folder after validating its name.
    pub async fn create_folder(&self, name: &str) -> AppResult<Folder> {
        if name.trim().is_empty() {
            return Err(AppError::invalid_argument("Folder name cannot be empty"));
        }

        let folder = self.store.create_folder(name).await?;
        info!(folder_id = %folder.id, name = %folder.name, "Folder created");
        Ok(folder)
    }

    /// Archives or unarchives a folder, cascading the flag to every
    /// document it owns.
    pub async fn set_archive(&self, id: FolderId, flag: ArchiveFlag) -> AppResult<Folder> {
        let archived = flag.into_bool()?;
        let folder = self.store.set_folder_archived(id, archived).await?;
        info!(folder_id = %id, archived, "Folder archive flag updated");
        Ok(folder)
    }

    /// Deletes a folder and every document under it, returning the
    /// pre-deletion snapshot.
    pub async fn delete_folder(&self, id: FolderId) -> AppResult<Folder> {
        let folder = self.store.delete_folder(id).await?;
        info!(folder_id = %id, name = %folder.name, "Folder deleted");
        Ok(folder)
    }
}
