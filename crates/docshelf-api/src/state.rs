//! Application state shared across all handlers.

use std::sync::Arc;

use docshelf_core::config::AppConfig;
use docshelf_service::document::DocumentService;
use docshelf_service::folder::FolderService;
use docshelf_service::query::QueryFacade;
use docshelf_store::HierarchyStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Folder service
    pub folder_service: Arc<FolderService>,
    /// Document service
    pub document_service: Arc<DocumentService>,
    /// Read-only query facade
    pub query: Arc<QueryFacade>,
}

impl AppState {
    /// Wires services and the query facade over a shared store.
    pub fn new(config: AppConfig, store: Arc<HierarchyStore>) -> Self {
        Self {
            config: Arc::new(config),
            folder_service: Arc::new(FolderService::new(Arc::clone(&store))),
            document_service: Arc::new(DocumentService::new(Arc::clone(&store))),
            query: Arc::new(QueryFacade::new(store)),
        }
    }
}
