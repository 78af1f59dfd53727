//! Request DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use docshelf_service::ArchiveFlag;

/// Create folder request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolderRequest {
    /// Folder name.
    pub name: String,
}

/// Create document request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocumentRequest {
    /// Document name.
    pub name: String,
    /// Owning folder id.
    pub folder_id: Uuid,
}

/// Archive update request body.
///
/// `archived` accepts a JSON boolean or the legacy `1`/`0` encoding;
/// the service layer converts it to the canonical bool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetArchiveRequest {
    /// Desired archive state.
    pub archived: ArchiveFlag,
}
