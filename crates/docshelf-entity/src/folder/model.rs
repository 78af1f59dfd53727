//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docshelf_core::types::FolderId;

/// A folder at the top level of the hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    /// Unique folder identifier, assigned at creation, immutable.
    pub id: FolderId,
    /// Folder name. Original casing is preserved for display; uniqueness
    /// is enforced case-insensitively.
    pub name: String,
    /// Whether the folder is archived.
    pub archived: bool,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
}
