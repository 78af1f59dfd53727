//! Document entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docshelf_core::types::{DocumentId, FolderId};

/// A document owned by exactly one folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique document identifier, assigned at creation, immutable.
    pub id: DocumentId,
    /// Document name. Original casing is preserved for display; uniqueness
    /// is enforced case-insensitively across all documents.
    pub name: String,
    /// The owning folder. Set once at creation; there is no re-parenting.
    pub folder_id: FolderId,
    /// Whether the document is archived. May diverge from the owning
    /// folder's flag until the next folder-level cascade.
    pub archived: bool,
    /// When the document was created.
    pub created_at: DateTime<Utc>,
    /// When the document was last updated.
    pub updated_at: DateTime<Utc>,
}
