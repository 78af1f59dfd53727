//! Boundary type for archive-flag inputs.

use serde::{Deserialize, Serialize};

use docshelf_core::error::AppError;
use docshelf_core::result::AppResult;

/// Raw archive-flag input as received at the interface boundary.
///
/// Accepts a JSON boolean plus the legacy integer encoding (`1`/`0`)
/// still emitted by older clients. Conversion to the canonical bool
/// happens here; the store only ever sees `bool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArchiveFlag {
    /// Canonical boolean encoding.
    Bool(bool),
    /// Legacy numeric encoding: 1 = archived, 0 = active.
    Legacy(i64),
}

impl ArchiveFlag {
    /// Converts the raw input into the canonical boolean.
    pub fn into_bool(self) -> AppResult<bool> {
        match self {
            Self::Bool(value) => Ok(value),
            Self::Legacy(0) => Ok(false),
            Self::Legacy(1) => Ok(true),
            Self::Legacy(other) => Err(AppError::invalid_argument(format!(
                "Invalid archive flag '{other}': expected true, false, 0 or 1"
            ))),
        }
    }
}

impl From<bool> for ArchiveFlag {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
