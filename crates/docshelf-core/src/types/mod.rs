//! Core type definitions used across the Docshelf workspace.

pub mod id;

pub use id::{DocumentId, FolderId};
