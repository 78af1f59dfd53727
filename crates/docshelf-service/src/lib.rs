//! # docshelf-service
//!
//! Domain orchestration for Docshelf. Services validate input, translate
//! domain rules into [`docshelf_store::HierarchyStore`] calls, and map
//! store errors to externally meaningful kinds. They hold no state of
//! their own.
//!
//! Folder and document names each live in a single global namespace —
//! document uniqueness is deliberately not scoped per folder.

pub mod archive;
pub mod document;
pub mod folder;
pub mod query;

pub use archive::ArchiveFlag;
