//! # docshelf-store
//!
//! Authoritative in-memory state for the folder/document hierarchy. The
//! [`HierarchyStore`] owns every primary map and secondary index and is
//! the only component in the workspace that mutates them.

pub mod hierarchy;

pub use hierarchy::HierarchyStore;
