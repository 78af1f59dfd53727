//! Folder orchestration.

pub mod service;

pub use service::FolderService;
