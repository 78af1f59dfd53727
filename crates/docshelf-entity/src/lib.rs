//! # docshelf-entity
//!
//! Domain entity models for Docshelf. Every struct in this crate is a
//! plain value object owned by the hierarchy store. All entities derive
//! `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod document;
pub mod folder;
