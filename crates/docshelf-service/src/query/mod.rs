//! Read-only query facade.

pub mod facade;

pub use facade::QueryFacade;
