//! Unified application error types for Docshelf.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Input validation failed (empty name, malformed archive flag, etc.).
    InvalidArgument,
    /// A create collided with an existing name (case-insensitive).
    DuplicateName,
    /// The referenced folder does not exist.
    FolderNotFound,
    /// The referenced document does not exist.
    DocumentNotFound,
    /// An internal error occurred or an invariant was violated.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "INVALID_ARGUMENT"),
            Self::DuplicateName => write!(f, "DUPLICATE_NAME"),
            Self::FolderNotFound => write!(f, "FOLDER_NOT_FOUND"),
            Self::DocumentNotFound => write!(f, "DOCUMENT_NOT_FOUND"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout Docshelf.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. This provides a single error type for
/// the entire application boundary.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// Create a duplicate-name error.
    pub fn duplicate_name(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateName, message)
    }

    /// Create a folder-not-found error.
    pub fn folder_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::FolderNotFound, message)
    }

    /// Create a document-not-found error.
    pub fn document_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DocumentNotFound, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Internal,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Internal,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
