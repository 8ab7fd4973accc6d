//! Error types for the Lexstore library.
//!
//! All errors are represented by the [`LexstoreError`] enum. Each variant maps
//! to one outcome of the request/response contract: invalid input, duplicate
//! content, missing records, malformed filters, or contradictory filters.
//! These are deterministic validation outcomes, never transient faults, so
//! nothing is retried internally.
//!
//! # Examples
//!
//! ```
//! use lexstore::error::{LexstoreError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexstoreError::invalid_input("value must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Lexstore operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for the common variants.
#[derive(Error, Debug)]
pub enum LexstoreError {
    /// Missing, empty, or otherwise unusable input value.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A record with the same content hash already exists.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Lookup or delete miss.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed structured filter parameter.
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// Semantically contradictory filter combination.
    #[error("Conflicting filters: {0}")]
    ConflictingFilters(String),

    /// I/O errors (snapshot file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexstoreError.
pub type Result<T> = std::result::Result<T, LexstoreError>;

impl LexstoreError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        LexstoreError::InvalidInput(msg.into())
    }

    /// Create a new conflict error.
    pub fn conflict<S: Into<String>>(msg: S) -> Self {
        LexstoreError::Conflict(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        LexstoreError::NotFound(msg.into())
    }

    /// Create a new invalid filter error.
    pub fn invalid_filter<S: Into<String>>(msg: S) -> Self {
        LexstoreError::InvalidFilter(msg.into())
    }

    /// Create a new conflicting filters error.
    pub fn conflicting_filters<S: Into<String>>(msg: S) -> Self {
        LexstoreError::ConflictingFilters(msg.into())
    }
}
