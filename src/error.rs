//! Error types for AtlasMap
//!
//! Provides a unified error type for both containers.

use thiserror::Error;

/// Result type alias using MapError
pub type Result<T> = std::result::Result<T, MapError>;

/// Unified error type for AtlasMap operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Key not found")]
    KeyNotFound,

    #[error("Tree is empty")]
    EmptyTree,

    // -------------------------------------------------------------------------
    // Insertion Errors
    // -------------------------------------------------------------------------
    #[error("Hash table is full (capacity {capacity})")]
    TableFull { capacity: usize },

    #[error("Key already present")]
    DuplicateKey,

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Invalid capacity: {0}")]
    InvalidCapacity(usize),

    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Structural Errors
    // -------------------------------------------------------------------------
    #[error("Corrupt structure: {0}")]
    CorruptStructure(String),
}
