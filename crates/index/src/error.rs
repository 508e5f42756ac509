//! Error types for search index preparation.
//!
//! The tagging and encoding components themselves are total over
//! well-formed input; errors arise only at the persistence boundary,
//! where the collaborator embedding sort documents can fail.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// Result alias for index preparation operations.
pub type IndexResult<T> = Result<T, IndexError>;

/// The primary error type for index preparation operations.
#[derive(Error, Debug)]
pub enum IndexError {
    /// The persistence collaborator failed to store or remove a sort document.
    #[error("index backend error for {resource_type}/{resource_id}: {message}")]
    Backend {
        resource_type: String,
        resource_id: String,
        message: String,
    },

    /// A sort document was rejected by the persistence collaborator.
    #[error("invalid sort document for {resource_type}/{resource_id}: {message}")]
    InvalidDocument {
        resource_type: String,
        resource_id: String,
        message: String,
    },
}
