//! Error types for token-merge

/// Result type for token-merge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in token-merge operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A value that cannot be canonically serialized for comparison.
    /// The merge cannot proceed without a canonical form.
    #[error("Cannot canonicalize value at '{path}': {source}")]
    Canonicalize {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Model error from token-model
    #[error(transparent)]
    Model(#[from] token_model::Error),
}
