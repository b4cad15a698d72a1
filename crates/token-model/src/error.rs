//! Error types for token-model

/// Result type for token-model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in token-model operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A node that is neither a valid group nor a valid leaf
    #[error("Malformed token node at '{path}': {reason}")]
    MalformedNode { path: String, reason: String },

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn malformed(path: impl ToString, reason: impl Into<String>) -> Self {
        Self::MalformedNode {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}
