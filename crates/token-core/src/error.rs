//! Error types for token-core

/// Result type for token-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in token-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The remote token source failed to produce a document
    #[error("Remote source error: {message}")]
    RemoteSource { message: String },

    /// The snapshot store failed to load or persist a snapshot
    #[error("Snapshot store error: {message}")]
    SnapshotStore { message: String },

    /// An output plugin failed to build its artifacts
    #[error("Plugin '{plugin}' failed: {reason}")]
    PluginFailed { plugin: String, reason: String },

    /// Model error from token-model
    #[error(transparent)]
    Model(#[from] token_model::Error),

    /// Merge error from token-merge
    #[error(transparent)]
    Merge(#[from] token_merge::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn remote_source(message: impl Into<String>) -> Self {
        Self::RemoteSource {
            message: message.into(),
        }
    }

    pub fn snapshot_store(message: impl Into<String>) -> Self {
        Self::SnapshotStore {
            message: message.into(),
        }
    }

    pub fn plugin(plugin: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PluginFailed {
            plugin: plugin.into(),
            reason: reason.into(),
        }
    }
}
