//! Synchronization pipeline and plugin orchestration for Token Manager
//!
//! This crate coordinates the pure layers below it, implementing:
//!
//! - **TokenManager**: load snapshot → fetch remote → three-way merge →
//!   normalized tree → output plugins → snapshot policy
//! - **Collaborator seams**: [`RemoteTokenSource`] and [`SnapshotStore`]
//!   traits with in-memory and filesystem implementations
//! - **Plugin pipeline**: [`OutputPlugin`] implementations registered in an
//!   explicit ordered [`PluginRegistry`]
//! - **Diagnostics**: a run-scoped [`Diagnostics`] context instead of any
//!   process-wide debug state
//!
//! # Architecture
//!
//! `token-core` sits above the pure crates and below the embedding host:
//!
//! ```text
//!        host (plugin UI / CLI / service)
//!                     |
//!                token-core
//!                     |
//!          +----------+----------+
//!          |                     |
//!     token-merge          token-model
//! ```
//!
//! The host supplies the locally-edited document and owns conflict
//! resolution; a resolved conflict simply re-enters as part of the next
//! run's local input.

pub mod diagnostics;
pub mod error;
pub mod logging;
pub mod manager;
pub mod normalized;
pub mod plugin;
pub mod sources;

pub use diagnostics::{DiagnosticEvent, DiagnosticLevel, Diagnostics};
pub use error::{Error, Result};
pub use manager::{ConflictPolicy, SyncOptions, SyncOutcome, SyncReport, TokenManager};
pub use normalized::NormalizedTokens;
pub use plugin::{OutputFile, OutputPlugin, PluginRegistry};
pub use sources::{
    FsSnapshotStore, MemoryRemoteSource, MemorySnapshotStore, RemoteTokenSource, SnapshotStore,
};
