//! Three-way token tree merge engine for Token Manager
//!
//! Reconciles the last-synchronized snapshot (base) with a locally edited
//! tree and a freshly fetched remote tree, classifying every change as
//! auto-mergeable or conflicting:
//!
//! ```
//! use serde_json::json;
//! use token_merge::merge_documents;
//!
//! let base = json!({"color": {"$type": "color", "$value": "#111"}});
//! let local = json!({"color": {"$type": "color", "$value": "#222"}});
//! let remote = json!({"color": {"$type": "color", "$value": "#111"}});
//!
//! // Only local moved, so the edit merges without human input.
//! let result = merge_documents(&base, &local, &remote).unwrap();
//! assert!(result.conflicts.is_empty());
//! assert_eq!(result.merged_tree().to_document(), local);
//! ```
//!
//! The engine is pure and synchronous; it never resolves conflicts, only
//! reports them. See [`merge`] for the classification rules.

pub mod error;
pub mod merge;

pub use error::{Error, Result};
pub use merge::{Conflict, MergeResult, merge, merge_documents};
