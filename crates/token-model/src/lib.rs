//! Token tree model, traversal, and mode resolution for Token Manager
//!
//! This crate defines the normalized token data model shared by every other
//! layer:
//!
//! - **Tagged tree**: [`TokenNode`] is either a group of named children or a
//!   [`TokenLeaf`]; classification happens once, at parse time.
//! - **Document form**: [`TokenNode::from_document`] /
//!   [`TokenNode::to_document`] convert between the tagged model and the
//!   W3C Design Token Format Module JSON shape (`$`-sigil metadata keys).
//! - **Walker**: [`walk`] yields every `(path, leaf)` pair in depth-first
//!   pre-order.
//! - **Mode resolution**: [`resolve_for_mode`] resolves a leaf's value for a
//!   display mode with total fallback to the default mode.
//! - **Canonical serialization**: [`canonical_string`] produces the
//!   sorted-key form the merge engine compares.
//!
//! Everything here is pure and synchronous; orchestration and I/O live in
//! `token-core`.

pub mod canonical;
pub mod error;
pub mod mode;
pub mod node;
pub mod path;
pub mod walk;

pub use canonical::{canonical_string, canonicalize};
pub use error::{Error, Result};
pub use mode::{ModeSet, resolve_for_mode};
pub use node::{
    DESCRIPTION_KEY, METADATA_SIGIL, MODES_KEY, TYPE_KEY, TokenLeaf, TokenNode, VALUE_KEY,
};
pub use path::{SEPARATOR, TokenPath};
pub use walk::{TokenWalker, walk};
