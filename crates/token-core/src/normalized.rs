//! The normalized token tree handed to output plugins

use std::collections::BTreeMap;

use serde_json::Value;
use sha2::{Digest, Sha256};

use token_model::{ModeSet, TokenLeaf, TokenNode, TokenWalker, canonical_string, resolve_for_mode};

use crate::error::Result;

/// A fully merged token tree plus the mode axis it resolves against.
///
/// Instances are immutable once built; plugins only read, so any number of
/// them may consume the same tree independently.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTokens {
    root: TokenNode,
    modes: ModeSet,
}

impl NormalizedTokens {
    pub fn new(root: TokenNode, modes: ModeSet) -> Self {
        Self { root, modes }
    }

    pub fn root(&self) -> &TokenNode {
        &self.root
    }

    pub fn modes(&self) -> &ModeSet {
        &self.modes
    }

    /// Iterate every `(path, leaf)` pair in depth-first pre-order
    pub fn walk(&self) -> TokenWalker<'_> {
        self.root.walk()
    }

    /// Resolve a leaf's value for the given mode
    pub fn resolve<'a>(&self, leaf: &'a TokenLeaf, mode: &str) -> &'a Value {
        resolve_for_mode(leaf, mode, &self.modes)
    }

    /// Number of tokens in the tree
    pub fn token_count(&self) -> usize {
        self.root.token_count()
    }

    /// Flattened `path -> resolved value` map for one mode
    pub fn flatten_for_mode(&self, mode: &str) -> BTreeMap<String, Value> {
        self.walk()
            .map(|(path, leaf)| (path.to_string(), self.resolve(leaf, mode).clone()))
            .collect()
    }

    /// The tree in document form
    pub fn to_document(&self) -> Value {
        self.root.to_document()
    }

    /// Hex-encoded SHA-256 of the canonical document form.
    ///
    /// Stable across runs for the same tree content, independent of input
    /// key order.
    pub fn fingerprint(&self) -> Result<String> {
        let canonical = canonical_string(&self.to_document())?;
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        Ok(format!("{:x}", hasher.finalize()))
    }
}
