//! Three-way token tree merge
//!
//! Reconciles a base snapshot with independently edited local and remote
//! trees. Per key across the union of keys present on the three sides, a
//! node is either recursed into (a group on all three sides) or classified
//! against the canonical serializations of its three versions:
//!
//! 1. all three equal: unchanged, kept as-is
//! 2. base == remote, base != local: only local moved, local wins
//! 3. base == local, base != remote: only remote moved, remote wins
//! 4. local == remote, both != base: identical edits, free
//! 5. otherwise: a genuine conflict, surfaced and excluded from the
//!    auto-merged tree
//!
//! The sole mover wins automatically; only divergent simultaneous edits
//! need a human. An absent side participates as "undefined": undefined
//! equals undefined and differs from every defined value, so additions and
//! deletions fall out of the same five cases.
//!
//! The whole engine is a pure function of its inputs. Key-union iteration
//! follows first-seen order across base, then local, then remote, making
//! conflict ordering reproducible byte-for-byte.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use token_model::{TokenNode, TokenPath, canonical_string};

use crate::error::{Error, Result};

/// A path where local and remote diverged from base in different ways.
///
/// Values are in document form for the conflict-resolution surface; an
/// absent side is `None`. Resolution is not this crate's concern; the
/// chosen value re-enters as part of the next merge's local input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    /// Path of the contested node
    pub path: TokenPath,
    /// Base snapshot version, if present
    pub base: Option<Value>,
    /// Locally edited version, if present
    pub local: Option<Value>,
    /// Remote version, if present
    pub remote: Option<Value>,
}

/// Result of one merge run.
///
/// Every node reachable from the union of the three inputs is decided
/// exactly once: it lands in the auto-merged tree (possibly as a deletion,
/// i.e. absence) or in the conflict list, never both. A group whose
/// auto-merged subtree collapses to empty is omitted entirely, which at the
/// root makes the tree itself optional.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeResult {
    /// The tree of changes resolved without human input
    pub auto_merged: Option<TokenNode>,
    /// Paths needing external resolution, in deterministic visit order
    pub conflicts: Vec<Conflict>,
}

impl MergeResult {
    /// Whether any path needs external resolution
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// The auto-merged tree, with the empty case made explicit
    pub fn merged_tree(&self) -> TokenNode {
        self.auto_merged
            .clone()
            .unwrap_or_else(TokenNode::empty_group)
    }
}

/// Merge three token trees.
///
/// Pure and deterministic: identical inputs produce identical output,
/// including conflict ordering.
///
/// # Errors
///
/// Fails only when a node value cannot be canonically serialized for
/// comparison; conflicts are first-class output, never an error.
pub fn merge(base: &TokenNode, local: &TokenNode, remote: &TokenNode) -> Result<MergeResult> {
    let mut conflicts = Vec::new();
    let auto_merged = merge_nodes(
        Some(base),
        Some(local),
        Some(remote),
        &TokenPath::root(),
        &mut conflicts,
    )?;
    Ok(MergeResult {
        auto_merged,
        conflicts,
    })
}

/// Merge three document-form trees, parsing them first.
///
/// Metadata keys are stripped by the parse and therefore never compared.
///
/// # Errors
///
/// Fails when any of the three documents contains a malformed node, or on
/// canonicalization failure.
pub fn merge_documents(base: &Value, local: &Value, remote: &Value) -> Result<MergeResult> {
    let base = TokenNode::from_document(base)?;
    let local = TokenNode::from_document(local)?;
    let remote = TokenNode::from_document(remote)?;
    merge(&base, &local, &remote)
}

fn merge_nodes(
    base: Option<&TokenNode>,
    local: Option<&TokenNode>,
    remote: Option<&TokenNode>,
    path: &TokenPath,
    conflicts: &mut Vec<Conflict>,
) -> Result<Option<TokenNode>> {
    // Group recursion applies only when all three sides are groups at once;
    // any other shape goes through scalar classification.
    if let (
        Some(TokenNode::Group(base_children)),
        Some(TokenNode::Group(local_children)),
        Some(TokenNode::Group(remote_children)),
    ) = (base, local, remote)
    {
        return merge_groups(base_children, local_children, remote_children, path, conflicts);
    }
    classify(base, local, remote, path, conflicts)
}

fn merge_groups(
    base: &BTreeMap<String, TokenNode>,
    local: &BTreeMap<String, TokenNode>,
    remote: &BTreeMap<String, TokenNode>,
    path: &TokenPath,
    conflicts: &mut Vec<Conflict>,
) -> Result<Option<TokenNode>> {
    let mut merged = BTreeMap::new();
    for key in key_union(base, local, remote) {
        let child_path = path.child(key.clone());
        let child = merge_nodes(
            base.get(&key),
            local.get(&key),
            remote.get(&key),
            &child_path,
            conflicts,
        )?;
        if let Some(node) = child {
            merged.insert(key, node);
        }
    }
    if merged.is_empty() {
        Ok(None)
    } else {
        Ok(Some(TokenNode::Group(merged)))
    }
}

/// Union of keys in first-seen order across base, then local, then remote
fn key_union(
    base: &BTreeMap<String, TokenNode>,
    local: &BTreeMap<String, TokenNode>,
    remote: &BTreeMap<String, TokenNode>,
) -> Vec<String> {
    let mut keys = Vec::new();
    let mut seen = HashSet::new();
    for key in base.keys().chain(local.keys()).chain(remote.keys()) {
        if seen.insert(key.as_str()) {
            keys.push(key.clone());
        }
    }
    keys
}

/// Five-case classification over canonical serializations, strict priority
fn classify(
    base: Option<&TokenNode>,
    local: Option<&TokenNode>,
    remote: Option<&TokenNode>,
    path: &TokenPath,
    conflicts: &mut Vec<Conflict>,
) -> Result<Option<TokenNode>> {
    let base_canon = canonical_of(base, path)?;
    let local_canon = canonical_of(local, path)?;
    let remote_canon = canonical_of(remote, path)?;

    if base_canon == local_canon && base_canon == remote_canon {
        // unchanged on every side
        return Ok(base.cloned());
    }
    if base_canon == remote_canon {
        // only local moved
        return Ok(local.cloned());
    }
    if base_canon == local_canon {
        // only remote moved
        return Ok(remote.cloned());
    }
    if local_canon == remote_canon {
        // both moved to the same value
        return Ok(local.cloned());
    }

    conflicts.push(Conflict {
        path: path.clone(),
        base: base.map(TokenNode::to_document),
        local: local.map(TokenNode::to_document),
        remote: remote.map(TokenNode::to_document),
    });
    Ok(None)
}

/// Canonical serialization of an optional node; `None` stays `None` so
/// undefined compares equal only to undefined
fn canonical_of(node: Option<&TokenNode>, path: &TokenPath) -> Result<Option<String>> {
    match node {
        None => Ok(None),
        Some(node) => canonical_string(&node.to_document())
            .map(Some)
            .map_err(|source| Error::Canonicalize {
                path: path.to_string(),
                source,
            }),
    }
}
