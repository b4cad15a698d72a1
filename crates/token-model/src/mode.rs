//! Mode sets and per-mode value resolution

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::node::TokenLeaf;

/// The variant axis a token tree is resolved against.
///
/// Exactly one mode is the default; every other required mode must resolve
/// for every leaf, falling back to the default value when no override
/// exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeSet {
    /// The mode `leaf.value` represents
    pub default_mode: String,
    /// Additional modes that must be resolvable for every leaf
    pub required_modes: Vec<String>,
}

impl ModeSet {
    /// Create a mode set with the given default mode and no required modes
    pub fn new(default_mode: impl Into<String>) -> Self {
        Self {
            default_mode: default_mode.into(),
            required_modes: Vec::new(),
        }
    }

    /// Add a required mode
    pub fn with_required(mut self, mode: impl Into<String>) -> Self {
        self.required_modes.push(mode.into());
        self
    }

    /// Whether `mode` is the default mode
    pub fn is_default(&self, mode: &str) -> bool {
        self.default_mode == mode
    }

    /// All modes, default first
    pub fn all_modes(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.default_mode.as_str())
            .chain(self.required_modes.iter().map(String::as_str))
    }
}

impl Default for ModeSet {
    fn default() -> Self {
        Self::new("default")
    }
}

/// Resolve a leaf's value for the requested mode.
///
/// The default mode always resolves to `leaf.value` directly, without
/// consulting the overrides. Any other mode resolves to its override when
/// present and falls back to `leaf.value` otherwise, so resolution is total.
pub fn resolve_for_mode<'a>(leaf: &'a TokenLeaf, mode: &str, modes: &ModeSet) -> &'a Value {
    if modes.is_default(mode) {
        return &leaf.value;
    }
    leaf.mode_values.get(mode).unwrap_or(&leaf.value)
}
