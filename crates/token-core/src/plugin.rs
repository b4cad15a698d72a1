//! Output plugin interface and registry
//!
//! Output generators implement one capability interface and are registered
//! in an explicit ordered list handed to the pipeline at construction.
//! Plugins receive the immutable normalized tree and return artifacts; the
//! core never writes generated files.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::normalized::NormalizedTokens;

/// A generated artifact: where it should go and what it contains
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputFile {
    /// Output location, relative to the host's output root
    pub path: String,
    /// Full file content
    pub content: String,
}

impl OutputFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Capability interface for output generators
pub trait OutputPlugin: Send + Sync {
    /// Stable identifier, used in reports and diagnostics
    fn id(&self) -> &str;

    /// Render the normalized tree into output files
    fn build(&self, tokens: &NormalizedTokens) -> Result<Vec<OutputFile>>;
}

/// Explicit ordered list of output plugins.
///
/// Plugins run in registration order; the order is part of the pipeline
/// contract, so there is no keyed lookup or dynamic dispatch machinery
/// beyond the trait itself.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<Box<dyn OutputPlugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plugin to the run order
    pub fn register(&mut self, plugin: Box<dyn OutputPlugin>) {
        self.plugins.push(plugin);
    }

    /// Builder-style registration
    pub fn with_plugin(mut self, plugin: Box<dyn OutputPlugin>) -> Self {
        self.register(plugin);
        self
    }

    /// Plugin ids in run order
    pub fn ids(&self) -> Vec<&str> {
        self.plugins.iter().map(|p| p.id()).collect()
    }

    /// Iterate plugins in run order
    pub fn iter(&self) -> impl Iterator<Item = &dyn OutputPlugin> {
        self.plugins.iter().map(|plugin| &**plugin)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}
