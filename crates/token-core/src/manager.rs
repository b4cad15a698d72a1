//! TokenManager implementation
//!
//! The TokenManager coordinates one synchronization run: load the base
//! snapshot, fetch the remote document, merge against the local edits, and
//! hand the normalized result to the registered output plugins.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use token_merge::{Conflict, merge};
use token_model::{ModeSet, TokenNode};

use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::normalized::NormalizedTokens;
use crate::plugin::{OutputFile, PluginRegistry};
use crate::sources::{RemoteTokenSource, SnapshotStore};

/// Report from a synchronization run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncReport {
    /// Whether the run completed without errors
    pub success: bool,
    /// Actions taken during the run
    pub actions: Vec<String>,
    /// Errors encountered during the run
    pub errors: Vec<String>,
}

impl SyncReport {
    /// Create a successful sync report
    pub fn success() -> Self {
        Self {
            success: true,
            actions: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Add an action to the report
    pub fn with_action(mut self, action: String) -> Self {
        self.actions.push(action);
        self
    }
}

/// What to do with the snapshot when conflicts remain unresolved.
///
/// The merge core only reports conflicts; whether they block persisting the
/// new baseline is decided here, at the pipeline layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictPolicy {
    /// Keep the previous snapshot until every conflict is resolved
    #[default]
    BlockSnapshot,
    /// Persist the auto-merged tree; conflicted paths stay at their old
    /// baseline until resolved
    WriteAutoMerged,
}

/// Options for a synchronization run
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// If true, simulate the run without persisting the snapshot.
    /// Actions will be prefixed with "[dry-run] Would ..."
    pub dry_run: bool,
    /// Snapshot policy when conflicts remain
    pub policy: ConflictPolicy,
}

/// Everything one synchronization run produced
#[derive(Debug)]
pub struct SyncOutcome {
    /// Actions and errors of the run
    pub report: SyncReport,
    /// Paths needing external resolution, in deterministic order
    pub conflicts: Vec<Conflict>,
    /// Artifacts produced by the output plugins, in plugin run order
    pub outputs: Vec<OutputFile>,
    /// The normalized tree the plugins consumed
    pub tokens: NormalizedTokens,
    /// Whether a new snapshot was persisted
    pub snapshot_written: bool,
    /// SHA-256 fingerprint of the normalized tree
    pub fingerprint: String,
    /// Run-scoped diagnostics
    pub diagnostics: Diagnostics,
}

/// Orchestrates snapshot, remote, merge, and output plugins.
///
/// Stages run strictly in sequence (fetch before merge, merge before
/// plugin invocation) because each stage's output is the next stage's
/// input. The tree handed to plugins is never mutated after the merge.
pub struct TokenManager {
    remote: Box<dyn RemoteTokenSource>,
    store: Box<dyn SnapshotStore>,
    plugins: PluginRegistry,
    modes: ModeSet,
}

impl TokenManager {
    /// Create a manager with no output plugins
    pub fn new(
        remote: Box<dyn RemoteTokenSource>,
        store: Box<dyn SnapshotStore>,
        modes: ModeSet,
    ) -> Self {
        Self {
            remote,
            store,
            plugins: PluginRegistry::new(),
            modes,
        }
    }

    /// Replace the plugin list
    pub fn with_plugins(mut self, plugins: PluginRegistry) -> Self {
        self.plugins = plugins;
        self
    }

    /// The configured mode axis
    pub fn modes(&self) -> &ModeSet {
        &self.modes
    }

    /// Run one synchronization with default options
    pub async fn sync(&self, local: &Value) -> Result<SyncOutcome> {
        self.sync_with_options(local, SyncOptions::default()).await
    }

    /// Run one synchronization.
    ///
    /// `local` is the current locally-edited token document. Conflicts are
    /// returned, never raised; resolving one means feeding the chosen value
    /// back as part of the next run's `local`.
    ///
    /// # Errors
    ///
    /// Fails on collaborator errors (remote fetch, snapshot I/O) and on
    /// malformed token documents. Plugin failures do not abort the run;
    /// they are collected into the report.
    pub async fn sync_with_options(
        &self,
        local: &Value,
        options: SyncOptions,
    ) -> Result<SyncOutcome> {
        let mut diagnostics = Diagnostics::new();
        let mut report = SyncReport::success();
        tracing::debug!(run_id = %diagnostics.run_id, "Starting token synchronization");

        let base_doc = self
            .store
            .load()
            .await?
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()));
        let remote_doc = self.remote.fetch().await?;

        let base = TokenNode::from_document(&base_doc)?;
        let local_tree = TokenNode::from_document(local)?;
        let remote_tree = TokenNode::from_document(&remote_doc)?;
        diagnostics.info(format!(
            "Loaded trees: base {} / local {} / remote {} tokens",
            base.token_count(),
            local_tree.token_count(),
            remote_tree.token_count()
        ));

        let merged = merge(&base, &local_tree, &remote_tree)?;
        if merged.has_conflicts() {
            tracing::debug!(conflicts = merged.conflicts.len(), "Merge left conflicts");
            diagnostics.warn(format!(
                "{} path(s) need manual resolution",
                merged.conflicts.len()
            ));
        }
        let tokens = NormalizedTokens::new(merged.merged_tree(), self.modes.clone());
        let fingerprint = tokens.fingerprint()?;
        report = report.with_action(format!(
            "Merged base/local/remote: {} auto-merged token(s), {} conflict(s)",
            tokens.token_count(),
            merged.conflicts.len()
        ));

        let mut outputs = Vec::new();
        for plugin in self.plugins.iter() {
            match plugin.build(&tokens) {
                Ok(files) => {
                    report = report.with_action(format!(
                        "Generated {} file(s) via '{}'",
                        files.len(),
                        plugin.id()
                    ));
                    outputs.extend(files);
                }
                Err(e) => {
                    tracing::warn!(plugin = plugin.id(), "Output plugin failed: {}", e);
                    diagnostics.warn(format!("Plugin '{}' failed: {}", plugin.id(), e));
                    report
                        .errors
                        .push(format!("Plugin '{}' failed: {}", plugin.id(), e));
                }
            }
        }

        let blocked =
            merged.has_conflicts() && options.policy == ConflictPolicy::BlockSnapshot;
        let mut snapshot_written = false;
        if blocked {
            report = report.with_action(format!(
                "Snapshot left unchanged: {} unresolved conflict(s)",
                merged.conflicts.len()
            ));
        } else if options.dry_run {
            report = report.with_action("[dry-run] Would write snapshot".to_string());
        } else {
            self.store.store(&tokens.to_document()).await?;
            snapshot_written = true;
            report = report.with_action("Wrote snapshot".to_string());
        }

        report.success = report.errors.is_empty();
        diagnostics.info(format!("Run finished, fingerprint {}", fingerprint));

        Ok(SyncOutcome {
            report,
            conflicts: merged.conflicts,
            outputs,
            tokens,
            snapshot_written,
            fingerprint,
            diagnostics,
        })
    }
}
