//! End-to-end synchronization flow
//!
//! Exercises the complete pipeline: snapshot load -> remote fetch -> merge
//! -> normalized tree -> output generators -> snapshot policy, across
//! several sync rounds including conflict resolution.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use token_core::{
    FsSnapshotStore, MemoryRemoteSource, MemorySnapshotStore, PluginRegistry, SnapshotStore,
    TokenManager,
};
use token_model::ModeSet;
use token_outputs::{CssVariablesPlugin, SwiftTokensPlugin, TailwindThemePlugin};

fn remote_v1() -> Value {
    json!({
        "color": {
            "background": {
                "$type": "color",
                "$value": "#ffffff",
                "$modes": {"dark": "#10141a"}
            },
            "accent": {"$type": "color", "$value": "#336699"}
        },
        "spacing": {
            "md": {"$type": "dimension", "$value": "16px"}
        }
    })
}

fn default_plugins() -> PluginRegistry {
    PluginRegistry::new()
        .with_plugin(Box::new(CssVariablesPlugin::new()))
        .with_plugin(Box::new(TailwindThemePlugin::new()))
        .with_plugin(Box::new(SwiftTokensPlugin::new()))
}

fn manager(store: Arc<MemorySnapshotStore>, remote: Value) -> TokenManager {
    TokenManager::new(
        Box::new(MemoryRemoteSource::new(remote)),
        Box::new(store),
        ModeSet::new("light").with_required("dark"),
    )
    .with_plugins(default_plugins())
}

#[tokio::test]
async fn initial_sync_generates_all_artifacts() {
    let store = Arc::new(MemorySnapshotStore::new());
    let manager = manager(store.clone(), remote_v1());

    let outcome = manager.sync(&json!({})).await.unwrap();

    assert!(outcome.report.success);
    assert!(outcome.conflicts.is_empty());
    assert!(outcome.snapshot_written);
    assert_eq!(store.load().await.unwrap(), Some(remote_v1()));

    // one artifact per generator, in registration order
    let paths: Vec<&str> = outcome.outputs.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(
        paths,
        vec!["tokens.css", "tokens.tailwind.json", "DesignTokens.swift"]
    );

    let css = &outcome.outputs[0].content;
    assert!(css.contains("--color-background: #ffffff;"));
    assert!(css.contains("[data-theme=\"dark\"]"));
    assert!(css.contains("--color-background: #10141a;"));

    let swift = &outcome.outputs[2].content;
    assert!(swift.contains("public static let spacingMd = \"16px\""));
}

#[tokio::test]
async fn second_round_merges_local_and_remote_edits() {
    // Round 1 established the baseline
    let store = Arc::new(MemorySnapshotStore::seeded(remote_v1()));

    // Designer edited the accent locally; upstream bumped spacing
    let local = json!({
        "color": {
            "background": {
                "$type": "color",
                "$value": "#ffffff",
                "$modes": {"dark": "#10141a"}
            },
            "accent": {"$type": "color", "$value": "#2255aa"}
        },
        "spacing": {
            "md": {"$type": "dimension", "$value": "16px"}
        }
    });
    let remote = json!({
        "color": {
            "background": {
                "$type": "color",
                "$value": "#ffffff",
                "$modes": {"dark": "#10141a"}
            },
            "accent": {"$type": "color", "$value": "#336699"}
        },
        "spacing": {
            "md": {"$type": "dimension", "$value": "20px"}
        }
    });

    let manager = manager(store.clone(), remote);
    let outcome = manager.sync(&local).await.unwrap();

    assert!(outcome.conflicts.is_empty());
    assert!(outcome.snapshot_written);

    let snapshot = store.load().await.unwrap().unwrap();
    assert_eq!(
        snapshot["color"]["accent"]["$value"],
        json!("#2255aa"),
        "local accent edit survives"
    );
    assert_eq!(
        snapshot["spacing"]["md"]["$value"],
        json!("20px"),
        "remote spacing bump survives"
    );
}

#[tokio::test]
async fn conflicting_round_reports_and_blocks_until_resolved() {
    let store = Arc::new(MemorySnapshotStore::seeded(remote_v1()));

    let mut local = remote_v1();
    local["color"]["accent"]["$value"] = json!("#2255aa");
    let mut remote = remote_v1();
    remote["color"]["accent"]["$value"] = json!("#447788");

    let manager_run = manager(store.clone(), remote.clone());
    let outcome = manager_run.sync(&local).await.unwrap();

    assert_eq!(outcome.conflicts.len(), 1);
    assert_eq!(outcome.conflicts[0].path.to_string(), "color/accent");
    assert!(!outcome.snapshot_written);
    assert_eq!(store.load().await.unwrap(), Some(remote_v1()));

    // The host resolves by taking remote's value: the resolution re-enters
    // as the next run's local input and the merge is now clean.
    let mut resolved_local = local.clone();
    resolved_local["color"]["accent"]["$value"] = json!("#447788");

    let second = manager(store.clone(), remote).sync(&resolved_local).await.unwrap();
    assert!(second.conflicts.is_empty());
    assert!(second.snapshot_written);
    let snapshot = store.load().await.unwrap().unwrap();
    assert_eq!(snapshot["color"]["accent"]["$value"], json!("#447788"));
}

#[tokio::test]
async fn deleted_remote_token_disappears_from_artifacts() {
    let store = Arc::new(MemorySnapshotStore::seeded(remote_v1()));

    // Upstream removed the spacing group; local is untouched
    let mut remote = remote_v1();
    remote.as_object_mut().unwrap().remove("spacing");

    let manager = manager(store.clone(), remote.clone());
    let outcome = manager.sync(&remote_v1()).await.unwrap();

    assert!(outcome.conflicts.is_empty());
    assert_eq!(store.load().await.unwrap(), Some(remote));
    let css = &outcome.outputs[0].content;
    assert!(!css.contains("--spacing-md"));
}

#[tokio::test]
async fn filesystem_store_persists_between_managers() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot_path = dir.path().join("state").join("tokens.json");

    {
        let manager = TokenManager::new(
            Box::new(MemoryRemoteSource::new(remote_v1())),
            Box::new(FsSnapshotStore::new(&snapshot_path)),
            ModeSet::new("light").with_required("dark"),
        );
        let outcome = manager.sync(&json!({})).await.unwrap();
        assert!(outcome.snapshot_written);
    }

    // A fresh manager over the same path sees the previous baseline
    let store = FsSnapshotStore::new(&snapshot_path);
    assert_eq!(store.load().await.unwrap(), Some(remote_v1()));
}

fn fixture(name: &str) -> Value {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/tokens")
        .join(name);
    let content = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[tokio::test]
async fn fixture_round_mixes_auto_merges_and_one_conflict() {
    let store = Arc::new(MemorySnapshotStore::seeded(fixture("base.json")));
    let manager = manager(store.clone(), fixture("remote.json"));

    let outcome = manager.sync(&fixture("local.json")).await.unwrap();

    // Only the accent was edited on both sides in different directions
    assert_eq!(outcome.conflicts.len(), 1);
    assert_eq!(outcome.conflicts[0].path.to_string(), "color/accent");
    assert!(!outcome.snapshot_written);

    let merged = outcome.tokens.to_document();
    assert_eq!(
        merged["color"]["danger"]["$value"],
        json!("#bb3344"),
        "remote addition adopted"
    );
    assert_eq!(
        merged["spacing"]["md"]["$value"],
        json!("20px"),
        "remote spacing bump adopted"
    );
    assert_eq!(
        merged["radius"]["pill"]["$value"],
        json!("999px"),
        "local radius group adopted"
    );
    assert!(
        merged["color"].get("accent").is_none(),
        "conflicted token excluded from auto-merge"
    );

    // Generators still ran over the auto-merged tree
    let css = &outcome.outputs[0].content;
    assert!(css.contains("--color-danger: #bb3344;"));
    assert!(!css.contains("--color-accent"));
}

#[tokio::test]
async fn fingerprint_is_stable_across_equivalent_runs() {
    let store_a = Arc::new(MemorySnapshotStore::new());
    let store_b = Arc::new(MemorySnapshotStore::new());

    let first = manager(store_a, remote_v1()).sync(&json!({})).await.unwrap();
    let second = manager(store_b, remote_v1()).sync(&json!({})).await.unwrap();

    assert_eq!(first.fingerprint, second.fingerprint);
    assert_eq!(first.outputs, second.outputs);
}
