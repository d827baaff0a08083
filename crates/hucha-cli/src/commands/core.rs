//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_store_file` / `load_snapshot` - shared plumbing for commands
//! - `run_evaluation` - one classify-free evaluation pass over a snapshot
//! - `cmd_evaluate` - the `hucha evaluate` command

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use hucha_core::{
    Notification, NotificationFile, NotificationType, RuleConfig, RuleEngine, Snapshot,
};

/// Resolve the persisted store location, defaulting to the data directory
pub fn open_store_file(store_path: Option<&Path>) -> NotificationFile {
    match store_path {
        Some(path) => NotificationFile::new(path),
        None => NotificationFile::at_default(),
    }
}

/// Read a state snapshot from a JSON file
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse snapshot {}", path.display()))
}

/// One evaluation pass: evaluate the snapshot, merge into the persisted
/// store, save. Returns (inserted, active) counts.
pub fn run_evaluation(
    state_path: &Path,
    store_file: &NotificationFile,
    config: &RuleConfig,
) -> Result<(usize, usize)> {
    let snapshot = load_snapshot(state_path)?;
    let engine = RuleEngine::new();
    let ctx_day = chrono::Local::now().date_naive();
    let candidates = engine.evaluate_snapshot(&snapshot, config, ctx_day);

    let mut store = store_file.load().context("Failed to load notification store")?;
    let inserted = store.add_notifications(candidates);
    store_file.save(&store).context("Failed to save notification store")?;

    Ok((inserted, store.active_notifications().len()))
}

pub fn cmd_evaluate(
    state_path: &Path,
    store_path: Option<&Path>,
    config_path: Option<&Path>,
) -> Result<()> {
    println!("🔔 Evaluating rules over {}...", state_path.display());

    let config = RuleConfig::load(config_path).context("Failed to load rule config")?;
    let store_file = open_store_file(store_path);
    let (inserted, active) = run_evaluation(state_path, &store_file, &config)?;

    println!("   New notifications: {}", inserted);
    println!("   Active notifications: {}", active);

    if inserted > 0 {
        println!();
        let store = store_file.load()?;
        for notification in store.active_notifications().iter().take(inserted) {
            print_notification(notification);
        }
        println!();
        println!("Run 'hucha notifications' to manage them.");
    } else {
        println!("✅ Nothing new.");
    }

    Ok(())
}

/// Single-line rendering shared by evaluate and list output
pub(crate) fn print_notification(notification: &Notification) {
    let icon = match notification.kind {
        NotificationType::Info => "ℹ️ ",
        NotificationType::Success => "✅",
        NotificationType::Warning => "⚠️ ",
        NotificationType::Danger => "🚨",
    };
    let read_marker = if notification.read { " " } else { "●" };
    println!(
        "   {} {} [{}] {} — {}",
        icon, read_marker, notification.id, notification.title, notification.message
    );
}
