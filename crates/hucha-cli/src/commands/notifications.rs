//! Notification store management commands

use std::path::Path;

use anyhow::{bail, Result};

use super::core::{open_store_file, print_notification};

pub fn cmd_notifications_list(store_path: Option<&Path>, all: bool) -> Result<()> {
    let store_file = open_store_file(store_path);
    let store = store_file.load()?;

    if all {
        println!("🔔 Notifications ({} total)", store.len());
        for notification in store.notifications() {
            print_notification(notification);
            if let Some(dismissed_at) = notification.dismissed_at {
                println!("        dismissed {}", dismissed_at.format("%Y-%m-%d %H:%M"));
            }
        }
    } else {
        let active = store.active_notifications();
        println!("🔔 Active notifications ({})", active.len());
        for notification in active {
            print_notification(notification);
        }
    }

    println!();
    println!("   Unread: {}", store.unread_count());
    Ok(())
}

pub fn cmd_notifications_read(store_path: Option<&Path>, id: &str) -> Result<()> {
    let store_file = open_store_file(store_path);
    let mut store = store_file.load()?;

    if !store.mark_as_read(id) {
        bail!("No notification with id {}", id);
    }
    store_file.save(&store)?;
    println!("✅ Marked {} as read", id);
    Ok(())
}

pub fn cmd_notifications_read_all(store_path: Option<&Path>) -> Result<()> {
    let store_file = open_store_file(store_path);
    let mut store = store_file.load()?;

    store.mark_all_as_read();
    store_file.save(&store)?;
    println!("✅ Marked all notifications as read");
    Ok(())
}

pub fn cmd_notifications_dismiss(store_path: Option<&Path>, id: &str) -> Result<()> {
    let store_file = open_store_file(store_path);
    let mut store = store_file.load()?;

    if !store.dismiss(id) {
        bail!("No notification with id {}", id);
    }
    store_file.save(&store)?;
    println!("✅ Dismissed {}", id);
    Ok(())
}

pub fn cmd_notifications_dismiss_all(store_path: Option<&Path>) -> Result<()> {
    let store_file = open_store_file(store_path);
    let mut store = store_file.load()?;

    store.dismiss_all();
    store_file.save(&store)?;
    println!("✅ Dismissed all active notifications");
    Ok(())
}

pub fn cmd_notifications_clear(store_path: Option<&Path>) -> Result<()> {
    let store_file = open_store_file(store_path);
    let mut store = store_file.load()?;

    let removed = store.clear_dismissed();
    store_file.save(&store)?;
    println!("🧹 Purged {} dismissed notification(s)", removed);
    Ok(())
}

pub fn cmd_notifications_count(store_path: Option<&Path>) -> Result<()> {
    let store_file = open_store_file(store_path);
    let store = store_file.load()?;

    println!("{}", store.unread_count());
    Ok(())
}
