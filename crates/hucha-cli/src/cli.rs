//! CLI argument definitions using clap
//!
//! This module contains the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Hucha - Household budget and notification companion
#[derive(Parser)]
#[command(name = "hucha")]
#[command(about = "Rule-based notifications for household finance state", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the persisted notification store
    /// (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Rule threshold config file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate rules over a state snapshot and merge the results
    Evaluate {
        /// State snapshot file (JSON)
        #[arg(short, long)]
        state: PathBuf,
    },

    /// Classify transaction descriptions into categories
    Classify {
        /// A single description to classify
        #[arg(short, long)]
        description: Option<String>,

        /// CSV file with a description column to classify in batch
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Manage the notification store
    Notifications {
        #[command(subcommand)]
        action: Option<NotificationsAction>,
    },

    /// Re-evaluate the snapshot on a fixed interval
    Watch {
        /// State snapshot file (JSON), re-read every pass
        #[arg(short, long)]
        state: PathBuf,

        /// Seconds between passes (overrides HUCHA_EVAL_INTERVAL)
        #[arg(short, long)]
        interval: Option<u64>,
    },
}

#[derive(Subcommand)]
pub enum NotificationsAction {
    /// List notifications (active by default)
    List {
        /// Include dismissed notifications
        #[arg(long)]
        all: bool,
    },

    /// Mark a notification as read
    Read {
        /// Notification id, or --all
        id: Option<String>,

        /// Mark every notification as read
        #[arg(long)]
        all: bool,
    },

    /// Dismiss a notification
    Dismiss {
        /// Notification id, or --all
        id: Option<String>,

        /// Dismiss every active notification
        #[arg(long)]
        all: bool,
    },

    /// Purge dismissed notifications from the store
    Clear,

    /// Show the unread count
    Count,
}
