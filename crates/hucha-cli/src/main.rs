//! Hucha CLI - Household budget notification companion
//!
//! Usage:
//!   hucha evaluate --state snapshot.json    Evaluate rules once
//!   hucha classify --description TEXT       Classify a merchant description
//!   hucha notifications                     List active notifications
//!   hucha watch --state snapshot.json       Re-evaluate on an interval

mod cli;
mod commands;
mod scheduler;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;
use hucha_core::RuleConfig;
use scheduler::{start_evaluation_scheduler, EvalScheduleConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Evaluate { state } => {
            commands::cmd_evaluate(&state, cli.store.as_deref(), cli.config.as_deref())
        }
        Commands::Classify { description, file } => match (description, file) {
            (Some(description), None) => commands::cmd_classify_description(&description),
            (None, Some(file)) => commands::cmd_classify_file(&file),
            _ => {
                anyhow::bail!("Provide exactly one of --description or --file")
            }
        },
        Commands::Notifications { action } => {
            let store = cli.store.as_deref();
            match action {
                None | Some(NotificationsAction::List { all: false }) => {
                    commands::cmd_notifications_list(store, false)
                }
                Some(NotificationsAction::List { all: true }) => {
                    commands::cmd_notifications_list(store, true)
                }
                Some(NotificationsAction::Read { id, all }) => match (id, all) {
                    (_, true) => commands::cmd_notifications_read_all(store),
                    (Some(id), false) => commands::cmd_notifications_read(store, &id),
                    (None, false) => anyhow::bail!("Provide a notification id or --all"),
                },
                Some(NotificationsAction::Dismiss { id, all }) => match (id, all) {
                    (_, true) => commands::cmd_notifications_dismiss_all(store),
                    (Some(id), false) => commands::cmd_notifications_dismiss(store, &id),
                    (None, false) => anyhow::bail!("Provide a notification id or --all"),
                },
                Some(NotificationsAction::Clear) => commands::cmd_notifications_clear(store),
                Some(NotificationsAction::Count) => commands::cmd_notifications_count(store),
            }
        }
        Commands::Watch { state, interval } => {
            let config = RuleConfig::load(cli.config.as_deref())?;
            let store_file = commands::open_store_file(cli.store.as_deref());

            let schedule = interval
                .map(|interval_secs| EvalScheduleConfig { interval_secs })
                .or_else(EvalScheduleConfig::from_env)
                .unwrap_or_default();

            println!(
                "👀 Watching {} every {} seconds (Ctrl-C to stop)",
                state.display(),
                schedule.interval_secs
            );

            let handle = start_evaluation_scheduler(state, store_file, config, schedule);
            tokio::signal::ctrl_c().await?;
            handle.stop().await;
            println!("Stopped.");
            Ok(())
        }
    }
}
