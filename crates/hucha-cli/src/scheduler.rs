//! Background evaluation scheduler for the `watch` command
//!
//! Date-based conditions ("due today", "expires tomorrow") become true
//! without any state mutation, so the snapshot is re-evaluated on a fixed
//! interval. Configurable via environment:
//!
//! - `HUCHA_EVAL_INTERVAL`: interval in seconds (0 disables)
//!
//! The scheduler runs as a background task and is cancelable through its
//! handle — teardown leaves no dangling timers.

use std::path::PathBuf;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{error, info, warn};

use hucha_core::config::DEFAULT_EVAL_INTERVAL_SECS;
use hucha_core::{NotificationFile, RuleConfig};

use crate::commands::run_evaluation;

/// Configuration for scheduled evaluation
#[derive(Debug, Clone)]
pub struct EvalScheduleConfig {
    /// Seconds between evaluation passes
    pub interval_secs: u64,
}

impl Default for EvalScheduleConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_EVAL_INTERVAL_SECS,
        }
    }
}

impl EvalScheduleConfig {
    /// Parse configuration from environment variables
    ///
    /// Returns None if HUCHA_EVAL_INTERVAL is unset or unparsable.
    pub fn from_env() -> Option<Self> {
        let interval_secs: u64 = std::env::var("HUCHA_EVAL_INTERVAL")
            .ok()
            .and_then(|s| s.parse().ok())?;

        if interval_secs == 0 {
            warn!("HUCHA_EVAL_INTERVAL is 0, scheduled evaluation disabled");
            return None;
        }

        Some(Self { interval_secs })
    }
}

/// Handle to a running scheduler; dropping it does NOT stop the task,
/// call [`SchedulerHandle::stop`].
pub struct SchedulerHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl SchedulerHandle {
    /// Signal the scheduler to stop and wait for the task to finish
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
        info!("Evaluation scheduler stopped");
    }
}

/// Start the evaluation scheduler as a background task
///
/// The snapshot file is re-read on every pass so external state changes are
/// picked up. The first pass runs immediately.
pub fn start_evaluation_scheduler(
    state_path: PathBuf,
    store_file: NotificationFile,
    config: RuleConfig,
    schedule: EvalScheduleConfig,
) -> SchedulerHandle {
    info!(
        "Starting evaluation scheduler: every {} seconds",
        schedule.interval_secs
    );

    let (shutdown, mut shutdown_rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(schedule.interval_secs));

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match run_evaluation(&state_path, &store_file, &config) {
                        Ok((inserted, active)) => {
                            info!(inserted, active, "Scheduled evaluation complete");
                        }
                        Err(e) => {
                            error!("Scheduled evaluation failed: {:#}", e);
                        }
                    }
                }
                _ = shutdown_rx.changed() => {
                    break;
                }
            }
        }
    });

    SchedulerHandle { shutdown, task }
}
