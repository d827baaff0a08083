//! Command implementations for the Hucha CLI

mod classify;
mod core;
mod notifications;

pub use self::classify::{cmd_classify_description, cmd_classify_file};
pub use self::core::{cmd_evaluate, load_snapshot, open_store_file, run_evaluation};
pub use self::notifications::{
    cmd_notifications_clear, cmd_notifications_count, cmd_notifications_dismiss,
    cmd_notifications_dismiss_all, cmd_notifications_list, cmd_notifications_read,
    cmd_notifications_read_all,
};
