//! Local persistence for the notification collection
//!
//! Notifications are kept as a single JSON document under a fixed namespace
//! in the platform data directory. Writes go through a temp file in the same
//! directory and a rename, so a crash mid-save never corrupts the stored
//! collection. A missing file loads as an empty store.

use std::fs::{self, File};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};
use crate::notifications::Notification;
use crate::store::NotificationStore;

/// File name inside the hucha data directory
const STORE_FILE: &str = "notifications.json";

/// JSON-backed storage for a notification store
pub struct NotificationFile {
    path: PathBuf,
}

impl NotificationFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store file under the platform data directory
    /// (`~/.local/share/hucha/notifications.json` on Linux)
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hucha")
            .join(STORE_FILE)
    }

    pub fn at_default() -> Self {
        Self::new(Self::default_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted collection; a missing file is an empty store
    pub fn load(&self) -> Result<NotificationStore> {
        if !self.path.exists() {
            return Ok(NotificationStore::new());
        }

        let file = File::open(&self.path)?;
        let records: Vec<Notification> = serde_json::from_reader(BufReader::new(file))?;
        Ok(NotificationStore::from_notifications(records))
    }

    /// Atomically write the collection back to disk
    pub fn save(&self, store: &NotificationStore) -> Result<()> {
        let dir = self
            .path
            .parent()
            .ok_or_else(|| Error::Store(format!("No parent directory for {}", self.path.display())))?;
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, store.notifications())?;
        tmp.flush()?;
        tmp.persist(&self.path)
            .map_err(|e| Error::Store(format!("Failed to persist store: {}", e)))?;

        info!(
            path = %self.path.display(),
            count = store.len(),
            "Saved notification store"
        );
        Ok(())
    }
}
