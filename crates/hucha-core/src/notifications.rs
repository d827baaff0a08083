//! Notification records and deterministic id generation
//!
//! A notification's id is a stable function of the condition that produced
//! it, never of the wall clock. The store uses the id as its dedupe key, so
//! an unchanged condition evaluated again cannot insert a second copy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Urgency of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Info,
    Success,
    Warning,
    Danger,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    /// Numeric priority for sorting (higher = more urgent)
    pub fn priority(&self) -> u8 {
        match self {
            Self::Info => 1,
            Self::Success => 2,
            Self::Warning => 3,
            Self::Danger => 4,
        }
    }
}

impl std::str::FromStr for NotificationType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "success" => Ok(Self::Success),
            "warning" => Ok(Self::Warning),
            "danger" => Ok(Self::Danger),
            _ => Err(format!("Unknown notification type: {}", s)),
        }
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which application area a notification belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationModule {
    Finance,
    Life,
    System,
}

impl NotificationModule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Finance => "finance",
            Self::Life => "life",
            Self::System => "system",
        }
    }
}

impl std::str::FromStr for NotificationModule {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "finance" => Ok(Self::Finance),
            "life" => Ok(Self::Life),
            "system" => Ok(Self::System),
            _ => Err(format!("Unknown notification module: {}", s)),
        }
    }
}

impl std::fmt::Display for NotificationModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fine-grained notification category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    Budget,
    Goal,
    Debt,
    Pantry,
    Trip,
    Shopping,
    System,
}

impl NotificationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Goal => "goal",
            Self::Debt => "debt",
            Self::Pantry => "pantry",
            Self::Trip => "trip",
            Self::Shopping => "shopping",
            Self::System => "system",
        }
    }
}

impl std::str::FromStr for NotificationCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "budget" => Ok(Self::Budget),
            "goal" => Ok(Self::Goal),
            "debt" => Ok(Self::Debt),
            "pantry" => Ok(Self::Pantry),
            "trip" => Ok(Self::Trip),
            "shopping" => Ok(Self::Shopping),
            "system" => Ok(Self::System),
            _ => Err(format!("Unknown notification category: {}", s)),
        }
    }
}

impl std::fmt::Display for NotificationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where an action button should navigate inside the host application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionTarget {
    pub app: String,
    #[serde(default)]
    pub tab: Option<String>,
}

impl ActionTarget {
    pub fn new(app: impl Into<String>, tab: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            tab: Some(tab.into()),
        }
    }
}

/// A notification produced by the rule evaluator
///
/// The evaluator creates these and never touches them again; read/dismiss
/// mutations belong to the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationType,
    pub module: NotificationModule,
    pub category: NotificationCategory,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub action_label: Option<String>,
    #[serde(default)]
    pub action_target: Option<ActionTarget>,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub dismissed_at: Option<DateTime<Utc>>,
}

impl Notification {
    /// Create a notification with the current timestamp
    pub fn new(
        id: impl Into<String>,
        kind: NotificationType,
        module: NotificationModule,
        category: NotificationCategory,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            module,
            category,
            title: title.into(),
            message: message.into(),
            action_label: None,
            action_target: None,
            read: false,
            created_at: Utc::now(),
            dismissed_at: None,
        }
    }

    /// Attach a navigation action
    pub fn with_action(mut self, label: impl Into<String>, target: ActionTarget) -> Self {
        self.action_label = Some(label.into());
        self.action_target = Some(target);
        self
    }

    /// Active means not dismissed
    pub fn is_active(&self) -> bool {
        self.dismissed_at.is_none()
    }
}

/// Deterministic notification id from (rule kind, entity id, period bucket)
///
/// SHA-256 over the three parts, hex-encoded and truncated. The bucket is
/// included only for conditions that should re-trigger in a new period.
pub fn notification_id(rule_kind: &str, entity_id: &str, bucket: Option<&str>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(rule_kind.as_bytes());
    hasher.update(b"|");
    hasher.update(entity_id.as_bytes());
    if let Some(bucket) = bucket {
        hasher.update(b"|");
        hasher.update(bucket.as_bytes());
    }
    let digest = hasher.finalize();
    hex::encode(digest)[..16].to_string()
}
