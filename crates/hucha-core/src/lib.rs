//! Hucha Core Library
//!
//! Shared functionality for the Hucha household companion:
//! - Domain models for the finance and life state snapshot
//! - Merchant keyword classifier for transaction categorization
//! - Rule evaluation engine producing deduplicatable notifications
//! - Notification store with read/dismiss lifecycle
//! - Local JSON persistence for the notification collection
//! - Message localization with locale fallback

pub mod classify;
pub mod config;
pub mod error;
pub mod i18n;
pub mod models;
pub mod notifications;
pub mod persist;
pub mod rules;
pub mod store;

pub use classify::{Classification, MerchantClassifier, MerchantEntry};
pub use config::RuleConfig;
pub use error::{Error, Result};
pub use i18n::Language;
pub use models::{
    Budget, BudgetKind, BudgetPeriod, Currency, Debt, FinanceState, Goal, LifeState, PantryItem,
    ShoppingItem, Snapshot, Transaction, TransactionKind, Trip,
};
pub use notifications::{
    notification_id, ActionTarget, Notification, NotificationCategory, NotificationModule,
    NotificationType,
};
pub use persist::NotificationFile;
pub use rules::{EvalContext, Rule, RuleEngine};
pub use store::NotificationStore;
