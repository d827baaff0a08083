//! Integration tests for hucha-core
//!
//! These tests exercise the full classify → evaluate → store workflow.

use chrono::NaiveDate;

use hucha_core::{
    Budget, BudgetKind, BudgetPeriod, Goal, Language, MerchantClassifier, NotificationCategory,
    NotificationStore, NotificationType, RuleConfig, RuleEngine, Snapshot, Transaction,
    TransactionKind,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 8).unwrap()
}

fn food_budget(limit: f64) -> Budget {
    Budget {
        id: "b-food".into(),
        name: "Comida".into(),
        category: "Alimentación".into(),
        sub_category: None,
        limit,
        kind: BudgetKind::Fixed,
        period: BudgetPeriod::Monthly,
        active: true,
    }
}

fn expense(id: &str, day: u32, amount: f64, category: Option<&str>) -> Transaction {
    Transaction {
        id: id.into(),
        date: NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
        description: "PAGO EN MERCADONA MADRID".into(),
        amount,
        kind: TransactionKind::Expense,
        category: category.map(str::to_string),
        sub_category: None,
    }
}

/// Snapshot with a blown food budget: 520 spent against a 500 limit
fn overrun_snapshot() -> Snapshot {
    let mut snapshot = Snapshot::default();
    snapshot.finance.budgets.push(food_budget(500.0));
    snapshot
        .finance
        .transactions
        .push(expense("t1", 2, 300.0, Some("Alimentación")));
    snapshot
        .finance
        .transactions
        .push(expense("t2", 5, 220.0, Some("Alimentación")));
    snapshot
}

// =============================================================================
// Evaluate → store workflow
// =============================================================================

#[test]
fn test_evaluation_is_idempotent_through_the_store() {
    let engine = RuleEngine::new();
    let config = RuleConfig::default();
    let snapshot = overrun_snapshot();

    let first = engine.evaluate_snapshot(&snapshot, &config, today());
    let second = engine.evaluate_snapshot(&snapshot, &config, today());
    assert_eq!(first.len(), 1);

    let mut store = NotificationStore::new();
    store.add_notifications(first);
    let inserted_again = store.add_notifications(second);

    assert_eq!(inserted_again, 0);
    assert_eq!(store.active_notifications().len(), 1);
}

#[test]
fn test_overrun_id_survives_spend_changes() {
    let engine = RuleEngine::new();
    let config = RuleConfig::default();

    let snapshot = overrun_snapshot();
    let at_520 = engine.evaluate_snapshot(&snapshot, &config, today());

    // Still over the limit, different total
    let mut snapshot = Snapshot::default();
    snapshot.finance.budgets.push(food_budget(500.0));
    snapshot
        .finance
        .transactions
        .push(expense("t9", 3, 510.0, Some("Alimentación")));
    let at_510 = engine.evaluate_snapshot(&snapshot, &config, today());

    assert_eq!(at_520[0].kind, NotificationType::Danger);
    assert_eq!(at_520[0].category, NotificationCategory::Budget);
    assert_eq!(at_520[0].id, at_510[0].id);
}

#[test]
fn test_dismissed_condition_stays_dismissed_across_passes() {
    let engine = RuleEngine::new();
    let config = RuleConfig::default();
    let snapshot = overrun_snapshot();

    let mut store = NotificationStore::new();
    store.add_notifications(engine.evaluate_snapshot(&snapshot, &config, today()));

    let id = store.active_notifications()[0].id.clone();
    store.dismiss(&id);
    assert!(store.active_notifications().is_empty());

    // The condition is still true next cycle; dedupe keeps it silent
    store.add_notifications(engine.evaluate_snapshot(&snapshot, &config, today()));
    assert!(store.active_notifications().is_empty());
    assert_eq!(store.unread_count(), 0);

    // Only an explicit purge releases the id for a future re-trigger
    assert_eq!(store.clear_dismissed(), 1);
    store.add_notifications(engine.evaluate_snapshot(&snapshot, &config, today()));
    assert_eq!(store.active_notifications().len(), 1);
}

#[test]
fn test_goal_success_fires_exactly_once() {
    let engine = RuleEngine::new();
    let config = RuleConfig::default();

    let mut snapshot = Snapshot::default();
    snapshot.finance.goals.push(Goal {
        id: "g-sofa".into(),
        name: "Sofá nuevo".into(),
        target_amount: 800.0,
        current_amount: 820.0,
        deadline: None,
    });

    let mut store = NotificationStore::new();
    store.add_notifications(engine.evaluate_snapshot(&snapshot, &config, today()));
    assert_eq!(store.active_notifications().len(), 1);
    assert_eq!(store.active_notifications()[0].kind, NotificationType::Success);

    // Condition already fired; later passes must not duplicate it
    snapshot.finance.goals[0].current_amount = 900.0;
    store.add_notifications(engine.evaluate_snapshot(&snapshot, &config, today()));
    assert_eq!(store.active_notifications().len(), 1);
}

#[test]
fn test_new_month_retriggers_dismissed_budget() {
    let engine = RuleEngine::new();
    let config = RuleConfig::default();
    let mut store = NotificationStore::new();

    store.add_notifications(engine.evaluate_snapshot(&overrun_snapshot(), &config, today()));
    let august_id = store.active_notifications()[0].id.clone();
    store.dismiss(&august_id);
    store.clear_dismissed();

    // September: same budget blown again in the new period bucket
    let mut snapshot = Snapshot::default();
    snapshot.finance.budgets.push(food_budget(500.0));
    snapshot.finance.transactions.push(Transaction {
        id: "t-sep".into(),
        date: NaiveDate::from_ymd_opt(2026, 9, 3).unwrap(),
        description: "CARREFOUR".into(),
        amount: 530.0,
        kind: TransactionKind::Expense,
        category: Some("Alimentación".into()),
        sub_category: None,
    });
    let september_day = NaiveDate::from_ymd_opt(2026, 9, 5).unwrap();
    store.add_notifications(engine.evaluate_snapshot(&snapshot, &config, september_day));

    assert_eq!(store.active_notifications().len(), 1);
    assert_ne!(store.active_notifications()[0].id, august_id);
}

#[test]
fn test_malformed_transactions_never_break_a_pass() {
    let engine = RuleEngine::new();
    let config = RuleConfig::default();

    let mut snapshot = overrun_snapshot();
    snapshot.finance.transactions.push(expense("t-bad", 6, 9999.0, None));

    // The uncategorized amount is excluded, the pass completes
    let notifications = engine.evaluate_snapshot(&snapshot, &config, today());
    assert_eq!(notifications.len(), 1);
    assert!(notifications[0].message.contains("520.00 €"));
}

// =============================================================================
// Classifier → budget pipeline
// =============================================================================

#[test]
fn test_classified_transactions_feed_budget_rules() {
    let classifier = MerchantClassifier::default();
    let engine = RuleEngine::new();
    let config = RuleConfig::default();

    let mut snapshot = Snapshot::default();
    snapshot.finance.budgets.push(food_budget(100.0));

    // Raw imported rows: the classifier assigns categories in batch
    let descriptions = [
        ("t1", "PAGO EN MERCADONA MADRID", 70.0),
        ("t2", "LIDL BARCELONA", 45.0),
        ("t3", "TRANSFERENCIA BIZUM", 300.0),
    ];
    for (id, description, amount) in descriptions {
        let classification = classifier.classify(description);
        snapshot.finance.transactions.push(Transaction {
            id: id.into(),
            date: today(),
            description: description.into(),
            amount,
            kind: TransactionKind::Expense,
            category: classification.as_ref().map(|c| c.category.clone()),
            sub_category: classification.and_then(|c| c.sub_category),
        });
    }

    // Only the two supermarket rows count: 115 > 100
    let notifications = engine.evaluate_snapshot(&snapshot, &config, today());
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].kind, NotificationType::Danger);
    assert!(notifications[0].message.contains("115.00 €"));
}

#[test]
fn test_localized_evaluation_falls_back_for_unknown_tags() {
    let engine = RuleEngine::new();
    let config = RuleConfig::default();

    let mut snapshot = overrun_snapshot();
    snapshot.language = Language::from_tag("de-DE");

    // Unsupported tag falls back to Spanish
    let notifications = engine.evaluate_snapshot(&snapshot, &config, today());
    assert!(notifications[0].message.contains("Has gastado"));

    snapshot.language = Language::from_tag("en-US");
    let english = engine.evaluate_snapshot(&snapshot, &config, today());
    assert!(english[0].message.contains("You have spent"));

    // Language changes the text, never the identity
    assert_eq!(notifications[0].id, english[0].id);
}
