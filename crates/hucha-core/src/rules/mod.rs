//! Rule evaluation engine
//!
//! Each rule is a stateless predicate over the state snapshot that yields
//! zero or more notification candidates. The engine runs every registered
//! rule, isolates failures (a broken rule never kills the pass), and sorts
//! results by urgency. Determinism contract: the same snapshot and the same
//! calendar day produce notifications with identical ids, so the store's
//! dedupe absorbs repeated passes.

mod budget;
mod debts;
mod goals;
mod pantry;
mod shopping;
mod trips;

pub use budget::BudgetRule;
pub use debts::DebtRule;
pub use goals::GoalRule;
pub use pantry::PantryRule;
pub use shopping::ShoppingRule;
pub use trips::TripRule;

use chrono::NaiveDate;

use crate::config::RuleConfig;
use crate::i18n::Language;
use crate::models::{FinanceState, LifeState, Snapshot};
use crate::notifications::Notification;
use crate::Result;

/// Read-only context handed to every rule
pub struct EvalContext<'a> {
    pub finance: &'a FinanceState,
    pub life: &'a LifeState,
    pub config: &'a RuleConfig,
    pub language: Language,
    /// Evaluation day; injected so tests control the time bucket
    pub today: NaiveDate,
}

impl<'a> EvalContext<'a> {
    pub fn new(
        finance: &'a FinanceState,
        life: &'a LifeState,
        config: &'a RuleConfig,
        language: Language,
        today: NaiveDate,
    ) -> Self {
        Self {
            finance,
            life,
            config,
            language,
            today,
        }
    }

    /// Context over a snapshot, pinned to a given day
    pub fn for_snapshot(snapshot: &'a Snapshot, config: &'a RuleConfig, today: NaiveDate) -> Self {
        Self::new(
            &snapshot.finance,
            &snapshot.life,
            config,
            snapshot.language,
            today,
        )
    }

    /// Context over a snapshot using the local calendar day
    pub fn current(snapshot: &'a Snapshot, config: &'a RuleConfig) -> Self {
        Self::for_snapshot(snapshot, config, chrono::Local::now().date_naive())
    }
}

/// A rule: pure predicate + message generator over the snapshot
pub trait Rule: Send + Sync {
    /// Stable identifier, used as the first segment of notification ids
    fn kind(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Produce notification candidates for the current snapshot
    fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Notification>>;
}

/// The rule engine that runs all registered rules over a snapshot
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine {
    /// Engine with the built-in rule set
    pub fn new() -> Self {
        let mut engine = Self { rules: vec![] };

        engine.register(Box::new(BudgetRule));
        engine.register(Box::new(GoalRule));
        engine.register(Box::new(DebtRule));
        engine.register(Box::new(PantryRule));
        engine.register(Box::new(ShoppingRule));
        engine.register(Box::new(TripRule));

        engine
    }

    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    pub fn rule_kinds(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.kind()).collect()
    }

    /// Run every rule and collect candidates
    ///
    /// A failing rule is logged and skipped; its conditions simply don't fire
    /// this cycle and self-heal on the next pass.
    pub fn evaluate(&self, ctx: &EvalContext<'_>) -> Vec<Notification> {
        let mut all = vec![];

        for rule in &self.rules {
            match rule.evaluate(ctx) {
                Ok(notifications) => {
                    tracing::debug!(
                        rule = rule.kind(),
                        count = notifications.len(),
                        "Rule evaluated"
                    );
                    all.extend(notifications);
                }
                Err(e) => {
                    tracing::warn!(rule = rule.kind(), error = %e, "Rule evaluation failed");
                }
            }
        }

        // Most urgent first; stable, so emission order breaks ties
        all.sort_by(|a, b| b.kind.priority().cmp(&a.kind.priority()));

        all
    }

    /// Evaluate a snapshot pinned to a given day
    pub fn evaluate_snapshot(
        &self,
        snapshot: &Snapshot,
        config: &RuleConfig,
        today: NaiveDate,
    ) -> Vec<Notification> {
        let ctx = EvalContext::for_snapshot(snapshot, config, today);
        self.evaluate(&ctx)
    }
}
