//! Budget overrun rule
//!
//! Boundary semantics: spend >= limit is an overrun (danger); spend >=
//! limit * warning_ratio and below the limit is an early warning. Both
//! comparisons are inclusive.

use tracing::debug;

use crate::i18n;
use crate::models::{Budget, BudgetKind, FinanceState, TransactionKind};
use crate::notifications::{
    notification_id, ActionTarget, Notification, NotificationCategory, NotificationModule,
    NotificationType,
};
use crate::Result;

use super::{EvalContext, Rule};

pub struct BudgetRule;

impl BudgetRule {
    /// Period-to-date spend for a budget
    ///
    /// Transactions without a category are malformed for this aggregation
    /// and are skipped, never fatal.
    fn period_spend(budget: &Budget, finance: &FinanceState, today: chrono::NaiveDate) -> f64 {
        finance
            .transactions
            .iter()
            .filter(|tx| tx.is_expense())
            .filter(|tx| budget.period.contains(today, tx.date))
            .filter(|tx| match tx.category.as_deref() {
                Some(category) => category == budget.category,
                None => false,
            })
            .filter(|tx| match budget.sub_category.as_deref() {
                Some(sub) => tx.sub_category.as_deref() == Some(sub),
                None => true,
            })
            .map(|tx| tx.amount)
            .sum()
    }

    /// Income booked in the budget's current period
    fn period_income(budget: &Budget, finance: &FinanceState, today: chrono::NaiveDate) -> f64 {
        finance
            .transactions
            .iter()
            .filter(|tx| tx.kind == TransactionKind::Income)
            .filter(|tx| budget.period.contains(today, tx.date))
            .map(|tx| tx.amount)
            .sum()
    }

    /// Resolve the absolute limit, or None when it can't be computed
    fn effective_limit(
        budget: &Budget,
        finance: &FinanceState,
        today: chrono::NaiveDate,
    ) -> Option<f64> {
        let limit = match budget.kind {
            BudgetKind::Fixed => budget.limit,
            BudgetKind::Percentage => {
                let income = Self::period_income(budget, finance, today);
                if income <= 0.0 {
                    debug!(budget = budget.id.as_str(), "No period income, skipping percentage budget");
                    return None;
                }
                income * budget.limit / 100.0
            }
        };

        if limit > 0.0 {
            Some(limit)
        } else {
            None
        }
    }
}

impl Rule for BudgetRule {
    fn kind(&self) -> &'static str {
        "budget"
    }

    fn name(&self) -> &'static str {
        "Budget overrun"
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Notification>> {
        let mut notifications = vec![];
        let currency = ctx.finance.currency;
        let lang = ctx.language;

        for budget in ctx.finance.budgets.iter().filter(|b| b.active) {
            let Some(limit) = Self::effective_limit(budget, ctx.finance, ctx.today) else {
                continue;
            };

            let spend = Self::period_spend(budget, ctx.finance, ctx.today);
            let bucket = budget.period.bucket(ctx.today);

            if spend >= limit {
                let id = notification_id("budget:overrun", &budget.id, Some(&bucket));
                notifications.push(
                    Notification::new(
                        id,
                        NotificationType::Danger,
                        NotificationModule::Finance,
                        NotificationCategory::Budget,
                        i18n::budget_overrun_title(lang),
                        i18n::budget_overrun_message(
                            lang,
                            &budget.name,
                            &currency.format(spend),
                            &currency.format(limit),
                        ),
                    )
                    .with_action(
                        i18n::action_view_budgets(lang),
                        ActionTarget::new("finance", "budgets"),
                    ),
                );
            } else if spend >= limit * ctx.config.warning_ratio {
                let id = notification_id("budget:warning", &budget.id, Some(&bucket));
                let percent = spend / limit * 100.0;
                notifications.push(
                    Notification::new(
                        id,
                        NotificationType::Warning,
                        NotificationModule::Finance,
                        NotificationCategory::Budget,
                        i18n::budget_warning_title(lang),
                        i18n::budget_warning_message(
                            lang,
                            &budget.name,
                            percent,
                            &currency.format(limit),
                        ),
                    )
                    .with_action(
                        i18n::action_view_budgets(lang),
                        ActionTarget::new("finance", "budgets"),
                    ),
                );
            }
        }

        Ok(notifications)
    }
}
