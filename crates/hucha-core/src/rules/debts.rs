//! Debt due-date reminder rule
//!
//! The id bucket is the due date's year-month, so a dismissed reminder comes
//! back for the next month's payment.

use crate::i18n;
use crate::notifications::{
    notification_id, ActionTarget, Notification, NotificationCategory, NotificationModule,
    NotificationType,
};
use crate::Result;

use super::{EvalContext, Rule};

pub struct DebtRule;

impl Rule for DebtRule {
    fn kind(&self) -> &'static str {
        "debt"
    }

    fn name(&self) -> &'static str {
        "Debt payment due"
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Notification>> {
        let mut notifications = vec![];
        let currency = ctx.finance.currency;
        let lang = ctx.language;

        for debt in &ctx.finance.debts {
            let Some(due_date) = debt.next_due_date(ctx.today) else {
                continue;
            };
            let days_until = (due_date - ctx.today).num_days();
            if days_until > ctx.config.debt_lookahead_days {
                continue;
            }

            let bucket = due_date.format("%Y-%m").to_string();
            let id = notification_id("debt:due", &debt.id, Some(&bucket));
            notifications.push(
                Notification::new(
                    id,
                    NotificationType::Warning,
                    NotificationModule::Finance,
                    NotificationCategory::Debt,
                    i18n::debt_due_title(lang),
                    i18n::debt_due_message(
                        lang,
                        &debt.name,
                        days_until,
                        &currency.format(debt.minimum_payment),
                    ),
                )
                .with_action(
                    i18n::action_view_debts(lang),
                    ActionTarget::new("finance", "debts"),
                ),
            );
        }

        Ok(notifications)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleConfig;
    use crate::i18n::Language;
    use crate::models::{Debt, FinanceState, LifeState};
    use chrono::NaiveDate;

    fn debt(due_day: u32) -> Debt {
        Debt {
            id: "d1".into(),
            name: "Hipoteca".into(),
            minimum_payment: 650.0,
            due_day,
            total_amount: None,
        }
    }

    fn eval_on(finance: &FinanceState, today: NaiveDate) -> Vec<Notification> {
        let life = LifeState::default();
        let config = RuleConfig::default();
        let ctx = EvalContext::new(finance, &life, &config, Language::Spanish, today);
        DebtRule.evaluate(&ctx).unwrap()
    }

    #[test]
    fn test_due_within_window_warns() {
        let mut finance = FinanceState::default();
        finance.debts.push(debt(10));

        let today = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();
        let notifications = eval_on(&finance, today);
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, NotificationType::Warning);
        assert!(notifications[0].message.contains("650.00 €"));
    }

    #[test]
    fn test_due_beyond_window_is_silent() {
        let mut finance = FinanceState::default();
        finance.debts.push(debt(20));

        let today = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();
        assert!(eval_on(&finance, today).is_empty());
    }

    #[test]
    fn test_window_boundary_inclusive() {
        let mut finance = FinanceState::default();
        // Exactly lookahead days away (default 5)
        finance.debts.push(debt(13));

        let today = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();
        assert_eq!(eval_on(&finance, today).len(), 1);
    }

    #[test]
    fn test_due_today_warns() {
        let mut finance = FinanceState::default();
        finance.debts.push(debt(8));

        let today = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();
        let notifications = eval_on(&finance, today);
        assert_eq!(notifications.len(), 1);
        assert!(notifications[0].message.contains("hoy"));
    }

    #[test]
    fn test_month_wrap_reminder() {
        let mut finance = FinanceState::default();
        finance.debts.push(debt(2));

        // Aug 30: next due date is Sep 2, three days out
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert_eq!(eval_on(&finance, today).len(), 1);
    }

    #[test]
    fn test_monthly_rebucketing_changes_id() {
        let mut finance = FinanceState::default();
        finance.debts.push(debt(10));

        let august = eval_on(&finance, NaiveDate::from_ymd_opt(2026, 8, 8).unwrap());
        let september = eval_on(&finance, NaiveDate::from_ymd_opt(2026, 9, 8).unwrap());

        assert_ne!(august[0].id, september[0].id);
    }

    #[test]
    fn test_same_month_id_stable() {
        let mut finance = FinanceState::default();
        finance.debts.push(debt(10));

        let day1 = eval_on(&finance, NaiveDate::from_ymd_opt(2026, 8, 6).unwrap());
        let day2 = eval_on(&finance, NaiveDate::from_ymd_opt(2026, 8, 8).unwrap());

        assert_eq!(day1[0].id, day2[0].id);
    }

    #[test]
    fn test_invalid_due_day_skipped() {
        let mut finance = FinanceState::default();
        finance.debts.push(debt(0));

        let today = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();
        assert!(eval_on(&finance, today).is_empty());
    }
}
