//! Goal deadline and completion rules

use crate::i18n;
use crate::notifications::{
    notification_id, ActionTarget, Notification, NotificationCategory, NotificationModule,
    NotificationType,
};
use crate::Result;

use super::{EvalContext, Rule};

pub struct GoalRule;

impl Rule for GoalRule {
    fn kind(&self) -> &'static str {
        "goal"
    }

    fn name(&self) -> &'static str {
        "Goal deadline and completion"
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Notification>> {
        let mut notifications = vec![];
        let currency = ctx.finance.currency;
        let lang = ctx.language;

        for goal in &ctx.finance.goals {
            if goal.target_amount <= 0.0 {
                continue;
            }

            if goal.is_completed() {
                // No period bucket: a completed goal congratulates exactly once
                let id = notification_id("goal:completed", &goal.id, None);
                notifications.push(
                    Notification::new(
                        id,
                        NotificationType::Success,
                        NotificationModule::Finance,
                        NotificationCategory::Goal,
                        i18n::goal_completed_title(lang),
                        i18n::goal_completed_message(
                            lang,
                            &goal.name,
                            &currency.format(goal.target_amount),
                        ),
                    )
                    .with_action(
                        i18n::action_view_goals(lang),
                        ActionTarget::new("finance", "goals"),
                    ),
                );
                continue;
            }

            let Some(deadline) = goal.deadline else {
                continue;
            };
            let days_left = (deadline - ctx.today).num_days();
            if (0..=ctx.config.goal_deadline_days).contains(&days_left) {
                let id = notification_id("goal:deadline", &goal.id, None);
                let remaining = goal.target_amount - goal.current_amount;
                notifications.push(
                    Notification::new(
                        id,
                        NotificationType::Warning,
                        NotificationModule::Finance,
                        NotificationCategory::Goal,
                        i18n::goal_deadline_title(lang),
                        i18n::goal_deadline_message(
                            lang,
                            &goal.name,
                            days_left,
                            &currency.format(remaining),
                        ),
                    )
                    .with_action(
                        i18n::action_view_goals(lang),
                        ActionTarget::new("finance", "goals"),
                    ),
                );
            }
        }

        Ok(notifications)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleConfig;
    use crate::i18n::Language;
    use crate::models::{FinanceState, Goal, LifeState};
    use chrono::NaiveDate;

    fn goal(current: f64, target: f64, deadline: Option<NaiveDate>) -> Goal {
        Goal {
            id: "g1".into(),
            name: "Vacaciones".into(),
            target_amount: target,
            current_amount: current,
            deadline,
        }
    }

    fn eval(finance: &FinanceState) -> Vec<Notification> {
        let life = LifeState::default();
        let config = RuleConfig::default();
        let today = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();
        let ctx = EvalContext::new(finance, &life, &config, Language::Spanish, today);
        GoalRule.evaluate(&ctx).unwrap()
    }

    #[test]
    fn test_completed_goal_is_success() {
        let mut finance = FinanceState::default();
        finance.goals.push(goal(1000.0, 1000.0, None));

        let notifications = eval(&finance);
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, NotificationType::Success);
    }

    #[test]
    fn test_completed_goal_id_stable_across_passes() {
        let mut finance = FinanceState::default();
        finance.goals.push(goal(1200.0, 1000.0, None));

        let first = eval(&finance);
        let second = eval(&finance);
        assert_eq!(first[0].id, second[0].id);
    }

    #[test]
    fn test_near_deadline_unmet_goal_warns() {
        let mut finance = FinanceState::default();
        let deadline = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
        finance.goals.push(goal(400.0, 1000.0, Some(deadline)));

        let notifications = eval(&finance);
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, NotificationType::Warning);
        assert!(notifications[0].message.contains("600.00 €"));
    }

    #[test]
    fn test_deadline_window_boundaries() {
        // 14 days out: inside the default window
        let mut finance = FinanceState::default();
        let edge = NaiveDate::from_ymd_opt(2026, 8, 22).unwrap();
        finance.goals.push(goal(0.0, 100.0, Some(edge)));
        assert_eq!(eval(&finance).len(), 1);

        // 15 days out: outside
        let mut finance = FinanceState::default();
        let outside = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        finance.goals.push(goal(0.0, 100.0, Some(outside)));
        assert!(eval(&finance).is_empty());
    }

    #[test]
    fn test_past_deadline_is_silent() {
        let mut finance = FinanceState::default();
        let past = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        finance.goals.push(goal(0.0, 100.0, Some(past)));

        assert!(eval(&finance).is_empty());
    }

    #[test]
    fn test_completed_goal_near_deadline_only_congratulates() {
        let mut finance = FinanceState::default();
        let deadline = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        finance.goals.push(goal(150.0, 100.0, Some(deadline)));

        let notifications = eval(&finance);
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].kind, NotificationType::Success);
    }

    #[test]
    fn test_zero_target_skipped() {
        let mut finance = FinanceState::default();
        finance.goals.push(goal(0.0, 0.0, None));

        assert!(eval(&finance).is_empty());
    }
}
