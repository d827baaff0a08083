//! Shopping-list backlog rule
//!
//! Fires once the pending list crosses either the item-count or the
//! estimated-cost threshold. The list is a single entity, so the id is a
//! singleton; it re-fires only after the old entry is purged.

use crate::i18n;
use crate::notifications::{
    notification_id, ActionTarget, Notification, NotificationCategory, NotificationModule,
    NotificationType,
};
use crate::Result;

use super::{EvalContext, Rule};

pub struct ShoppingRule;

impl Rule for ShoppingRule {
    fn kind(&self) -> &'static str {
        "shopping"
    }

    fn name(&self) -> &'static str {
        "Shopping list backlog"
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Notification>> {
        let lang = ctx.language;
        let currency = ctx.finance.currency;

        let pending: Vec<_> = ctx
            .life
            .shopping_list
            .iter()
            .filter(|item| !item.purchased)
            .collect();

        let estimated_cost: f64 = pending
            .iter()
            .filter_map(|item| {
                let units = if item.quantity > 0.0 { item.quantity } else { 1.0 };
                item.estimated_price.map(|price| price * units)
            })
            .sum();

        let over_count = pending.len() >= ctx.config.shopping_item_threshold;
        let over_cost = estimated_cost >= ctx.config.shopping_cost_threshold;
        if !over_count && !over_cost {
            return Ok(vec![]);
        }

        let cost_text = if estimated_cost > 0.0 {
            Some(currency.format(estimated_cost))
        } else {
            None
        };
        let id = notification_id("shopping:backlog", "list", None);
        Ok(vec![Notification::new(
            id,
            NotificationType::Info,
            NotificationModule::Life,
            NotificationCategory::Shopping,
            i18n::shopping_backlog_title(lang),
            i18n::shopping_backlog_message(lang, pending.len(), cost_text.as_deref()),
        )
        .with_action(
            i18n::action_view_shopping(lang),
            ActionTarget::new("life", "shopping"),
        )])
    }
}
