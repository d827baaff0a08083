//! Pantry expiry and low-stock rules

use crate::i18n;
use crate::notifications::{
    notification_id, ActionTarget, Notification, NotificationCategory, NotificationModule,
    NotificationType,
};
use crate::Result;

use super::{EvalContext, Rule};

pub struct PantryRule;

impl Rule for PantryRule {
    fn kind(&self) -> &'static str {
        "pantry"
    }

    fn name(&self) -> &'static str {
        "Pantry expiry and stock"
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Notification>> {
        let mut notifications = vec![];
        let lang = ctx.language;

        for item in &ctx.life.pantry_items {
            // Expiry applies to perishables with a known date. The bucket is
            // the expiry date itself: a restocked item with a fresh date is a
            // new condition.
            if item.perishable {
                if let Some(expiry) = item.expiry_date {
                    let days_left = (expiry - ctx.today).num_days();
                    if days_left <= ctx.config.pantry_expiry_days {
                        let bucket = expiry.to_string();
                        let id = notification_id("pantry:expiry", &item.id, Some(&bucket));
                        let (title, message) = if days_left < 0 {
                            (
                                i18n::pantry_expired_title(lang),
                                i18n::pantry_expired_message(lang, &item.name),
                            )
                        } else {
                            (
                                i18n::pantry_expiring_title(lang),
                                i18n::pantry_expiring_message(lang, &item.name, days_left),
                            )
                        };
                        notifications.push(
                            Notification::new(
                                id,
                                NotificationType::Warning,
                                NotificationModule::Life,
                                NotificationCategory::Pantry,
                                title,
                                message,
                            )
                            .with_action(
                                i18n::action_view_pantry(lang),
                                ActionTarget::new("life", "pantry"),
                            ),
                        );
                    }
                }
            }

            if let Some(min) = item.min_quantity {
                if item.quantity <= min {
                    let id = notification_id("pantry:stock", &item.id, None);
                    notifications.push(
                        Notification::new(
                            id,
                            NotificationType::Info,
                            NotificationModule::Life,
                            NotificationCategory::Pantry,
                            i18n::pantry_low_stock_title(lang),
                            i18n::pantry_low_stock_message(lang, &item.name),
                        )
                        .with_action(
                            i18n::action_view_pantry(lang),
                            ActionTarget::new("life", "pantry"),
                        ),
                    );
                }
            }
        }

        Ok(notifications)
    }
}
