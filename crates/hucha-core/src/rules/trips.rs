//! Trip budget overrun rule
//!
//! Strict comparison: a trip at exactly its budget has not overrun yet.

use crate::i18n;
use crate::notifications::{
    notification_id, ActionTarget, Notification, NotificationCategory, NotificationModule,
    NotificationType,
};
use crate::Result;

use super::{EvalContext, Rule};

pub struct TripRule;

impl Rule for TripRule {
    fn kind(&self) -> &'static str {
        "trip"
    }

    fn name(&self) -> &'static str {
        "Trip budget overrun"
    }

    fn evaluate(&self, ctx: &EvalContext<'_>) -> Result<Vec<Notification>> {
        let mut notifications = vec![];
        let currency = ctx.finance.currency;
        let lang = ctx.language;

        for trip in &ctx.life.trips {
            let Some(budget) = trip.budget else {
                continue;
            };
            if budget <= 0.0 || trip.spent <= budget {
                continue;
            }

            let id = notification_id("trip:overrun", &trip.id, None);
            notifications.push(
                Notification::new(
                    id,
                    NotificationType::Danger,
                    NotificationModule::Life,
                    NotificationCategory::Trip,
                    i18n::trip_overrun_title(lang),
                    i18n::trip_overrun_message(
                        lang,
                        &trip.name,
                        &currency.format(trip.spent),
                        &currency.format(budget),
                    ),
                )
                .with_action(
                    i18n::action_view_trips(lang),
                    ActionTarget::new("life", "trips"),
                ),
            );
        }

        Ok(notifications)
    }
}
