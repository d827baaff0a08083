//! Message localization
//!
//! Notification text is generated in the snapshot's language. Unsupported
//! tags fall back to Spanish, the host application's home locale.

use serde::{Deserialize, Serialize};

/// Supported message languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Spanish,
    English,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spanish => "es",
            Self::English => "en",
        }
    }

    /// Resolve a BCP-47-ish tag ("es", "es-ES", "en_US"...), falling back to
    /// the default locale for anything unsupported.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag
            .split(|c| c == '-' || c == '_')
            .next()
            .unwrap_or("")
            .to_lowercase();
        match primary.as_str() {
            "es" => Self::Spanish,
            "en" => Self::English,
            _ => Self::default(),
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "es" | "spanish" => Ok(Self::Spanish),
            "en" | "english" => Ok(Self::English),
            _ => Err(format!("Unknown language: {}", s)),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Budget messages
// ---------------------------------------------------------------------------

pub fn budget_overrun_title(lang: Language) -> &'static str {
    match lang {
        Language::Spanish => "Presupuesto superado",
        Language::English => "Budget exceeded",
    }
}

pub fn budget_overrun_message(lang: Language, name: &str, spent: &str, limit: &str) -> String {
    match lang {
        Language::Spanish => format!(
            "Has gastado {} del presupuesto \"{}\" (límite {}).",
            spent, name, limit
        ),
        Language::English => format!(
            "You have spent {} of the \"{}\" budget (limit {}).",
            spent, name, limit
        ),
    }
}

pub fn budget_warning_title(lang: Language) -> &'static str {
    match lang {
        Language::Spanish => "Presupuesto casi agotado",
        Language::English => "Budget almost spent",
    }
}

pub fn budget_warning_message(lang: Language, name: &str, percent: f64, limit: &str) -> String {
    match lang {
        Language::Spanish => format!(
            "Llevas el {:.0}% del presupuesto \"{}\" (límite {}).",
            percent, name, limit
        ),
        Language::English => format!(
            "You have used {:.0}% of the \"{}\" budget (limit {}).",
            percent, name, limit
        ),
    }
}

// ---------------------------------------------------------------------------
// Goal messages
// ---------------------------------------------------------------------------

pub fn goal_deadline_title(lang: Language) -> &'static str {
    match lang {
        Language::Spanish => "Meta a punto de vencer",
        Language::English => "Goal deadline approaching",
    }
}

pub fn goal_deadline_message(lang: Language, name: &str, days: i64, remaining: &str) -> String {
    match lang {
        Language::Spanish => {
            if days == 0 {
                format!("La meta \"{}\" vence hoy y faltan {}.", name, remaining)
            } else if days == 1 {
                format!("Queda 1 día para la meta \"{}\" y faltan {}.", name, remaining)
            } else {
                format!(
                    "Quedan {} días para la meta \"{}\" y faltan {}.",
                    days, name, remaining
                )
            }
        }
        Language::English => {
            if days == 0 {
                format!("Goal \"{}\" is due today with {} still to save.", name, remaining)
            } else if days == 1 {
                format!("1 day left for goal \"{}\" with {} still to save.", name, remaining)
            } else {
                format!(
                    "{} days left for goal \"{}\" with {} still to save.",
                    days, name, remaining
                )
            }
        }
    }
}

pub fn goal_completed_title(lang: Language) -> &'static str {
    match lang {
        Language::Spanish => "¡Meta conseguida!",
        Language::English => "Goal achieved!",
    }
}

pub fn goal_completed_message(lang: Language, name: &str, target: &str) -> String {
    match lang {
        Language::Spanish => format!("Has alcanzado la meta \"{}\" de {}.", name, target),
        Language::English => format!("You reached the \"{}\" goal of {}.", name, target),
    }
}

// ---------------------------------------------------------------------------
// Debt messages
// ---------------------------------------------------------------------------

pub fn debt_due_title(lang: Language) -> &'static str {
    match lang {
        Language::Spanish => "Pago de deuda próximo",
        Language::English => "Debt payment due soon",
    }
}

pub fn debt_due_message(lang: Language, name: &str, days: i64, minimum: &str) -> String {
    match lang {
        Language::Spanish => {
            if days == 0 {
                format!("El pago de \"{}\" vence hoy (mínimo {}).", name, minimum)
            } else if days == 1 {
                format!("El pago de \"{}\" vence mañana (mínimo {}).", name, minimum)
            } else {
                format!(
                    "El pago de \"{}\" vence en {} días (mínimo {}).",
                    name, days, minimum
                )
            }
        }
        Language::English => {
            if days == 0 {
                format!("The \"{}\" payment is due today (minimum {}).", name, minimum)
            } else if days == 1 {
                format!("The \"{}\" payment is due tomorrow (minimum {}).", name, minimum)
            } else {
                format!(
                    "The \"{}\" payment is due in {} days (minimum {}).",
                    name, days, minimum
                )
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Pantry messages
// ---------------------------------------------------------------------------

pub fn pantry_expired_title(lang: Language) -> &'static str {
    match lang {
        Language::Spanish => "Producto caducado",
        Language::English => "Item expired",
    }
}

pub fn pantry_expired_message(lang: Language, name: &str) -> String {
    match lang {
        Language::Spanish => format!("\"{}\" ha caducado. Revísalo antes de usarlo.", name),
        Language::English => format!("\"{}\" has expired. Check it before using.", name),
    }
}

pub fn pantry_expiring_title(lang: Language) -> &'static str {
    match lang {
        Language::Spanish => "Producto a punto de caducar",
        Language::English => "Item about to expire",
    }
}

pub fn pantry_expiring_message(lang: Language, name: &str, days: i64) -> String {
    match lang {
        Language::Spanish => {
            if days == 0 {
                format!("\"{}\" caduca hoy.", name)
            } else if days == 1 {
                format!("\"{}\" caduca mañana.", name)
            } else {
                format!("\"{}\" caduca en {} días.", name, days)
            }
        }
        Language::English => {
            if days == 0 {
                format!("\"{}\" expires today.", name)
            } else if days == 1 {
                format!("\"{}\" expires tomorrow.", name)
            } else {
                format!("\"{}\" expires in {} days.", name, days)
            }
        }
    }
}

pub fn pantry_low_stock_title(lang: Language) -> &'static str {
    match lang {
        Language::Spanish => "Queda poco en la despensa",
        Language::English => "Running low in the pantry",
    }
}

pub fn pantry_low_stock_message(lang: Language, name: &str) -> String {
    match lang {
        Language::Spanish => format!("Queda poco de \"{}\". Añádelo a la lista de la compra.", name),
        Language::English => format!("\"{}\" is running low. Add it to the shopping list.", name),
    }
}

// ---------------------------------------------------------------------------
// Shopping messages
// ---------------------------------------------------------------------------

pub fn shopping_backlog_title(lang: Language) -> &'static str {
    match lang {
        Language::Spanish => "Lista de la compra llena",
        Language::English => "Shopping list piling up",
    }
}

pub fn shopping_backlog_message(lang: Language, count: usize, cost: Option<&str>) -> String {
    match lang {
        Language::Spanish => match cost {
            Some(cost) => format!(
                "Tienes {} artículos pendientes (unos {}). ¿Toca hacer la compra?",
                count, cost
            ),
            None => format!("Tienes {} artículos pendientes. ¿Toca hacer la compra?", count),
        },
        Language::English => match cost {
            Some(cost) => format!(
                "You have {} pending items (about {}). Time for a shopping run?",
                count, cost
            ),
            None => format!("You have {} pending items. Time for a shopping run?", count),
        },
    }
}

// ---------------------------------------------------------------------------
// Trip messages
// ---------------------------------------------------------------------------

pub fn trip_overrun_title(lang: Language) -> &'static str {
    match lang {
        Language::Spanish => "Presupuesto de viaje superado",
        Language::English => "Trip budget exceeded",
    }
}

pub fn trip_overrun_message(lang: Language, name: &str, spent: &str, budget: &str) -> String {
    match lang {
        Language::Spanish => format!(
            "El viaje \"{}\" lleva {} gastados de un presupuesto de {}.",
            name, spent, budget
        ),
        Language::English => format!(
            "Trip \"{}\" has {} spent against a budget of {}.",
            name, spent, budget
        ),
    }
}

// ---------------------------------------------------------------------------
// Action labels
// ---------------------------------------------------------------------------

pub fn action_view_budgets(lang: Language) -> &'static str {
    match lang {
        Language::Spanish => "Ver presupuestos",
        Language::English => "View budgets",
    }
}

pub fn action_view_goals(lang: Language) -> &'static str {
    match lang {
        Language::Spanish => "Ver metas",
        Language::English => "View goals",
    }
}

pub fn action_view_debts(lang: Language) -> &'static str {
    match lang {
        Language::Spanish => "Ver deudas",
        Language::English => "View debts",
    }
}

pub fn action_view_pantry(lang: Language) -> &'static str {
    match lang {
        Language::Spanish => "Ver despensa",
        Language::English => "View pantry",
    }
}

pub fn action_view_shopping(lang: Language) -> &'static str {
    match lang {
        Language::Spanish => "Ver lista de la compra",
        Language::English => "View shopping list",
    }
}

pub fn action_view_trips(lang: Language) -> &'static str {
    match lang {
        Language::Spanish => "Ver viajes",
        Language::English => "View trips",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_variants() {
        assert_eq!(Language::from_tag("es"), Language::Spanish);
        assert_eq!(Language::from_tag("es-ES"), Language::Spanish);
        assert_eq!(Language::from_tag("en_US"), Language::English);
        assert_eq!(Language::from_tag("EN"), Language::English);
    }

    #[test]
    fn test_from_tag_unsupported_falls_back() {
        assert_eq!(Language::from_tag("fr"), Language::Spanish);
        assert_eq!(Language::from_tag(""), Language::Spanish);
        assert_eq!(Language::from_tag("zh-Hans"), Language::Spanish);
    }

    #[test]
    fn test_messages_localized() {
        let es = budget_overrun_message(Language::Spanish, "Comida", "520.00 €", "500.00 €");
        let en = budget_overrun_message(Language::English, "Comida", "520.00 €", "500.00 €");
        assert!(es.contains("Has gastado"));
        assert!(en.contains("You have spent"));
    }

    #[test]
    fn test_day_pluralization() {
        let one = debt_due_message(Language::Spanish, "Hipoteca", 1, "650.00 €");
        let many = debt_due_message(Language::Spanish, "Hipoteca", 3, "650.00 €");
        assert!(one.contains("mañana"));
        assert!(many.contains("3 días"));
    }
}
