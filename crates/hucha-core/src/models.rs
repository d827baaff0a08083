//! Domain models for Hucha
//!
//! These are the read-only entities the rule evaluator inspects. The host
//! application owns them; the engine never mutates a snapshot.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// Display currency for amounts in notification messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Eur,
    Usd,
    Gbp,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eur => "eur",
            Self::Usd => "usd",
            Self::Gbp => "gbp",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Eur => "€",
            Self::Usd => "$",
            Self::Gbp => "£",
        }
    }

    /// Format an amount for display: euros trail the number, dollar and
    /// pound signs lead it.
    pub fn format(&self, amount: f64) -> String {
        match self {
            Self::Eur => format!("{:.2} {}", amount, self.symbol()),
            Self::Usd | Self::Gbp => format!("{}{:.2}", self.symbol(), amount),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "eur" | "euro" => Ok(Self::Eur),
            "usd" | "dollar" => Ok(Self::Usd),
            "gbp" | "pound" => Ok(Self::Gbp),
            _ => Err(format!("Unknown currency: {}", s)),
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a transaction moves money out or in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    #[default]
    Expense,
    Income,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "expense" => Ok(Self::Expense),
            "income" => Ok(Self::Income),
            _ => Err(format!("Unknown transaction kind: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A financial transaction
///
/// `category` is optional on purpose: imported rows the classifier could not
/// resolve stay uncategorized. Budget aggregation skips them rather than
/// failing the evaluation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    /// Always positive; `kind` carries the direction
    pub amount: f64,
    #[serde(default)]
    pub kind: TransactionKind,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sub_category: Option<String>,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

/// Recurrence period of a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl BudgetPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Coarse time-window label for a date, used as the re-trigger bucket in
    /// notification ids: ISO week for weekly budgets, year-month for monthly,
    /// year for yearly.
    pub fn bucket(&self, date: NaiveDate) -> String {
        match self {
            Self::Weekly => {
                let week = date.iso_week();
                format!("{}-W{:02}", week.year(), week.week())
            }
            Self::Monthly => format!("{}-{:02}", date.year(), date.month()),
            Self::Yearly => format!("{}", date.year()),
        }
    }

    /// Whether `date` falls in the same period window as `reference`
    pub fn contains(&self, reference: NaiveDate, date: NaiveDate) -> bool {
        self.bucket(reference) == self.bucket(date)
    }
}

impl std::str::FromStr for BudgetPeriod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(format!("Unknown budget period: {}", s)),
        }
    }
}

impl std::fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a budget's limit is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetKind {
    /// `limit` is an absolute amount
    #[default]
    Fixed,
    /// `limit` is a percentage of the period's income
    Percentage,
}

impl BudgetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Percentage => "percentage",
        }
    }
}

impl std::str::FromStr for BudgetKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixed" => Ok(Self::Fixed),
            "percentage" => Ok(Self::Percentage),
            _ => Err(format!("Unknown budget kind: {}", s)),
        }
    }
}

impl std::fmt::Display for BudgetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A spending envelope for a category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: String,
    pub name: String,
    pub category: String,
    /// When set, only transactions with this sub-category count
    #[serde(default)]
    pub sub_category: Option<String>,
    /// Absolute amount, or percent of period income for percentage budgets
    pub limit: f64,
    #[serde(default)]
    pub kind: BudgetKind,
    #[serde(default)]
    pub period: BudgetPeriod,
    #[serde(default = "default_true")]
    pub active: bool,
}

fn default_true() -> bool {
    true
}

/// A savings goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
}

impl Goal {
    pub fn is_completed(&self) -> bool {
        self.current_amount >= self.target_amount
    }
}

/// A recurring debt with a monthly due day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    pub id: String,
    pub name: String,
    pub minimum_payment: f64,
    /// Day of month the payment is due (1..=31, clamped to month length)
    pub due_day: u32,
    #[serde(default)]
    pub total_amount: Option<f64>,
}

impl Debt {
    /// Next occurrence of the due day on or after `today`
    ///
    /// A `due_day` past the end of a month lands on that month's last day
    /// (due day 31 in February means the 28th or 29th).
    pub fn next_due_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        if self.due_day == 0 || self.due_day > 31 {
            return None;
        }
        let this_month = clamped_date(today.year(), today.month(), self.due_day)?;
        if this_month >= today {
            return Some(this_month);
        }
        let (year, month) = if today.month() == 12 {
            (today.year() + 1, 1)
        } else {
            (today.year(), today.month() + 1)
        };
        clamped_date(year, month, self.due_day)
    }
}

/// Build a date, clamping the day to the month's length
fn clamped_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
        let last = last_day_of_month(year, month)?;
        NaiveDate::from_ymd_opt(year, month, last)
    })
}

fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    Some(first_of_next.pred_opt()?.day())
}

/// An item tracked in the pantry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PantryItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub quantity: f64,
    /// Restock threshold; low-stock alerts need this set
    #[serde(default)]
    pub min_quantity: Option<f64>,
    #[serde(default)]
    pub perishable: bool,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
}

/// An entry on the shopping list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub estimated_price: Option<f64>,
    #[serde(default)]
    pub purchased: bool,
}

/// A planned or ongoing trip with its own budget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub spent: f64,
}

/// Finance slice of the rule input snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinanceState {
    #[serde(default)]
    pub budgets: Vec<Budget>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub debts: Vec<Debt>,
    #[serde(default)]
    pub currency: Currency,
}

/// Household slice of the rule input snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LifeState {
    #[serde(default)]
    pub pantry_items: Vec<PantryItem>,
    #[serde(default)]
    pub shopping_list: Vec<ShoppingItem>,
    #[serde(default)]
    pub trips: Vec<Trip>,
}

/// The read-only state bundle passed into the evaluator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub finance: FinanceState,
    #[serde(default)]
    pub life: LifeState,
    #[serde(default)]
    pub language: Language,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_currency_format() {
        assert_eq!(Currency::Eur.format(520.0), "520.00 €");
        assert_eq!(Currency::Usd.format(19.5), "$19.50");
        assert_eq!(Currency::from_str("EUR").unwrap(), Currency::Eur);
    }

    #[test]
    fn test_budget_period_bucket() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();
        assert_eq!(BudgetPeriod::Monthly.bucket(date), "2026-08");
        assert_eq!(BudgetPeriod::Yearly.bucket(date), "2026");
        assert_eq!(BudgetPeriod::Weekly.bucket(date), "2026-W32");
    }

    #[test]
    fn test_budget_period_contains() {
        let reference = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();
        let same_month = NaiveDate::from_ymd_opt(2026, 8, 31).unwrap();
        let other_month = NaiveDate::from_ymd_opt(2026, 7, 31).unwrap();

        assert!(BudgetPeriod::Monthly.contains(reference, same_month));
        assert!(!BudgetPeriod::Monthly.contains(reference, other_month));
        assert!(BudgetPeriod::Yearly.contains(reference, other_month));
    }

    #[test]
    fn test_debt_next_due_date_same_month() {
        let debt = Debt {
            id: "d1".into(),
            name: "Hipoteca".into(),
            minimum_payment: 650.0,
            due_day: 15,
            total_amount: None,
        };
        let today = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();
        assert_eq!(
            debt.next_due_date(today),
            NaiveDate::from_ymd_opt(2026, 8, 15)
        );
    }

    #[test]
    fn test_debt_next_due_date_wraps_month() {
        let debt = Debt {
            id: "d1".into(),
            name: "Préstamo".into(),
            minimum_payment: 120.0,
            due_day: 3,
            total_amount: None,
        };
        let today = NaiveDate::from_ymd_opt(2026, 12, 30).unwrap();
        assert_eq!(
            debt.next_due_date(today),
            NaiveDate::from_ymd_opt(2027, 1, 3)
        );
    }

    #[test]
    fn test_debt_due_day_clamped_to_short_month() {
        let debt = Debt {
            id: "d1".into(),
            name: "Tarjeta".into(),
            minimum_payment: 60.0,
            due_day: 31,
            total_amount: None,
        };
        let today = NaiveDate::from_ymd_opt(2026, 2, 25).unwrap();
        assert_eq!(
            debt.next_due_date(today),
            NaiveDate::from_ymd_opt(2026, 2, 28)
        );
    }

    #[test]
    fn test_debt_invalid_due_day() {
        let debt = Debt {
            id: "d1".into(),
            name: "Otro".into(),
            minimum_payment: 10.0,
            due_day: 0,
            total_amount: None,
        };
        let today = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();
        assert!(debt.next_due_date(today).is_none());
    }

    #[test]
    fn test_goal_completed() {
        let goal = Goal {
            id: "g1".into(),
            name: "Vacaciones".into(),
            target_amount: 1000.0,
            current_amount: 1000.0,
            deadline: None,
        };
        assert!(goal.is_completed());
    }

    #[test]
    fn test_snapshot_deserializes_with_defaults() {
        let snapshot: Snapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.finance.budgets.is_empty());
        assert_eq!(snapshot.finance.currency, Currency::Eur);
    }
}
