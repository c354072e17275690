use chrono::{NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transactions::transactions_model::TransactionKind;

/// Notification category written by the threshold evaluator.
pub const BUDGET_ALERT_CATEGORY: &str = "budget";

/// What happened that makes budget thresholds worth re-checking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum BudgetAlertEvent {
    /// A transaction was recorded. Matches every active budget for its
    /// category (and every category-agnostic budget).
    TransactionRecorded {
        category_id: Option<String>,
        amount: Decimal,
        kind: TransactionKind,
        transaction_date: Option<NaiveDate>,
    },
    /// A month-scoped budget was created. Matches only that budget's row.
    BudgetCreated {
        category_id: Option<String>,
        amount: Decimal,
        month: String,
    },
}

impl BudgetAlertEvent {
    pub fn category_id(&self) -> Option<&str> {
        match self {
            BudgetAlertEvent::TransactionRecorded { category_id, .. }
            | BudgetAlertEvent::BudgetCreated { category_id, .. } => category_id.as_deref(),
        }
    }

    /// Date the period window is anchored on: the transaction's occurrence
    /// date when it carries one, today (UTC) otherwise.
    pub fn reference_date(&self) -> NaiveDate {
        match self {
            BudgetAlertEvent::TransactionRecorded {
                transaction_date, ..
            } => transaction_date.unwrap_or_else(|| Utc::now().date_naive()),
            BudgetAlertEvent::BudgetCreated { .. } => Utc::now().date_naive(),
        }
    }
}

/// Date range a budget's spend is accumulated over. Derived, never persisted.
/// `end` is the instant before the next period starts; date-only comparisons
/// use `start_date()..=end_date()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl PeriodWindow {
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end.date()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date() <= date && date <= self.end_date()
    }
}
