use std::str::FromStr;

use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::schema::budgets;

/// Recurrence of a budget that has no explicit month token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriodType {
    Weekly,
    Monthly,
}

impl BudgetPeriodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetPeriodType::Weekly => "weekly",
            BudgetPeriodType::Monthly => "monthly",
        }
    }

    /// Unknown descriptors read as monthly.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("weekly") {
            BudgetPeriodType::Weekly
        } else {
            BudgetPeriodType::Monthly
        }
    }
}

#[derive(Queryable, Identifiable, Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = budgets)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub user_id: String,
    pub category_id: Option<String>,
    /// Monetary amount as stored; a value that does not parse as a decimal
    /// means the budget can never fire.
    pub amount: String,
    /// Explicit month token `YYYY-MM`. When set, the budget is scoped to
    /// that calendar month and `period_type` is ignored.
    pub month: Option<String>,
    pub period_type: String,
    pub period_start_day: Option<i32>,
    pub is_active: bool,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Budget {
    pub fn amount_decimal(&self) -> Option<Decimal> {
        Decimal::from_str(self.amount.trim()).ok()
    }

    pub fn period(&self) -> BudgetPeriodType {
        BudgetPeriodType::parse(&self.period_type)
    }

    /// Day of month the recurring monthly window starts on, defaulting to 1.
    pub fn anchor_day(&self) -> u32 {
        self.period_start_day
            .filter(|d| *d >= 1)
            .map(|d| d as u32)
            .unwrap_or(1)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub user_id: String,
    pub category_id: Option<String>,
    pub amount: Decimal,
    pub month: Option<String>,
    pub period_type: Option<BudgetPeriodType>,
    pub period_start_day: Option<i32>,
    pub description: Option<String>,
}
