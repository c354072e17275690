use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::schema::transactions;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

#[derive(Queryable, Identifiable, Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = transactions)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub category_id: Option<String>,
    /// Positive magnitude; the kind column carries the sign of the flow.
    pub amount: String,
    pub kind: String,
    /// Date-only token `YYYY-MM-DD`; lexicographic order is date order.
    pub transaction_date: String,
    pub description: Option<String>,
    pub currency: String,
    pub created_at: NaiveDateTime,
}

impl Transaction {
    pub fn amount_decimal(&self) -> Option<Decimal> {
        Decimal::from_str(self.amount.trim()).ok()
    }

    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.transaction_date, DATE_FORMAT).ok()
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense.as_str()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub user_id: String,
    pub category_id: Option<String>,
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub transaction_date: NaiveDate,
    pub description: Option<String>,
    pub currency: Option<String>,
}
