use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::db::{get_connection, DbPool};
use crate::errors::{DatabaseError, Result};
use crate::schema::transactions;
use crate::transactions::transactions_model::{
    NewTransaction, Transaction, TransactionKind, DATE_FORMAT,
};
use crate::transactions::transactions_traits::TransactionRepositoryTrait;

pub struct TransactionRepository {
    pool: Arc<DbPool>,
}

impl TransactionRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        TransactionRepository { pool }
    }
}

#[async_trait]
impl TransactionRepositoryTrait for TransactionRepository {
    fn load_transactions(&self, user_id: &str) -> Result<Vec<Transaction>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = transactions::table
            .filter(transactions::user_id.eq(user_id))
            .order(transactions::transaction_date.desc())
            .load::<Transaction>(&mut conn)
            .map_err(DatabaseError::QueryFailed)?;
        Ok(rows)
    }

    fn sum_expenses_in_range(
        &self,
        user_id: &str,
        category_id: Option<&str>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Decimal> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = transactions::table
            .into_boxed()
            .filter(transactions::user_id.eq(user_id))
            .filter(transactions::kind.eq(TransactionKind::Expense.as_str()))
            .filter(transactions::transaction_date.ge(start.format(DATE_FORMAT).to_string()))
            .filter(transactions::transaction_date.le(end.format(DATE_FORMAT).to_string()));
        if let Some(category) = category_id {
            query = query.filter(transactions::category_id.eq(category));
        }
        let amounts = query
            .select(transactions::amount)
            .load::<String>(&mut conn)
            .map_err(DatabaseError::QueryFailed)?;

        // Amounts are stored as text; rows that fail to parse contribute nothing.
        let total = amounts
            .iter()
            .filter_map(|a| Decimal::from_str(a.trim()).ok())
            .sum();
        Ok(total)
    }

    async fn insert_new_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        let mut conn = get_connection(&self.pool)?;
        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            user_id: new_transaction.user_id,
            category_id: new_transaction.category_id,
            amount: new_transaction.amount.to_string(),
            kind: new_transaction.kind.as_str().to_string(),
            transaction_date: new_transaction.transaction_date.format(DATE_FORMAT).to_string(),
            description: new_transaction.description,
            currency: new_transaction.currency.unwrap_or_else(|| "USD".to_string()),
            created_at: Utc::now().naive_utc(),
        };
        let inserted = diesel::insert_into(transactions::table)
            .values(&transaction)
            .get_result::<Transaction>(&mut conn)
            .map_err(DatabaseError::QueryFailed)?;
        Ok(inserted)
    }
}
