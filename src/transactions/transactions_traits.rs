use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::transactions::transactions_model::{NewTransaction, Transaction};

#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    fn load_transactions(&self, user_id: &str) -> Result<Vec<Transaction>>;

    /// Sum of the user's expense transactions dated inside `[start, end]`
    /// (date-only, inclusive), limited to a category when one is given.
    fn sum_expenses_in_range(
        &self,
        user_id: &str,
        category_id: Option<&str>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Decimal>;

    async fn insert_new_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;
}

#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    fn get_transactions(&self, user_id: &str) -> Result<Vec<Transaction>>;

    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;
}
