use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::alerts::alerts_model::BudgetAlertEvent;
use crate::alerts::alerts_traits::BudgetAlertTrait;
use crate::errors::{Result, ValidationError};
use crate::transactions::transactions_model::{NewTransaction, Transaction};
use crate::transactions::transactions_traits::{
    TransactionRepositoryTrait, TransactionServiceTrait,
};

pub struct TransactionService<R: TransactionRepositoryTrait, A: BudgetAlertTrait> {
    transaction_repo: Arc<R>,
    alerts: Arc<A>,
}

impl<R: TransactionRepositoryTrait, A: BudgetAlertTrait> TransactionService<R, A> {
    pub fn new(transaction_repo: Arc<R>, alerts: Arc<A>) -> Self {
        TransactionService {
            transaction_repo,
            alerts,
        }
    }
}

#[async_trait]
impl<R, A> TransactionServiceTrait for TransactionService<R, A>
where
    R: TransactionRepositoryTrait,
    A: BudgetAlertTrait,
{
    fn get_transactions(&self, user_id: &str) -> Result<Vec<Transaction>> {
        self.transaction_repo.load_transactions(user_id)
    }

    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        if new_transaction.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Transaction amount must be positive".to_string(),
            )
            .into());
        }

        let event = BudgetAlertEvent::TransactionRecorded {
            category_id: new_transaction.category_id.clone(),
            amount: new_transaction.amount,
            kind: new_transaction.kind,
            transaction_date: Some(new_transaction.transaction_date),
        };

        let transaction = self
            .transaction_repo
            .insert_new_transaction(new_transaction)
            .await?;

        // Best-effort side channel; its outcome never affects the caller.
        self.alerts.evaluate(&transaction.user_id, event).await;

        Ok(transaction)
    }
}
