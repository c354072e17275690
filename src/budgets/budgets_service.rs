use std::sync::Arc;

use async_trait::async_trait;

use crate::alerts::alerts_model::BudgetAlertEvent;
use crate::alerts::alerts_traits::BudgetAlertTrait;
use crate::budgets::budgets_model::{Budget, NewBudget};
use crate::budgets::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::errors::{Result, ValidationError};

pub struct BudgetService<R: BudgetRepositoryTrait, A: BudgetAlertTrait> {
    budget_repo: Arc<R>,
    alerts: Arc<A>,
}

impl<R: BudgetRepositoryTrait, A: BudgetAlertTrait> BudgetService<R, A> {
    pub fn new(budget_repo: Arc<R>, alerts: Arc<A>) -> Self {
        BudgetService { budget_repo, alerts }
    }
}

#[async_trait]
impl<R, A> BudgetServiceTrait for BudgetService<R, A>
where
    R: BudgetRepositoryTrait,
    A: BudgetAlertTrait,
{
    fn get_budgets(&self, user_id: &str) -> Result<Vec<Budget>> {
        self.budget_repo.load_budgets(user_id)
    }

    async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget> {
        if new_budget.amount.is_sign_negative() {
            return Err(ValidationError::InvalidInput(
                "Budget amount must not be negative".to_string(),
            )
            .into());
        }

        let budget = self.budget_repo.insert_new_budget(new_budget).await?;

        // Creation-time overage on a month-scoped budget surfaces immediately;
        // recurring budgets are only evaluated as transactions arrive.
        if let (Some(month), Some(amount)) = (budget.month.clone(), budget.amount_decimal()) {
            self.alerts
                .evaluate(
                    &budget.user_id,
                    BudgetAlertEvent::BudgetCreated {
                        category_id: budget.category_id.clone(),
                        amount,
                        month,
                    },
                )
                .await;
        }

        Ok(budget)
    }

    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<usize> {
        self.budget_repo.delete_budget(user_id, budget_id).await
    }
}
