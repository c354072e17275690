use async_trait::async_trait;

use crate::budgets::budgets_model::{Budget, NewBudget};
use crate::errors::Result;

#[async_trait]
pub trait BudgetRepositoryTrait: Send + Sync {
    fn load_budgets(&self, user_id: &str) -> Result<Vec<Budget>>;

    /// Active budgets matched the way the threshold evaluator matches them:
    /// category-agnostic budgets always qualify; category-scoped budgets
    /// qualify only when the event carries the same category.
    fn load_active_budgets_for_category(
        &self,
        user_id: &str,
        category_id: Option<&str>,
    ) -> Result<Vec<Budget>>;

    /// The single newest budget for an exact user+month match, with the same
    /// category rule as above.
    fn find_budget_for_month(
        &self,
        user_id: &str,
        category_id: Option<&str>,
        month: &str,
    ) -> Result<Option<Budget>>;

    async fn insert_new_budget(&self, new_budget: NewBudget) -> Result<Budget>;

    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<usize>;
}

#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    fn get_budgets(&self, user_id: &str) -> Result<Vec<Budget>>;

    async fn create_budget(&self, new_budget: NewBudget) -> Result<Budget>;

    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<usize>;
}
