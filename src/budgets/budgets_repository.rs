use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use crate::budgets::budgets_model::{Budget, BudgetPeriodType, NewBudget};
use crate::budgets::budgets_traits::BudgetRepositoryTrait;
use crate::db::{get_connection, DbPool};
use crate::errors::{DatabaseError, Result};
use crate::schema::budgets;

pub struct BudgetRepository {
    pool: Arc<DbPool>,
}

impl BudgetRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        BudgetRepository { pool }
    }
}

#[async_trait]
impl BudgetRepositoryTrait for BudgetRepository {
    fn load_budgets(&self, user_id: &str) -> Result<Vec<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = budgets::table
            .filter(budgets::user_id.eq(user_id))
            .order(budgets::created_at.desc())
            .load::<Budget>(&mut conn)
            .map_err(DatabaseError::QueryFailed)?;
        Ok(rows)
    }

    fn load_active_budgets_for_category(
        &self,
        user_id: &str,
        category_id: Option<&str>,
    ) -> Result<Vec<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = budgets::table
            .into_boxed()
            .filter(budgets::user_id.eq(user_id))
            .filter(budgets::is_active.eq(true));
        query = match category_id {
            Some(category) => query.filter(
                budgets::category_id
                    .is_null()
                    .or(budgets::category_id.eq(category)),
            ),
            // No category on the event: only category-agnostic budgets match.
            None => query.filter(budgets::category_id.is_null()),
        };
        let rows = query
            .load::<Budget>(&mut conn)
            .map_err(DatabaseError::QueryFailed)?;
        Ok(rows)
    }

    fn find_budget_for_month(
        &self,
        user_id: &str,
        category_id: Option<&str>,
        month: &str,
    ) -> Result<Option<Budget>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = budgets::table
            .into_boxed()
            .filter(budgets::user_id.eq(user_id))
            .filter(budgets::month.eq(month));
        query = match category_id {
            Some(category) => query.filter(
                budgets::category_id
                    .is_null()
                    .or(budgets::category_id.eq(category)),
            ),
            None => query.filter(budgets::category_id.is_null()),
        };
        let row = query
            .order(budgets::created_at.desc())
            .first::<Budget>(&mut conn)
            .optional()
            .map_err(DatabaseError::QueryFailed)?;
        Ok(row)
    }

    async fn insert_new_budget(&self, new_budget: NewBudget) -> Result<Budget> {
        let mut conn = get_connection(&self.pool)?;
        let budget = Budget {
            id: Uuid::new_v4().to_string(),
            user_id: new_budget.user_id,
            category_id: new_budget.category_id,
            amount: new_budget.amount.to_string(),
            month: new_budget.month,
            period_type: new_budget
                .period_type
                .unwrap_or(BudgetPeriodType::Monthly)
                .as_str()
                .to_string(),
            period_start_day: new_budget.period_start_day,
            is_active: true,
            description: new_budget.description,
            created_at: Utc::now().naive_utc(),
        };
        let inserted = diesel::insert_into(budgets::table)
            .values(&budget)
            .get_result::<Budget>(&mut conn)
            .map_err(DatabaseError::QueryFailed)?;
        Ok(inserted)
    }

    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        let deleted = diesel::delete(
            budgets::table
                .filter(budgets::id.eq(budget_id))
                .filter(budgets::user_id.eq(user_id)),
        )
        .execute(&mut conn)
        .map_err(DatabaseError::QueryFailed)?;
        Ok(deleted)
    }
}
