use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::alerts::alerts_model::{BudgetAlertEvent, BUDGET_ALERT_CATEGORY};
use crate::alerts::alerts_traits::BudgetAlertTrait;
use crate::alerts::period::period_window;
use crate::budgets::budgets_model::Budget;
use crate::budgets::budgets_traits::BudgetRepositoryTrait;
use crate::errors::Result;
use crate::notifications::notifications_model::{NewNotification, NotificationPriority};
use crate::notifications::notifications_traits::NotificationRepositoryTrait;
use crate::transactions::transactions_model::TransactionKind;
use crate::transactions::transactions_traits::TransactionRepositoryTrait;

/// Placeholder policy pending product confirmation: repeat alerts for the
/// same user+budget are suppressed for this long, except for month-scoped
/// budgets evaluated at creation time.
const DEDUPE_WINDOW_HOURS: i64 = 12;

const EXCEEDED_THRESHOLD: Decimal = dec!(100);

/// Re-checks budget thresholds after a transaction or budget write and
/// creates "budget exceeded" notifications.
pub struct BudgetAlertService<B, T, N>
where
    B: BudgetRepositoryTrait,
    T: TransactionRepositoryTrait,
    N: NotificationRepositoryTrait,
{
    budget_repo: Arc<B>,
    transaction_repo: Arc<T>,
    notification_repo: Arc<N>,
}

impl<B, T, N> BudgetAlertService<B, T, N>
where
    B: BudgetRepositoryTrait,
    T: TransactionRepositoryTrait,
    N: NotificationRepositoryTrait,
{
    pub fn new(budget_repo: Arc<B>, transaction_repo: Arc<T>, notification_repo: Arc<N>) -> Self {
        BudgetAlertService {
            budget_repo,
            transaction_repo,
            notification_repo,
        }
    }

    async fn evaluate_inner(&self, user_id: &str, event: &BudgetAlertEvent) -> Result<()> {
        let candidates = self.candidate_budgets(user_id, event)?;
        log::debug!("{} candidate budget(s) for user {user_id}", candidates.len());

        for budget in &candidates {
            // One failing budget must not abort the rest.
            if let Err(e) = self.evaluate_budget(user_id, budget, event).await {
                log::warn!("budget alert check failed for budget {}: {e}", budget.id);
            }
        }
        Ok(())
    }

    fn candidate_budgets(&self, user_id: &str, event: &BudgetAlertEvent) -> Result<Vec<Budget>> {
        match event {
            BudgetAlertEvent::BudgetCreated { month, .. } => Ok(self
                .budget_repo
                .find_budget_for_month(user_id, event.category_id(), month)?
                .into_iter()
                .collect()),
            BudgetAlertEvent::TransactionRecorded { .. } => self
                .budget_repo
                .load_active_budgets_for_category(user_id, event.category_id()),
        }
    }

    async fn evaluate_budget(
        &self,
        user_id: &str,
        budget: &Budget,
        event: &BudgetAlertEvent,
    ) -> Result<()> {
        let Some(budget_amount) = budget.amount_decimal() else {
            log::debug!("budget {} has a non-numeric amount, skipping", budget.id);
            return Ok(());
        };
        if budget_amount <= Decimal::ZERO {
            log::debug!("budget {} has a non-positive amount, skipping", budget.id);
            return Ok(());
        }

        let reference = event.reference_date();
        let window = period_window(budget, reference)?;

        let current_spent = self.transaction_repo.sum_expenses_in_range(
            user_id,
            budget.category_id.as_deref(),
            window.start_date(),
            window.end_date(),
        )?;

        // The triggering expense may not be visible to the sum yet; count it
        // here when it lands inside the window.
        let mut new_spent = current_spent;
        if let BudgetAlertEvent::TransactionRecorded {
            amount,
            kind: TransactionKind::Expense,
            transaction_date,
            ..
        } = event
        {
            let txn_date = transaction_date.unwrap_or(reference);
            if window.contains(txn_date) {
                new_spent += *amount;
            }
        }

        let percent_after = new_spent / budget_amount * dec!(100);
        log::debug!(
            "budget {}: spent {new_spent} of {budget_amount} ({percent_after:.2}%)",
            budget.id
        );
        if percent_after < EXCEEDED_THRESHOLD {
            return Ok(());
        }

        // Month-scoped budgets bypass dedupe: creation-time overage should
        // always surface immediately.
        if budget.month.is_none() {
            let since = Utc::now().naive_utc() - Duration::hours(DEDUPE_WINDOW_HOURS);
            if self
                .notification_repo
                .has_recent_budget_alert(user_id, &budget.id, since)?
            {
                log::debug!(
                    "budget {} already notified within the last {DEDUPE_WINDOW_HOURS}h, skipping",
                    budget.id
                );
                return Ok(());
            }
        }

        let percent_rounded = percent_after.round().to_i64().unwrap_or(i64::MAX);
        let notification = NewNotification {
            user_id: user_id.to_string(),
            title: "Budget exceeded".to_string(),
            message: format!(
                "You have exceeded your budget of {budget_amount}. Spent: {new_spent}."
            ),
            category: BUDGET_ALERT_CATEGORY.to_string(),
            priority: NotificationPriority::High,
            action_url: Some("/budgets".to_string()),
            payload: Some(serde_json::json!({
                "budget_id": budget.id,
                "month": budget.month,
                "percent": percent_rounded,
            })),
            source_budget_id: Some(budget.id.clone()),
        };
        self.notification_repo
            .insert_new_notification(notification)
            .await?;
        log::debug!(
            "budget {} exceeded at {percent_rounded}%, notification created",
            budget.id
        );
        Ok(())
    }
}

#[async_trait]
impl<B, T, N> BudgetAlertTrait for BudgetAlertService<B, T, N>
where
    B: BudgetRepositoryTrait,
    T: TransactionRepositoryTrait,
    N: NotificationRepositoryTrait,
{
    async fn evaluate(&self, user_id: &str, event: BudgetAlertEvent) {
        if let Err(e) = self.evaluate_inner(user_id, &event).await {
            log::warn!("budget threshold evaluation aborted for user {user_id}: {e}");
        }
    }
}
