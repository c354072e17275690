use async_trait::async_trait;

use crate::alerts::alerts_model::BudgetAlertEvent;

/// Seam between the write-path services and the threshold evaluator.
#[async_trait]
pub trait BudgetAlertTrait: Send + Sync {
    /// Fire-and-forget: never returns an error to the caller. Failures are
    /// logged and mean only that no notification was created.
    async fn evaluate(&self, user_id: &str, event: BudgetAlertEvent);
}
