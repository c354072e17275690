use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::errors::Result;
use crate::notifications::notifications_model::{NewNotification, Notification};

#[async_trait]
pub trait NotificationRepositoryTrait: Send + Sync {
    fn load_notifications(&self, user_id: &str) -> Result<Vec<Notification>>;

    /// Whether a "budget" notification for this user+budget pair was created
    /// at or after `since`.
    fn has_recent_budget_alert(
        &self,
        user_id: &str,
        budget_id: &str,
        since: NaiveDateTime,
    ) -> Result<bool>;

    async fn insert_new_notification(
        &self,
        new_notification: NewNotification,
    ) -> Result<Notification>;

    async fn mark_read(&self, user_id: &str, notification_id: &str) -> Result<usize>;
}

#[async_trait]
pub trait NotificationServiceTrait: Send + Sync {
    fn get_notifications(&self, user_id: &str) -> Result<Vec<Notification>>;

    async fn mark_read(&self, user_id: &str, notification_id: &str) -> Result<usize>;
}
