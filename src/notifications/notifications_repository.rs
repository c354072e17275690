use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::db::{get_connection, DbPool};
use crate::errors::{DatabaseError, Result};
use crate::notifications::notifications_model::{NewNotification, Notification};
use crate::notifications::notifications_traits::NotificationRepositoryTrait;
use crate::schema::notifications;

pub struct NotificationRepository {
    pool: Arc<DbPool>,
}

impl NotificationRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        NotificationRepository { pool }
    }
}

#[async_trait]
impl NotificationRepositoryTrait for NotificationRepository {
    fn load_notifications(&self, user_id: &str) -> Result<Vec<Notification>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = notifications::table
            .filter(notifications::user_id.eq(user_id))
            .order(notifications::created_at.desc())
            .load::<Notification>(&mut conn)
            .map_err(DatabaseError::QueryFailed)?;
        Ok(rows)
    }

    fn has_recent_budget_alert(
        &self,
        user_id: &str,
        budget_id: &str,
        since: NaiveDateTime,
    ) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let found = notifications::table
            .filter(notifications::user_id.eq(user_id))
            .filter(notifications::category.eq(crate::alerts::BUDGET_ALERT_CATEGORY))
            .filter(notifications::source_budget_id.eq(budget_id))
            .filter(notifications::created_at.ge(since))
            .select(notifications::id)
            .first::<String>(&mut conn)
            .optional()
            .map_err(DatabaseError::QueryFailed)?;
        Ok(found.is_some())
    }

    async fn insert_new_notification(
        &self,
        new_notification: NewNotification,
    ) -> Result<Notification> {
        let mut conn = get_connection(&self.pool)?;
        let notification = Notification {
            id: Uuid::new_v4().to_string(),
            user_id: new_notification.user_id,
            title: new_notification.title,
            message: new_notification.message,
            category: new_notification.category,
            priority: new_notification.priority.as_str().to_string(),
            action_url: new_notification.action_url,
            payload: new_notification.payload.map(|p| p.to_string()),
            source_budget_id: new_notification.source_budget_id,
            is_read: false,
            created_at: Utc::now().naive_utc(),
        };
        let inserted = diesel::insert_into(notifications::table)
            .values(&notification)
            .get_result::<Notification>(&mut conn)
            .map_err(DatabaseError::QueryFailed)?;
        Ok(inserted)
    }

    async fn mark_read(&self, user_id: &str, notification_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;
        let updated = diesel::update(
            notifications::table
                .filter(notifications::id.eq(notification_id))
                .filter(notifications::user_id.eq(user_id)),
        )
        .set(notifications::is_read.eq(true))
        .execute(&mut conn)
        .map_err(DatabaseError::QueryFailed)?;
        Ok(updated)
    }
}
