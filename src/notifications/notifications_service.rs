use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::Result;
use crate::notifications::notifications_model::Notification;
use crate::notifications::notifications_traits::{
    NotificationRepositoryTrait, NotificationServiceTrait,
};

pub struct NotificationService<N: NotificationRepositoryTrait> {
    notification_repo: Arc<N>,
}

impl<N: NotificationRepositoryTrait> NotificationService<N> {
    pub fn new(notification_repo: Arc<N>) -> Self {
        NotificationService { notification_repo }
    }
}

#[async_trait]
impl<N: NotificationRepositoryTrait> NotificationServiceTrait for NotificationService<N> {
    fn get_notifications(&self, user_id: &str) -> Result<Vec<Notification>> {
        self.notification_repo.load_notifications(user_id)
    }

    async fn mark_read(&self, user_id: &str, notification_id: &str) -> Result<usize> {
        self.notification_repo.mark_read(user_id, notification_id).await
    }
}
