use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::notifications;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPriority {
    Low,
    Medium,
    High,
}

impl NotificationPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationPriority::Low => "low",
            NotificationPriority::Medium => "medium",
            NotificationPriority::High => "high",
        }
    }
}

#[derive(Queryable, Identifiable, Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = notifications)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub message: String,
    /// Originating flow, e.g. "budget" for threshold alerts.
    pub category: String,
    pub priority: String,
    pub action_url: Option<String>,
    /// Structured JSON payload as stored.
    pub payload: Option<String>,
    /// Denormalised from the payload so the dedupe probe stays a plain
    /// indexed lookup.
    pub source_budget_id: Option<String>,
    pub is_read: bool,
    pub created_at: NaiveDateTime,
}

impl Notification {
    pub fn payload_json(&self) -> Option<serde_json::Value> {
        self.payload
            .as_deref()
            .and_then(|p| serde_json::from_str(p).ok())
    }
}

#[derive(Debug, Clone)]
pub struct NewNotification {
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub category: String,
    pub priority: NotificationPriority,
    pub action_url: Option<String>,
    pub payload: Option<serde_json::Value>,
    pub source_budget_id: Option<String>,
}
