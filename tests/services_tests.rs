//! Write-path service tests: validation and the alert events fired after
//! each insert.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use budget_tracker_core::alerts::{BudgetAlertEvent, BudgetAlertTrait};
use budget_tracker_core::budgets::{
    Budget, BudgetPeriodType, BudgetRepositoryTrait, BudgetService, BudgetServiceTrait, NewBudget,
};
use budget_tracker_core::errors::{Error, Result};
use budget_tracker_core::notifications::{
    NewNotification, Notification, NotificationRepositoryTrait, NotificationService,
    NotificationServiceTrait,
};
use budget_tracker_core::transactions::{
    NewTransaction, Transaction, TransactionKind, TransactionRepositoryTrait, TransactionService,
    TransactionServiceTrait,
};

#[derive(Default)]
struct AlertRecorder {
    events: Mutex<Vec<(String, BudgetAlertEvent)>>,
}

#[async_trait]
impl BudgetAlertTrait for AlertRecorder {
    async fn evaluate(&self, user_id: &str, event: BudgetAlertEvent) {
        self.events
            .lock()
            .unwrap()
            .push((user_id.to_string(), event));
    }
}

#[derive(Default)]
struct StubTransactionRepo;

#[async_trait]
impl TransactionRepositoryTrait for StubTransactionRepo {
    fn load_transactions(&self, _user_id: &str) -> Result<Vec<Transaction>> {
        Ok(vec![])
    }

    fn sum_expenses_in_range(
        &self,
        _user_id: &str,
        _category_id: Option<&str>,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<Decimal> {
        Ok(Decimal::ZERO)
    }

    async fn insert_new_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        Ok(Transaction {
            id: "t-1".to_string(),
            user_id: new_transaction.user_id,
            category_id: new_transaction.category_id,
            amount: new_transaction.amount.to_string(),
            kind: new_transaction.kind.as_str().to_string(),
            transaction_date: new_transaction
                .transaction_date
                .format("%Y-%m-%d")
                .to_string(),
            description: new_transaction.description,
            currency: new_transaction.currency.unwrap_or_else(|| "USD".to_string()),
            created_at: Utc::now().naive_utc(),
        })
    }
}

#[derive(Default)]
struct StubBudgetRepo;

#[async_trait]
impl BudgetRepositoryTrait for StubBudgetRepo {
    fn load_budgets(&self, _user_id: &str) -> Result<Vec<Budget>> {
        Ok(vec![])
    }

    fn load_active_budgets_for_category(
        &self,
        _user_id: &str,
        _category_id: Option<&str>,
    ) -> Result<Vec<Budget>> {
        Ok(vec![])
    }

    fn find_budget_for_month(
        &self,
        _user_id: &str,
        _category_id: Option<&str>,
        _month: &str,
    ) -> Result<Option<Budget>> {
        Ok(None)
    }

    async fn insert_new_budget(&self, new_budget: NewBudget) -> Result<Budget> {
        Ok(Budget {
            id: "b-1".to_string(),
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
        })
    }

    async fn delete_budget(&self, _user_id: &str, _budget_id: &str) -> Result<usize> {
        Ok(1)
    }
}

#[derive(Default)]
struct StubNotificationRepo {
    read_ids: Mutex<Vec<String>>,
}

#[async_trait]
impl NotificationRepositoryTrait for StubNotificationRepo {
    fn load_notifications(&self, user_id: &str) -> Result<Vec<Notification>> {
        Ok(vec![Notification {
            id: "n-1".to_string(),
            user_id: user_id.to_string(),
            title: "Budget exceeded".to_string(),
            message: "You have exceeded your budget of 100. Spent: 150.".to_string(),
            category: "budget".to_string(),
            priority: "high".to_string(),
            action_url: Some("/budgets".to_string()),
            payload: None,
            source_budget_id: Some("b-1".to_string()),
            is_read: false,
            created_at: Utc::now().naive_utc(),
        }])
    }

    fn has_recent_budget_alert(
        &self,
        _user_id: &str,
        _budget_id: &str,
        _since: chrono::NaiveDateTime,
    ) -> Result<bool> {
        Ok(false)
    }

    async fn insert_new_notification(
        &self,
        _new_notification: NewNotification,
    ) -> Result<Notification> {
        unimplemented!("not exercised by these tests")
    }

    async fn mark_read(&self, _user_id: &str, notification_id: &str) -> Result<usize> {
        self.read_ids
            .lock()
            .unwrap()
            .push(notification_id.to_string());
        Ok(1)
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_transaction(amount: Decimal) -> NewTransaction {
    NewTransaction {
        user_id: "user-1".to_string(),
        category_id: Some("food".to_string()),
        amount,
        kind: TransactionKind::Expense,
        transaction_date: date(2025, 3, 15),
        description: Some("lunch".to_string()),
        currency: None,
    }
}

#[tokio::test]
async fn creating_a_transaction_fires_a_transaction_event() {
    let alerts = Arc::new(AlertRecorder::default());
    let service = TransactionService::new(Arc::new(StubTransactionRepo), alerts.clone());

    let transaction = service.create_transaction(new_transaction(dec!(42))).await.unwrap();
    assert_eq!(transaction.currency, "USD");

    let events = alerts.events.lock().unwrap();
    assert_eq!(events.len(), 1);
    let (user_id, event) = &events[0];
    assert_eq!(user_id, "user-1");
    assert_eq!(
        event,
        &BudgetAlertEvent::TransactionRecorded {
            category_id: Some("food".to_string()),
            amount: dec!(42),
            kind: TransactionKind::Expense,
            transaction_date: Some(date(2025, 3, 15)),
        }
    );
}

#[tokio::test]
async fn non_positive_transaction_amounts_are_rejected_before_any_write() {
    let alerts = Arc::new(AlertRecorder::default());
    let service = TransactionService::new(Arc::new(StubTransactionRepo), alerts.clone());

    let err = service.create_transaction(new_transaction(dec!(0))).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(alerts.events.lock().unwrap().is_empty());
}

#[tokio::test]
async fn creating_a_month_scoped_budget_fires_a_budget_created_event() {
    let alerts = Arc::new(AlertRecorder::default());
    let service = BudgetService::new(Arc::new(StubBudgetRepo), alerts.clone());

    service
        .create_budget(NewBudget {
            user_id: "user-1".to_string(),
            category_id: Some("travel".to_string()),
            amount: dec!(300),
            month: Some("2025-03".to_string()),
            period_type: None,
            period_start_day: None,
            description: None,
        })
        .await
        .unwrap();

    let events = alerts.events.lock().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].1,
        BudgetAlertEvent::BudgetCreated {
            category_id: Some("travel".to_string()),
            amount: dec!(300),
            month: "2025-03".to_string(),
        }
    );
}

#[tokio::test]
async fn creating_a_recurring_budget_fires_no_event() {
    let alerts = Arc::new(AlertRecorder::default());
    let service = BudgetService::new(Arc::new(StubBudgetRepo), alerts.clone());

    service
        .create_budget(NewBudget {
            user_id: "user-1".to_string(),
            category_id: None,
            amount: dec!(1000),
            month: None,
            period_type: Some(BudgetPeriodType::Weekly),
            period_start_day: None,
            description: None,
        })
        .await
        .unwrap();

    assert!(alerts.events.lock().unwrap().is_empty());
}

#[tokio::test]
async fn notification_service_delegates_to_its_repository() {
    let repo = Arc::new(StubNotificationRepo::default());
    let service = NotificationService::new(repo.clone());

    let notifications = service.get_notifications("user-1").unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].category, "budget");

    assert_eq!(service.mark_read("user-1", "n-1").await.unwrap(), 1);
    assert_eq!(repo.read_ids.lock().unwrap().as_slice(), ["n-1"]);
}

#[tokio::test]
async fn negative_budget_amounts_are_rejected() {
    let alerts = Arc::new(AlertRecorder::default());
    let service = BudgetService::new(Arc::new(StubBudgetRepo), alerts.clone());

    let err = service
        .create_budget(NewBudget {
            user_id: "user-1".to_string(),
            category_id: None,
            amount: dec!(-5),
            month: None,
            period_type: None,
            period_start_day: None,
            description: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert!(alerts.events.lock().unwrap().is_empty());
}
