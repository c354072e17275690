pub mod alerts_model;
pub mod alerts_service;
pub mod alerts_traits;
pub mod period;

pub use alerts_model::{BudgetAlertEvent, PeriodWindow, BUDGET_ALERT_CATEGORY};
pub use alerts_service::BudgetAlertService;
pub use alerts_traits::BudgetAlertTrait;
pub use period::period_window;
