pub mod alerts;
pub mod budgets;
pub mod db;
pub mod errors;
pub mod notifications;
pub mod schema;
pub mod transactions;
