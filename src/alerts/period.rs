//! Budget period window computation.
//!
//! A window is `[start, end]` where `end` is one millisecond before the next
//! period begins. Explicit `YYYY-MM` budgets map to that calendar month (UTC);
//! weekly budgets to the ISO week (Monday 00:00) containing the reference
//! date; monthly budgets to a window anchored on `period_start_day`.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveTime};

use crate::alerts::alerts_model::PeriodWindow;
use crate::budgets::budgets_model::{Budget, BudgetPeriodType};
use crate::errors::{Result, ValidationError};

pub fn period_window(budget: &Budget, reference: NaiveDate) -> Result<PeriodWindow> {
    if let Some(month) = budget.month.as_deref() {
        return month_window(month);
    }
    match budget.period() {
        BudgetPeriodType::Weekly => Ok(weekly_window(reference)),
        BudgetPeriodType::Monthly => Ok(anchored_monthly_window(reference, budget.anchor_day())),
    }
}

/// Window for an explicit month token, e.g. "2025-03". Anything after the
/// first seven characters is ignored.
fn month_window(token: &str) -> Result<PeriodWindow> {
    let token = token.get(0..7).unwrap_or(token);
    let start = token
        .split_once('-')
        .and_then(|(y, m)| {
            NaiveDate::from_ymd_opt(y.parse().ok()?, m.parse().ok()?, 1)
        })
        .ok_or_else(|| {
            ValidationError::InvalidInput(format!("invalid budget month token '{token}'"))
        })?;
    Ok(window_between(start, start + Months::new(1)))
}

fn weekly_window(reference: NaiveDate) -> PeriodWindow {
    let days_back = reference.weekday().num_days_from_monday() as i64;
    let start = reference - Duration::days(days_back);
    window_between(start, start + Duration::days(7))
}

fn anchored_monthly_window(reference: NaiveDate, anchor_day: u32) -> PeriodWindow {
    // Compare against the clamped anchor date so a reference on the last day
    // of a short month still starts a new window there.
    let this_anchor = date_on_anchor(reference.year(), reference.month(), anchor_day);
    let start = if reference >= this_anchor {
        this_anchor
    } else {
        let previous = reference - Months::new(1);
        date_on_anchor(previous.year(), previous.month(), anchor_day)
    };
    window_between(start, start + Months::new(1))
}

/// Anchor days past the end of a month clamp to its last day.
fn date_on_anchor(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| last_day_of_month(year, month))
}

fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MIN);
    first + Months::new(1) - Duration::days(1)
}

fn window_between(start: NaiveDate, next_start: NaiveDate) -> PeriodWindow {
    PeriodWindow {
        start: start.and_time(NaiveTime::MIN),
        end: next_start.and_time(NaiveTime::MIN) - Duration::milliseconds(1),
    }
}
