//! Renewal date projection
//!
//! BSNL subscriptions renew on a calendar-month cycle; every other
//! provider renews exactly 30 days after payment. Dates are parsed and
//! projected here, and converted to Unix millis at the service layer —
//! stores only ever see `i64`.

use chrono::{Datelike, Months, NaiveDate, NaiveTime, TimeDelta};
use shared::models::BSNL;
use shared::{AppError, AppResult};

/// Parse a payment date string (YYYY-MM-DD)
pub fn parse_paid_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::invalid_date(format!("Invalid date format: {}", date)))
}

/// Project the next renewal date from a payment date.
///
/// BSNL adds one calendar month; month-end overflow clamps to the last
/// day of the target month (2024-01-31 -> 2024-02-29). Every other
/// provider adds exactly 30 days. Arithmetic overflow (year out of
/// range) raises rather than silently defaulting.
pub fn project_renewal(paid_date: NaiveDate, provider: &str) -> AppResult<NaiveDate> {
    let projected = if provider == BSNL {
        paid_date.checked_add_months(Months::new(1))
    } else {
        paid_date.checked_add_signed(TimeDelta::days(30))
    };

    projected.ok_or_else(|| {
        AppError::invalid_date(format!(
            "Renewal projection out of range for {} ({})",
            paid_date, provider
        ))
    })
}

/// Billing cycle key for duplicate detection, `YYYY-MM`
pub fn billing_month(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Canonical timestamp for a calendar date: midnight UTC, Unix millis
pub fn date_to_millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}
