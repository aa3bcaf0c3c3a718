//! Commission calculation
//!
//! Commission is the operator's cut of a bill, as a percentage looked
//! up per network provider. A payment is never blocked on a bad
//! commission config: a missing or garbage rate falls back to the
//! default, and a garbage bill contributes zero.

use rust_decimal::Decimal;
use shared::models::DEFAULT_COMMISSION_PERCENT;

use crate::settlement::{to_decimal, to_f64};

/// Compute the commission payable on a bill.
///
/// `bill_amount * rate_percent / 100`, rounded to 2 decimal places.
/// A missing or non-finite rate falls back to
/// [`DEFAULT_COMMISSION_PERCENT`]; a non-finite bill is treated as 0 so
/// the persisted record never carries NaN.
pub fn compute_commission(bill_amount: f64, rate_percent: Option<f64>) -> f64 {
    let rate = match rate_percent {
        Some(r) if r.is_finite() => r,
        _ => DEFAULT_COMMISSION_PERCENT,
    };
    let bill = if bill_amount.is_finite() {
        bill_amount
    } else {
        0.0
    };

    to_f64(to_decimal(bill) * to_decimal(rate) / Decimal::ONE_HUNDRED)
}
