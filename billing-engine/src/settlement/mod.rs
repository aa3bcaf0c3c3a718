//! Balance settlement using rust_decimal for precision
//!
//! This module is the financial core: given a subscriber's wallet
//! credit and carried-over dues, a bill amount, and the amount actually
//! tendered, it computes the wallet draw-down, the debt carried
//! forward, and any overpayment banked back as wallet credit.
//!
//! All calculations are done using `Decimal` internally, then converted
//! to `f64` for storage/serialization.

use rust_decimal::prelude::*;
use shared::models::{Settlement, SettlementInput, SubscriberBalance};
use shared::{AppError, AppResult};

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed monetary amount per field (₹10,000,000)
const MAX_AMOUNT: f64 = 10_000_000.0;

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field_name: &str) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::validation(format!(
            "{} must be a finite number, got {}",
            field_name, value
        )));
    }
    Ok(())
}

/// Validate a monetary field: finite, non-negative, within bounds
pub fn validate_amount(value: f64, field_name: &str) -> AppResult<()> {
    require_finite(value, field_name)?;
    if value < 0.0 {
        return Err(AppError::validation(format!(
            "{} must be non-negative, got {}",
            field_name, value
        )));
    }
    if value > MAX_AMOUNT {
        return Err(AppError::validation(format!(
            "{} exceeds maximum allowed ({}), got {}",
            field_name, MAX_AMOUNT, value
        )));
    }
    Ok(())
}

/// Convert f64 to Decimal for calculation
///
/// Input values should be pre-validated via [`validate_amount`] at the
/// boundary. If NaN/Infinity somehow reaches here, logs an error and
/// returns ZERO to avoid silent data corruption.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        // SAFETY: Decimal rounded to 2dp with inputs bounded by MAX_AMOUNT
        // (validated at boundary) is always within f64 representable range
        .expect("Decimal rounded to 2dp is always representable as f64")
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    let diff = (to_decimal(a) - to_decimal(b)).abs();
    diff < MONEY_TOLERANCE
}

/// Settle one payment against a subscriber balance.
///
/// The current charge stacks on top of any carried-over debt; wallet
/// application is all-or-nothing per the opt-in flag and never exceeds
/// either the wallet or the total payable; whatever the tendered amount
/// does not cover carries forward as debt, and any overpayment is
/// banked back into the wallet. A bill of 0 with existing dues still
/// settles those dues.
///
/// Inputs are expected pre-sanitized (the record builder's job); this
/// function still rejects negative or non-finite values outright rather
/// than producing a corrupt balance.
pub fn settle(balance: &SubscriberBalance, input: &SettlementInput) -> AppResult<Settlement> {
    validate_amount(balance.wallet_balance, "wallet_balance")?;
    validate_amount(balance.pending_amount, "pending_amount")?;
    validate_amount(input.bill_amount, "bill_amount")?;
    validate_amount(input.received_amount, "received_amount")?;

    let wallet = to_decimal(balance.wallet_balance);
    let pending = to_decimal(balance.pending_amount);
    let bill = to_decimal(input.bill_amount);
    let received = to_decimal(input.received_amount);

    // Current charge stacks on top of carried-over dues
    let total_payable = bill + pending;

    // Wallet application (all-or-nothing opt-in)
    let (used_wallet, net_payable) = if input.use_wallet && wallet > Decimal::ZERO {
        if wallet >= total_payable {
            (total_payable, Decimal::ZERO)
        } else {
            (wallet, total_payable - wallet)
        }
    } else {
        (Decimal::ZERO, total_payable)
    };

    // Settle the net against the amount actually tendered
    let (new_pending, excess_to_wallet) = if received >= net_payable {
        (Decimal::ZERO, received - net_payable)
    } else {
        (net_payable - received, Decimal::ZERO)
    };

    let final_wallet = (wallet - used_wallet) + excess_to_wallet;

    Ok(Settlement {
        used_wallet_amount: to_f64(used_wallet),
        new_pending_amount: to_f64(new_pending),
        new_excess_to_wallet: to_f64(excess_to_wallet),
        final_wallet_balance: to_f64(final_wallet),
        final_pending_amount: to_f64(new_pending),
    })
}

#[cfg(test)]
mod tests;
