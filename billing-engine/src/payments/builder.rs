//! Payment record assembly
//!
//! The operator's form arrives loosely filled; this is where every
//! field gets its documented default so nothing NaN, null, or
//! undefined ever reaches persistence. The one hard failure is the
//! paid date: a record with a wrong renewal date corrupts every
//! following cycle, so a bad date fails the build.

use shared::models::{
    PaymentDraft, PaymentRecord, PaymentStatus, Settlement, ALL_PROVIDERS, BSNL,
};
use shared::util::now_millis;
use shared::AppResult;

use crate::commission::compute_commission;
use crate::renewal::{billing_month, date_to_millis, parse_paid_date, project_renewal};
use crate::settlement::money_eq;

/// Resolution context for fields the draft leaves blank
#[derive(Debug, Clone)]
pub struct CollectionContext {
    /// The provider filter currently active in the office UI;
    /// [`ALL_PROVIDERS`] when the operator is viewing everything
    pub active_provider: String,
}

impl CollectionContext {
    pub fn new(active_provider: impl Into<String>) -> Self {
        Self {
            active_provider: active_provider.into(),
        }
    }
}

/// Coerce an optional monetary field to a safe non-negative value.
///
/// Missing, NaN, or negative input becomes 0 — recording a
/// conservative zero beats blocking a cash transaction on a form
/// glitch.
pub fn sanitize_amount(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => v,
        _ => 0.0,
    }
}

/// Resolve the provider tag for a payment.
///
/// Explicit value wins; otherwise the active filter context; the
/// wildcard filter (or a blank context) falls back to BSNL.
pub fn resolve_source(explicit: Option<&str>, context: &CollectionContext) -> String {
    if let Some(source) = explicit
        && !source.trim().is_empty()
    {
        return source.to_string();
    }
    let active = context.active_provider.trim();
    if active.is_empty() || active == ALL_PROVIDERS {
        BSNL.to_string()
    } else {
        active.to_string()
    }
}

/// Assemble the persisted payment record from settlement output.
///
/// Field defaults: amounts coerced via [`sanitize_amount`], contact
/// fields normalized to empty strings, mode of payment defaults to
/// "Cash", commission falls back per the calculator's rules. Status is
/// `Paid` when the settlement leaves nothing pending. No storage side
/// effects.
pub fn build_payment_record(
    subscriber_id: i64,
    draft: &PaymentDraft,
    context: &CollectionContext,
    rate_percent: Option<f64>,
    settlement: &Settlement,
) -> AppResult<PaymentRecord> {
    let bill_amount = sanitize_amount(draft.bill_amount);
    let source = resolve_source(draft.source.as_deref(), context);
    let commission = compute_commission(bill_amount, rate_percent);

    let paid_date = parse_paid_date(draft.paid_date.as_deref().unwrap_or_default())?;
    let renewal_date = project_renewal(paid_date, &source)?;

    let status = if money_eq(settlement.final_pending_amount, 0.0) {
        PaymentStatus::Paid
    } else {
        PaymentStatus::Unpaid
    };

    Ok(PaymentRecord {
        payment_id: uuid::Uuid::new_v4().to_string(),
        subscriber_id,
        customer_name: draft.customer_name.clone().unwrap_or_default(),
        source,
        bill_amount,
        commission,
        mode_of_payment: draft
            .mode_of_payment
            .clone()
            .unwrap_or_else(|| "Cash".to_string()),
        mobile_no: draft.mobile_no.clone().unwrap_or_default(),
        email: draft.email.clone().unwrap_or_default(),
        status,
        settlement: *settlement,
        paid_date: date_to_millis(paid_date),
        renewal_date: date_to_millis(renewal_date),
        billing_month: billing_month(paid_date),
        created_at: now_millis(),
    })
}
