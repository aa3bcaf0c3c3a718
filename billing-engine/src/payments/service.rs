//! Payment collection service
//!
//! One payment-entry event, end to end: duplicate guard, balance read,
//! settlement, record assembly, conditional balance write-back,
//! persistence. No UI anywhere in this flow — confirmation prompts and
//! notification dispatch live entirely outside the engine.

use std::sync::Arc;

use shared::models::{PaymentDraft, PaymentRecord, SettlementInput};
use shared::{AppError, AppResult};

use crate::payments::builder::{
    build_payment_record, resolve_source, sanitize_amount, CollectionContext,
};
use crate::renewal::{billing_month, parse_paid_date};
use crate::settlement::settle;
use crate::store::{CommissionRateStore, PaymentStore, SubscriberBalanceStore};

/// Orchestrates payment collection against the store boundaries.
///
/// Stores are injected so the whole flow is deterministic under test;
/// the service itself keeps no state between calls, so a failed store
/// write can never leave a settlement half-applied in memory.
pub struct PaymentService {
    balances: Arc<dyn SubscriberBalanceStore>,
    payments: Arc<dyn PaymentStore>,
    rates: Arc<dyn CommissionRateStore>,
}

impl PaymentService {
    pub fn new(
        balances: Arc<dyn SubscriberBalanceStore>,
        payments: Arc<dyn PaymentStore>,
        rates: Arc<dyn CommissionRateStore>,
    ) -> Self {
        Self {
            balances,
            payments,
            rates,
        }
    }

    /// Collect one payment for a subscriber.
    ///
    /// Rejects a second collection for the same subscriber and billing
    /// month before anything is built or written. The balance write is
    /// conditional on the version read at the start: if another
    /// settlement landed in between, this one fails with a conflict
    /// and nothing is applied. Failures are logged with their error
    /// code before propagating.
    pub async fn collect(
        &self,
        subscriber_id: i64,
        draft: PaymentDraft,
        context: &CollectionContext,
    ) -> AppResult<PaymentRecord> {
        match self.collect_inner(subscriber_id, draft, context).await {
            Ok(record) => Ok(record),
            Err(err) => {
                tracing::warn!(
                    subscriber_id,
                    code = err.code(),
                    error = %err,
                    "Payment collection failed"
                );
                Err(err)
            }
        }
    }

    async fn collect_inner(
        &self,
        subscriber_id: i64,
        draft: PaymentDraft,
        context: &CollectionContext,
    ) -> AppResult<PaymentRecord> {
        // A bad paid date fails before any store traffic
        let paid_date = parse_paid_date(draft.paid_date.as_deref().unwrap_or_default())?;
        let month = billing_month(paid_date);

        // One collection per subscriber per cycle
        if self.payments.duplicate_exists(subscriber_id, &month).await? {
            return Err(AppError::conflict(format!(
                "Payment for subscriber {} already recorded for {}",
                subscriber_id, month
            )));
        }

        let snapshot = self.balances.read(subscriber_id).await?;

        let input = SettlementInput {
            bill_amount: sanitize_amount(draft.bill_amount),
            use_wallet: draft.use_wallet,
            received_amount: sanitize_amount(draft.received_amount),
        };
        let settlement = settle(&snapshot.balance, &input)?;

        let source = resolve_source(draft.source.as_deref(), context);
        let rate = self.rates.rate_for(&source).await?;
        if rate.is_none() {
            tracing::warn!(
                provider = %source,
                "No commission rate configured, using default"
            );
        }

        let record = build_payment_record(subscriber_id, &draft, context, rate, &settlement)?;

        // Conditional write-back: a concurrent settlement surfaces as a
        // conflict here, with this record not yet persisted
        self.balances
            .write(
                subscriber_id,
                snapshot.version,
                settlement.final_wallet_balance,
                settlement.final_pending_amount,
                record.status,
            )
            .await?;

        // Idempotent on payment_id; a failure propagates and the caller
        // may retry the persist without re-settling
        self.payments.persist(&record).await?;

        tracing::info!(
            subscriber_id,
            payment_id = %record.payment_id,
            bill_amount = record.bill_amount,
            status = ?record.status,
            "Payment collected"
        );

        Ok(record)
    }
}
