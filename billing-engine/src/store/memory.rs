//! In-memory store implementations
//!
//! Reference semantics for the store traits: versioned conditional
//! balance writes and idempotent payment persistence. Used by the test
//! suite and as a drop-in for local runs without a database.

use async_trait::async_trait;
use dashmap::DashMap;
use shared::models::{
    CommissionRate, PaymentRecord, PaymentStatus, SubscriberBalance, VersionedBalance,
};
use shared::util::now_millis;

use super::{
    CommissionRateStore, PaymentStore, RepoError, RepoResult, SubscriberBalanceStore,
};

/// Commission rates keyed by provider tag
#[derive(Default)]
pub struct MemoryRateStore {
    rates: DashMap<String, CommissionRate>,
}

impl MemoryRateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommissionRateStore for MemoryRateStore {
    async fn rate_for(&self, provider: &str) -> RepoResult<Option<f64>> {
        Ok(self.rates.get(provider).map(|r| r.rate_percent))
    }

    async fn set_rate(&self, provider: &str, rate_percent: f64) -> RepoResult<()> {
        if !rate_percent.is_finite() || !(0.0..=100.0).contains(&rate_percent) {
            return Err(RepoError::Validation(format!(
                "rate_percent must be between 0 and 100, got {}",
                rate_percent
            )));
        }
        self.rates.insert(
            provider.to_string(),
            CommissionRate {
                provider: provider.to_string(),
                rate_percent,
                updated_at: now_millis(),
            },
        );
        Ok(())
    }
}

struct StoredBalance {
    wallet_balance: f64,
    pending_amount: f64,
    status: PaymentStatus,
    version: u64,
}

/// Subscriber balances with per-entry version counters
#[derive(Default)]
pub struct MemoryBalanceStore {
    balances: DashMap<i64, StoredBalance>,
}

impl MemoryBalanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or reset a subscriber's balance (test setup / onboarding)
    pub fn seed(&self, subscriber_id: i64, wallet_balance: f64, pending_amount: f64) {
        self.balances.insert(
            subscriber_id,
            StoredBalance {
                wallet_balance,
                pending_amount,
                status: PaymentStatus::Unpaid,
                version: 1,
            },
        );
    }

    /// Stored status for a subscriber (test inspection)
    pub fn status_of(&self, subscriber_id: i64) -> Option<PaymentStatus> {
        self.balances.get(&subscriber_id).map(|b| b.status)
    }
}

#[async_trait]
impl SubscriberBalanceStore for MemoryBalanceStore {
    async fn read(&self, subscriber_id: i64) -> RepoResult<VersionedBalance> {
        let stored = self
            .balances
            .get(&subscriber_id)
            .ok_or_else(|| RepoError::NotFound(format!("Subscriber {}", subscriber_id)))?;

        Ok(VersionedBalance {
            balance: SubscriberBalance::new(stored.wallet_balance, stored.pending_amount),
            version: stored.version,
        })
    }

    async fn write(
        &self,
        subscriber_id: i64,
        expected_version: u64,
        wallet_balance: f64,
        pending_amount: f64,
        status: PaymentStatus,
    ) -> RepoResult<()> {
        let mut stored = self
            .balances
            .get_mut(&subscriber_id)
            .ok_or_else(|| RepoError::NotFound(format!("Subscriber {}", subscriber_id)))?;

        if stored.version != expected_version {
            return Err(RepoError::Conflict(format!(
                "Subscriber {} balance changed (expected v{}, found v{})",
                subscriber_id, expected_version, stored.version
            )));
        }

        stored.wallet_balance = wallet_balance;
        stored.pending_amount = pending_amount;
        stored.status = status;
        stored.version += 1;
        Ok(())
    }
}

/// Payment records keyed by payment id
#[derive(Default)]
pub struct MemoryPaymentStore {
    records: DashMap<String, PaymentRecord>,
}

impl MemoryPaymentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl PaymentStore for MemoryPaymentStore {
    async fn duplicate_exists(
        &self,
        subscriber_id: i64,
        billing_month: &str,
    ) -> RepoResult<bool> {
        Ok(self.records.iter().any(|r| {
            r.subscriber_id == subscriber_id && r.billing_month == billing_month
        }))
    }

    async fn persist(&self, record: &PaymentRecord) -> RepoResult<String> {
        if self.records.contains_key(&record.payment_id) {
            // Idempotent: a retried persist is not an error
            tracing::debug!(payment_id = %record.payment_id, "Payment already exists, skipping");
            return Ok(record.payment_id.clone());
        }

        let mut stored = record.clone();
        if stored.created_at == 0 {
            stored.created_at = now_millis();
        }
        self.records.insert(stored.payment_id.clone(), stored);
        Ok(record.payment_id.clone())
    }

    async fn list_by_subscriber(&self, subscriber_id: i64) -> RepoResult<Vec<PaymentRecord>> {
        let mut records: Vec<PaymentRecord> = self
            .records
            .iter()
            .filter(|r| r.subscriber_id == subscriber_id)
            .map(|r| r.value().clone())
            .collect();
        records.sort_by_key(|r| r.paid_date);
        Ok(records)
    }
}
