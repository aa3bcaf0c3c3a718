//! Store boundaries
//!
//! The engine never talks to a database directly; it talks to these
//! traits. The in-memory implementations in [`memory`] back the test
//! suite and define the reference semantics (versioned conditional
//! balance writes, idempotent payment persistence) that a real
//! document-store adapter must honor.

pub mod memory;

// Re-exports
pub use memory::{MemoryBalanceStore, MemoryPaymentStore, MemoryRateStore};

use async_trait::async_trait;
use shared::models::{PaymentRecord, PaymentStatus, VersionedBalance};
use shared::AppError;
use thiserror::Error;

/// Store error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Version conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for store operations
pub type RepoResult<T> = Result<T, RepoError>;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(r) => AppError::not_found(r),
            RepoError::Duplicate(r) => AppError::conflict(r),
            RepoError::Conflict(r) => AppError::conflict(r),
            RepoError::Database(m) => AppError::database(m),
            RepoError::Validation(m) => AppError::validation(m),
        }
    }
}

/// Per-provider commission rate store.
///
/// Always an injected dependency, never ambient global state — the
/// calculator's callers receive it explicitly so tests stay
/// deterministic.
#[async_trait]
pub trait CommissionRateStore: Send + Sync {
    /// Configured rate for a provider, `None` when unset
    async fn rate_for(&self, provider: &str) -> RepoResult<Option<f64>>;

    /// Set a provider's rate (percentage in [0, 100])
    async fn set_rate(&self, provider: &str, rate_percent: f64) -> RepoResult<()>;
}

/// Subscriber wallet/pending balance store.
#[async_trait]
pub trait SubscriberBalanceStore: Send + Sync {
    /// Read the balance snapshot together with its version
    async fn read(&self, subscriber_id: i64) -> RepoResult<VersionedBalance>;

    /// Conditionally write the settled balance and status transition.
    ///
    /// Succeeds only when `expected_version` still matches the stored
    /// version; a stale version fails with [`RepoError::Conflict`] and
    /// leaves stored state untouched. Two concurrent settlements for
    /// one subscriber can therefore never silently overwrite each
    /// other.
    async fn write(
        &self,
        subscriber_id: i64,
        expected_version: u64,
        wallet_balance: f64,
        pending_amount: f64,
        status: PaymentStatus,
    ) -> RepoResult<()>;
}

/// Persisted payment records.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Whether a record already exists for this subscriber and billing
    /// month — one collection per cycle
    async fn duplicate_exists(&self, subscriber_id: i64, billing_month: &str) -> RepoResult<bool>;

    /// Persist a record, idempotent on `payment_id`; returns the id
    async fn persist(&self, record: &PaymentRecord) -> RepoResult<String>;

    /// All records for a subscriber, oldest first
    async fn list_by_subscriber(&self, subscriber_id: i64) -> RepoResult<Vec<PaymentRecord>>;
}
