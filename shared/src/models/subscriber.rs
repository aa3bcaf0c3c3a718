//! Subscriber balance model

use serde::{Deserialize, Serialize};

/// The balance facts read at settlement time.
///
/// Both fields are non-negative: every producer of this type (stores,
/// settlement output) maintains that invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubscriberBalance {
    /// Pre-paid credit usable to offset future bills
    pub wallet_balance: f64,
    /// Unpaid dues carried over from prior cycles
    pub pending_amount: f64,
}

impl SubscriberBalance {
    pub fn new(wallet_balance: f64, pending_amount: f64) -> Self {
        Self {
            wallet_balance,
            pending_amount,
        }
    }
}

/// Balance snapshot together with its optimistic-concurrency version.
///
/// The version read here must accompany the eventual write-back; a
/// stale version means another settlement landed in between.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VersionedBalance {
    pub balance: SubscriberBalance,
    pub version: u64,
}
