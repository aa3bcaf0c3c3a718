//! Network provider tags and commission rates
//!
//! The provider tag ("source") decides two things: the commission rate
//! looked up at collection time, and the renewal-cycle rule.

use serde::{Deserialize, Serialize};

/// Default provider when nothing else resolves
pub const BSNL: &str = "BSNL";

/// Wildcard value of the active provider filter ("show everything")
pub const ALL_PROVIDERS: &str = "All";

/// Commission percentage applied when a provider has no configured rate
pub const DEFAULT_COMMISSION_PERCENT: f64 = 30.0;

/// Per-provider commission rate row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommissionRate {
    pub provider: String,
    /// Percentage in [0, 100]
    pub rate_percent: f64,
    /// Unix millis of the last change
    pub updated_at: i64,
}
