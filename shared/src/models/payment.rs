//! Payment models
//!
//! `PaymentDraft` is what the operator's form submits: loosely filled,
//! everything optional except the opt-in flag. The engine sanitizes it
//! into a `SettlementInput`, settles, and assembles the immutable
//! `PaymentRecord` that gets persisted.

use serde::{Deserialize, Serialize};

/// Payment status as persisted and shown in the office UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

/// Raw payment-entry input as submitted by the operator.
///
/// Amounts may be missing or garbage; the builder coerces them to safe
/// defaults instead of blocking a cash transaction on a form glitch.
/// The paid date is the exception: it must parse, because a wrong
/// renewal projection silently corrupts future cycles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentDraft {
    pub bill_amount: Option<f64>,
    pub received_amount: Option<f64>,
    /// Apply existing wallet credit to this bill (all-or-nothing)
    #[serde(default)]
    pub use_wallet: bool,
    /// Explicit provider tag; resolved against the active filter when absent
    pub source: Option<String>,
    pub mode_of_payment: Option<String>,
    pub customer_name: Option<String>,
    pub mobile_no: Option<String>,
    pub email: Option<String>,
    /// Payment date, `YYYY-MM-DD`
    pub paid_date: Option<String>,
}

/// Clean, non-negative settlement input (post-sanitization)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SettlementInput {
    pub bill_amount: f64,
    pub use_wallet: bool,
    pub received_amount: f64,
}

/// Outcome of settling one payment against a subscriber balance.
///
/// Exactly one of `new_pending_amount` and `new_excess_to_wallet` is
/// non-zero: a settlement cannot simultaneously owe money and bank
/// excess. `final_wallet_balance` always equals
/// `(wallet - used_wallet_amount) + new_excess_to_wallet`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    /// Wallet credit drawn down against bill + dues
    pub used_wallet_amount: f64,
    /// Debt carried into the next cycle
    pub new_pending_amount: f64,
    /// Overpayment banked back as wallet credit
    pub new_excess_to_wallet: f64,
    pub final_wallet_balance: f64,
    pub final_pending_amount: f64,
}

/// Persisted payment entry — the financial snapshot of one collection.
///
/// Immutable once persisted; corrective edits re-run the settlement and
/// produce a replacement record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Opaque unique id (idempotency key for persistence)
    pub payment_id: String,
    pub subscriber_id: i64,
    pub customer_name: String,
    /// Network provider tag
    pub source: String,
    pub bill_amount: f64,
    pub commission: f64,
    pub mode_of_payment: String,
    pub mobile_no: String,
    pub email: String,
    pub status: PaymentStatus,
    #[serde(flatten)]
    pub settlement: Settlement,
    /// Unix millis, midnight UTC of the payment date
    pub paid_date: i64,
    /// Unix millis, midnight UTC of the projected renewal date
    pub renewal_date: i64,
    /// Billing cycle key, `YYYY-MM` — one record per subscriber per cycle
    pub billing_month: String,
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_status_serializes_as_plain_strings() {
        assert_eq!(serde_json::to_string(&PaymentStatus::Paid).unwrap(), "\"Paid\"");
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Unpaid).unwrap(),
            "\"Unpaid\""
        );
    }

    #[test]
    fn test_draft_defaults_use_wallet_off() {
        let draft: PaymentDraft = serde_json::from_str("{}").unwrap();
        assert!(!draft.use_wallet);
        assert!(draft.bill_amount.is_none());
    }

    #[test]
    fn test_record_flattens_settlement_fields() {
        let record = PaymentRecord {
            payment_id: "p-1".to_string(),
            subscriber_id: 7,
            customer_name: "Asha".to_string(),
            source: "BSNL".to_string(),
            bill_amount: 500.0,
            commission: 150.0,
            mode_of_payment: "Cash".to_string(),
            mobile_no: String::new(),
            email: String::new(),
            status: PaymentStatus::Paid,
            settlement: Settlement {
                used_wallet_amount: 0.0,
                new_pending_amount: 0.0,
                new_excess_to_wallet: 0.0,
                final_wallet_balance: 0.0,
                final_pending_amount: 0.0,
            },
            paid_date: 0,
            renewal_date: 0,
            billing_month: "2024-01".to_string(),
            created_at: 0,
        };

        let json = serde_json::to_value(&record).unwrap();
        // Settlement fields land at the top level of the document
        assert!(json.get("used_wallet_amount").is_some());
        assert!(json.get("final_pending_amount").is_some());
        assert!(json.get("settlement").is_none());
    }
}
