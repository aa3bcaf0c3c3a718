use super::*;

fn balance(wallet: f64, pending: f64) -> SubscriberBalance {
    SubscriberBalance::new(wallet, pending)
}

fn input(bill: f64, use_wallet: bool, received: f64) -> SettlementInput {
    SettlementInput {
        bill_amount: bill,
        use_wallet,
        received_amount: received,
    }
}

#[test]
fn test_to_decimal_precision() {
    // Classic floating point problem: 0.1 + 0.2 != 0.3
    let a = 0.1_f64;
    let b = 0.2_f64;
    let sum_f64 = a + b;

    // f64 fails
    assert_ne!(sum_f64, 0.3);

    // Decimal succeeds
    let sum_dec = to_decimal(a) + to_decimal(b);
    assert_eq!(to_f64(sum_dec), 0.3);
}

#[test]
fn test_exact_payment_no_wallet_no_dues() {
    // walletBalance=0, pending=0, bill=500, useWallet=false, received=500
    let result = settle(&balance(0.0, 0.0), &input(500.0, false, 500.0)).unwrap();

    assert_eq!(result.used_wallet_amount, 0.0);
    assert_eq!(result.new_pending_amount, 0.0);
    assert_eq!(result.new_excess_to_wallet, 0.0);
    assert_eq!(result.final_wallet_balance, 0.0);
    assert_eq!(result.final_pending_amount, 0.0);
}

#[test]
fn test_partial_wallet_coverage_cleared_by_cash() {
    // wallet=200, pending=0, bill=500, useWallet=true, received=300
    // totalPayable=500, wallet covers 200 (net 300), received 300 clears it
    let result = settle(&balance(200.0, 0.0), &input(500.0, true, 300.0)).unwrap();

    assert_eq!(result.used_wallet_amount, 200.0);
    assert_eq!(result.new_pending_amount, 0.0);
    assert_eq!(result.new_excess_to_wallet, 0.0);
    assert_eq!(result.final_wallet_balance, 0.0);
    assert_eq!(result.final_pending_amount, 0.0);
}

#[test]
fn test_underpayment_carries_debt_forward() {
    // wallet=0, pending=100, bill=500, useWallet=false, received=400
    // totalPayable=600, received 400 < 600 -> 200 pending
    let result = settle(&balance(0.0, 100.0), &input(500.0, false, 400.0)).unwrap();

    assert_eq!(result.used_wallet_amount, 0.0);
    assert_eq!(result.new_pending_amount, 200.0);
    assert_eq!(result.new_excess_to_wallet, 0.0);
    assert_eq!(result.final_wallet_balance, 0.0);
    assert_eq!(result.final_pending_amount, 200.0);
}

#[test]
fn test_overpayment_banks_excess_to_wallet() {
    // wallet=0, pending=0, bill=500, useWallet=false, received=700
    let result = settle(&balance(0.0, 0.0), &input(500.0, false, 700.0)).unwrap();

    assert_eq!(result.new_excess_to_wallet, 200.0);
    assert_eq!(result.new_pending_amount, 0.0);
    assert_eq!(result.final_wallet_balance, 200.0);
    assert_eq!(result.final_pending_amount, 0.0);
}

#[test]
fn test_wallet_fully_covers_bill_and_dues() {
    // wallet=800, pending=100, bill=500, useWallet=true, received=0
    // totalPayable=600, wallet >= 600 -> netPayable=0, 200 stays in wallet
    let result = settle(&balance(800.0, 100.0), &input(500.0, true, 0.0)).unwrap();

    assert_eq!(result.used_wallet_amount, 600.0);
    assert_eq!(result.new_pending_amount, 0.0);
    assert_eq!(result.new_excess_to_wallet, 0.0);
    assert_eq!(result.final_wallet_balance, 200.0);
    assert_eq!(result.final_pending_amount, 0.0);
}

#[test]
fn test_wallet_opt_out_leaves_credit_untouched() {
    // Wallet exists but useWallet=false: the full amount must be tendered
    let result = settle(&balance(300.0, 0.0), &input(500.0, false, 500.0)).unwrap();

    assert_eq!(result.used_wallet_amount, 0.0);
    assert_eq!(result.final_wallet_balance, 300.0);
    assert_eq!(result.final_pending_amount, 0.0);
}

#[test]
fn test_zero_bill_still_settles_pending_dues() {
    // A 0 bill with carried-over dues still requires settlement
    let result = settle(&balance(0.0, 250.0), &input(0.0, false, 100.0)).unwrap();

    assert_eq!(result.new_pending_amount, 150.0);
    assert_eq!(result.new_excess_to_wallet, 0.0);
    assert_eq!(result.final_pending_amount, 150.0);
}

#[test]
fn test_wallet_draw_and_underpayment_combined() {
    // wallet=100, pending=50, bill=500, useWallet=true, received=300
    // totalPayable=550, wallet covers 100 (net 450), received 300 -> pending 150
    let result = settle(&balance(100.0, 50.0), &input(500.0, true, 300.0)).unwrap();

    assert_eq!(result.used_wallet_amount, 100.0);
    assert_eq!(result.new_pending_amount, 150.0);
    assert_eq!(result.new_excess_to_wallet, 0.0);
    assert_eq!(result.final_wallet_balance, 0.0);
    assert_eq!(result.final_pending_amount, 150.0);
}

#[test]
fn test_wallet_draw_and_overpayment_combined() {
    // wallet=100, pending=0, bill=500, useWallet=true, received=450
    // net 400, received 450 -> 50 excess banked on top of the emptied wallet
    let result = settle(&balance(100.0, 0.0), &input(500.0, true, 450.0)).unwrap();

    assert_eq!(result.used_wallet_amount, 100.0);
    assert_eq!(result.new_excess_to_wallet, 50.0);
    assert_eq!(result.new_pending_amount, 0.0);
    assert_eq!(result.final_wallet_balance, 50.0);
}

#[test]
fn test_fractional_amounts_keep_cents_exact() {
    // 0.1-style fractions must not drift through the settlement
    let result = settle(&balance(10.10, 0.0), &input(33.30, true, 23.20)).unwrap();

    assert_eq!(result.used_wallet_amount, 10.10);
    assert_eq!(result.new_pending_amount, 0.0);
    assert_eq!(result.new_excess_to_wallet, 0.0);
    assert_eq!(result.final_wallet_balance, 0.0);
}

#[test]
fn test_settlement_invariants_hold_across_grid() {
    // finalWallet >= 0, finalPending >= 0, wallet identity, mutual
    // exclusion of pending and excess, wallet draw within both bounds
    let amounts = [0.0, 0.01, 99.99, 250.0, 500.0, 1200.0];
    for &wallet in &amounts {
        for &pending in &amounts {
            for &bill in &amounts {
                for &received in &amounts {
                    for use_wallet in [false, true] {
                        let state = balance(wallet, pending);
                        let result =
                            settle(&state, &input(bill, use_wallet, received)).unwrap();

                        assert!(result.final_wallet_balance >= 0.0);
                        assert!(result.final_pending_amount >= 0.0);
                        assert!(
                            money_eq(
                                result.final_wallet_balance,
                                wallet - result.used_wallet_amount
                                    + result.new_excess_to_wallet
                            ),
                            "wallet identity broken for w={} p={} b={} r={} uw={}",
                            wallet,
                            pending,
                            bill,
                            received,
                            use_wallet
                        );
                        assert!(
                            !(result.new_pending_amount > 0.0
                                && result.new_excess_to_wallet > 0.0),
                            "pending and excess both positive"
                        );
                        assert!(result.used_wallet_amount <= wallet + f64::EPSILON);
                        assert!(
                            result.used_wallet_amount <= bill + pending + f64::EPSILON
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_negative_bill_rejected() {
    let err = settle(&balance(0.0, 0.0), &input(-1.0, false, 0.0)).unwrap_err();
    assert!(matches!(err, shared::AppError::Validation { .. }));
}

#[test]
fn test_negative_received_rejected() {
    let err = settle(&balance(0.0, 0.0), &input(100.0, false, -5.0)).unwrap_err();
    assert!(matches!(err, shared::AppError::Validation { .. }));
}

#[test]
fn test_nan_input_rejected() {
    let err = settle(&balance(0.0, 0.0), &input(f64::NAN, false, 0.0)).unwrap_err();
    assert!(matches!(err, shared::AppError::Validation { .. }));
}

#[test]
fn test_amount_above_cap_rejected() {
    let err = settle(&balance(0.0, 0.0), &input(10_000_001.0, false, 0.0)).unwrap_err();
    assert!(matches!(err, shared::AppError::Validation { .. }));
}

#[test]
fn test_money_eq_tolerance() {
    assert!(money_eq(100.0, 100.0));
    assert!(money_eq(100.004, 100.006)); // Both round inside the tolerance
    assert!(!money_eq(100.0, 100.02));
}
