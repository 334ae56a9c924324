// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use mortcalc::models::{LoanParams, PrepaymentEntry, PrepaymentStrategy};
use mortcalc::schedule::calculate;
use rust_decimal::Decimal;

fn params(loan: f64, down: f64, rate: f64, years: u32) -> LoanParams {
    LoanParams {
        loan_amount: loan,
        down_payment: down,
        annual_rate: rate,
        years,
    }
}

fn prepay(month: u32, amount: i64) -> PrepaymentEntry {
    PrepaymentEntry {
        month,
        amount: Decimal::from(amount),
    }
}

#[test]
fn zero_rate_gives_level_principal_payments() {
    let s = calculate(
        &params(1_700_000.0, 500_000.0, 0.0, 10),
        &[],
        PrepaymentStrategy::ReducePayment,
    );

    assert_eq!(s.rows.len(), 120);
    assert_eq!(s.summary.principal, 1_200_000.0);
    assert_eq!(s.summary.monthly_payment, 10_000.0);
    assert_eq!(s.summary.total_paid, 1_200_000.0);
    assert_eq!(s.summary.overpayment, 0.0);
    assert_eq!(s.summary.min_income, 25_000.0);
    assert!(s.rows.iter().all(|r| r.payment == 10_000.0 && r.interest == 0.0));
    assert_eq!(s.rows.last().unwrap().balance, 0.0);
}

#[test]
fn annuity_payment_matches_closed_form() {
    // 1,000,000 at 12% over 12 months: classic annuity value
    let s = calculate(
        &params(1_500_000.0, 500_000.0, 12.0, 1),
        &[],
        PrepaymentStrategy::ReducePayment,
    );

    assert_eq!(s.rows.len(), 12);
    assert!((s.summary.monthly_payment - 88_848.79).abs() < 0.01);
    assert!((s.summary.total_interest - 66_185.46).abs() < 1.0);
    assert!(s.rows.last().unwrap().balance <= 0.01);
    // Interest share falls as the balance amortizes
    assert!(s.rows[0].interest > s.rows[11].interest);
}

#[test]
fn reduce_term_keeps_payment_and_finishes_early() {
    let s = calculate(
        &params(1_200_000.0, 0.0, 0.0, 10),
        &[prepay(5, 50_000)],
        PrepaymentStrategy::ReduceTerm,
    );

    assert_eq!(s.rows.len(), 115);
    assert_eq!(s.rows[4].prepayment, 50_000.0);
    assert_eq!(s.rows[4].balance, 1_100_000.0);
    assert!(s.rows.iter().all(|r| r.payment == 10_000.0));
    assert_eq!(s.rows.last().unwrap().balance, 0.0);
    // 115 level payments plus the prepayment: exactly the principal
    assert_eq!(s.summary.total_paid, 1_200_000.0);
}

#[test]
fn reduce_payment_shrinks_payment_and_keeps_term() {
    let s = calculate(
        &params(1_200_000.0, 0.0, 0.0, 10),
        &[prepay(5, 50_000)],
        PrepaymentStrategy::ReducePayment,
    );

    assert_eq!(s.rows.len(), 120);
    assert_eq!(s.rows[3].payment, 10_000.0);
    // 1,100,000 spread over the remaining 115 months
    assert!((s.rows[5].payment - 9_565.22).abs() < 0.01);
    assert!(s.rows.last().unwrap().balance <= 0.01);
}

#[test]
fn duplicate_months_are_summed_by_the_engine() {
    // The ledger already deduplicates; the engine tolerates raw input too
    let s = calculate(
        &params(1_200_000.0, 0.0, 0.0, 10),
        &[prepay(3, 40_000), prepay(3, 10_000)],
        PrepaymentStrategy::ReduceTerm,
    );
    assert_eq!(s.rows[2].prepayment, 50_000.0);
}

#[test]
fn overshooting_prepayment_is_clipped_to_the_balance() {
    let s = calculate(
        &params(100_000.0, 0.0, 0.0, 1),
        &[prepay(1, 200_000)],
        PrepaymentStrategy::ReduceTerm,
    );

    assert_eq!(s.rows.len(), 1);
    let row = &s.rows[0];
    assert!((row.prepayment - 91_666.67).abs() < 0.01);
    assert_eq!(row.balance, 0.0);
}

#[test]
fn down_payment_covering_the_loan_yields_empty_schedule() {
    let s = calculate(
        &params(1_000_000.0, 1_000_000.0, 12.0, 20),
        &[],
        PrepaymentStrategy::ReducePayment,
    );
    assert!(s.rows.is_empty());
    assert_eq!(s.summary.monthly_payment, 0.0);
    assert_eq!(s.summary.down_percent, 100.0);
}

#[test]
fn zero_term_yields_empty_schedule() {
    let s = calculate(
        &params(1_000_000.0, 200_000.0, 12.0, 0),
        &[],
        PrepaymentStrategy::ReducePayment,
    );
    assert!(s.rows.is_empty());
    assert_eq!(s.summary.total_paid, 0.0);
}

#[test]
fn balance_is_monotonically_decreasing() {
    let s = calculate(
        &params(3_000_000.0, 600_000.0, 9.5, 5),
        &[prepay(10, 100_000)],
        PrepaymentStrategy::ReducePayment,
    );
    for pair in s.rows.windows(2) {
        assert!(pair[1].balance <= pair[0].balance);
    }
    assert!(s.rows.last().unwrap().balance <= 0.01);
}
