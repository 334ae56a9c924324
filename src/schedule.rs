// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use rust_decimal::prelude::ToPrimitive;

use crate::models::{
    LoanParams, PaymentRow, PrepaymentEntry, PrepaymentStrategy, ScheduleSummary,
};

#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct Schedule {
    pub summary: ScheduleSummary,
    #[serde(rename = "schedule")]
    pub rows: Vec<PaymentRow>,
}

fn annuity_payment(balance: f64, monthly_rate: f64, months: u32) -> f64 {
    if monthly_rate == 0.0 {
        return balance / f64::from(months);
    }
    let factor = (1.0 + monthly_rate).powi(months as i32);
    if factor > 1.0 {
        balance * monthly_rate * factor / (factor - 1.0)
    } else {
        balance / f64::from(months)
    }
}

/// Build the amortization schedule for an annuity loan with optional
/// prepayments. Prepayments land after the regular principal portion of
/// their month; with `ReducePayment` the annuity is re-derived over the
/// remaining term after each prepayment, with `ReduceTerm` the payment
/// stays and the loan simply finishes early.
pub fn calculate(
    params: &LoanParams,
    prepayments: &[PrepaymentEntry],
    strategy: PrepaymentStrategy,
) -> Schedule {
    let principal = params.principal();
    let months = params.months();

    if principal <= 0.0 || months == 0 {
        return Schedule {
            summary: ScheduleSummary {
                down_percent: params.down_percent(),
                ..ScheduleSummary::default()
            },
            rows: Vec::new(),
        };
    }

    let monthly_rate = params.annual_rate / 12.0 / 100.0;

    let mut by_month: BTreeMap<u32, f64> = BTreeMap::new();
    for p in prepayments {
        if p.month >= 1 {
            *by_month.entry(p.month).or_insert(0.0) += p.amount.to_f64().unwrap_or(0.0);
        }
    }

    let initial_payment = annuity_payment(principal, monthly_rate, months);

    let mut balance = principal;
    let mut rows: Vec<PaymentRow> = Vec::new();
    let mut total_interest = 0.0;
    let mut payment = initial_payment;
    let mut month: u32 = 1;
    // Runaway guard: a prepayment-heavy reduce-term plan still terminates
    let max_months = months.saturating_mul(3);

    while balance > 0.01 && month <= max_months {
        let interest = if monthly_rate == 0.0 {
            0.0
        } else {
            balance * monthly_rate
        };
        let principal_part = payment - interest;
        let mut prepayment = by_month.get(&month).copied().unwrap_or(0.0);

        balance -= principal_part;
        if prepayment > 0.0 {
            balance -= prepayment;
        }
        if balance < 0.0 {
            // Clip the prepayment so the recorded row never goes negative
            if prepayment > 0.0 {
                prepayment = (prepayment + balance).max(0.0);
            }
            balance = 0.0;
        }

        total_interest += interest;

        rows.push(PaymentRow {
            month,
            payment,
            principal: principal_part.max(0.0),
            interest: interest.max(0.0),
            prepayment,
            balance: balance.max(0.0),
        });

        if prepayment > 0.0 && balance > 0.01 && strategy == PrepaymentStrategy::ReducePayment {
            let remaining = months.saturating_sub(month).max(1);
            payment = annuity_payment(balance, monthly_rate, remaining);
        }

        month += 1;
    }

    let total_paid: f64 = rows.iter().map(|r| r.payment + r.prepayment).sum();
    let min_income = if initial_payment > 0.0 {
        initial_payment / 0.4
    } else {
        0.0
    };

    Schedule {
        summary: ScheduleSummary {
            principal,
            monthly_payment: initial_payment,
            total_paid,
            total_interest,
            overpayment: total_interest,
            min_income,
            down_percent: params.down_percent(),
        },
        rows,
    }
}
