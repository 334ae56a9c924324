// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::ledger::PrepaymentLedger;
use crate::models::{LoanParams, PaymentRow, PrepaymentStrategy, ScheduleSummary};
use crate::schedule::{self, Schedule};
use crate::store;
use crate::utils::{format_amount, maybe_print_json, normalize_amount, pretty_table};

/// Read loan parameters off the shared `--amount/--down/--years/--rate`
/// args, clamp them, and apply installment mode (the `--installment` flag
/// or the persisted toggle).
pub fn params_from_matches(sub: &clap::ArgMatches) -> Result<LoanParams> {
    let amount = normalize_amount(sub.get_one::<String>("amount").unwrap());
    let down = normalize_amount(sub.get_one::<String>("down").unwrap());
    let years = normalize_amount(sub.get_one::<String>("years").unwrap());
    let rate = normalize_amount(sub.get_one::<String>("rate").unwrap());

    let params = LoanParams {
        loan_amount: amount.to_f64().unwrap_or(0.0),
        down_payment: down.to_f64().unwrap_or(0.0),
        annual_rate: rate.to_f64().unwrap_or(0.0),
        years: years.to_u32().unwrap_or(0),
    }
    .clamped();

    let mode = store::load_settings()?;
    let annual_rate = if sub.get_flag("installment") {
        0.0
    } else {
        mode.effective_rate(params.annual_rate)
    };
    Ok(LoanParams { annual_rate, ..params })
}

pub fn strategy_from_matches(sub: &clap::ArgMatches) -> PrepaymentStrategy {
    match sub.get_one::<String>("strategy").map(String::as_str) {
        Some("reduce-term") => PrepaymentStrategy::ReduceTerm,
        _ => PrepaymentStrategy::ReducePayment,
    }
}

pub fn compute(sub: &clap::ArgMatches) -> Result<(LoanParams, Schedule)> {
    let params = params_from_matches(sub)?;
    let ledger = PrepaymentLedger::hydrate(&store::load_prepayments()?);
    let schedule = schedule::calculate(&params, ledger.entries(), strategy_from_matches(sub));
    Ok((params, schedule))
}

#[derive(Serialize)]
struct CalcOutput<'a> {
    params: &'a LoanParams,
    summary: &'a ScheduleSummary,
    schedule: &'a [PaymentRow],
}

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let (params, schedule) = compute(sub)?;
    let s = &schedule.summary;

    let out = CalcOutput {
        params: &params,
        summary: s,
        schedule: &schedule.rows,
    };
    if maybe_print_json(json_flag, jsonl_flag, &out)? {
        return Ok(());
    }

    println!("Loan amount:       {} ₽", format_amount(params.loan_amount, false));
    println!(
        "Down payment:      {} ₽ ({:.1}% of the loan)",
        format_amount(params.down_payment, false),
        s.down_percent
    );
    println!("Term:              {} years", params.years);
    println!("Rate:              {:.1}% annual", params.annual_rate);
    println!("Principal:         {} ₽", format_amount(s.principal, false));
    println!("Monthly payment:   {} ₽", format_amount(s.monthly_payment, true));
    println!("Total paid:        {} ₽", format_amount(s.total_paid, true));
    println!("Interest (overpayment): {} ₽", format_amount(s.overpayment, true));
    println!("Minimum income:    {} ₽", format_amount(s.min_income, true));

    if schedule.rows.is_empty() {
        println!("No schedule: the down payment covers the loan or the term is zero.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = schedule
        .rows
        .iter()
        .map(|r| {
            vec![
                r.month.to_string(),
                format_amount(r.payment, true),
                format_amount(r.principal, true),
                format_amount(r.interest, true),
                if r.prepayment > 0.0 {
                    format_amount(r.prepayment, true)
                } else {
                    "-".to_string()
                },
                format_amount(r.balance, true),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Month", "Payment", "Principal", "Interest", "Prepayment", "Balance"],
            rows,
        )
    );
    Ok(())
}
