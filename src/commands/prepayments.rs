// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::ledger::PrepaymentLedger;
use crate::store;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(sub)?,
        Some(("remove", sub)) => remove(sub)?,
        Some(("list", sub)) => list(sub)?,
        Some(("clear", _)) => clear()?,
        _ => {}
    }
    Ok(())
}

fn load() -> Result<PrepaymentLedger> {
    Ok(PrepaymentLedger::hydrate(&store::load_prepayments()?))
}

fn persist(ledger: &PrepaymentLedger) -> Result<()> {
    store::save_prepayments(&ledger.serialize()?)
}

fn add(sub: &clap::ArgMatches) -> Result<()> {
    // Non-numeric month input falls through as 0 and gets the month error
    let month = sub
        .get_one::<String>("month")
        .unwrap()
        .trim()
        .parse::<i64>()
        .unwrap_or(0);
    let amount = sub.get_one::<String>("amount").unwrap();

    let mut ledger = load()?;
    ledger.add(month, amount)?;
    persist(&ledger)?;
    println!(
        "Scheduled prepayment for month {} ({} total)",
        month,
        ledger.len()
    );
    Ok(())
}

fn remove(sub: &clap::ArgMatches) -> Result<()> {
    let index = sub
        .get_one::<String>("index")
        .unwrap()
        .trim()
        .parse::<usize>()
        .unwrap_or(usize::MAX);

    let mut ledger = load()?;
    ledger.remove(index)?;
    persist(&ledger)?;
    println!("Removed prepayment #{} ({} left)", index, ledger.len());
    Ok(())
}

fn list(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let ledger = load()?;
    if maybe_print_json(json_flag, jsonl_flag, &ledger.entries())? {
        return Ok(());
    }
    if ledger.is_empty() {
        println!("No prepayments scheduled.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = ledger
        .render()
        .map(|r| vec![r.index.to_string(), format!("Month {}", r.month), r.amount])
        .collect();
    println!("{}", pretty_table(&["#", "Month", "Amount"], rows));
    Ok(())
}

fn clear() -> Result<()> {
    let mut ledger = load()?;
    ledger.clear();
    persist(&ledger)?;
    println!("Cleared all prepayments.");
    Ok(())
}
