// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};

use crate::commands::calc;
use crate::schedule::Schedule;
use crate::utils::format_amount;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("schedule", sub)) => export_schedule(sub),
        _ => Ok(()),
    }
}

fn export_schedule(sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = match sub.get_one::<String>("out") {
        Some(o) => o.clone(),
        None => format!(
            "payment_schedule_{}.{}",
            chrono::Local::now().format("%Y%m%d_%H%M%S"),
            fmt
        ),
    };

    let (_, schedule) = calc::compute(sub)?;
    write_schedule(&schedule, &fmt, &out)?;
    println!("Exported payment schedule to {}", out);
    Ok(())
}

/// Write a computed schedule to `out`. CSV is semicolon-delimited with
/// space-grouped amounts and `-` for months without a prepayment; JSON
/// carries the summary alongside the rows.
pub fn write_schedule(schedule: &Schedule, fmt: &str, out: &str) -> Result<()> {
    match fmt {
        "csv" => {
            let mut wtr = csv::WriterBuilder::new().delimiter(b';').from_path(out)?;
            wtr.write_record([
                "month", "payment", "principal", "interest", "prepayment", "balance",
            ])?;
            for r in &schedule.rows {
                wtr.write_record([
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
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(schedule)?)?;
        }
        _ => {
            return Err(anyhow!("Unknown format: {} (use csv|json)", fmt));
        }
    }
    Ok(())
}
