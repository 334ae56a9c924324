// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static NON_NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9.,]").unwrap());

/// Parse a human-entered amount. Contract: strip Unicode whitespace (space
/// and NBSP thousands separators), drop every character other than digits,
/// comma, and dot, treat commas as decimal dots, then parse. Anything that
/// still fails to parse (empty input, "1.2.3") is zero. Signs are dropped,
/// so the result is a magnitude.
pub fn normalize_amount(raw: &str) -> Decimal {
    let cleaned = WHITESPACE.replace_all(raw, "");
    let cleaned = NON_NUMERIC.replace_all(&cleaned, "");
    let cleaned = cleaned.replace(',', ".");
    cleaned.parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

/// "1234567" -> "1 234 567". Digits only; the caller handles sign and
/// fraction.
fn group_digits(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(*b as char);
    }
    out
}

/// Format a schedule figure with space-grouped thousands, e.g.
/// `1 234 567.89` or `1 234 568`.
pub fn format_amount(value: f64, with_decimals: bool) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let v = value.abs();
    if with_decimals {
        let s = format!("{:.2}", v);
        match s.split_once('.') {
            Some((int_part, frac)) => format!("{}{}.{}", sign, group_digits(int_part), frac),
            None => format!("{}{}", sign, group_digits(&s)),
        }
    } else {
        format!("{}{}", sign, group_digits(&format!("{:.0}", v)))
    }
}

/// Display form of a ledger amount: rounded to whole currency units
/// (midpoint away from zero), grouped with spaces. The stored amount is
/// left untouched.
pub fn format_decimal(d: &Decimal) -> String {
    let whole = d.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    group_digits(&whole.to_string())
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
