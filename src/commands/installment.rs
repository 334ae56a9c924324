// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::prelude::ToPrimitive;

use crate::store;
use crate::utils::normalize_amount;

// Rate remembered when the mode is enabled without --rate
const DEFAULT_RATE: f64 = 12.0;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("on", sub)) => on(sub)?,
        Some(("off", _)) => off()?,
        Some(("toggle", sub)) => toggle(sub)?,
        Some(("status", _)) => status()?,
        _ => {}
    }
    Ok(())
}

fn on(sub: &clap::ArgMatches) -> Result<()> {
    let rate = sub
        .get_one::<String>("rate")
        .map(|s| normalize_amount(s).to_f64().unwrap_or(DEFAULT_RATE))
        .unwrap_or(DEFAULT_RATE);

    let mut mode = store::load_settings()?;
    mode.enable(rate);
    store::save_settings(&mode)?;
    println!("Installment mode on: calculations use a 0% rate.");
    Ok(())
}

fn off() -> Result<()> {
    let mut mode = store::load_settings()?;
    match mode.disable() {
        Some(prev) => println!("Installment mode off: rate restored to {:.1}%.", prev),
        None => println!("Installment mode was already off."),
    }
    store::save_settings(&mode)?;
    Ok(())
}

fn toggle(sub: &clap::ArgMatches) -> Result<()> {
    let rate = sub
        .get_one::<String>("rate")
        .map(|s| normalize_amount(s).to_f64().unwrap_or(DEFAULT_RATE))
        .unwrap_or(DEFAULT_RATE);

    let mut mode = store::load_settings()?;
    match mode.toggle(rate) {
        Some(prev) => println!("Installment mode off: rate restored to {:.1}%.", prev),
        None => println!("Installment mode on: calculations use a 0% rate."),
    }
    store::save_settings(&mode)?;
    Ok(())
}

fn status() -> Result<()> {
    let mode = store::load_settings()?;
    if mode.is_enabled() {
        match mode.saved_rate() {
            Some(r) => println!("Installment mode: on (remembered rate {:.1}%)", r),
            None => println!("Installment mode: on"),
        }
    } else {
        println!("Installment mode: off");
    }
    Ok(())
}
