// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use mortcalc::{cli, commands, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Calculator state at {}", store::state_dir()?.display());
        }
        Some(("calc", sub)) => commands::calc::handle(sub)?,
        Some(("prepayment", sub)) => commands::prepayments::handle(sub)?,
        Some(("export", sub)) => commands::exporter::handle(sub)?,
        Some(("installment", sub)) => commands::installment::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
