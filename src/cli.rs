// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn loan_args(cmd: Command) -> Command {
    // Defaults mirror the calculator's landing page
    cmd.arg(
        Arg::new("amount")
            .long("amount")
            .help("Loan amount (separators and ₽ are fine, e.g. '5 000 000')")
            .default_value("5 000 000"),
    )
    .arg(
        Arg::new("down")
            .long("down")
            .help("Down payment; clamped to 15-70% of the loan")
            .default_value("1 000 000"),
    )
    .arg(
        Arg::new("years")
            .long("years")
            .help("Loan term in years")
            .default_value("20"),
    )
    .arg(
        Arg::new("rate")
            .long("rate")
            .help("Annual interest rate, percent (comma decimals accepted)")
            .default_value("12"),
    )
    .arg(
        Arg::new("strategy")
            .long("strategy")
            .help("What a prepayment reduces")
            .value_parser(["reduce-payment", "reduce-term"])
            .default_value("reduce-payment"),
    )
    .arg(
        Arg::new("installment")
            .long("installment")
            .help("Force an interest-free installment plan (rate 0%)")
            .action(ArgAction::SetTrue),
    )
}

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("mortcalc")
        .about("Mortgage annuity calculator with prepayment planning")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(Command::new("init").about("Show where calculator state is stored"))
        .subcommand(json_flags(loan_args(
            Command::new("calc").about("Compute the payment schedule"),
        )))
        .subcommand(
            Command::new("prepayment")
                .about("Manage scheduled prepayments")
                .subcommand(
                    Command::new("add")
                        .about("Schedule a prepayment (merged into an existing month by sum)")
                        .arg(Arg::new("month").help("Month of the loan, 1-based").required(true))
                        .arg(Arg::new("amount").help("Amount, e.g. '10 000'").required(true)),
                )
                .subcommand(
                    Command::new("remove")
                        .about("Remove a prepayment by its list position")
                        .arg(Arg::new("index").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("list").about("Show scheduled prepayments"),
                ))
                .subcommand(Command::new("clear").about("Drop all scheduled prepayments")),
        )
        .subcommand(
            Command::new("export")
                .about("Export computed data")
                .subcommand(loan_args(
                    Command::new("schedule")
                        .about("Write the payment schedule to a file")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .value_parser(["csv", "json"])
                                .default_value("csv"),
                        )
                        .arg(
                            Arg::new("out")
                                .long("out")
                                .help("Output file (default: timestamped name in the current dir)"),
                        ),
                )),
        )
        .subcommand(
            Command::new("installment")
                .about("Interest-free installment mode (rate shown as 0%)")
                .subcommand(
                    Command::new("on").arg(
                        Arg::new("rate")
                            .long("rate")
                            .help("Rate to remember for when the mode is turned off"),
                    ),
                )
                .subcommand(Command::new("off"))
                .subcommand(
                    Command::new("toggle").arg(
                        Arg::new("rate")
                            .long("rate")
                            .help("Rate to remember if this toggle turns the mode on"),
                    ),
                )
                .subcommand(Command::new("status")),
        )
}
