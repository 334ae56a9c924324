// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use mortcalc::cli::build_cli;

#[test]
fn calc_carries_landing_page_defaults() {
    let matches = build_cli().get_matches_from(["mortcalc", "calc"]);
    let Some(("calc", sub)) = matches.subcommand() else {
        panic!("no calc subcommand");
    };
    assert_eq!(sub.get_one::<String>("amount").unwrap(), "5 000 000");
    assert_eq!(sub.get_one::<String>("down").unwrap(), "1 000 000");
    assert_eq!(sub.get_one::<String>("years").unwrap(), "20");
    assert_eq!(sub.get_one::<String>("rate").unwrap(), "12");
    assert_eq!(sub.get_one::<String>("strategy").unwrap(), "reduce-payment");
    assert!(!sub.get_flag("installment"));
}

#[test]
fn prepayment_add_takes_month_and_amount_positionally() {
    let matches =
        build_cli().get_matches_from(["mortcalc", "prepayment", "add", "5", "10 000"]);
    let Some(("prepayment", prep)) = matches.subcommand() else {
        panic!("no prepayment subcommand");
    };
    let Some(("add", sub)) = prep.subcommand() else {
        panic!("no add subcommand");
    };
    assert_eq!(sub.get_one::<String>("month").unwrap(), "5");
    assert_eq!(sub.get_one::<String>("amount").unwrap(), "10 000");
}

#[test]
fn strategy_values_are_restricted() {
    let res = build_cli().try_get_matches_from(["mortcalc", "calc", "--strategy", "nope"]);
    assert!(res.is_err());

    let ok = build_cli().try_get_matches_from(["mortcalc", "calc", "--strategy", "reduce-term"]);
    assert!(ok.is_ok());
}

#[test]
fn export_format_is_restricted_and_defaults_to_csv() {
    let res = build_cli().try_get_matches_from(["mortcalc", "export", "schedule", "--format", "xls"]);
    assert!(res.is_err());

    let matches = build_cli().get_matches_from(["mortcalc", "export", "schedule"]);
    let Some(("export", export)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    let Some(("schedule", sub)) = export.subcommand() else {
        panic!("no schedule subcommand");
    };
    assert_eq!(sub.get_one::<String>("format").unwrap(), "csv");
    assert!(sub.get_one::<String>("out").is_none());
}
