// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use mortcalc::ledger::PrepaymentLedger;
use mortcalc::models::InstallmentMode;
use mortcalc::store::{load_from, load_settings_from, save_settings_to, save_to};
use tempfile::tempdir;

#[test]
fn missing_prepayments_file_reads_as_empty_ledger() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prepayments.json");

    let transport = load_from(&path).unwrap();
    assert_eq!(transport, "[]");
    assert!(PrepaymentLedger::hydrate(&transport).is_empty());
}

#[test]
fn prepayments_survive_a_save_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("prepayments.json");

    let mut ledger = PrepaymentLedger::new();
    ledger.add(6, "15 000").unwrap();
    ledger.add(2, "3 000").unwrap();

    save_to(&path, &ledger.serialize().unwrap()).unwrap();
    let rebuilt = PrepaymentLedger::hydrate(&load_from(&path).unwrap());
    assert_eq!(rebuilt, ledger);
}

#[test]
fn settings_round_trip_preserves_installment_state() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let mut mode = InstallmentMode::default();
    mode.enable(12.5);
    save_settings_to(&path, &mode).unwrap();

    let loaded = load_settings_from(&path);
    assert!(loaded.is_enabled());
    assert_eq!(loaded.saved_rate(), Some(12.5));
}

#[test]
fn corrupt_or_missing_settings_fall_back_to_default() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("settings.json");
    assert!(!load_settings_from(&missing).is_enabled());

    let corrupt = dir.path().join("corrupt.json");
    std::fs::write(&corrupt, "{not json").unwrap();
    assert!(!load_settings_from(&corrupt).is_enabled());
}
