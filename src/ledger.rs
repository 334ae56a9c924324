// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::PrepaymentEntry;
use crate::utils::{format_decimal, normalize_amount};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("invalid month: expected a whole month number of 1 or more")]
    InvalidMonth,
    #[error("invalid amount: expected a prepayment greater than zero")]
    InvalidAmount,
    #[error("no prepayment at position {0}")]
    OutOfRange(usize),
}

/// Read-only projection of one ledger entry for display. `index` is the
/// position in the current sort order and doubles as the removal handle.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub index: usize,
    pub month: u32,
    pub amount: String,
}

/// The authoritative list of scheduled prepayments: sorted ascending by
/// month, at most one entry per month, every amount strictly positive.
/// All mutation goes through `add`/`remove`/`clear`; the command layer
/// persists `serialize()` after each mutation so the schedule engine (or
/// the next invocation) sees a consistent snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrepaymentLedger {
    entries: Vec<PrepaymentEntry>,
}

impl PrepaymentLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from its transport form. Corrupt state must never
    /// take the calculator down: malformed JSON or entries that do not fit
    /// the `{month, amount}` shape yield an empty ledger. Entries that are
    /// well-formed but invalid (amount <= 0) are skipped; duplicate months
    /// are merged by sum, so hydration re-establishes every invariant.
    pub fn hydrate(serialized: &str) -> Self {
        let mut ledger = Self::default();
        let parsed: Vec<PrepaymentEntry> = match serde_json::from_str(serialized) {
            Ok(v) => v,
            Err(_) => return ledger,
        };
        for entry in parsed {
            let _ = ledger.insert(entry.month, entry.amount);
        }
        ledger
    }

    /// Record a prepayment. The raw amount is normalized from human input
    /// (see `utils::normalize_amount`); a month that already has an entry
    /// gets the new amount added onto it rather than a duplicate. On error
    /// the ledger is untouched.
    pub fn add(&mut self, month: i64, raw_amount: &str) -> Result<(), LedgerError> {
        if month < 1 || month > i64::from(u32::MAX) {
            return Err(LedgerError::InvalidMonth);
        }
        self.insert(month as u32, normalize_amount(raw_amount))
    }

    fn insert(&mut self, month: u32, amount: Decimal) -> Result<(), LedgerError> {
        if month == 0 {
            return Err(LedgerError::InvalidMonth);
        }
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount);
        }
        match self.entries.iter_mut().find(|e| e.month == month) {
            Some(existing) => existing.amount += amount,
            None => {
                self.entries.push(PrepaymentEntry { month, amount });
                self.entries.sort_by_key(|e| e.month);
            }
        }
        Ok(())
    }

    /// Remove the entry at `index` in the current sort order. Out of range
    /// is reported, not fatal, and leaves the ledger unchanged.
    pub fn remove(&mut self, index: usize) -> Result<(), LedgerError> {
        if index >= self.entries.len() {
            return Err(LedgerError::OutOfRange(index));
        }
        self.entries.remove(index);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Canonical transport form: a JSON array of `{month, amount}` objects
    /// in month order. Symmetric with `hydrate`.
    pub fn serialize(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    /// Lazy, restartable projection for presentation. Amounts are rounded
    /// to whole units for display only.
    pub fn render(&self) -> impl Iterator<Item = DisplayRow> + '_ {
        self.entries.iter().enumerate().map(|(index, e)| DisplayRow {
            index,
            month: e.month,
            amount: format!("{} ₽", format_decimal(&e.amount)),
        })
    }

    pub fn entries(&self) -> &[PrepaymentEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
