// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A scheduled extra principal payment. `month` is 1-based from the start
/// of the loan; the ledger guarantees at most one entry per month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepaymentEntry {
    pub month: u32,
    pub amount: Decimal,
}

/// Which knob a prepayment turns: shrink the monthly payment over the
/// original term, or keep the payment and finish early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrepaymentStrategy {
    ReducePayment,
    ReduceTerm,
}

/// Loan inputs as entered by the user, before clamping.
#[derive(Debug, Clone, Serialize)]
pub struct LoanParams {
    pub loan_amount: f64,
    pub down_payment: f64,
    pub annual_rate: f64,
    pub years: u32,
}

impl LoanParams {
    /// Apply the lender's bounds: loan amount 500k..40M, rate 0..40%,
    /// down payment between 15% and 70% of the loan.
    pub fn clamped(mut self) -> Self {
        self.loan_amount = self.loan_amount.clamp(500_000.0, 40_000_000.0);
        self.annual_rate = self.annual_rate.clamp(0.0, 40.0);
        let min_dp = self.loan_amount * 0.15;
        let max_dp = self.loan_amount * 0.70;
        self.down_payment = self.down_payment.clamp(min_dp, max_dp);
        self
    }

    pub fn principal(&self) -> f64 {
        (self.loan_amount - self.down_payment).max(0.0)
    }

    pub fn months(&self) -> u32 {
        self.years.saturating_mul(12)
    }

    pub fn down_percent(&self) -> f64 {
        if self.loan_amount > 0.0 {
            (self.down_payment / self.loan_amount * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        }
    }
}

/// One line of the amortization schedule.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentRow {
    pub month: u32,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    pub prepayment: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ScheduleSummary {
    pub principal: f64,
    /// Initial annuity payment, before any prepayment recalculation.
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
    /// Interest only; prepayments are not an overpayment.
    pub overpayment: f64,
    /// Banks want the payment under 40% of income.
    pub min_income: f64,
    pub down_percent: f64,
}

/// Interest-free installment plan toggle. Two states; enabling remembers
/// the current rate so disabling can restore it. Independent of the ledger.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallmentMode {
    enabled: bool,
    saved_rate: Option<f64>,
}

impl InstallmentMode {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn saved_rate(&self) -> Option<f64> {
        self.saved_rate
    }

    /// Enabling twice keeps the first remembered rate.
    pub fn enable(&mut self, current_rate: f64) {
        if !self.enabled {
            self.saved_rate = Some(current_rate);
            self.enabled = true;
        }
    }

    /// Returns the rate to restore, if the mode was on.
    pub fn disable(&mut self) -> Option<f64> {
        if self.enabled {
            self.enabled = false;
            self.saved_rate.take()
        } else {
            None
        }
    }

    pub fn toggle(&mut self, current_rate: f64) -> Option<f64> {
        if self.enabled {
            self.disable()
        } else {
            self.enable(current_rate);
            None
        }
    }

    pub fn effective_rate(&self, requested: f64) -> f64 {
        if self.enabled { 0.0 } else { requested }
    }
}
