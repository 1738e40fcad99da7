//! Capital care investment allocation
//!
//! A committed capital plan names a fund source and a three-way horizon
//! split. Today the plan is only forwarded into the recommendation stage;
//! it feeds no projected series until the capital-growth simulation is
//! wired into the cost rows.

use serde::{Deserialize, Serialize};

use crate::projection::{CostSeries, FinancialInputs};

/// Where the capital fund draws from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FundSource {
    /// Allocate a share of the current savings balance
    ExistingSavings {
        /// Percent of current savings to allocate (0-100)
        percent: f64,
    },
    /// Contribute from monthly income
    MonthlyIncome {
        /// Monthly contribution amount
        contribution: f64,
    },
}

/// Three-way split of invested funds across time horizons
///
/// Fractions in [0, 1]; short and mid come from the collaborator's sliders
/// (mid bounded by 100 minus short) and long takes the remainder, so the
/// three always sum to 1.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CapitalAllocation {
    pub short: f64,
    pub mid: f64,
    pub long: f64,
}

impl CapitalAllocation {
    /// Build a split from slider percentages; long-term takes the remainder
    pub fn from_percentages(short_pct: f64, mid_pct: f64) -> Self {
        let long_pct = 100.0 - short_pct - mid_pct;
        Self {
            short: short_pct / 100.0,
            mid: mid_pct / 100.0,
            long: long_pct / 100.0,
        }
    }

    /// Sum of the three fractions
    pub fn total(&self) -> f64 {
        self.short + self.mid + self.long
    }
}

/// A committed capital care investment strategy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapitalPlan {
    pub source: FundSource,
    pub allocation: CapitalAllocation,
}

impl CapitalPlan {
    /// Whether a monthly-income contribution exceeds estimated free cash
    ///
    /// Savings-sourced plans never draw on monthly cash.
    pub fn exceeds_free_cash(&self, inputs: &FinancialInputs, costs: &CostSeries) -> bool {
        match self.source {
            FundSource::MonthlyIncome { contribution } => {
                contribution > free_monthly_cash(inputs, costs)
            }
            FundSource::ExistingSavings { .. } => false,
        }
    }
}

/// Net monthly cash after household expenses, debt, and year-1 OOP share
pub fn free_monthly_cash(inputs: &FinancialInputs, costs: &CostSeries) -> f64 {
    let oop_monthly = costs
        .first_year()
        .map(|row| row.oop_cost / 12.0)
        .unwrap_or(0.0);

    inputs.net_monthly_income() - inputs.monthly_expenses - inputs.debt_monthly_payment
        - oop_monthly
}
