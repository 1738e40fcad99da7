//! Income, savings, and 401(k) projections

use serde::{Deserialize, Serialize};

use crate::assumptions::InsuranceType;

use super::series::CostSeries;

/// Financial capacity inputs as committed at the financial stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialInputs {
    /// Monthly gross income
    pub monthly_income: f64,

    /// Estimated tax rate (0-0.50)
    pub tax_rate: f64,

    /// Annual income growth (0-0.10); also used to inflate household and
    /// debt expenses during reconciliation
    pub income_growth: f64,

    /// Monthly household expenses
    pub monthly_expenses: f64,

    /// Monthly debt payment
    pub debt_monthly_payment: f64,

    /// Current savings balance
    pub savings_start: f64,

    /// Annual savings growth (0-0.10)
    pub savings_growth: f64,

    /// Annual savings contribution
    pub annual_contribution: f64,

    /// Annual employee 401(k) contribution
    pub contrib_401k_employee: f64,

    /// Annual employer 401(k) match
    pub contrib_401k_employer: f64,

    /// Annual 401(k) growth (0-0.10)
    pub growth_401k: f64,
}

impl Default for FinancialInputs {
    /// Typical planning defaults
    fn default() -> Self {
        Self {
            monthly_income: 5000.0,
            tax_rate: 0.25,
            income_growth: 0.02,
            monthly_expenses: 2500.0,
            debt_monthly_payment: 500.0,
            savings_start: 10_000.0,
            savings_growth: 0.03,
            annual_contribution: 3000.0,
            contrib_401k_employee: 4000.0,
            contrib_401k_employer: 2000.0,
            growth_401k: 0.05,
        }
    }
}

impl FinancialInputs {
    /// Monthly income net of tax
    pub fn net_monthly_income(&self) -> f64 {
        self.monthly_income * (1.0 - self.tax_rate)
    }

    /// Annual income net of tax
    pub fn net_annual_income(&self) -> f64 {
        self.net_monthly_income() * 12.0
    }

    /// Combined annual 401(k) contribution
    pub fn annual_401k_contribution(&self) -> f64 {
        self.contrib_401k_employee + self.contrib_401k_employer
    }

    /// Net monthly cash left for expenses after year-1 healthcare commitments
    ///
    /// Self-insured plans pay their own premiums out of monthly cash; for
    /// employer-based plans only the OOP share counts against it.
    pub fn available_monthly_cash(
        &self,
        costs: &CostSeries,
        insurance_type: InsuranceType,
    ) -> f64 {
        let first = costs.first_year();
        let premium_monthly = first.map(|r| r.premiums / 12.0).unwrap_or(0.0);
        let oop_monthly = first.map(|r| r.oop_cost / 12.0).unwrap_or(0.0);

        if insurance_type == InsuranceType::Marketplace {
            self.net_monthly_income() - premium_monthly - oop_monthly
        } else {
            self.net_monthly_income() - oop_monthly
        }
    }
}

/// Income, savings, and 401(k) series aligned to the cost series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialProjection {
    /// Net annual income per year, pure exponential growth
    pub income: Vec<f64>,

    /// Savings balance per year
    pub savings: Vec<f64>,

    /// 401(k) balance per year
    pub retirement: Vec<f64>,
}

impl FinancialProjection {
    /// Project all three series over `years` entries
    ///
    /// Savings and 401(k) are stateful recurrences where growth is applied
    /// to the balance BEFORE the year's contribution is added; the order is
    /// observable in every balance, so it must not be swapped.
    pub fn project(inputs: &FinancialInputs, years: usize) -> Self {
        let net_annual = inputs.net_annual_income();
        let income = (0..years)
            .map(|i| net_annual * (1.0 + inputs.income_growth).powi(i as i32))
            .collect();

        let mut savings = Vec::with_capacity(years);
        let mut balance = inputs.savings_start;
        for _ in 0..years {
            balance *= 1.0 + inputs.savings_growth;
            balance += inputs.annual_contribution;
            savings.push(balance);
        }

        let mut retirement = Vec::with_capacity(years);
        let mut value_401k = 0.0;
        let annual_contribution = inputs.annual_401k_contribution();
        for _ in 0..years {
            value_401k *= 1.0 + inputs.growth_401k;
            value_401k += annual_contribution;
            retirement.push(value_401k);
        }

        Self {
            income,
            savings,
            retirement,
        }
    }

    /// Number of projected years
    pub fn len(&self) -> usize {
        self.income.len()
    }

    pub fn is_empty(&self) -> bool {
        self.income.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::InsurancePlan;
    use crate::projection::series::CostYearRow;
    use approx::assert_relative_eq;

    #[test]
    fn test_income_growth() {
        let inputs = FinancialInputs::default();
        let projection = FinancialProjection::project(&inputs, 3);

        // 5000 * 0.75 * 12 = 45000 net annual
        assert_relative_eq!(projection.income[0], 45_000.0);
        assert_relative_eq!(projection.income[1], 45_000.0 * 1.02);
        assert_relative_eq!(projection.income[2], 45_000.0 * 1.02 * 1.02, max_relative = 1e-12);
    }

    #[test]
    fn test_savings_growth_before_contribution() {
        let inputs = FinancialInputs {
            savings_start: 10_000.0,
            savings_growth: 0.03,
            annual_contribution: 3000.0,
            ..Default::default()
        };
        let projection = FinancialProjection::project(&inputs, 2);

        // 10000 * 1.03 + 3000, not (10000 + 3000) * 1.03
        assert_relative_eq!(projection.savings[0], 13_300.0);
        assert_relative_eq!(projection.savings[1], 13_300.0 * 1.03 + 3000.0);
    }

    #[test]
    fn test_retirement_starts_from_zero() {
        let inputs = FinancialInputs {
            contrib_401k_employee: 4000.0,
            contrib_401k_employer: 2000.0,
            growth_401k: 0.05,
            ..Default::default()
        };
        let projection = FinancialProjection::project(&inputs, 2);

        assert_relative_eq!(projection.retirement[0], 6000.0);
        assert_relative_eq!(projection.retirement[1], 6000.0 * 1.05 + 6000.0);
    }

    #[test]
    fn test_series_lengths_match() {
        let inputs = FinancialInputs::default();
        let projection = FinancialProjection::project(&inputs, 56);
        assert_eq!(projection.len(), 56);
        assert_eq!(projection.savings.len(), 56);
        assert_eq!(projection.retirement.len(), 56);
    }

    #[test]
    fn test_available_monthly_cash() {
        let mut costs = CostSeries::new();
        costs.add_row(CostYearRow::new(30, 2400.0));
        let plan = InsurancePlan::national_average(InsuranceType::Marketplace, 0.05);
        costs.apply_insurance(&plan);

        let inputs = FinancialInputs::default();
        let net_monthly = inputs.net_monthly_income();

        // Marketplace pays its own premiums from monthly cash
        let marketplace = inputs.available_monthly_cash(&costs, InsuranceType::Marketplace);
        assert_relative_eq!(
            marketplace,
            net_monthly - 6550.0 / 12.0 - (2400.0 * 0.25) / 12.0
        );

        // Employer-based counts only the OOP share
        let employer = inputs.available_monthly_cash(&costs, InsuranceType::EmployerBased);
        assert_relative_eq!(employer, net_monthly - (2400.0 * 0.25) / 12.0);
    }
}
