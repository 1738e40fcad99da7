//! Year-indexed output series for projections

use serde::{Deserialize, Serialize};

use crate::assumptions::InsurancePlan;

/// A single projected year of healthcare cost
///
/// Freshly generated rows carry the pre-insurance cost with zero premiums and
/// OOP; [`CostSeries::apply_insurance`] rewrites them into insured economics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostYearRow {
    /// Attained age for this year
    pub age: u8,

    /// Total healthcare cost for the year. Pre-insurance this is the raw care
    /// cost; once a plan is applied it becomes premiums + OOP.
    pub healthcare_cost: f64,

    /// Inflated annual premiums
    pub premiums: f64,

    /// Out-of-pocket share of the pre-insurance cost
    pub oop_cost: f64,

    /// Accumulated capital-fund value, populated once a capital-growth
    /// simulation is wired into the series
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital_total: Option<f64>,

    /// Running lifetime cost, populated alongside `capital_total`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cumulative_cost: Option<f64>,
}

impl CostYearRow {
    /// Create a pre-insurance row
    pub fn new(age: u8, healthcare_cost: f64) -> Self {
        Self {
            age,
            healthcare_cost,
            premiums: 0.0,
            oop_cost: 0.0,
            capital_total: None,
            cumulative_cost: None,
        }
    }
}

/// Ordered per-year healthcare cost series, current age through the horizon
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CostSeries {
    pub rows: Vec<CostYearRow>,
}

impl CostSeries {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, row: CostYearRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First projected year, if any
    pub fn first_year(&self) -> Option<&CostYearRow> {
        self.rows.first()
    }

    /// Highest single-year healthcare cost
    pub fn max_healthcare_cost(&self) -> f64 {
        self.rows
            .iter()
            .map(|row| row.healthcare_cost)
            .fold(0.0, f64::max)
    }

    /// Apply insurance economics to a freshly generated series
    ///
    /// Premiums for year i are the plan's inflated total; OOP is the plan's
    /// share of the pre-insurance cost. The yearly total is then REPLACED by
    /// premiums + OOP: only the OOP share of the raw care cost survives.
    pub fn apply_insurance(&mut self, plan: &InsurancePlan) {
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.premiums = plan.premium_at(i);
            row.oop_cost = row.healthcare_cost * plan.oop_pct;
            row.healthcare_cost = row.premiums + row.oop_cost;
        }
    }

    /// Final capital-fund value over final cumulative cost
    ///
    /// Defaults to 0 when either column is absent or the cumulative cost is
    /// zero; the pipeline does not populate the capital columns today, so the
    /// default is what callers will observe.
    pub fn capital_coverage_ratio(&self) -> f64 {
        match self.rows.last() {
            Some(&CostYearRow {
                capital_total: Some(capital),
                cumulative_cost: Some(cumulative),
                ..
            }) if cumulative != 0.0 => capital / cumulative,
            _ => 0.0,
        }
    }

    /// Summary statistics for display
    pub fn summary(&self) -> CostSummary {
        let first = self.first_year();
        CostSummary {
            years: self.len(),
            first_year_premiums: first.map(|r| r.premiums).unwrap_or(0.0),
            first_year_oop: first.map(|r| r.oop_cost).unwrap_or(0.0),
            first_year_total: first.map(|r| r.healthcare_cost).unwrap_or(0.0),
            lifetime_total: self.rows.iter().map(|r| r.healthcare_cost).sum(),
            peak_annual_cost: self.max_healthcare_cost(),
        }
    }
}

/// Summary statistics for a cost series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostSummary {
    pub years: usize,
    pub first_year_premiums: f64,
    pub first_year_oop: f64,
    pub first_year_total: f64,
    pub lifetime_total: f64,
    pub peak_annual_cost: f64,
}

/// A single projected year of the expense-vs-income comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseYearRow {
    pub age: u8,
    pub household: f64,
    pub debt: f64,
    pub premiums: f64,
    pub oop: f64,
    pub total_healthcare: f64,
    pub total_expenses: f64,
    pub income_plus_savings: f64,
    pub surplus: f64,
}

/// Ordered expense-vs-income comparison, aligned to the cost series
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseComparison {
    pub rows: Vec<ExpenseYearRow>,
}

impl ExpenseComparison {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, row: ExpenseYearRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The yearly surplus (negative = deficit) values
    pub fn surplus_values(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.surplus).collect()
    }

    /// Sum of all deficit years (zero or negative)
    pub fn total_shortfall(&self) -> f64 {
        self.rows
            .iter()
            .map(|row| row.surplus)
            .filter(|&s| s < 0.0)
            .sum()
    }

    /// First age with a projected deficit, if any
    pub fn first_deficit_age(&self) -> Option<u8> {
        self.rows
            .iter()
            .find(|row| row.surplus < 0.0)
            .map(|row| row.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::InsuranceType;
    use approx::assert_relative_eq;

    fn base_series() -> CostSeries {
        let mut series = CostSeries::new();
        series.add_row(CostYearRow::new(30, 2500.0));
        series.add_row(CostYearRow::new(31, 2575.0));
        series
    }

    #[test]
    fn test_apply_insurance_replaces_total() {
        let mut series = base_series();
        let plan = InsurancePlan {
            insurance_type: InsuranceType::EmployerBased,
            employee_premium: 2000.0,
            employer_premium: 6000.0,
            oop_pct: 0.15,
            premium_inflation: 0.05,
        };

        series.apply_insurance(&plan);

        let first = &series.rows[0];
        assert_relative_eq!(first.premiums, 8000.0);
        assert_relative_eq!(first.oop_cost, 375.0);
        // The pre-insurance 2500 is gone; only its OOP share survives
        assert_relative_eq!(first.healthcare_cost, 8375.0);

        let second = &series.rows[1];
        assert_relative_eq!(second.premiums, 8400.0);
        assert_relative_eq!(second.oop_cost, 2575.0 * 0.15);
        assert_relative_eq!(second.healthcare_cost, 8400.0 + 2575.0 * 0.15);
    }

    #[test]
    fn test_uninsured_keeps_full_cost() {
        let mut series = base_series();
        let plan = InsurancePlan::national_average(InsuranceType::Uninsured, 0.05);

        series.apply_insurance(&plan);

        // No premiums, 100% OOP: the total equals the raw care cost
        assert_relative_eq!(series.rows[0].premiums, 0.0);
        assert_relative_eq!(series.rows[0].healthcare_cost, 2500.0);
    }

    #[test]
    fn test_coverage_ratio_defaults_to_zero() {
        let series = base_series();
        assert_relative_eq!(series.capital_coverage_ratio(), 0.0);

        let empty = CostSeries::new();
        assert_relative_eq!(empty.capital_coverage_ratio(), 0.0);
    }

    #[test]
    fn test_coverage_ratio_when_populated() {
        let mut series = base_series();
        let last = series.rows.last_mut().unwrap();
        last.capital_total = Some(60_000.0);
        last.cumulative_cost = Some(80_000.0);
        assert_relative_eq!(series.capital_coverage_ratio(), 0.75);

        // A zero cumulative cost must not divide
        let last = series.rows.last_mut().unwrap();
        last.cumulative_cost = Some(0.0);
        assert_relative_eq!(series.capital_coverage_ratio(), 0.0);
    }

    #[test]
    fn test_shortfall_and_deficit_age() {
        let mut comparison = ExpenseComparison::new();
        for (age, surplus) in [(30u8, 100.0), (31, -40.0), (32, -60.0), (33, 10.0)] {
            comparison.add_row(ExpenseYearRow {
                age,
                household: 0.0,
                debt: 0.0,
                premiums: 0.0,
                oop: 0.0,
                total_healthcare: 0.0,
                total_expenses: 0.0,
                income_plus_savings: 0.0,
                surplus,
            });
        }

        assert_relative_eq!(comparison.total_shortfall(), -100.0);
        assert_eq!(comparison.first_deficit_age(), Some(31));
    }
}
