//! Expense-vs-income reconciliation

use super::financial::{FinancialInputs, FinancialProjection};
use super::series::{CostSeries, ExpenseComparison, ExpenseYearRow};

/// Combine cost, expense, and income series into the yearly comparison
///
/// Elementwise over the cost series' index range. Household and debt expenses
/// inflate at the income growth rate. Income for a year is the projected net
/// income PLUS the full savings balance, and the surplus is that total minus
/// total expenses. Panics if the financial projection is shorter than the
/// cost series; the session recomputes both together so lengths always agree.
pub fn compare_expenses(
    costs: &CostSeries,
    financial: &FinancialProjection,
    inputs: &FinancialInputs,
) -> ExpenseComparison {
    let mut comparison = ExpenseComparison::new();

    for (i, cost_row) in costs.rows.iter().enumerate() {
        let inflation = (1.0 + inputs.income_growth).powi(i as i32);
        let household = inputs.monthly_expenses * 12.0 * inflation;
        let debt = inputs.debt_monthly_payment * 12.0 * inflation;
        let total_healthcare = cost_row.premiums + cost_row.oop_cost;

        let total_expenses = household + debt + total_healthcare;
        let income_plus_savings = financial.income[i] + financial.savings[i];

        comparison.add_row(ExpenseYearRow {
            age: cost_row.age,
            household,
            debt,
            premiums: cost_row.premiums,
            oop: cost_row.oop_cost,
            total_healthcare,
            total_expenses,
            income_plus_savings,
            surplus: income_plus_savings - total_expenses,
        });
    }

    comparison
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::{Assumptions, InsurancePlan, InsuranceType};
    use crate::profile::{CarePreferences, Gender, HealthStatus, Profile};
    use crate::projection::engine::ProjectionEngine;
    use approx::assert_relative_eq;

    fn pipeline_to_comparison() -> (CostSeries, FinancialProjection, FinancialInputs) {
        let engine = ProjectionEngine::new(Assumptions::default_planning());
        let profile = Profile::single(30, Gender::Female, HealthStatus::Healthy);
        let prefs = CarePreferences {
            primary: true,
            ..Default::default()
        };

        let mut costs = engine.project_costs(&profile, &prefs);
        costs.apply_insurance(&InsurancePlan::national_average(
            InsuranceType::EmployerBased,
            0.05,
        ));

        let inputs = FinancialInputs::default();
        let financial = FinancialProjection::project(&inputs, costs.len());
        (costs, financial, inputs)
    }

    #[test]
    fn test_comparison_length_matches_costs() {
        let (costs, financial, inputs) = pipeline_to_comparison();
        let comparison = compare_expenses(&costs, &financial, &inputs);
        assert_eq!(comparison.len(), costs.len());
    }

    #[test]
    fn test_surplus_identity() {
        let (costs, financial, inputs) = pipeline_to_comparison();
        let comparison = compare_expenses(&costs, &financial, &inputs);

        for (i, row) in comparison.rows.iter().enumerate() {
            let expected = (financial.income[i] + financial.savings[i])
                - (row.household + row.debt + costs.rows[i].premiums + costs.rows[i].oop_cost);
            assert_relative_eq!(row.surplus, expected);
        }
    }

    #[test]
    fn test_expenses_inflate_at_income_growth() {
        let (costs, financial, inputs) = pipeline_to_comparison();
        let comparison = compare_expenses(&costs, &financial, &inputs);

        assert_relative_eq!(comparison.rows[0].household, 2500.0 * 12.0);
        assert_relative_eq!(comparison.rows[1].household, 2500.0 * 12.0 * 1.02);
        assert_relative_eq!(comparison.rows[0].debt, 500.0 * 12.0);
        assert_relative_eq!(comparison.rows[1].debt, 500.0 * 12.0 * 1.02);
    }

    #[test]
    fn test_healthcare_is_premiums_plus_oop() {
        let (costs, financial, inputs) = pipeline_to_comparison();
        let comparison = compare_expenses(&costs, &financial, &inputs);

        for (row, cost_row) in comparison.rows.iter().zip(costs.rows.iter()) {
            assert_relative_eq!(row.total_healthcare, cost_row.premiums + cost_row.oop_cost);
            // Post-insurance the series total IS premiums + OOP
            assert_relative_eq!(row.total_healthcare, cost_row.healthcare_cost);
        }
    }
}
