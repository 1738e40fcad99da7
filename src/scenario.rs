//! Scenario runner for what-if strategy comparisons
//!
//! Builds assumptions once, then runs the full staged pipeline for each
//! candidate strategy (insurance plan + financial inputs + optional capital
//! plan) and reduces the outputs to comparable scalars.

use serde::{Deserialize, Serialize};

use crate::assumptions::{Assumptions, InsurancePlan};
use crate::capital::CapitalPlan;
use crate::profile::{CarePreferences, Profile};
use crate::projection::FinancialInputs;
use crate::session::{Session, StageError};

/// One candidate strategy to evaluate
#[derive(Debug, Clone)]
pub struct StrategyScenario {
    /// Display label for reports
    pub label: String,
    pub plan: InsurancePlan,
    pub financial: FinancialInputs,
    pub capital_plan: Option<CapitalPlan>,
}

/// Reduced outcome of a full pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub label: String,

    /// Sum of all projected yearly healthcare costs
    pub lifetime_healthcare_cost: f64,

    /// Highest single-year healthcare cost
    pub peak_annual_cost: f64,

    /// Surplus in the final projected year
    pub final_surplus: f64,

    /// Sum of all deficit years
    pub total_shortfall: f64,

    /// First age with a projected deficit, if any
    pub first_deficit_age: Option<u8>,

    /// The ordered advisory list
    pub recommendations: Vec<String>,
}

/// Pre-built runner for batch what-if comparisons
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    assumptions: Assumptions,
}

impl ScenarioRunner {
    /// Create a runner with the default planning assumptions
    pub fn new() -> Self {
        Self {
            assumptions: Assumptions::default_planning(),
        }
    }

    /// Create a runner with custom assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    /// The runner's base assumptions
    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Run the full staged pipeline for one scenario
    pub fn run(
        &self,
        profile: &Profile,
        care_prefs: &CarePreferences,
        scenario: &StrategyScenario,
    ) -> Result<ScenarioOutcome, StageError> {
        let mut session = Session::new(self.assumptions.clone());

        session.submit_profile(profile.clone(), *care_prefs, scenario.plan.clone());
        session.submit_financial(scenario.financial.clone())?;
        session.submit_reconciliation()?;
        session.submit_recommendation(scenario.capital_plan.clone())?;

        let costs = session.cost_series().expect("profile stage just committed");
        let summary = costs.summary();
        let comparison = session
            .expense_comparison()
            .expect("reconciliation stage just committed");

        Ok(ScenarioOutcome {
            label: scenario.label.clone(),
            lifetime_healthcare_cost: summary.lifetime_total,
            peak_annual_cost: summary.peak_annual_cost,
            final_surplus: comparison.rows.last().map(|r| r.surplus).unwrap_or(0.0),
            total_shortfall: comparison.total_shortfall(),
            first_deficit_age: comparison.first_deficit_age(),
            recommendations: session
                .recommendations()
                .map(<[String]>::to_vec)
                .unwrap_or_default(),
        })
    }

    /// Run every scenario in order
    pub fn run_scenarios(
        &self,
        profile: &Profile,
        care_prefs: &CarePreferences,
        scenarios: &[StrategyScenario],
    ) -> Result<Vec<ScenarioOutcome>, StageError> {
        scenarios
            .iter()
            .map(|scenario| self.run(profile, care_prefs, scenario))
            .collect()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
