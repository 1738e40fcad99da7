//! Staged planning session
//!
//! The pipeline runs as four ordered stages, each holding an immutable
//! committed output bundle. Submitting a stage requires the previous stage's
//! commit and recomputes its outputs wholesale; resubmitting any stage
//! clears every stage after it, so downstream outputs can never outlive the
//! inputs they were derived from.

use std::fmt;

use thiserror::Error;

use crate::advice::recommend;
use crate::assumptions::{Assumptions, InsurancePlan, RiskTrajectory};
use crate::capital::CapitalPlan;
use crate::profile::{CarePreferences, Profile};
use crate::projection::{
    compare_expenses, CostSeries, ExpenseComparison, FinancialInputs, FinancialProjection,
    ProjectionEngine,
};

/// One of the four ordered pipeline stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Profile,
    Financial,
    Reconciliation,
    Recommendation,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Profile => "profile",
            Stage::Financial => "financial",
            Stage::Reconciliation => "reconciliation",
            Stage::Recommendation => "recommendation",
        };
        f.write_str(name)
    }
}

/// Stage sequencing violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageError {
    #[error("{missing} stage must be submitted before {attempted}")]
    NotSubmitted { missing: Stage, attempted: Stage },
}

/// Committed output of the profile stage
#[derive(Debug, Clone)]
pub struct ProfileStage {
    pub profile: Profile,
    pub care_prefs: CarePreferences,
    pub plan: InsurancePlan,
    /// Cost series with insurance economics applied
    pub costs: CostSeries,
    pub risk: RiskTrajectory,
}

/// Committed output of the financial stage
#[derive(Debug, Clone)]
pub struct FinancialStage {
    pub inputs: FinancialInputs,
    pub projection: FinancialProjection,
}

/// Committed output of the reconciliation stage
#[derive(Debug, Clone)]
pub struct ReconciliationStage {
    pub comparison: ExpenseComparison,
}

/// Committed output of the recommendation stage
#[derive(Debug, Clone)]
pub struct RecommendationStage {
    pub capital_plan: Option<CapitalPlan>,
    pub recommendations: Vec<String>,
}

/// A single user's planning session
///
/// Owns all inputs and derived state; there are no ambient globals. All
/// computation is synchronous and single-threaded.
pub struct Session {
    engine: ProjectionEngine,
    profile: Option<ProfileStage>,
    financial: Option<FinancialStage>,
    reconciliation: Option<ReconciliationStage>,
    recommendation: Option<RecommendationStage>,
}

impl Session {
    /// Create a session with the given assumptions
    pub fn new(assumptions: Assumptions) -> Self {
        Self {
            engine: ProjectionEngine::new(assumptions),
            profile: None,
            financial: None,
            reconciliation: None,
            recommendation: None,
        }
    }

    /// Whether a stage has a committed output
    pub fn is_submitted(&self, stage: Stage) -> bool {
        match stage {
            Stage::Profile => self.profile.is_some(),
            Stage::Financial => self.financial.is_some(),
            Stage::Reconciliation => self.reconciliation.is_some(),
            Stage::Recommendation => self.recommendation.is_some(),
        }
    }

    /// Submit the profile stage: cost generation, insurance economics, risk
    ///
    /// Always permitted; recommits invalidate every later stage.
    pub fn submit_profile(
        &mut self,
        profile: Profile,
        care_prefs: CarePreferences,
        plan: InsurancePlan,
    ) -> &ProfileStage {
        let mut costs = self.engine.project_costs(&profile, &care_prefs);
        costs.apply_insurance(&plan);
        let risk = self.engine.project_risk(&profile);

        log::info!(
            "profile stage committed: {} projection years, {} insurance",
            costs.len(),
            plan.insurance_type.as_str(),
        );

        self.invalidate_after(Stage::Profile);
        self.profile.insert(ProfileStage {
            profile,
            care_prefs,
            plan,
            costs,
            risk,
        })
    }

    /// Submit the financial stage: income, savings, and 401(k) projections
    pub fn submit_financial(
        &mut self,
        inputs: FinancialInputs,
    ) -> Result<&FinancialStage, StageError> {
        let years = match &self.profile {
            Some(stage) => stage.costs.len(),
            None => {
                return Err(StageError::NotSubmitted {
                    missing: Stage::Profile,
                    attempted: Stage::Financial,
                })
            }
        };

        let projection = FinancialProjection::project(&inputs, years);

        log::info!("financial stage committed: {years} projection years");

        self.invalidate_after(Stage::Financial);
        Ok(self.financial.insert(FinancialStage { inputs, projection }))
    }

    /// Submit the reconciliation stage: expense-vs-income comparison
    pub fn submit_reconciliation(&mut self) -> Result<&ReconciliationStage, StageError> {
        let (profile_stage, financial_stage) = match (&self.profile, &self.financial) {
            (Some(p), Some(f)) => (p, f),
            _ => {
                return Err(StageError::NotSubmitted {
                    missing: Stage::Financial,
                    attempted: Stage::Reconciliation,
                })
            }
        };

        let comparison = compare_expenses(
            &profile_stage.costs,
            &financial_stage.projection,
            &financial_stage.inputs,
        );

        log::info!(
            "reconciliation stage committed: shortfall {:.2}",
            comparison.total_shortfall(),
        );

        self.invalidate_after(Stage::Reconciliation);
        Ok(self.reconciliation.insert(ReconciliationStage { comparison }))
    }

    /// Submit the recommendation stage: rule evaluation over the committed
    /// outputs, with an optional capital plan
    pub fn submit_recommendation(
        &mut self,
        capital_plan: Option<CapitalPlan>,
    ) -> Result<&RecommendationStage, StageError> {
        let (profile_stage, reconciliation_stage) = match (&self.profile, &self.reconciliation) {
            (Some(p), Some(r)) => (p, r),
            _ => {
                return Err(StageError::NotSubmitted {
                    missing: Stage::Reconciliation,
                    attempted: Stage::Recommendation,
                })
            }
        };

        let surplus = reconciliation_stage.comparison.surplus_values();
        let recommendations = recommend(
            &profile_stage.profile,
            &profile_stage.costs,
            &surplus,
            profile_stage.plan.insurance_type,
            capital_plan.as_ref(),
            &self.engine.assumptions().risk,
        );

        log::info!(
            "recommendation stage committed: {} advisories",
            recommendations.len(),
        );

        Ok(self.recommendation.insert(RecommendationStage {
            capital_plan,
            recommendations,
        }))
    }

    /// Clear every stage after the one being committed
    fn invalidate_after(&mut self, stage: Stage) {
        if stage < Stage::Financial {
            if self.financial.take().is_some() {
                log::info!("financial stage invalidated by upstream resubmission");
            }
        }
        if stage < Stage::Reconciliation {
            self.reconciliation = None;
        }
        if stage < Stage::Recommendation {
            self.recommendation = None;
        }
    }

    /// Committed profile stage, if any
    pub fn profile_stage(&self) -> Option<&ProfileStage> {
        self.profile.as_ref()
    }

    /// Committed cost series, if the profile stage has run
    pub fn cost_series(&self) -> Option<&CostSeries> {
        self.profile.as_ref().map(|stage| &stage.costs)
    }

    /// Committed risk trajectory, if the profile stage has run
    pub fn risk_trajectory(&self) -> Option<&RiskTrajectory> {
        self.profile.as_ref().map(|stage| &stage.risk)
    }

    /// Committed financial projection, if the financial stage has run
    pub fn financial_projection(&self) -> Option<&FinancialProjection> {
        self.financial.as_ref().map(|stage| &stage.projection)
    }

    /// Committed expense comparison, if reconciliation has run
    pub fn expense_comparison(&self) -> Option<&ExpenseComparison> {
        self.reconciliation.as_ref().map(|stage| &stage.comparison)
    }

    /// Committed recommendations, if the recommendation stage has run
    pub fn recommendations(&self) -> Option<&[String]> {
        self.recommendation
            .as_ref()
            .map(|stage| stage.recommendations.as_slice())
    }
}
