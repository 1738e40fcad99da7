//! Cost generation over the projection horizon

use crate::assumptions::{Assumptions, RiskTrajectory};
use crate::profile::{CarePreferences, Profile, HORIZON_AGE};

use super::series::{CostSeries, CostYearRow};

/// Projection engine holding the planning assumptions
pub struct ProjectionEngine {
    assumptions: Assumptions,
}

impl ProjectionEngine {
    /// Create a new engine with the given assumptions
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    /// The engine's assumptions
    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Generate the pre-insurance cost series for a profile
    ///
    /// One row per year from the current age through the horizon age. Each
    /// year's cost is the base annual cost scaled by the health-status
    /// multiplier, the yearly escalation factor, and the household factor,
    /// plus the flat add-ons for the selected care categories. Pure function
    /// of its inputs: identical inputs yield identical series.
    pub fn project_costs(&self, profile: &Profile, prefs: &CarePreferences) -> CostSeries {
        let costs = &self.assumptions.costs;

        let risk_multiplier = costs.risk_multiplier(profile.health_status);
        let family_factor = costs.family_factor(profile);
        let care_addons = costs.care_addons(profile, prefs);

        let mut series = CostSeries::new();
        for (i, year_age) in (profile.age..=HORIZON_AGE).enumerate() {
            let base = costs.base_annual_cost
                * risk_multiplier
                * costs.age_factor(i)
                * family_factor;
            series.add_row(CostYearRow::new(year_age, base + care_addons));
        }

        log::debug!(
            "projected {} cost years for age {} ({:?})",
            series.len(),
            profile.age,
            profile.health_status,
        );

        series
    }

    /// Project the yearly health-risk trajectory for a profile
    pub fn project_risk(&self, profile: &Profile) -> RiskTrajectory {
        self.assumptions
            .risk
            .project(profile.age, profile.health_status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Gender, HealthStatus};
    use approx::assert_relative_eq;

    fn engine() -> ProjectionEngine {
        ProjectionEngine::new(Assumptions::default_planning())
    }

    #[test]
    fn test_series_length_and_ages() {
        let engine = engine();
        let prefs = CarePreferences::default();

        for age in [18u8, 30, 76, 85] {
            let profile = Profile::single(age, Gender::Male, HealthStatus::Healthy);
            let series = engine.project_costs(&profile, &prefs);

            assert_eq!(series.len(), 86 - age as usize);
            assert_eq!(series.rows[0].age, age);
            assert_eq!(series.rows.last().unwrap().age, HORIZON_AGE);
            for pair in series.rows.windows(2) {
                assert_eq!(pair[1].age, pair[0].age + 1);
            }
        }
    }

    #[test]
    fn test_year_zero_cost_primary_only() {
        let engine = engine();
        let profile = Profile::single(30, Gender::Female, HealthStatus::Healthy);
        let prefs = CarePreferences {
            primary: true,
            ..Default::default()
        };

        let series = engine.project_costs(&profile, &prefs);
        // 2000 * 1.0 * 1.0 * 1.0 + 500
        assert_relative_eq!(series.rows[0].healthcare_cost, 2500.0);
        // Year 1 escalates the base only, not the add-on
        assert_relative_eq!(series.rows[1].healthcare_cost, 2000.0 * 1.03 + 500.0);
    }

    #[test]
    fn test_multipliers_compound() {
        let engine = engine();
        let profile = Profile::family(
            40,
            Gender::Male,
            HealthStatus::Chronic,
            2,
            vec![3, 6],
            38,
            HealthStatus::Healthy,
        );
        let prefs = CarePreferences::default();

        let series = engine.project_costs(&profile, &prefs);
        // 2000 * 1.5 * (1 + 0.03*5) * (1 + 0.5*2) at year 5
        assert_relative_eq!(
            series.rows[5].healthcare_cost,
            2000.0 * 1.5 * 1.15 * 2.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_generation_is_idempotent() {
        let engine = engine();
        let profile = Profile::single(45, Gender::Female, HealthStatus::HighRisk);
        let prefs = CarePreferences::all();

        let first = engine.project_costs(&profile, &prefs);
        let second = engine.project_costs(&profile, &prefs);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.rows.iter().zip(second.rows.iter()) {
            assert_eq!(a.age, b.age);
            assert_eq!(a.healthcare_cost.to_bits(), b.healthcare_cost.to_bits());
        }
    }
}
