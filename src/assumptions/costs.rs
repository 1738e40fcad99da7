//! Healthcare cost assumptions
//!
//! Pre-insurance annual cost = base cost, scaled multiplicatively by health
//! status, years elapsed, and household size, plus the flat add-ons for the
//! selected care categories.

use crate::profile::{CarePreferences, HealthStatus, Profile};

/// Cost model assumptions
#[derive(Debug, Clone)]
pub struct CostModel {
    /// Base annual healthcare cost before any adjustment
    pub base_annual_cost: f64,

    /// Cost multiplier for healthy status
    pub healthy_multiplier: f64,

    /// Cost multiplier for chronic status
    pub chronic_multiplier: f64,

    /// Cost multiplier for high-risk status
    pub high_risk_multiplier: f64,

    /// Escalation per projected year (year i factor = 1 + escalation * i)
    pub age_escalation: f64,

    /// Load per dependent for family households
    pub dependent_load: f64,

    /// Flat annual add-ons per care category
    pub care: CareCostSchedule,
}

/// Flat annual add-on per selected care category
///
/// Chronic, preventive, mental, emergency, and end-of-life selections are
/// accepted but carry no add-on in the current schedule.
#[derive(Debug, Clone)]
pub struct CareCostSchedule {
    pub primary: f64,
    pub surgical: f64,
    pub cancer: f64,
    /// Family households only
    pub pediatric: f64,
    /// Family households only
    pub maternity: f64,
}

impl Default for CareCostSchedule {
    fn default() -> Self {
        Self {
            primary: 500.0,
            surgical: 1500.0,
            cancer: 2000.0,
            pediatric: 1000.0,
            maternity: 1200.0,
        }
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            base_annual_cost: 2000.0,
            healthy_multiplier: 1.0,
            chronic_multiplier: 1.5,
            high_risk_multiplier: 2.0,
            age_escalation: 0.03,
            dependent_load: 0.5,
            care: CareCostSchedule::default(),
        }
    }
}

impl CostModel {
    /// Cost multiplier for a health status
    pub fn risk_multiplier(&self, status: HealthStatus) -> f64 {
        match status {
            HealthStatus::Healthy => self.healthy_multiplier,
            HealthStatus::Chronic => self.chronic_multiplier,
            HealthStatus::HighRisk => self.high_risk_multiplier,
        }
    }

    /// Escalation factor for the i-th projected year
    pub fn age_factor(&self, years_elapsed: usize) -> f64 {
        1.0 + self.age_escalation * years_elapsed as f64
    }

    /// Household factor: scales with the dependent COUNT for family
    /// households, 1.0 otherwise
    pub fn family_factor(&self, profile: &Profile) -> f64 {
        if profile.is_family() {
            1.0 + self.dependent_load * profile.num_dependents as f64
        } else {
            1.0
        }
    }

    /// Total flat add-on for the selected care categories
    ///
    /// Pediatric and maternity apply to family households only.
    pub fn care_addons(&self, profile: &Profile, prefs: &CarePreferences) -> f64 {
        let mut addons = 0.0;
        if prefs.primary {
            addons += self.care.primary;
        }
        if prefs.surgical {
            addons += self.care.surgical;
        }
        if prefs.cancer {
            addons += self.care.cancer;
        }
        if prefs.pediatric && profile.is_family() {
            addons += self.care.pediatric;
        }
        if prefs.maternity && profile.is_family() {
            addons += self.care.maternity;
        }
        addons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Gender;
    use approx::assert_relative_eq;

    #[test]
    fn test_risk_multipliers() {
        let model = CostModel::default();
        assert_relative_eq!(model.risk_multiplier(HealthStatus::Healthy), 1.0);
        assert_relative_eq!(model.risk_multiplier(HealthStatus::Chronic), 1.5);
        assert_relative_eq!(model.risk_multiplier(HealthStatus::HighRisk), 2.0);
    }

    #[test]
    fn test_family_factor_uses_dependent_count() {
        let model = CostModel::default();

        let family = Profile::family(
            35,
            Gender::Male,
            HealthStatus::Healthy,
            3,
            vec![2, 5, 9],
            33,
            HealthStatus::Healthy,
        );
        assert_relative_eq!(model.family_factor(&family), 2.5);

        // Singles get no load even with a nonzero dependent count on file
        let single = Profile::single(35, Gender::Male, HealthStatus::Healthy);
        assert_relative_eq!(model.family_factor(&single), 1.0);
    }

    #[test]
    fn test_care_addons_family_gating() {
        let model = CostModel::default();
        let prefs = CarePreferences {
            primary: true,
            pediatric: true,
            maternity: true,
            ..Default::default()
        };

        let single = Profile::single(30, Gender::Female, HealthStatus::Healthy);
        assert_relative_eq!(model.care_addons(&single, &prefs), 500.0);

        let family = Profile::family(
            30,
            Gender::Female,
            HealthStatus::Healthy,
            1,
            vec![3],
            31,
            HealthStatus::Healthy,
        );
        assert_relative_eq!(model.care_addons(&family, &prefs), 2700.0);
    }

    #[test]
    fn test_zero_cost_categories() {
        // Categories with no scheduled add-on contribute nothing even when
        // selected.
        let model = CostModel::default();
        let profile = Profile::single(30, Gender::Male, HealthStatus::Healthy);
        let prefs = CarePreferences {
            chronic: true,
            preventive: true,
            mental: true,
            emergency: true,
            end_of_life: true,
            ..Default::default()
        };
        assert_relative_eq!(model.care_addons(&profile, &prefs), 0.0);
    }
}
