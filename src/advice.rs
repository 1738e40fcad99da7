//! Rule-based strategy recommendations
//!
//! Pure, order-sensitive rule evaluation over the committed pipeline
//! outputs. Each rule contributes at most one advisory string; the output
//! order is the evaluation order, not a severity ranking.

use crate::assumptions::{InsuranceType, RiskModel};
use crate::capital::CapitalPlan;
use crate::profile::{HealthStatus, Profile};
use crate::projection::CostSeries;

/// Single-year healthcare cost above which catastrophic coverage is suggested
const CATASTROPHIC_COST_THRESHOLD: f64 = 20_000.0;

/// Coverage ratio below which raising capital allocation is suggested
const LOW_COVERAGE_RATIO: f64 = 0.75;

/// Coverage ratio above which reallocating surplus capital is suggested
const HIGH_COVERAGE_RATIO: f64 = 1.2;

/// Age under which "young" rules apply
const YOUNG_AGE_LIMIT: u8 = 40;

/// Generate the ordered advisory list for a committed pipeline
///
/// `surplus` is the yearly surplus/deficit series from reconciliation. The
/// capital plan is accepted for parity with the staged inputs; no current
/// rule reads it.
// TODO: feed the capital plan into the series' capital columns once the
// capital-growth simulation lands, so the coverage-ratio rules see real data.
pub fn recommend(
    profile: &Profile,
    costs: &CostSeries,
    surplus: &[f64],
    insurance_type: InsuranceType,
    _capital_plan: Option<&CapitalPlan>,
    risk: &RiskModel,
) -> Vec<String> {
    let total_shortfall: f64 = surplus.iter().filter(|&&s| s < 0.0).sum();
    log::debug!("total projected shortfall: {total_shortfall:.2}");

    // Structurally 0 until the capital columns are populated upstream
    let coverage_ratio = costs.capital_coverage_ratio();

    let healthy = profile.health_status == HealthStatus::Healthy;
    let young = profile.age < YOUNG_AGE_LIMIT;
    let high_risk = profile.health_status == HealthStatus::HighRisk
        || profile.partner_health_status == Some(HealthStatus::HighRisk);

    let mut recs = Vec::new();

    if insurance_type.is_insured() {
        if healthy && young && coverage_ratio > 0.8 {
            recs.push(
                "Full insurance coverage may not be necessary. Consider a \
                 catastrophic-only plan or a bronze-tier plan paired with \
                 capital-based savings."
                    .to_string(),
            );
        } else if high_risk {
            recs.push(
                "High risk detected. Retaining comprehensive insurance or \
                 supplementing with surgical and chronic bundles is advised."
                    .to_string(),
            );
        }
    } else {
        recs.push(
            "No insurance on file. Make sure capital and care bundles are \
             sufficient for expected needs."
                .to_string(),
        );
    }

    if young && healthy {
        recs.push(
            "Digital-first care and primary care subscriptions could reduce \
             costs while maintaining access."
                .to_string(),
        );
    }

    if profile.is_family() {
        recs.push(
            "Pediatric and family bundles should be considered for dependents \
             or partner care planning."
                .to_string(),
        );
    }

    if coverage_ratio < LOW_COVERAGE_RATIO {
        recs.push(
            "Consider increasing long-term capital allocation or raising your \
             savings contributions."
                .to_string(),
        );
    } else if coverage_ratio > HIGH_COVERAGE_RATIO {
        recs.push(
            "Capital strategy exceeds projected healthcare needs. There may be \
             room to optimize for other life goals."
                .to_string(),
        );
    }

    if costs.max_healthcare_cost() > CATASTROPHIC_COST_THRESHOLD {
        recs.push(
            "One or more years project catastrophic costs. Consider \
             catastrophic insurance or HSA-backed savings."
                .to_string(),
        );
    }

    recs.push(
        risk.insight(profile.age, profile.health_status)
            .message()
            .to_string(),
    );

    recs
}
