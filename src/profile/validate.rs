//! Range checks for collaborator-supplied inputs
//!
//! The pipeline stages themselves assume pre-validated inputs and fail fast
//! on anything else; these helpers are for the presentation layer (and the
//! CLI front ends) to run before submitting a stage.

use thiserror::Error;

use super::data::{Profile, HORIZON_AGE};
use crate::assumptions::InsurancePlan;
use crate::projection::FinancialInputs;

/// Minimum supported profile age
pub const MIN_AGE: u8 = 18;

/// Maximum number of dependents
pub const MAX_DEPENDENTS: u8 = 10;

/// Maximum dependent age
pub const MAX_DEPENDENT_AGE: u8 = 25;

/// A rejected input value
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("age {0} outside supported range 18-85")]
    AgeOutOfRange(u8),

    #[error("number of dependents {0} exceeds maximum 10")]
    TooManyDependents(u8),

    #[error("dependent age {0} outside supported range 0-25")]
    DependentAgeOutOfRange(u8),

    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount { field: &'static str, value: f64 },

    #[error("{field} {value} outside allowed range {min}-{max}")]
    RateOutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), InputError> {
    if value < 0.0 {
        return Err(InputError::NegativeAmount { field, value });
    }
    Ok(())
}

fn check_rate(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), InputError> {
    if !(min..=max).contains(&value) {
        return Err(InputError::RateOutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Validate a profile against the supported input ranges
pub fn validate_profile(profile: &Profile) -> Result<(), InputError> {
    if !(MIN_AGE..=HORIZON_AGE).contains(&profile.age) {
        return Err(InputError::AgeOutOfRange(profile.age));
    }
    if profile.num_dependents > MAX_DEPENDENTS {
        return Err(InputError::TooManyDependents(profile.num_dependents));
    }
    for &dep_age in &profile.dependent_ages {
        if dep_age > MAX_DEPENDENT_AGE {
            return Err(InputError::DependentAgeOutOfRange(dep_age));
        }
    }
    if let Some(partner_age) = profile.partner_age {
        if !(MIN_AGE..=HORIZON_AGE).contains(&partner_age) {
            return Err(InputError::AgeOutOfRange(partner_age));
        }
    }
    Ok(())
}

/// Validate insurance economics: non-negative premiums, OOP share 0-100%,
/// premium inflation 0-10%
pub fn validate_insurance(plan: &InsurancePlan) -> Result<(), InputError> {
    check_non_negative("employee premium", plan.employee_premium)?;
    check_non_negative("employer premium", plan.employer_premium)?;
    check_rate("OOP share", plan.oop_pct, 0.0, 1.0)?;
    check_rate("premium inflation", plan.premium_inflation, 0.0, 0.10)?;
    Ok(())
}

/// Validate financial capacity inputs: non-negative amounts, tax rate 0-50%,
/// growth rates 0-10%
pub fn validate_financial(inputs: &FinancialInputs) -> Result<(), InputError> {
    check_non_negative("monthly income", inputs.monthly_income)?;
    check_non_negative("monthly expenses", inputs.monthly_expenses)?;
    check_non_negative("monthly debt payment", inputs.debt_monthly_payment)?;
    check_non_negative("savings balance", inputs.savings_start)?;
    check_non_negative("annual savings contribution", inputs.annual_contribution)?;
    check_non_negative("employee 401(k) contribution", inputs.contrib_401k_employee)?;
    check_non_negative("employer 401(k) match", inputs.contrib_401k_employer)?;
    check_rate("tax rate", inputs.tax_rate, 0.0, 0.50)?;
    check_rate("income growth", inputs.income_growth, 0.0, 0.10)?;
    check_rate("savings growth", inputs.savings_growth, 0.0, 0.10)?;
    check_rate("401(k) growth", inputs.growth_401k, 0.0, 0.10)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Gender, HealthStatus};

    #[test]
    fn test_profile_age_bounds() {
        let mut profile = Profile::single(17, Gender::Male, HealthStatus::Healthy);
        assert_eq!(
            validate_profile(&profile),
            Err(InputError::AgeOutOfRange(17))
        );

        profile.age = 86;
        assert_eq!(
            validate_profile(&profile),
            Err(InputError::AgeOutOfRange(86))
        );

        profile.age = 18;
        assert!(validate_profile(&profile).is_ok());
        profile.age = 85;
        assert!(validate_profile(&profile).is_ok());
    }

    #[test]
    fn test_dependent_bounds() {
        let mut profile = Profile::family(
            40,
            Gender::Female,
            HealthStatus::Chronic,
            11,
            vec![5],
            39,
            HealthStatus::Healthy,
        );
        assert_eq!(
            validate_profile(&profile),
            Err(InputError::TooManyDependents(11))
        );

        profile.num_dependents = 2;
        profile.dependent_ages = vec![5, 26];
        assert_eq!(
            validate_profile(&profile),
            Err(InputError::DependentAgeOutOfRange(26))
        );
    }

    #[test]
    fn test_financial_rate_bounds() {
        let mut inputs = FinancialInputs::default();
        assert!(validate_financial(&inputs).is_ok());

        inputs.tax_rate = 0.60;
        assert!(matches!(
            validate_financial(&inputs),
            Err(InputError::RateOutOfRange { field: "tax rate", .. })
        ));

        inputs.tax_rate = 0.25;
        inputs.monthly_income = -1.0;
        assert!(matches!(
            validate_financial(&inputs),
            Err(InputError::NegativeAmount { field: "monthly income", .. })
        ));
    }
}
