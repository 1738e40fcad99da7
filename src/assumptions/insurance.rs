//! Insurance economics: premiums, out-of-pocket share, premium inflation

use serde::{Deserialize, Serialize};

/// How the profile holder is insured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsuranceType {
    /// Employer-sponsored coverage
    EmployerBased,
    /// Marketplace / self-insured coverage
    Marketplace,
    /// No coverage
    Uninsured,
}

impl InsuranceType {
    pub fn is_insured(&self) -> bool {
        !matches!(self, InsuranceType::Uninsured)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InsuranceType::EmployerBased => "employer-based",
            InsuranceType::Marketplace => "marketplace",
            InsuranceType::Uninsured => "none",
        }
    }
}

/// Premium and out-of-pocket parameters applied to a base cost series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsurancePlan {
    pub insurance_type: InsuranceType,

    /// Annual employee premium contribution
    pub employee_premium: f64,

    /// Annual employer premium contribution
    pub employer_premium: f64,

    /// Share of the pre-insurance healthcare cost paid out of pocket (0-1)
    pub oop_pct: f64,

    /// Annual growth applied to premiums (0-0.10)
    pub premium_inflation: f64,
}

impl InsurancePlan {
    /// National-average premiums and OOP share for an insurance type
    ///
    /// Employer-based: 2000 employee / 6000 employer, 15% OOP.
    /// Marketplace: 6550 employee only, 25% OOP.
    /// Uninsured: no premiums, the full cost is out of pocket.
    pub fn national_average(insurance_type: InsuranceType, premium_inflation: f64) -> Self {
        let (employee_premium, employer_premium, oop_pct) = match insurance_type {
            InsuranceType::EmployerBased => (2000.0, 6000.0, 0.15),
            InsuranceType::Marketplace => (6550.0, 0.0, 0.25),
            InsuranceType::Uninsured => (0.0, 0.0, 1.0),
        };

        Self {
            insurance_type,
            employee_premium,
            employer_premium,
            oop_pct,
            premium_inflation,
        }
    }

    /// Combined annual premium before inflation
    pub fn total_annual_premium(&self) -> f64 {
        self.employee_premium + self.employer_premium
    }

    /// Inflated premium for the i-th projected year
    pub fn premium_at(&self, year_index: usize) -> f64 {
        self.total_annual_premium() * (1.0 + self.premium_inflation).powi(year_index as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_national_averages() {
        let employer = InsurancePlan::national_average(InsuranceType::EmployerBased, 0.05);
        assert_relative_eq!(employer.total_annual_premium(), 8000.0);
        assert_relative_eq!(employer.oop_pct, 0.15);

        let marketplace = InsurancePlan::national_average(InsuranceType::Marketplace, 0.05);
        assert_relative_eq!(marketplace.total_annual_premium(), 6550.0);
        assert_relative_eq!(marketplace.oop_pct, 0.25);

        let none = InsurancePlan::national_average(InsuranceType::Uninsured, 0.05);
        assert_relative_eq!(none.total_annual_premium(), 0.0);
        assert_relative_eq!(none.oop_pct, 1.0);
        assert!(!none.insurance_type.is_insured());
    }

    #[test]
    fn test_premium_inflation() {
        let plan = InsurancePlan::national_average(InsuranceType::EmployerBased, 0.05);
        assert_relative_eq!(plan.premium_at(0), 8000.0);
        assert_relative_eq!(plan.premium_at(1), 8400.0);
        assert_relative_eq!(plan.premium_at(2), 8820.0, max_relative = 1e-12);
    }
}
