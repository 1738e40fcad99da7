//! Profile and care preference inputs supplied by the presentation layer

use serde::{Deserialize, Serialize};

/// Final age of every projection horizon (inclusive)
pub const HORIZON_AGE: u8 = 85;

/// Self-reported health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Healthy,
    Chronic,
    HighRisk,
}

/// Gender of the profile holder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Household composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FamilyStatus {
    Single,
    Family,
}

/// A user profile as committed at the profile stage
///
/// The presentation layer validates ranges (age 18-85, dependents 0-10,
/// dependent ages 0-25) before handing the profile to the pipeline; see
/// [`crate::profile::validate`]. Once committed the profile is never mutated,
/// only replaced wholesale by a resubmission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Current age
    pub age: u8,

    /// Gender
    pub gender: Gender,

    /// Health status, drives risk multipliers and the risk trajectory
    pub health_status: HealthStatus,

    /// Single or family household
    pub family_status: FamilyStatus,

    /// Number of dependents
    pub num_dependents: u8,

    /// Ages of each dependent; collected but not consumed by the cost formula
    #[serde(default)]
    pub dependent_ages: Vec<u8>,

    /// Partner age, family households only
    #[serde(default)]
    pub partner_age: Option<u8>,

    /// Partner health status, family households only
    #[serde(default)]
    pub partner_health_status: Option<HealthStatus>,
}

impl Profile {
    /// Create a single-person profile with no dependents
    pub fn single(age: u8, gender: Gender, health_status: HealthStatus) -> Self {
        Self {
            age,
            gender,
            health_status,
            family_status: FamilyStatus::Single,
            num_dependents: 0,
            dependent_ages: Vec::new(),
            partner_age: None,
            partner_health_status: None,
        }
    }

    /// Create a family profile with partner and dependents
    pub fn family(
        age: u8,
        gender: Gender,
        health_status: HealthStatus,
        num_dependents: u8,
        dependent_ages: Vec<u8>,
        partner_age: u8,
        partner_health_status: HealthStatus,
    ) -> Self {
        Self {
            age,
            gender,
            health_status,
            family_status: FamilyStatus::Family,
            num_dependents,
            dependent_ages,
            partner_age: Some(partner_age),
            partner_health_status: Some(partner_health_status),
        }
    }

    /// Whether this is a family household
    pub fn is_family(&self) -> bool {
        self.family_status == FamilyStatus::Family
    }

    /// Number of projected years, current age through the horizon age
    ///
    /// An age-85 profile still gets a single projection year.
    pub fn projection_years(&self) -> usize {
        (HORIZON_AGE as usize + 1).saturating_sub(self.age as usize)
    }
}

/// Care category selections
///
/// Each selected category contributes a flat annual add-on per the cost
/// model's schedule; see [`crate::assumptions::CostModel`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CarePreferences {
    pub primary: bool,
    pub chronic: bool,
    pub preventive: bool,
    pub surgical: bool,
    pub cancer: bool,
    pub mental: bool,
    pub emergency: bool,
    pub end_of_life: bool,
    pub maternity: bool,
    pub pediatric: bool,
}

impl CarePreferences {
    /// Select every care category
    pub fn all() -> Self {
        Self {
            primary: true,
            chronic: true,
            preventive: true,
            surgical: true,
            cancer: true,
            mental: true,
            emergency: true,
            end_of_life: true,
            maternity: true,
            pediatric: true,
        }
    }
}
