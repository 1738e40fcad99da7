//! Health risk trajectory assumptions
//!
//! The risk model maps (age, health status) to a bounded yearly risk score
//! series running from the current age to the horizon age. Scores start at a
//! status-dependent base and grow by a flat yearly increment, capped at 1.0,
//! so every trajectory is non-decreasing by construction.

use serde::{Deserialize, Serialize};

use crate::profile::{HealthStatus, HORIZON_AGE};

/// Risk model assumptions
#[derive(Debug, Clone)]
pub struct RiskModel {
    /// Base risk score for healthy status
    base_healthy: f64,

    /// Base risk score for chronic status
    base_chronic: f64,

    /// Base risk score for high-risk status
    base_high_risk: f64,

    /// Additional risk per projected year
    yearly_increase: f64,

    /// Trajectory score above which the outlook is critical
    critical_threshold: f64,

    /// Ten-year score delta above which the outlook is rising fast
    rising_fast_delta: f64,
}

impl RiskModel {
    /// Default planning calibration
    pub fn default_planning() -> Self {
        Self {
            base_healthy: 0.2,
            base_chronic: 0.5,
            base_high_risk: 0.8,
            yearly_increase: 0.02,
            critical_threshold: 0.9,
            rising_fast_delta: 0.25,
        }
    }

    /// Base risk score for a health status
    pub fn base_risk(&self, status: HealthStatus) -> f64 {
        match status {
            HealthStatus::Healthy => self.base_healthy,
            HealthStatus::Chronic => self.base_chronic,
            HealthStatus::HighRisk => self.base_high_risk,
        }
    }

    /// Project the yearly risk trajectory from `age` to the horizon age
    ///
    /// Score for year i is `min(base + yearly_increase * i, 1.0)`; one entry
    /// per year, `86 - age` entries in total.
    pub fn project(&self, age: u8, status: HealthStatus) -> RiskTrajectory {
        let base = self.base_risk(status);
        let years = (HORIZON_AGE as usize + 1).saturating_sub(age as usize);

        let scores = (0..years)
            .map(|i| (base + self.yearly_increase * i as f64).min(1.0))
            .collect();

        RiskTrajectory {
            start_age: age,
            scores,
        }
    }

    /// Classify the projected risk outlook for a profile
    pub fn insight(&self, age: u8, status: HealthStatus) -> RiskInsight {
        let trajectory = self.project(age, status);
        let scores = trajectory.scores();

        // Trajectories for ages 76+ have at most 10 points; too short for the
        // ten-year comparison, so they can never read as rising fast.
        let rising_fast =
            scores.len() > 10 && scores[10] - scores[0] > self.rising_fast_delta;

        if trajectory.max_score() > self.critical_threshold {
            RiskInsight::Critical
        } else if rising_fast {
            RiskInsight::RisingFast
        } else {
            RiskInsight::Steady
        }
    }
}

/// Projected yearly risk scores, aligned to attained age
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskTrajectory {
    /// Age corresponding to the first score
    start_age: u8,

    /// One score in [0, 1] per year through the horizon age
    scores: Vec<f64>,
}

impl RiskTrajectory {
    /// Number of projected years
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Age of the first projected year
    pub fn start_age(&self) -> u8 {
        self.start_age
    }

    /// The yearly scores
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Highest score reached over the horizon
    pub fn max_score(&self) -> f64 {
        self.scores.iter().copied().fold(0.0, f64::max)
    }

    /// First age at which the score reaches the high-risk zone, if any
    pub fn critical_age(&self) -> Option<u8> {
        self.scores
            .iter()
            .position(|&score| RiskZone::from_score(score) == RiskZone::High)
            .map(|idx| self.start_age + idx as u8)
    }

    /// (age, score, zone) per projected year, for rendering
    pub fn zones(&self) -> impl Iterator<Item = (u8, f64, RiskZone)> + '_ {
        self.scores
            .iter()
            .enumerate()
            .map(|(i, &score)| (self.start_age + i as u8, score, RiskZone::from_score(score)))
    }
}

/// Chart band for a single risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskZone {
    /// Score below 0.5
    Low,
    /// Score in [0.5, 0.9)
    Moderate,
    /// Score at or above 0.9
    High,
}

impl RiskZone {
    pub fn from_score(score: f64) -> Self {
        if score < 0.5 {
            RiskZone::Low
        } else if score < 0.9 {
            RiskZone::Moderate
        } else {
            RiskZone::High
        }
    }
}

/// Risk outlook classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskInsight {
    /// Trajectory peaks above the critical threshold
    Critical,
    /// Ten-year score delta exceeds the rising-fast threshold
    RisingFast,
    /// Neither of the above
    Steady,
}

impl RiskInsight {
    /// Advisory text for the recommendation list
    pub fn message(&self) -> &'static str {
        match self {
            RiskInsight::Critical => {
                "Projected health risk reaches critical levels within the planning \
                 horizon. Consider both capital care funding and catastrophic \
                 insurance early."
            }
            RiskInsight::RisingFast => {
                "Risk profile is rising rapidly. A capital health investment \
                 strategy can reduce future financial strain."
            }
            RiskInsight::Steady => {
                "Risk progression is steady. Early investment may still yield high \
                 coverage and long-term flexibility."
            }
        }
    }
}
