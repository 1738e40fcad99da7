//! Planning assumptions: risk trajectories, cost schedules, insurance economics

mod costs;
mod insurance;
mod risk;

pub use costs::{CareCostSchedule, CostModel};
pub use insurance::{InsurancePlan, InsuranceType};
pub use risk::{RiskInsight, RiskModel, RiskTrajectory, RiskZone};

/// Container for all pipeline assumptions
#[derive(Debug, Clone)]
pub struct Assumptions {
    pub risk: RiskModel,
    pub costs: CostModel,
}

impl Assumptions {
    /// Create assumptions with the default planning calibration
    pub fn default_planning() -> Self {
        Self {
            risk: RiskModel::default_planning(),
            costs: CostModel::default(),
        }
    }
}
