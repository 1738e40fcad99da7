//! Health Strategy System - staged healthcare cost and financial projection engine
//!
//! This library provides:
//! - Per-age healthcare cost generation from profile and care preferences
//! - Insurance economics (premiums, out-of-pocket share, premium inflation)
//! - Income, savings, and 401(k) compounding projections
//! - Expense-vs-income reconciliation with surplus/deficit tracking
//! - Bounded health-risk trajectories with outlook classification
//! - Rule-based strategy recommendations
//! - A four-stage commit/invalidate planning session

pub mod advice;
pub mod assumptions;
pub mod capital;
pub mod profile;
pub mod projection;
pub mod scenario;
pub mod session;

// Re-export commonly used types
pub use assumptions::{Assumptions, InsurancePlan, InsuranceType, RiskModel, RiskTrajectory};
pub use capital::{CapitalAllocation, CapitalPlan, FundSource};
pub use profile::{CarePreferences, Profile};
pub use projection::{
    CostSeries, ExpenseComparison, FinancialInputs, FinancialProjection, ProjectionEngine,
};
pub use scenario::ScenarioRunner;
pub use session::{Session, Stage, StageError};
