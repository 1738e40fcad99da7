//! Profile and care preference inputs

mod data;
pub mod validate;

pub use data::{
    CarePreferences, FamilyStatus, Gender, HealthStatus, Profile, HORIZON_AGE,
};
pub use validate::InputError;
