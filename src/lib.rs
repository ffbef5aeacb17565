pub mod types;
pub mod friction;
pub mod physics;
pub mod calculator;
pub mod config;
pub mod capacity;
pub mod report;

pub use types::*;
pub use physics::{compute, BindingConstraint, GripError, GripRequirementInput, GripRequirementResult};
pub use calculator::{CalculatorError, ForceRequirementCalculator};
pub use friction::{FrictionPreset, FrictionPresetTable, FrictionSelection};
