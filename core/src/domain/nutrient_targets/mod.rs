pub mod calculator;
pub mod entities;

pub use calculator::compute_targets;
pub use entities::{BmiCategory, FloorTarget, NutrientTargets, TargetRange};
