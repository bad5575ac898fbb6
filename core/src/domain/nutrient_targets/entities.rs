use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetRange {
    pub min: f64,
    pub max: f64,
    pub recommended: f64,
}

impl TargetRange {
    pub fn new(min: f64, max: f64, recommended: f64) -> Self {
        Self {
            min,
            max,
            recommended,
        }
    }
}

/// A nutrient with a floor but no ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloorTarget {
    pub min: f64,
    pub recommended: f64,
}

/// Daily targets derived from a health profile. Always replaced as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientTargets {
    pub calories: TargetRange,
    pub protein: TargetRange,
    pub carbs: TargetRange,
    pub fat: TargetRange,
    pub saturated_fat: TargetRange,
    pub sodium: TargetRange,
    pub sugar: TargetRange,
    pub fiber: FloorTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Asian BMI cut-offs.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 23.0 {
            BmiCategory::Normal
        } else if bmi < 27.5 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}
