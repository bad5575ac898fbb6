use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::ports::date_key,
    daily_intake::entities::NutrientTotals,
    health_profile::entities::MedicalCondition,
    nutrient_targets::entities::NutrientTargets,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackedNutrient {
    Sugar,
    Carbs,
    Sodium,
    SaturatedFat,
    Protein,
    Calories,
}

impl TrackedNutrient {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackedNutrient::Sugar => "sugar",
            TrackedNutrient::Carbs => "carbs",
            TrackedNutrient::Sodium => "sodium",
            TrackedNutrient::SaturatedFat => "saturated_fat",
            TrackedNutrient::Protein => "protein",
            TrackedNutrient::Calories => "calories",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            TrackedNutrient::Sodium => "mg",
            TrackedNutrient::Calories => "kcal",
            _ => "g",
        }
    }

    pub fn intake(&self, totals: &NutrientTotals) -> f64 {
        match self {
            TrackedNutrient::Sugar => totals.sugar,
            TrackedNutrient::Carbs => totals.carbs,
            TrackedNutrient::Sodium => totals.sodium,
            TrackedNutrient::SaturatedFat => totals.saturated_fat,
            TrackedNutrient::Protein => totals.protein,
            TrackedNutrient::Calories => totals.calories,
        }
    }

    pub fn target_max(&self, targets: &NutrientTargets) -> f64 {
        match self {
            TrackedNutrient::Sugar => targets.sugar.max,
            TrackedNutrient::Carbs => targets.carbs.max,
            TrackedNutrient::Sodium => targets.sodium.max,
            TrackedNutrient::SaturatedFat => targets.saturated_fat.max,
            TrackedNutrient::Protein => targets.protein.max,
            TrackedNutrient::Calories => targets.calories.max,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertSeverity {
    Warning,
    Danger,
    Critical,
}

impl AlertSeverity {
    /// `None` below 90% of target.
    pub fn from_percentage(percentage: f64) -> Option<Self> {
        if percentage >= 110.0 {
            Some(AlertSeverity::Critical)
        } else if percentage >= 100.0 {
            Some(AlertSeverity::Danger)
        } else if percentage >= 90.0 {
            Some(AlertSeverity::Warning)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientAlert {
    pub id: String,
    pub nutrient: TrackedNutrient,
    pub related_condition: MedicalCondition,
    pub current_value: f64,
    pub target_value: f64,
    /// Rounded to a whole percent; severity is graded on the exact value.
    pub percentage_of_target: f64,
    pub severity: AlertSeverity,
    pub message: String,
    pub dismissed: bool,
}

/// Stable for a (nutrient, condition) pair within one local day.
pub fn alert_id(nutrient: TrackedNutrient, condition: MedicalCondition, date: NaiveDate) -> String {
    format!("{}-{}-{}", nutrient.as_str(), condition.as_str(), date_key(date))
}
