use serde::{Deserialize, Serialize};

use crate::domain::{
    health_profile::entities::{MedicalCondition, UserHealthProfile},
    nutrient_targets::entities::{BmiCategory, NutrientTargets},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionSeverity {
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionNote {
    pub condition: MedicalCondition,
    pub severity: ConditionSeverity,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthSummary {
    pub profile: UserHealthProfile,
    pub targets: NutrientTargets,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub condition_notes: Vec<ConditionNote>,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
}
