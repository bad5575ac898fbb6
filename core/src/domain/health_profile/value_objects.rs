use serde::{Deserialize, Serialize};

use crate::domain::health_profile::entities::{
    ActivityLevel, DietaryRestriction, Gender, MedicalCondition,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveHealthProfileInput {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
    pub medical_conditions: Vec<MedicalCondition>,
    #[serde(default)]
    pub dietary_restrictions: Vec<DietaryRestriction>,
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdateHealthProfileInput {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub activity_level: Option<ActivityLevel>,
    pub medical_conditions: Option<Vec<MedicalCondition>>,
    pub dietary_restrictions: Option<Vec<DietaryRestriction>>,
}
