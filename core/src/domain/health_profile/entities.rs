use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{entities::app_errors::CoreError, generate_uuid_v7};

pub const MAX_AGE: u32 = 120;
pub const MAX_WEIGHT_KG: f64 = 500.0;
pub const MAX_HEIGHT_CM: f64 = 272.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MedicalCondition {
    Diabetes,
    Hypertension,
    HighCholesterol,
    KidneyDisease,
    HeartDisease,
    Obesity,
    None,
}

impl MedicalCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            MedicalCondition::Diabetes => "diabetes",
            MedicalCondition::Hypertension => "hypertension",
            MedicalCondition::HighCholesterol => "high-cholesterol",
            MedicalCondition::KidneyDisease => "kidney-disease",
            MedicalCondition::HeartDisease => "heart-disease",
            MedicalCondition::Obesity => "obesity",
            MedicalCondition::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryRestriction {
    Halal,
    Vegetarian,
    Vegan,
    GlutenFree,
    LactoseFree,
    NutAllergy,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserHealthProfile {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
    pub medical_conditions: Vec<MedicalCondition>,
    #[serde(default)]
    pub dietary_restrictions: Vec<DietaryRestriction>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct HealthProfileConfig {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
    pub medical_conditions: Vec<MedicalCondition>,
    pub dietary_restrictions: Vec<DietaryRestriction>,
}

impl UserHealthProfile {
    pub fn new(config: HealthProfileConfig, now: DateTime<Utc>) -> Self {
        Self {
            id: generate_uuid_v7(),
            name: config.name,
            age: config.age,
            gender: config.gender,
            weight_kg: config.weight_kg,
            height_cm: config.height_cm,
            activity_level: config.activity_level,
            medical_conditions: config.medical_conditions,
            dietary_restrictions: config.dietary_restrictions,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rejects profiles that would produce negative or NaN targets.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.age == 0 || self.age > MAX_AGE {
            return Err(CoreError::invalid_profile(
                "age",
                format!("must be between 1 and {MAX_AGE}"),
            ));
        }
        if !(self.weight_kg.is_finite() && self.weight_kg > 0.0 && self.weight_kg <= MAX_WEIGHT_KG)
        {
            return Err(CoreError::invalid_profile(
                "weight_kg",
                format!("must be a positive number up to {MAX_WEIGHT_KG}"),
            ));
        }
        if !(self.height_cm.is_finite() && self.height_cm > 0.0 && self.height_cm <= MAX_HEIGHT_CM)
        {
            return Err(CoreError::invalid_profile(
                "height_cm",
                format!("must be a positive number up to {MAX_HEIGHT_CM}"),
            ));
        }

        Ok(())
    }

    /// Conditions in the order they were entered, without duplicates or `None`.
    pub fn active_conditions(&self) -> Vec<MedicalCondition> {
        let mut seen = Vec::with_capacity(self.medical_conditions.len());
        for condition in &self.medical_conditions {
            if *condition != MedicalCondition::None && !seen.contains(condition) {
                seen.push(*condition);
            }
        }
        seen
    }

    pub fn has_condition(&self, condition: MedicalCondition) -> bool {
        self.medical_conditions.contains(&condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> HealthProfileConfig {
        HealthProfileConfig {
            name: "Ah Seng".to_string(),
            age: 45,
            gender: Gender::Male,
            weight_kg: 78.0,
            height_cm: 172.0,
            activity_level: ActivityLevel::Light,
            medical_conditions: vec![
                MedicalCondition::Hypertension,
                MedicalCondition::None,
                MedicalCondition::Diabetes,
                MedicalCondition::Hypertension,
            ],
            dietary_restrictions: vec![DietaryRestriction::Halal],
        }
    }

    #[test]
    fn active_conditions_keep_entry_order() {
        let profile = UserHealthProfile::new(config(), Utc::now());

        assert_eq!(
            profile.active_conditions(),
            vec![MedicalCondition::Hypertension, MedicalCondition::Diabetes]
        );
    }

    #[test]
    fn validation_names_the_offending_field() {
        let mut profile = UserHealthProfile::new(config(), Utc::now());
        assert!(profile.validate().is_ok());

        profile.height_cm = 0.0;
        assert!(matches!(
            profile.validate(),
            Err(CoreError::InvalidProfile { field, .. }) if field == "height_cm"
        ));

        profile.height_cm = 172.0;
        profile.weight_kg = f64::NAN;
        assert!(matches!(
            profile.validate(),
            Err(CoreError::InvalidProfile { field, .. }) if field == "weight_kg"
        ));

        profile.weight_kg = 78.0;
        profile.age = 0;
        assert!(matches!(
            profile.validate(),
            Err(CoreError::InvalidProfile { field, .. }) if field == "age"
        ));

        profile.age = 400;
        assert!(matches!(
            profile.validate(),
            Err(CoreError::InvalidProfile { field, .. }) if field == "age"
        ));

        profile.age = 45;
        profile.height_cm = 900.0;
        assert!(matches!(
            profile.validate(),
            Err(CoreError::InvalidProfile { field, .. }) if field == "height_cm"
        ));
    }

    #[test]
    fn enums_use_hyphenated_wire_names() {
        assert_eq!(
            serde_json::to_value(ActivityLevel::VeryActive).unwrap(),
            "very-active"
        );
        assert_eq!(
            serde_json::to_value(MedicalCondition::HighCholesterol).unwrap(),
            "high-cholesterol"
        );
        assert_eq!(serde_json::to_value(Gender::Female).unwrap(), "female");
    }
}
