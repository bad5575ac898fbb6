use crate::domain::{
    common::entities::app_errors::CoreError,
    health_profile::entities::{ActivityLevel, MedicalCondition, UserHealthProfile},
    health_summary::entities::{ConditionNote, ConditionSeverity, HealthSummary, RiskLevel},
    nutrient_targets::{
        calculator::{body_mass_index, compute_targets},
        entities::BmiCategory,
    },
};

const SEVERE_OBESITY_BMI: f64 = 32.5;
const OBESE_BMI: f64 = 27.5;
const OVERWEIGHT_BMI: f64 = 23.0;
const UNDERWEIGHT_BMI: f64 = 18.5;
const SENIOR_AGE: u32 = 60;

fn condition_note(condition: MedicalCondition) -> &'static str {
    match condition {
        MedicalCondition::Diabetes => {
            "Keep blood sugar steady with regular meals and wholegrain carbs. Stay under 25 g of sugar a day."
        }
        MedicalCondition::Hypertension => {
            "Keep sodium below 1500 mg a day and pick fresh food over processed food."
        }
        MedicalCondition::HighCholesterol => {
            "Cut back on saturated fat and aim for 30 g of fibre a day."
        }
        MedicalCondition::KidneyDisease => {
            "Limit protein and sodium, and keep an eye on potassium and phosphorus."
        }
        MedicalCondition::HeartDisease => {
            "Choose heart-healthy meals with less sodium and more vegetables."
        }
        MedicalCondition::Obesity => {
            "A steady 500 kcal daily deficit supports gradual weight loss. Favour whole foods."
        }
        MedicalCondition::None => "Keep to a balanced plate following national dietary guidelines.",
    }
}

fn condition_severity(
    condition: MedicalCondition,
    profile: &UserHealthProfile,
    bmi: f64,
) -> ConditionSeverity {
    match condition {
        MedicalCondition::Obesity if bmi >= SEVERE_OBESITY_BMI => ConditionSeverity::Severe,
        MedicalCondition::Obesity if bmi >= OBESE_BMI => ConditionSeverity::Moderate,
        MedicalCondition::Diabetes | MedicalCondition::Hypertension
            if profile.age >= SENIOR_AGE =>
        {
            ConditionSeverity::Moderate
        }
        _ => ConditionSeverity::Mild,
    }
}

pub fn risk_level(condition_count: usize, bmi: f64) -> RiskLevel {
    if condition_count >= 3 || bmi >= SEVERE_OBESITY_BMI {
        RiskLevel::High
    } else if condition_count >= 1 || bmi >= OVERWEIGHT_BMI {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}

fn recommendations(profile: &UserHealthProfile, bmi: f64) -> Vec<String> {
    let mut out: Vec<&str> = Vec::new();

    if bmi >= OBESE_BMI {
        out.push("Consider a structured weight management programme.");
    } else if bmi < UNDERWEIGHT_BMI {
        out.push("Add nutrient-dense foods to bring calorie intake up.");
    }
    if profile.activity_level == ActivityLevel::Sedentary {
        out.push("Work up to 150 minutes of moderate exercise a week.");
    }
    if profile.has_condition(MedicalCondition::Diabetes) {
        out.push("Check blood glucose regularly and keep meal times consistent.");
    }
    if profile.has_condition(MedicalCondition::Hypertension) {
        out.push("Measure blood pressure weekly and use less salt when cooking.");
    }
    if profile.has_condition(MedicalCondition::HighCholesterol) {
        out.push("Pick lean proteins and more omega-3 rich fish.");
    }
    if out.is_empty() {
        out.push("Keep up the healthy habits and stay active.");
        out.push("Eat a variety of colourful vegetables every day.");
    }
    out.push("Drink about 8 glasses of water a day.");

    out.into_iter().map(String::from).collect()
}

pub fn summarize(profile: &UserHealthProfile) -> Result<HealthSummary, CoreError> {
    let targets = compute_targets(profile)?;
    let bmi = body_mass_index(profile.weight_kg, profile.height_cm);
    let conditions = profile.active_conditions();

    let mut condition_notes: Vec<ConditionNote> = conditions
        .iter()
        .map(|condition| ConditionNote {
            condition: *condition,
            severity: condition_severity(*condition, profile, bmi),
            note: condition_note(*condition).to_string(),
        })
        .collect();

    if condition_notes.is_empty() {
        condition_notes.push(ConditionNote {
            condition: MedicalCondition::None,
            severity: ConditionSeverity::Mild,
            note: condition_note(MedicalCondition::None).to_string(),
        });
    }

    Ok(HealthSummary {
        profile: profile.clone(),
        targets,
        bmi,
        bmi_category: BmiCategory::from_bmi(bmi),
        condition_notes,
        risk_level: risk_level(conditions.len(), bmi),
        recommendations: recommendations(profile, bmi),
    })
}
