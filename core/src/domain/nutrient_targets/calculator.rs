use crate::domain::{
    common::entities::app_errors::CoreError,
    health_profile::entities::{Gender, MedicalCondition, UserHealthProfile},
    nutrient_targets::entities::{FloorTarget, NutrientTargets, TargetRange},
};

const RESTRICTED_SODIUM_MAX: f64 = 1500.0;
const RESTRICTED_SODIUM_RECOMMENDED: f64 = 1200.0;
const OBESITY_DEFICIT: f64 = 500.0;
const CALORIE_BAND: f64 = 300.0;

/// Mifflin-St Jeor basal metabolic rate, kcal/day.
pub fn basal_metabolic_rate(profile: &UserHealthProfile) -> f64 {
    let base = 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * f64::from(profile.age);
    match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

pub fn total_daily_energy_expenditure(profile: &UserHealthProfile) -> f64 {
    (basal_metabolic_rate(profile) * profile.activity_level.multiplier()).round()
}

/// Body mass index rounded to one decimal.
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    (weight_kg / (height_m * height_m) * 10.0).round() / 10.0
}

pub fn baseline_targets(weight_kg: f64, tdee: f64) -> NutrientTargets {
    NutrientTargets {
        calories: TargetRange::new(tdee - CALORIE_BAND, tdee + CALORIE_BAND, tdee),
        protein: TargetRange::new(
            (weight_kg * 0.8).round(),
            (weight_kg * 2.0).round(),
            (weight_kg * 1.2).round(),
        ),
        carbs: TargetRange::new(
            (tdee * 0.45 / 4.0).round(),
            (tdee * 0.65 / 4.0).round(),
            (tdee * 0.55 / 4.0).round(),
        ),
        fat: TargetRange::new(
            (tdee * 0.20 / 9.0).round(),
            (tdee * 0.35 / 9.0).round(),
            (tdee * 0.25 / 9.0).round(),
        ),
        saturated_fat: TargetRange::new(
            0.0,
            (tdee * 0.10 / 9.0).round(),
            (tdee * 0.07 / 9.0).round(),
        ),
        sodium: TargetRange::new(500.0, 2000.0, 1500.0),
        sugar: TargetRange::new(0.0, 50.0, 25.0),
        fiber: FloorTarget {
            min: 20.0,
            recommended: 25.0,
        },
    }
}

fn scale(range: &mut TargetRange, factor: f64) {
    range.max = (range.max * factor).round();
    range.recommended = (range.recommended * factor).round();
}

fn restrict_sodium(targets: &mut NutrientTargets) {
    targets.sodium.max = RESTRICTED_SODIUM_MAX;
    targets.sodium.recommended = RESTRICTED_SODIUM_RECOMMENDED;
}

/// Applies one condition on top of whatever adjustments came before it.
pub fn apply_condition(targets: &mut NutrientTargets, condition: MedicalCondition) {
    match condition {
        MedicalCondition::Diabetes => {
            scale(&mut targets.carbs, 0.85);
            targets.sugar.max = 25.0;
            targets.sugar.recommended = 20.0;
            targets.fiber.recommended = 30.0;
        }
        MedicalCondition::Hypertension => restrict_sodium(targets),
        MedicalCondition::HighCholesterol => {
            scale(&mut targets.fat, 0.85);
            scale(&mut targets.saturated_fat, 0.7);
            targets.fiber.recommended = 30.0;
        }
        MedicalCondition::KidneyDisease => {
            scale(&mut targets.protein, 0.7);
            restrict_sodium(targets);
        }
        MedicalCondition::HeartDisease => {
            restrict_sodium(targets);
            scale(&mut targets.fat, 0.8);
            scale(&mut targets.saturated_fat, 0.7);
        }
        MedicalCondition::Obesity => {
            targets.calories.max = targets.calories.recommended - OBESITY_DEFICIT;
            targets.calories.recommended = targets.calories.max;
            targets.calories.min = targets.calories.max - CALORIE_BAND;
        }
        MedicalCondition::None => {}
    }
}

/// Daily targets for `profile`. Conditions compose sequentially in profile order.
pub fn compute_targets(profile: &UserHealthProfile) -> Result<NutrientTargets, CoreError> {
    profile.validate()?;

    let tdee = total_daily_energy_expenditure(profile);
    let mut targets = baseline_targets(profile.weight_kg, tdee);

    for condition in profile.active_conditions() {
        apply_condition(&mut targets, condition);
    }

    ensure_positive(&targets)?;
    Ok(targets)
}

/// A profile whose energy budget cannot cover the calorie band (or the
/// obesity deficit) is rejected rather than given negative targets.
fn ensure_positive(targets: &NutrientTargets) -> Result<(), CoreError> {
    let ranges = [
        ("calories", &targets.calories),
        ("protein", &targets.protein),
        ("carbs", &targets.carbs),
        ("fat", &targets.fat),
    ];

    for (nutrient, range) in ranges {
        if !(range.min > 0.0 && range.max > 0.0 && range.recommended > 0.0) {
            return Err(CoreError::invalid_profile(
                "calories",
                format!("profile yields a non-positive {nutrient} target"),
            ));
        }
    }

    Ok(())
}
