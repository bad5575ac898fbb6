use crate::domain::{
    daily_intake::entities::DailyIntake,
    health_profile::entities::{MedicalCondition, UserHealthProfile},
    nutrient_alerts::{
        entities::{AlertSeverity, NutrientAlert, TrackedNutrient, alert_id},
        messages::alert_message,
    },
    nutrient_targets::entities::NutrientTargets,
};

/// Nutrients each condition puts under watch. Table order is the attribution
/// order when several conditions track the same nutrient.
const CONDITION_NUTRIENTS: &[(MedicalCondition, &[TrackedNutrient])] = &[
    (
        MedicalCondition::Diabetes,
        &[TrackedNutrient::Sugar, TrackedNutrient::Carbs],
    ),
    (MedicalCondition::Hypertension, &[TrackedNutrient::Sodium]),
    (
        MedicalCondition::HighCholesterol,
        &[TrackedNutrient::SaturatedFat],
    ),
    (
        MedicalCondition::KidneyDisease,
        &[TrackedNutrient::Protein, TrackedNutrient::Sodium],
    ),
    (
        MedicalCondition::HeartDisease,
        &[TrackedNutrient::Sodium, TrackedNutrient::SaturatedFat],
    ),
    (MedicalCondition::Obesity, &[TrackedNutrient::Calories]),
];

fn nutrients_for(condition: MedicalCondition) -> &'static [TrackedNutrient] {
    CONDITION_NUTRIENTS
        .iter()
        .find(|(c, _)| *c == condition)
        .map(|(_, nutrients)| *nutrients)
        .unwrap_or(&[])
}

/// Union of tracked nutrients over `conditions`, in first-seen order.
pub fn tracked_nutrients(conditions: &[MedicalCondition]) -> Vec<TrackedNutrient> {
    let mut tracked = Vec::new();
    for condition in conditions {
        for nutrient in nutrients_for(*condition) {
            if !tracked.contains(nutrient) {
                tracked.push(*nutrient);
            }
        }
    }
    tracked
}

/// Alerts for every tracked nutrient at or above 90% of its maximum, one per
/// (nutrient, condition) pair. `dismissed` is always false here.
pub fn check_alerts(
    profile: &UserHealthProfile,
    targets: &NutrientTargets,
    intake: &DailyIntake,
) -> Vec<NutrientAlert> {
    let conditions = profile.active_conditions();
    let mut alerts = Vec::new();

    for nutrient in tracked_nutrients(&conditions) {
        let target = nutrient.target_max(targets);
        if target <= 0.0 {
            continue;
        }

        let current = nutrient.intake(&intake.totals);
        let percentage = current * 100.0 / target;
        let Some(severity) = AlertSeverity::from_percentage(percentage) else {
            continue;
        };

        let related = CONDITION_NUTRIENTS
            .iter()
            .filter(|(condition, nutrients)| {
                nutrients.contains(&nutrient) && conditions.contains(condition)
            })
            .map(|(condition, _)| *condition);

        for condition in related {
            alerts.push(NutrientAlert {
                id: alert_id(nutrient, condition, intake.date),
                nutrient,
                related_condition: condition,
                current_value: current,
                target_value: target,
                percentage_of_target: percentage.round(),
                severity,
                message: alert_message(nutrient, severity).to_string(),
                dismissed: false,
            });
        }
    }

    alerts
}
