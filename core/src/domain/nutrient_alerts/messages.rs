use crate::domain::nutrient_alerts::entities::{AlertSeverity, TrackedNutrient};

pub fn alert_message(nutrient: TrackedNutrient, severity: AlertSeverity) -> &'static str {
    use AlertSeverity::*;
    use TrackedNutrient::*;

    match (nutrient, severity) {
        (Sugar, Warning) => "Sugar already at 90% of today's target leh. Maybe skip the kueh later?",
        (Sugar, Danger) => "Alamak, sugar limit reached for today. No more sweet drinks ok?",
        (Sugar, Critical) => "Sugar over the limit liao! Tomorrow try kopi kosong instead.",
        (Carbs, Warning) => "Carbs nearly at your limit. Ask for less rice at dinner?",
        (Carbs, Danger) => "Carb limit reached. Load up on veggies and protein for the rest of today.",
        (Carbs, Critical) => "Carbs went over today. Go easy on the rice and noodles tomorrow hor.",
        (Sodium, Warning) => "Sodium at 90% already. Maybe don't finish the soup this time.",
        (Sodium, Danger) => "Sodium limit reached! Skip the extra soy sauce and chilli sauce today.",
        (Sodium, Critical) => "Wah, sodium way too high today. Tomorrow pick fresh food over gravy.",
        (SaturatedFat, Warning) => "Saturated fat nearly at your limit. Choose something leaner next?",
        (SaturatedFat, Danger) => "Saturated fat limit reached. Steamed or soup dishes for the rest of today.",
        (SaturatedFat, Critical) => "Too much saturated fat today liao. Avoid fried stuff and lard tomorrow.",
        (Protein, Warning) => "Protein at 90% of your limit. Your kidneys will thank you for a lighter dinner.",
        (Protein, Danger) => "Protein limit reached. Smaller meat portions for the rest of today.",
        (Protein, Critical) => "Protein over the limit. Be extra careful with meat portions tomorrow.",
        (Calories, Warning) => "Calories at 90% of target. Something light for the next meal?",
        (Calories, Danger) => "Calorie target reached for today. Only eat more if you are really hungry.",
        (Calories, Critical) => "Calories went over today. Watch the portion sizes tomorrow hor.",
    }
}
