use serde::{Deserialize, Serialize};

use crate::domain::{
    daily_intake::entities::{DailyIntake, LoggedMeal},
    dish_matching::entities::MatchResult,
    nutrient_alerts::entities::NutrientAlert,
    rewards::entities::BadgeKind,
};

pub struct LogMealInput {
    pub image_data: Vec<u8>,
}

/// Everything one logging step changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealLogged {
    pub meal: LoggedMeal,
    pub match_result: MatchResult,
    pub reason: String,
    pub unlocked_badges: Vec<BadgeKind>,
    pub intake: DailyIntake,
    /// Empty when no health profile is set up.
    pub alerts: Vec<NutrientAlert>,
}
