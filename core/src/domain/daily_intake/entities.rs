use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    common::generate_uuid_v7,
    dish_catalog::entities::Nutrition,
    dish_matching::entities::{MatchReason, MatchResult},
};

/// Running sums for one day.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub saturated_fat: f64,
    pub sodium: f64,
    pub fiber: f64,
    pub sugar: f64,
}

impl NutrientTotals {
    pub fn add(&mut self, nutrition: &Nutrition) {
        self.calories += nutrition.calories;
        self.protein += nutrition.protein;
        self.carbs += nutrition.carbs;
        self.fat += nutrition.fat;
        self.saturated_fat += nutrition.saturated_fat.unwrap_or(0.0);
        self.sodium += nutrition.sodium;
        self.fiber += nutrition.fiber;
        self.sugar += nutrition.sugar;
    }
}

/// Snapshot of a resolved dish at the moment it was logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedMeal {
    pub id: Uuid,
    pub name: String,
    pub original_prediction: String,
    pub match_reason: MatchReason,
    pub confidence: f64,
    pub nutrition: Nutrition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<String>,
    pub points: u32,
    pub logged_at: DateTime<Utc>,
}

pub struct LoggedMealConfig {
    pub match_result: MatchResult,
    /// Used when the match carries no dish.
    pub fallback_nutrition: Nutrition,
    pub points: u32,
    pub logged_at: DateTime<Utc>,
}

impl LoggedMeal {
    pub fn new(config: LoggedMealConfig) -> Self {
        let result = config.match_result;
        let nutrition = result.nutrition().unwrap_or(config.fallback_nutrition);

        Self {
            id: generate_uuid_v7(),
            name: result.display_name().to_string(),
            serving_size: result.matched_dish.as_ref().map(|d| d.serving_size.clone()),
            original_prediction: result.original_prediction,
            match_reason: result.match_reason,
            confidence: result.confidence,
            nutrition,
            points: config.points,
            logged_at: config.logged_at,
        }
    }
}

/// Accumulator for one local calendar date. A new date starts a new accumulator;
/// earlier days are kept as history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyIntake {
    pub date: NaiveDate,
    pub totals: NutrientTotals,
    pub meals: Vec<LoggedMeal>,
}

impl DailyIntake {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            totals: NutrientTotals::default(),
            meals: Vec::new(),
        }
    }

    pub fn add_meal(&mut self, meal: LoggedMeal) {
        self.totals.add(&meal.nutrition);
        self.meals.push(meal);
    }

    pub fn meal_count(&self) -> usize {
        self.meals.len()
    }

    pub fn total_points(&self) -> u32 {
        self.meals.iter().map(|m| m.points).sum()
    }
}
