use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::daily_intake::entities::{DailyIntake, NutrientTotals};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    pub date: NaiveDate,
    pub totals: NutrientTotals,
    pub meal_count: usize,
    pub points: u32,
}

impl From<&DailyIntake> for DailyStats {
    fn from(intake: &DailyIntake) -> Self {
        Self {
            date: intake.date,
            totals: intake.totals,
            meal_count: intake.meal_count(),
            points: intake.total_points(),
        }
    }
}

/// Per-day averages over the days that have at least one meal, rounded to whole units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AverageStats {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub sodium: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub total_meals: usize,
    pub active_days: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopMeal {
    pub name: String,
    pub count: u32,
    pub avg_points: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendNutrient {
    Protein,
    Fiber,
    Sodium,
    Sugar,
}

impl TrendNutrient {
    pub const ALL: [TrendNutrient; 4] = [
        TrendNutrient::Protein,
        TrendNutrient::Fiber,
        TrendNutrient::Sodium,
        TrendNutrient::Sugar,
    ];

    pub fn higher_is_better(&self) -> bool {
        matches!(self, TrendNutrient::Protein | TrendNutrient::Fiber)
    }

    pub fn per_meal(&self, totals: &NutrientTotals, meals: usize) -> f64 {
        if meals == 0 {
            return 0.0;
        }
        let total = match self {
            TrendNutrient::Protein => totals.protein,
            TrendNutrient::Fiber => totals.fiber,
            TrendNutrient::Sodium => totals.sodium,
            TrendNutrient::Sugar => totals.sugar,
        };
        total / meals as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// Month-over-month change of a nutrient's per-meal average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientTrend {
    pub nutrient: TrendNutrient,
    pub change_percent: i64,
    pub trend: Trend,
    pub is_good: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Achievement {
    ConsistencyChampion,
    PointMaster,
    NutritionExpert,
    FiberBoost,
    SodiumReducer,
    DataCollector,
}

impl Achievement {
    pub fn description(&self) -> &'static str {
        match self {
            Achievement::ConsistencyChampion => "Consistency Champion: logged on 25 or more days",
            Achievement::PointMaster => "Point Master: earned 1000 or more points",
            Achievement::NutritionExpert => "Nutrition Expert: top meal averaged 80 points",
            Achievement::FiberBoost => "Fiber Boost: more fibre per meal than last month",
            Achievement::SodiumReducer => "Sodium Reducer: less sodium per meal than last month",
            Achievement::DataCollector => "Data Collector: logged 60 or more meals",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyWrapped {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub total_points: u32,
    pub total_meals: usize,
    pub active_days: usize,
    pub top_meals: Vec<TopMeal>,
    pub nutrient_trends: Vec<NutrientTrend>,
    pub achievements: Vec<Achievement>,
    pub avg_daily_calories: f64,
    /// 0 to 100: consistency, points and improving nutrients.
    pub health_score: u32,
}
