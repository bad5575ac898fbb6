use serde::{Deserialize, Serialize};

/// Nutrition facts for one standard serving.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturated_fat: Option<f64>,
    pub sodium: f64,
    pub fiber: f64,
    pub sugar: f64,
}

impl Nutrition {
    /// Placeholder used for meals that resolve to no catalog dish.
    pub fn generic_estimate() -> Self {
        Self {
            calories: 350.0,
            protein: 15.0,
            carbs: 45.0,
            fat: 12.0,
            saturated_fat: None,
            sodium: 600.0,
            fiber: 3.0,
            sugar: 5.0,
        }
    }

    pub fn is_valid(&self) -> bool {
        [
            self.calories,
            self.protein,
            self.carbs,
            self.fat,
            self.saturated_fat.unwrap_or(0.0),
            self.sodium,
            self.fiber,
            self.sugar,
        ]
        .iter()
        .all(|v| v.is_finite() && *v >= 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DishFamily {
    Rice,
    Noodles,
    Soup,
    Bread,
    Snack,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishEntry {
    pub name: String,
    pub family: DishFamily,
    pub keywords: Vec<String>,
    pub generic_mappings: Vec<String>,
    /// Keyword sets that, all present together, identify this dish.
    pub signature_combinations: Vec<Vec<String>>,
    pub nutrition: Nutrition,
    pub serving_size: String,
}
