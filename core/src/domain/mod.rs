pub mod common;
pub mod daily_intake;
pub mod dish_catalog;
pub mod dish_matching;
pub mod health_profile;
pub mod health_summary;
pub mod meal_history;
pub mod nutrient_alerts;
pub mod nutrient_targets;
pub mod rewards;
pub mod storage;
