use chrono::NaiveDate;

use crate::domain::common::ports::date_key;

pub const HEALTH_PROFILE_KEY: &str = "health-profile";
pub const REWARDS_KEY: &str = "rewards-data";
pub const CORRECTIONS_KEY: &str = "user-corrections";
pub const DISMISSED_ALERTS_KEY: &str = "dismissed-alerts";
pub const INTAKE_INDEX_KEY: &str = "daily-intake:index";

pub fn daily_intake_key(date: NaiveDate) -> String {
    format!("daily-intake:{}", date_key(date))
}
