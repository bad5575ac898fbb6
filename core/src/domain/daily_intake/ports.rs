use std::future::Future;

use chrono::NaiveDate;

use crate::domain::{
    common::entities::app_errors::CoreError,
    daily_intake::{
        entities::DailyIntake,
        value_objects::{LogMealInput, MealLogged},
    },
    dish_matching::entities::MatchResult,
};

pub trait MealLogService: Send + Sync {
    /// Recognizes a photo and logs the resolved meal. A classifier failure
    /// leaves intake and rewards untouched.
    fn log_meal(
        &self,
        input: LogMealInput,
    ) -> impl Future<Output = Result<MealLogged, CoreError>> + Send;

    /// Logs an already resolved match, e.g. one the user corrected.
    fn log_resolved_meal(
        &self,
        match_result: MatchResult,
    ) -> impl Future<Output = Result<MealLogged, CoreError>> + Send;

    fn get_today_intake(&self) -> impl Future<Output = Result<DailyIntake, CoreError>> + Send;

    fn get_intake(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<DailyIntake, CoreError>> + Send;

    fn reset_today_intake(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}
