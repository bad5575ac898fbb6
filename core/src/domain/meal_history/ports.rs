use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    daily_intake::entities::LoggedMeal,
    meal_history::entities::{AverageStats, DailyStats, MonthlyWrapped},
};

pub trait MealHistoryService: Send + Sync {
    /// The last 7 days, oldest first, today included.
    fn weekly_stats(&self) -> impl Future<Output = Result<Vec<DailyStats>, CoreError>> + Send;

    /// The last 30 days, oldest first, today included.
    fn monthly_stats(&self) -> impl Future<Output = Result<Vec<DailyStats>, CoreError>> + Send;

    fn average_stats(
        &self,
        days: u32,
    ) -> impl Future<Output = Result<AverageStats, CoreError>> + Send;

    fn monthly_wrapped(
        &self,
        year: i32,
        month: u32,
    ) -> impl Future<Output = Result<MonthlyWrapped, CoreError>> + Send;

    /// Newest first.
    fn recent_meals(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<LoggedMeal>, CoreError>> + Send;
}
