use chrono::{Days, NaiveDate};
use futures::future::join_all;
use tracing::{debug, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, ports::Clock, services::Service},
    daily_intake::entities::{DailyIntake, LoggedMeal},
    dish_matching::ports::Classifier,
    meal_history::{
        calculator::{average_stats, month_dates, monthly_wrapped, previous_month},
        entities::{AverageStats, DailyStats, MonthlyWrapped},
        ports::MealHistoryService,
    },
    storage::ports::KeyValueStore,
};

const WEEK_DAYS: u32 = 7;
const MONTH_DAYS: u32 = 30;

impl<S, CL, CK> Service<S, CL, CK>
where
    S: KeyValueStore,
    CL: Classifier,
    CK: Clock,
{
    /// Stats for the `days` dates ending today.
    async fn stats_window(&self, days: u32) -> Vec<DailyStats> {
        let today = self.clock.today();
        let dates = (0..days)
            .rev()
            .filter_map(|offset| today.checked_sub_days(Days::new(u64::from(offset))));

        join_all(dates.map(|date| self.load_intake(date)))
            .await
            .iter()
            .map(DailyStats::from)
            .collect()
    }

    /// Only dates with logged meals are read.
    async fn month_intakes(&self, year: i32, month: u32) -> Result<Vec<DailyIntake>, CoreError> {
        let logged = self.logged_dates().await;
        let dates: Vec<NaiveDate> = month_dates(year, month)?
            .into_iter()
            .filter(|d| logged.contains(d))
            .collect();

        Ok(join_all(dates.into_iter().map(|date| self.load_intake(date))).await)
    }
}

impl<S, CL, CK> MealHistoryService for Service<S, CL, CK>
where
    S: KeyValueStore,
    CL: Classifier,
    CK: Clock,
{
    async fn weekly_stats(&self) -> Result<Vec<DailyStats>, CoreError> {
        Ok(self.stats_window(WEEK_DAYS).await)
    }

    async fn monthly_stats(&self) -> Result<Vec<DailyStats>, CoreError> {
        Ok(self.stats_window(MONTH_DAYS).await)
    }

    async fn average_stats(&self, days: u32) -> Result<AverageStats, CoreError> {
        if days == 0 {
            return Err(CoreError::Invalid("average needs at least one day".to_string()));
        }
        Ok(average_stats(&self.stats_window(days).await))
    }

    #[instrument(skip(self))]
    async fn monthly_wrapped(&self, year: i32, month: u32) -> Result<MonthlyWrapped, CoreError> {
        let current = self.month_intakes(year, month).await?;
        let (prev_year, prev_month) = previous_month(year, month);
        let previous = self.month_intakes(prev_year, prev_month).await?;

        debug!(
            days = current.len(),
            previous_days = previous.len(),
            "Building monthly wrapped"
        );

        monthly_wrapped(year, month, &current, &previous)
    }

    async fn recent_meals(&self, limit: usize) -> Result<Vec<LoggedMeal>, CoreError> {
        let mut meals = Vec::new();

        for date in self.logged_dates().await.into_iter().rev() {
            if meals.len() >= limit {
                break;
            }
            let intake = self.load_intake(date).await;
            meals.extend(intake.meals.into_iter().rev());
        }

        meals.truncate(limit);
        Ok(meals)
    }
}
