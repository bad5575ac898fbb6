use tracing::{info, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, ports::Clock, services::Service},
    daily_intake::entities::LoggedMeal,
    dish_matching::ports::Classifier,
    rewards::{
        entities::{BadgeKind, RewardsState},
        ports::RewardsService,
    },
    storage::{
        helpers::{load_or_default, persist},
        ports::KeyValueStore,
        value_objects::REWARDS_KEY,
    },
};

impl<S, CL, CK> Service<S, CL, CK>
where
    S: KeyValueStore,
    CL: Classifier,
    CK: Clock,
{
    /// The rewards state after crediting `meal`, with the badges it unlocked.
    /// Nothing is written.
    pub(crate) async fn credit_meal(
        &self,
        meal: &LoggedMeal,
        reason: &str,
    ) -> (RewardsState, Vec<BadgeKind>) {
        let mut state: RewardsState = load_or_default(&self.store, REWARDS_KEY).await;

        let unlocked = state.record_meal(
            &meal.name,
            &meal.nutrition,
            meal.points,
            reason,
            self.clock.today(),
            self.clock.now(),
        );

        (state, unlocked)
    }

    /// Writes a credited state. The meal is already recorded by then, so a
    /// failed write is logged and reported as no unlocked badges.
    pub(crate) async fn commit_rewards(
        &self,
        state: &RewardsState,
        unlocked: Vec<BadgeKind>,
    ) -> Vec<BadgeKind> {
        if let Err(e) = persist(&self.store, REWARDS_KEY, state).await {
            warn!(error = %e, "Rewards not updated for logged meal");
            return Vec::new();
        }

        for kind in &unlocked {
            info!(badge = kind.title(), "Badge unlocked");
        }

        unlocked
    }
}

impl<S, CL, CK> RewardsService for Service<S, CL, CK>
where
    S: KeyValueStore,
    CL: Classifier,
    CK: Clock,
{
    async fn get_rewards(&self) -> Result<RewardsState, CoreError> {
        Ok(load_or_default(&self.store, REWARDS_KEY).await)
    }

    #[instrument(skip(self))]
    async fn reset_rewards(&self) -> Result<(), CoreError> {
        self.store.remove(REWARDS_KEY).await?;
        info!("Rewards reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        domain::{
            daily_intake::{ports::MealLogService, value_objects::LogMealInput},
            rewards::{entities::BadgeKind, ports::RewardsService},
            storage::{ports::KeyValueStore, value_objects::REWARDS_KEY},
        },
        test_support::{StubClassifier, build_service, sample_meal_labels},
    };

    fn photo() -> LogMealInput {
        LogMealInput {
            image_data: vec![7, 7, 7],
        }
    }

    #[tokio::test]
    async fn fresh_state_has_every_badge_locked() {
        let service = build_service(StubClassifier::labels(sample_meal_labels()));

        let rewards = service.get_rewards().await.unwrap();

        assert_eq!(rewards.total_points, 0);
        assert_eq!(rewards.badges.len(), BadgeKind::ALL.len());
        assert_eq!(rewards.unlocked_badges().count(), 0);
    }

    #[tokio::test]
    async fn logged_meals_accumulate_points() {
        let service = build_service(StubClassifier::labels(sample_meal_labels()));

        service.log_meal(photo()).await.unwrap();
        service.log_meal(photo()).await.unwrap();

        let rewards = service.get_rewards().await.unwrap();
        assert_eq!(rewards.meals_logged, 2);
        assert_eq!(rewards.total_points, 136);
        assert_eq!(rewards.current_streak, 1);
        assert_eq!(rewards.points_history.len(), 2);
        assert!(rewards.badge(BadgeKind::CenturyClub).unwrap().is_unlocked());
    }

    #[tokio::test]
    async fn corrupt_state_starts_over() {
        let service = build_service(StubClassifier::labels(sample_meal_labels()));
        service
            .store
            .set(REWARDS_KEY, serde_json::json!([1, 2, 3]))
            .await
            .unwrap();

        service.log_meal(photo()).await.unwrap();

        let rewards = service.get_rewards().await.unwrap();
        assert_eq!(rewards.meals_logged, 1);
        assert_eq!(rewards.total_points, 68);
    }

    #[tokio::test]
    async fn reset_clears_progress() {
        let service = build_service(StubClassifier::labels(sample_meal_labels()));
        service.log_meal(photo()).await.unwrap();

        service.reset_rewards().await.unwrap();

        assert_eq!(service.get_rewards().await.unwrap().total_points, 0);
    }
}
