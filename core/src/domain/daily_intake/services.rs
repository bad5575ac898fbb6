use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::{info, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, ports::Clock, services::Service},
    daily_intake::{
        entities::{DailyIntake, LoggedMeal, LoggedMealConfig},
        ports::MealLogService,
        value_objects::{LogMealInput, MealLogged},
    },
    dish_matching::{entities::MatchResult, ports::Classifier},
    rewards::{points_reason, score_meal},
    storage::{
        helpers::{load_optional, load_or_default, persist},
        ports::KeyValueStore,
        value_objects::{INTAKE_INDEX_KEY, daily_intake_key},
    },
};

impl<S, CL, CK> Service<S, CL, CK>
where
    S: KeyValueStore,
    CL: Classifier,
    CK: Clock,
{
    /// The accumulator for `date`. Missing, corrupt or mis-dated entries read
    /// as an empty day.
    pub(crate) async fn load_intake(&self, date: NaiveDate) -> DailyIntake {
        load_optional::<S, DailyIntake>(&self.store, &daily_intake_key(date))
            .await
            .filter(|intake| intake.date == date)
            .unwrap_or_else(|| DailyIntake::empty(date))
    }

    /// Dates that have had at least one meal logged, oldest first.
    pub(crate) async fn logged_dates(&self) -> BTreeSet<NaiveDate> {
        load_or_default(&self.store, INTAKE_INDEX_KEY).await
    }

    /// Writes the day's intake, then the date index. Only the intake write
    /// can fail the call; a stale index is repaired by the next meal that day.
    async fn save_intake(&self, intake: &DailyIntake) -> Result<(), CoreError> {
        persist(&self.store, &daily_intake_key(intake.date), intake).await?;

        let mut dates = self.logged_dates().await;
        if dates.insert(intake.date) {
            if let Err(e) = persist(&self.store, INTAKE_INDEX_KEY, &dates).await {
                warn!(date = %intake.date, error = %e, "Intake index not updated");
            }
        }

        Ok(())
    }

    /// Builds the new intake, rewards state and alerts first, then commits the
    /// intake. A failed intake write leaves everything as it was; later writes
    /// only warn, so a retry never logs the meal twice.
    async fn record_meal(&self, match_result: MatchResult) -> Result<MealLogged, CoreError> {
        let nutrition = match_result
            .nutrition()
            .unwrap_or(self.config.matching.fallback_nutrition);
        let points = score_meal(&nutrition);
        let reason = points_reason(points);

        let meal = LoggedMeal::new(LoggedMealConfig {
            match_result: match_result.clone(),
            fallback_nutrition: self.config.matching.fallback_nutrition,
            points,
            logged_at: self.clock.now(),
        });

        let mut intake = self.load_intake(self.clock.today()).await;
        intake.add_meal(meal.clone());

        let (rewards, unlocked) = self.credit_meal(&meal, reason).await;

        let alerts = match self.load_profile().await {
            Some(profile) => self
                .evaluate_alerts(&profile, &intake)
                .await
                .unwrap_or_else(|e| {
                    warn!(error = %e, "Stored profile cannot produce alerts");
                    Vec::new()
                }),
            None => Vec::new(),
        };

        self.save_intake(&intake).await?;
        let unlocked_badges = self.commit_rewards(&rewards, unlocked).await;

        info!(
            meal = %meal.name,
            points,
            meals_today = intake.meal_count(),
            alerts = alerts.len(),
            "Meal logged"
        );

        Ok(MealLogged {
            meal,
            match_result,
            reason: reason.to_string(),
            unlocked_badges,
            intake,
            alerts,
        })
    }
}

impl<S, CL, CK> MealLogService for Service<S, CL, CK>
where
    S: KeyValueStore,
    CL: Classifier,
    CK: Clock,
{
    #[instrument(skip(self, input), fields(image_bytes = input.image_data.len()))]
    async fn log_meal(&self, input: LogMealInput) -> Result<MealLogged, CoreError> {
        let match_result = self.classify_and_match(input.image_data).await?;
        self.record_meal(match_result).await
    }

    #[instrument(skip(self, match_result), fields(dish = %match_result.display_name()))]
    async fn log_resolved_meal(&self, match_result: MatchResult) -> Result<MealLogged, CoreError> {
        self.record_meal(match_result).await
    }

    async fn get_today_intake(&self) -> Result<DailyIntake, CoreError> {
        Ok(self.load_intake(self.clock.today()).await)
    }

    async fn get_intake(&self, date: NaiveDate) -> Result<DailyIntake, CoreError> {
        Ok(self.load_intake(date).await)
    }

    #[instrument(skip(self))]
    async fn reset_today_intake(&self) -> Result<(), CoreError> {
        let today = self.clock.today();
        self.store.remove(&daily_intake_key(today)).await?;
        info!(date = %today, "Daily intake reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::{
        domain::{
            common::{HawkerLensConfig, entities::app_errors::CoreError, services::Service},
            daily_intake::{
                entities::DailyIntake, ports::MealLogService, value_objects::LogMealInput,
            },
            dish_catalog::entities::Nutrition,
            dish_matching::{
                entities::MatchReason, ports::DishRecognitionService,
                value_objects::{CorrectMatchInput, RankedLabel, RecognizeDishInput},
            },
            health_profile::{entities::MedicalCondition, ports::HealthProfileService},
            nutrient_alerts::entities::TrackedNutrient,
            rewards::{entities::BadgeKind, ports::RewardsService},
            storage::{
                ports::{KeyValueStore, MockKeyValueStore},
                value_objects::{
                    HEALTH_PROFILE_KEY, INTAKE_INDEX_KEY, REWARDS_KEY, daily_intake_key,
                },
            },
        },
        infrastructure::clock::FixedClock,
        test_support::{
            FailingKeyStore, StubClassifier, build_service, profile_input, sample_meal_labels,
        },
    };

    fn photo() -> LogMealInput {
        LogMealInput {
            image_data: vec![0xff, 0xd8],
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
    }

    #[tokio::test]
    async fn logging_a_meal_updates_intake_and_rewards() {
        let service = build_service(StubClassifier::labels(sample_meal_labels()));

        let logged = service.log_meal(photo()).await.unwrap();

        assert_eq!(logged.meal.name, "Laksa");
        assert_eq!(logged.meal.points, 68);
        assert_eq!(logged.reason, "Great nutritional choice!");
        assert!(logged.unlocked_badges.contains(&BadgeKind::FirstMeal));
        assert!(logged.alerts.is_empty());

        let intake = service.get_today_intake().await.unwrap();
        assert_eq!(intake.date, today());
        assert_eq!(intake.meal_count(), 1);
        assert_eq!(intake.totals.sodium, 1580.0);

        assert_eq!(service.get_rewards().await.unwrap().total_points, 68);
    }

    #[tokio::test]
    async fn failed_classification_changes_nothing() {
        let service = build_service(StubClassifier::failing("network unreachable"));

        let err = service.log_meal(photo()).await.unwrap_err();

        assert!(matches!(err, CoreError::ClassificationFailure(_)));
        assert!(service.store.get(&daily_intake_key(today())).await.unwrap().is_none());
        assert!(service.store.get(REWARDS_KEY).await.unwrap().is_none());
        assert!(service.store.get(INTAKE_INDEX_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unmatched_photo_logs_placeholder_nutrition() {
        let service = build_service(StubClassifier::labels(vec![RankedLabel::new("pizza", 0.9)]));

        let logged = service.log_meal(photo()).await.unwrap();

        assert_eq!(logged.match_result.match_reason, MatchReason::NoMatch);
        assert_eq!(logged.meal.name, "pizza");
        assert_eq!(logged.meal.nutrition, Nutrition::generic_estimate());
        assert_eq!(logged.intake.totals.calories, 350.0);
    }

    #[tokio::test]
    async fn corrected_match_is_logged_as_chosen_dish() {
        let service = build_service(StubClassifier::labels(vec![RankedLabel::new("pizza", 0.9)]));
        let original = service
            .recognize_dish(RecognizeDishInput {
                image_data: vec![1],
            })
            .await
            .unwrap();
        let corrected = service
            .correct_match(CorrectMatchInput {
                match_result: original,
                dish_name: "Chicken Rice".to_string(),
                image_data: None,
            })
            .await
            .unwrap();

        let logged = service.log_resolved_meal(corrected).await.unwrap();

        assert_eq!(logged.meal.name, "Chicken Rice");
        assert_eq!(logged.meal.match_reason, MatchReason::UserCorrected);
        assert_eq!(logged.meal.original_prediction, "pizza");
    }

    #[tokio::test]
    async fn alerts_follow_the_logged_meal() {
        let service = build_service(StubClassifier::labels(sample_meal_labels()));
        service
            .save_profile(profile_input(vec![MedicalCondition::Hypertension]))
            .await
            .unwrap();

        let logged = service.log_meal(photo()).await.unwrap();

        assert_eq!(logged.alerts.len(), 1);
        assert_eq!(logged.alerts[0].nutrient, TrackedNutrient::Sodium);
        assert_eq!(logged.alerts[0].related_condition, MedicalCondition::Hypertension);
    }

    #[tokio::test]
    async fn a_new_day_starts_a_new_accumulator() {
        let mut service = build_service(StubClassifier::labels(sample_meal_labels()));
        service.log_meal(photo()).await.unwrap();

        let tomorrow = today().succ_opt().unwrap();
        service.clock = FixedClock::on(tomorrow);
        let logged = service.log_meal(photo()).await.unwrap();

        assert_eq!(logged.intake.date, tomorrow);
        assert_eq!(logged.intake.meal_count(), 1);
        assert_eq!(service.get_intake(today()).await.unwrap().meal_count(), 1);
        assert_eq!(service.get_rewards().await.unwrap().current_streak, 2);
        assert_eq!(service.logged_dates().await.len(), 2);
    }

    #[tokio::test]
    async fn stale_or_corrupt_intake_reads_as_empty() {
        let service = build_service(StubClassifier::labels(sample_meal_labels()));
        let stale = DailyIntake::empty(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        service
            .store
            .set(&daily_intake_key(today()), serde_json::to_value(&stale).unwrap())
            .await
            .unwrap();

        let intake = service.get_today_intake().await.unwrap();
        assert_eq!(intake.date, today());

        service
            .store
            .set(&daily_intake_key(today()), serde_json::json!("???"))
            .await
            .unwrap();
        let logged = service.log_meal(photo()).await.unwrap();
        assert_eq!(logged.intake.meal_count(), 1);
    }

    #[tokio::test]
    async fn reset_clears_today_only() {
        let service = build_service(StubClassifier::labels(sample_meal_labels()));
        service.log_meal(photo()).await.unwrap();

        service.reset_today_intake().await.unwrap();

        assert_eq!(service.get_today_intake().await.unwrap().meal_count(), 0);
        assert_eq!(service.get_rewards().await.unwrap().meals_logged, 1);
    }

    #[tokio::test]
    async fn rewards_write_failure_keeps_a_single_logged_meal() {
        let service = Service::new(
            FailingKeyStore::on(REWARDS_KEY),
            StubClassifier::labels(sample_meal_labels()),
            FixedClock::on(today()),
            HawkerLensConfig::default(),
        );

        let logged = service.log_meal(photo()).await.unwrap();

        assert!(logged.unlocked_badges.is_empty());
        assert_eq!(service.get_today_intake().await.unwrap().meal_count(), 1);
        assert_eq!(service.get_rewards().await.unwrap().meals_logged, 0);
        assert_eq!(service.logged_dates().await.len(), 1);
    }

    #[tokio::test]
    async fn intake_write_failure_writes_nothing_else() {
        let service = Service::new(
            FailingKeyStore::on(&daily_intake_key(today())),
            StubClassifier::labels(sample_meal_labels()),
            FixedClock::on(today()),
            HawkerLensConfig::default(),
        );

        let err = service.log_meal(photo()).await.unwrap_err();

        assert!(matches!(err, CoreError::Persistence(_)));
        assert!(service.store.get(REWARDS_KEY).await.unwrap().is_none());
        assert!(service.store.get(INTAKE_INDEX_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unusable_stored_profile_does_not_fail_the_log() {
        let service = build_service(StubClassifier::labels(sample_meal_labels()));
        let mut profile = service
            .save_profile(profile_input(vec![MedicalCondition::Hypertension]))
            .await
            .unwrap();
        profile.height_cm = -1.0;
        service
            .store
            .set(HEALTH_PROFILE_KEY, serde_json::to_value(&profile).unwrap())
            .await
            .unwrap();

        let logged = service.log_meal(photo()).await.unwrap();

        assert!(logged.alerts.is_empty());
        assert_eq!(service.get_rewards().await.unwrap().meals_logged, 1);
    }

    #[tokio::test]
    async fn write_failures_surface_as_persistence_errors() {
        let mut store = MockKeyValueStore::new();
        store.expect_get().returning(|_| Box::pin(async { Ok(None) }));
        store.expect_set().returning(|_, _| {
            Box::pin(async { Err(CoreError::Persistence("disk full".to_string())) })
        });
        let service = Service::new(
            store,
            StubClassifier::labels(sample_meal_labels()),
            FixedClock::on(today()),
            HawkerLensConfig::default(),
        );

        let err = service.log_meal(photo()).await.unwrap_err();

        assert_eq!(err, CoreError::Persistence("disk full".to_string()));
    }
}
