use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, ports::Clock, services::Service},
    dish_matching::ports::Classifier,
    health_profile::{
        entities::{HealthProfileConfig, UserHealthProfile},
        ports::HealthProfileService,
        value_objects::{SaveHealthProfileInput, UpdateHealthProfileInput},
    },
    health_summary::{entities::HealthSummary, summarize},
    nutrient_targets::{compute_targets, entities::NutrientTargets},
    storage::{
        helpers::{load_optional, persist},
        ports::KeyValueStore,
        value_objects::HEALTH_PROFILE_KEY,
    },
};

impl<S, CL, CK> Service<S, CL, CK>
where
    S: KeyValueStore,
    CL: Classifier,
    CK: Clock,
{
    /// The stored profile; unreadable data counts as no profile.
    pub(crate) async fn load_profile(&self) -> Option<UserHealthProfile> {
        load_optional(&self.store, HEALTH_PROFILE_KEY).await
    }

    async fn require_profile(&self) -> Result<UserHealthProfile, CoreError> {
        self.load_profile().await.ok_or(CoreError::ProfileNotFound)
    }
}

impl<S, CL, CK> HealthProfileService for Service<S, CL, CK>
where
    S: KeyValueStore,
    CL: Classifier,
    CK: Clock,
{
    #[instrument(skip(self, input), fields(name = %input.name))]
    async fn save_profile(
        &self,
        input: SaveHealthProfileInput,
    ) -> Result<UserHealthProfile, CoreError> {
        let profile = UserHealthProfile::new(
            HealthProfileConfig {
                name: input.name,
                age: input.age,
                gender: input.gender,
                weight_kg: input.weight_kg,
                height_cm: input.height_cm,
                activity_level: input.activity_level,
                medical_conditions: input.medical_conditions,
                dietary_restrictions: input.dietary_restrictions,
            },
            self.clock.now(),
        );
        compute_targets(&profile)?;

        persist(&self.store, HEALTH_PROFILE_KEY, &profile).await?;
        info!(profile_id = %profile.id, "Health profile saved");

        Ok(profile)
    }

    async fn get_profile(&self) -> Result<Option<UserHealthProfile>, CoreError> {
        Ok(self.load_profile().await)
    }

    #[instrument(skip(self, input))]
    async fn update_profile(
        &self,
        input: UpdateHealthProfileInput,
    ) -> Result<UserHealthProfile, CoreError> {
        let mut profile = self.require_profile().await?;

        if let Some(name) = input.name {
            profile.name = name;
        }
        if let Some(age) = input.age {
            profile.age = age;
        }
        if let Some(gender) = input.gender {
            profile.gender = gender;
        }
        if let Some(weight_kg) = input.weight_kg {
            profile.weight_kg = weight_kg;
        }
        if let Some(height_cm) = input.height_cm {
            profile.height_cm = height_cm;
        }
        if let Some(activity_level) = input.activity_level {
            profile.activity_level = activity_level;
        }
        if let Some(conditions) = input.medical_conditions {
            profile.medical_conditions = conditions;
        }
        if let Some(restrictions) = input.dietary_restrictions {
            profile.dietary_restrictions = restrictions;
        }
        compute_targets(&profile)?;
        profile.updated_at = self.clock.now();

        persist(&self.store, HEALTH_PROFILE_KEY, &profile).await?;
        info!(profile_id = %profile.id, "Health profile updated");

        Ok(profile)
    }

    async fn delete_profile(&self) -> Result<(), CoreError> {
        self.store.remove(HEALTH_PROFILE_KEY).await?;
        info!("Health profile deleted");
        Ok(())
    }

    async fn get_nutrient_targets(&self) -> Result<NutrientTargets, CoreError> {
        let profile = self.require_profile().await?;
        compute_targets(&profile)
    }

    async fn get_health_summary(&self) -> Result<HealthSummary, CoreError> {
        let profile = self.require_profile().await?;
        summarize(&profile)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        domain::{
            common::entities::app_errors::CoreError,
            health_profile::{
                entities::{ActivityLevel, Gender, MedicalCondition},
                ports::HealthProfileService,
                value_objects::UpdateHealthProfileInput,
            },
            storage::{ports::KeyValueStore, value_objects::HEALTH_PROFILE_KEY},
        },
        test_support::{StubClassifier, build_service, profile_input, sample_meal_labels},
    };

    #[tokio::test]
    async fn save_then_read_targets() {
        let service = build_service(StubClassifier::labels(sample_meal_labels()));

        service
            .save_profile(profile_input(vec![
                MedicalCondition::Diabetes,
                MedicalCondition::Hypertension,
            ]))
            .await
            .unwrap();

        let targets = service.get_nutrient_targets().await.unwrap();
        assert_eq!(targets.sodium.max, 1500.0);
        assert_eq!(targets.sugar.max, 25.0);
    }

    #[tokio::test]
    async fn invalid_profile_is_not_stored() {
        let service = build_service(StubClassifier::labels(sample_meal_labels()));
        let mut input = profile_input(vec![]);
        input.age = 0;

        let err = service.save_profile(input).await.unwrap_err();

        assert!(matches!(err, CoreError::InvalidProfile { field, .. } if field == "age"));
        assert!(service.get_profile().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn profile_with_negative_calorie_floor_is_not_stored() {
        let service = build_service(StubClassifier::labels(sample_meal_labels()));
        let mut input = profile_input(vec![MedicalCondition::Obesity]);
        input.gender = Gender::Female;
        input.age = 100;
        input.weight_kg = 35.0;
        input.height_cm = 140.0;
        input.activity_level = ActivityLevel::Sedentary;

        let err = service.save_profile(input).await.unwrap_err();

        assert!(matches!(err, CoreError::InvalidProfile { field, .. } if field == "calories"));
        assert!(service.get_profile().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_recomputes_targets() {
        let service = build_service(StubClassifier::labels(sample_meal_labels()));
        let saved = service.save_profile(profile_input(vec![])).await.unwrap();
        assert_eq!(service.get_nutrient_targets().await.unwrap().sodium.max, 2000.0);

        let updated = service
            .update_profile(UpdateHealthProfileInput {
                medical_conditions: Some(vec![MedicalCondition::KidneyDisease]),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.name, saved.name);
        assert_eq!(service.get_nutrient_targets().await.unwrap().sodium.max, 1500.0);
    }

    #[tokio::test]
    async fn invalid_update_keeps_previous_profile() {
        let service = build_service(StubClassifier::labels(sample_meal_labels()));
        service.save_profile(profile_input(vec![])).await.unwrap();

        let err = service
            .update_profile(UpdateHealthProfileInput {
                height_cm: Some(-1.0),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidProfile { .. }));
        let stored = service.get_profile().await.unwrap().unwrap();
        assert_eq!(stored.height_cm, 172.0);
    }

    #[tokio::test]
    async fn missing_or_corrupt_profile_is_reported() {
        let service = build_service(StubClassifier::labels(sample_meal_labels()));
        assert_eq!(
            service.get_nutrient_targets().await.unwrap_err(),
            CoreError::ProfileNotFound
        );

        service
            .store
            .set(HEALTH_PROFILE_KEY, serde_json::json!("garbage"))
            .await
            .unwrap();
        assert!(service.get_profile().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_removes_profile() {
        let service = build_service(StubClassifier::labels(sample_meal_labels()));
        service.save_profile(profile_input(vec![])).await.unwrap();

        service.delete_profile().await.unwrap();

        assert!(service.get_profile().await.unwrap().is_none());
        assert!(matches!(
            service.get_health_summary().await,
            Err(CoreError::ProfileNotFound)
        ));
    }

    #[tokio::test]
    async fn summary_reflects_profile() {
        let service = build_service(StubClassifier::labels(sample_meal_labels()));
        service
            .save_profile(profile_input(vec![MedicalCondition::Hypertension]))
            .await
            .unwrap();

        let summary = service.get_health_summary().await.unwrap();

        assert_eq!(summary.bmi, 26.4);
        assert_eq!(summary.condition_notes.len(), 1);
        assert_eq!(summary.targets.sodium.max, 1500.0);
    }
}
