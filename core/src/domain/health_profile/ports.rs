use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health_profile::{
        entities::UserHealthProfile,
        value_objects::{SaveHealthProfileInput, UpdateHealthProfileInput},
    },
    health_summary::entities::HealthSummary,
    nutrient_targets::entities::NutrientTargets,
};

pub trait HealthProfileService: Send + Sync {
    /// Validates and stores a profile, replacing any existing one.
    fn save_profile(
        &self,
        input: SaveHealthProfileInput,
    ) -> impl Future<Output = Result<UserHealthProfile, CoreError>> + Send;

    fn get_profile(
        &self,
    ) -> impl Future<Output = Result<Option<UserHealthProfile>, CoreError>> + Send;

    fn update_profile(
        &self,
        input: UpdateHealthProfileInput,
    ) -> impl Future<Output = Result<UserHealthProfile, CoreError>> + Send;

    fn delete_profile(&self) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Targets derived from the stored profile. Recomputed on every call.
    fn get_nutrient_targets(
        &self,
    ) -> impl Future<Output = Result<NutrientTargets, CoreError>> + Send;

    fn get_health_summary(&self) -> impl Future<Output = Result<HealthSummary, CoreError>> + Send;
}
