use std::collections::BTreeSet;

use tracing::{info, instrument};

use crate::domain::{
    common::{
        entities::app_errors::CoreError,
        ports::{Clock, date_key},
        services::Service,
    },
    daily_intake::entities::DailyIntake,
    dish_matching::ports::Classifier,
    health_profile::entities::UserHealthProfile,
    nutrient_alerts::{engine::check_alerts, entities::NutrientAlert, ports::NutrientAlertService},
    nutrient_targets::compute_targets,
    storage::{
        helpers::{load_or_default, persist},
        ports::KeyValueStore,
        value_objects::DISMISSED_ALERTS_KEY,
    },
};

impl<S, CL, CK> Service<S, CL, CK>
where
    S: KeyValueStore,
    CL: Classifier,
    CK: Clock,
{
    /// Runs the alert engine for `intake` and flags ids the user dismissed.
    pub(crate) async fn evaluate_alerts(
        &self,
        profile: &UserHealthProfile,
        intake: &DailyIntake,
    ) -> Result<Vec<NutrientAlert>, CoreError> {
        let targets = compute_targets(profile)?;
        let dismissed: BTreeSet<String> = load_or_default(&self.store, DISMISSED_ALERTS_KEY).await;

        let alerts = check_alerts(profile, &targets, intake)
            .into_iter()
            .map(|mut alert| {
                alert.dismissed = dismissed.contains(&alert.id);
                alert
            })
            .collect();

        Ok(alerts)
    }
}

impl<S, CL, CK> NutrientAlertService for Service<S, CL, CK>
where
    S: KeyValueStore,
    CL: Classifier,
    CK: Clock,
{
    async fn current_alerts(&self) -> Result<Vec<NutrientAlert>, CoreError> {
        let Some(profile) = self.load_profile().await else {
            return Ok(Vec::new());
        };
        let intake = self.load_intake(self.clock.today()).await;

        self.evaluate_alerts(&profile, &intake).await
    }

    async fn active_alerts(&self) -> Result<Vec<NutrientAlert>, CoreError> {
        let alerts = self.current_alerts().await?;
        Ok(alerts.into_iter().filter(|a| !a.dismissed).collect())
    }

    #[instrument(skip(self))]
    async fn dismiss_alert(&self, alert_id: &str) -> Result<(), CoreError> {
        let mut dismissed: BTreeSet<String> =
            load_or_default(&self.store, DISMISSED_ALERTS_KEY).await;

        // Ids carry their date, so earlier days can never match again.
        let today = date_key(self.clock.today());
        dismissed.retain(|id| id.ends_with(&today));
        dismissed.insert(alert_id.to_string());

        persist(&self.store, DISMISSED_ALERTS_KEY, &dismissed).await?;
        info!(alert_id, "Alert dismissed");

        Ok(())
    }

    async fn clear_dismissed_alerts(&self) -> Result<(), CoreError> {
        self.store.remove(DISMISSED_ALERTS_KEY).await?;
        info!("Dismissed alerts cleared");
        Ok(())
    }
}
