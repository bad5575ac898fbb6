use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, nutrient_alerts::entities::NutrientAlert,
};

pub trait NutrientAlertService: Send + Sync {
    /// Today's alerts, dismissed ones included and flagged.
    fn current_alerts(&self) -> impl Future<Output = Result<Vec<NutrientAlert>, CoreError>> + Send;

    fn active_alerts(&self) -> impl Future<Output = Result<Vec<NutrientAlert>, CoreError>> + Send;

    fn dismiss_alert(&self, alert_id: &str) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn clear_dismissed_alerts(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}
