use tracing::{error, info, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, ports::Clock, services::Service},
    dish_matching::{
        entities::{Correction, CorrectionLog, MatchResult},
        helpers::image_digest,
        ports::{Classifier, DishRecognitionService},
        value_objects::{CorrectMatchInput, CorrectionStats, RecognizeDishInput},
    },
    storage::{
        helpers::{load_or_default, persist},
        ports::KeyValueStore,
        value_objects::CORRECTIONS_KEY,
    },
};

impl<S, CL, CK> Service<S, CL, CK>
where
    S: KeyValueStore,
    CL: Classifier,
    CK: Clock,
{
    /// Runs the classifier and the matcher. Any classifier problem surfaces as
    /// `ClassificationFailure` before anything else happens.
    pub(crate) async fn classify_and_match(
        &self,
        image_data: Vec<u8>,
    ) -> Result<MatchResult, CoreError> {
        let labels = self.classifier.classify(image_data).await.map_err(|e| {
            error!(error = %e, "Image classification failed");
            match e {
                CoreError::ClassificationFailure(_) => e,
                other => CoreError::ClassificationFailure(other.to_string()),
            }
        })?;

        if labels.is_empty() {
            warn!("Classifier returned no labels");
            return Err(CoreError::ClassificationFailure(
                "classifier returned no labels".to_string(),
            ));
        }

        self.matcher.match_labels(&labels)
    }
}

impl<S, CL, CK> DishRecognitionService for Service<S, CL, CK>
where
    S: KeyValueStore,
    CL: Classifier,
    CK: Clock,
{
    #[instrument(skip(self, input), fields(image_bytes = input.image_data.len()))]
    async fn recognize_dish(&self, input: RecognizeDishInput) -> Result<MatchResult, CoreError> {
        let result = self.classify_and_match(input.image_data).await?;

        info!(
            dish = %result.display_name(),
            reason = ?result.match_reason,
            confidence = result.confidence,
            "Dish recognized"
        );

        Ok(result)
    }

    #[instrument(skip(self, input), fields(dish = %input.dish_name))]
    async fn correct_match(&self, input: CorrectMatchInput) -> Result<MatchResult, CoreError> {
        let corrected = self.matcher.correct(&input.match_result, &input.dish_name)?;

        let correction = Correction::new(
            corrected.original_prediction.clone(),
            corrected.display_name().to_string(),
            input.image_data.as_deref().map(image_digest),
            self.clock.now(),
        );

        // A corrupt log is replaced rather than blocking the new entry.
        let mut log: CorrectionLog = load_or_default(&self.store, CORRECTIONS_KEY).await;
        log.push(correction, self.config.storage.correction_log_capacity);

        if let Err(e) = persist(&self.store, CORRECTIONS_KEY, &log).await {
            warn!(error = %e, "Correction was applied but could not be recorded");
        }

        info!(
            original = %corrected.original_prediction,
            corrected = %corrected.display_name(),
            "Match corrected by user"
        );

        Ok(corrected)
    }

    async fn correction_stats(&self, limit: usize) -> Result<CorrectionStats, CoreError> {
        let log: CorrectionLog = load_or_default(&self.store, CORRECTIONS_KEY).await;
        Ok(log.stats(limit))
    }
}
