use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    dish_matching::{
        entities::MatchResult,
        value_objects::{CorrectMatchInput, CorrectionStats, RankedLabel, RecognizeDishInput},
    },
};

/// External image classifier.
///
/// Implementations return at least one label, sorted by descending probability.
#[cfg_attr(test, mockall::automock)]
pub trait Classifier: Send + Sync {
    fn classify(
        &self,
        image_data: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<RankedLabel>, CoreError>> + Send;
}

pub trait DishRecognitionService: Send + Sync {
    /// Classifies a photo and resolves it against the dish catalog. Nothing is persisted.
    fn recognize_dish(
        &self,
        input: RecognizeDishInput,
    ) -> impl Future<Output = Result<MatchResult, CoreError>> + Send;

    /// Overrides a match with a catalog dish and records the correction.
    fn correct_match(
        &self,
        input: CorrectMatchInput,
    ) -> impl Future<Output = Result<MatchResult, CoreError>> + Send;

    fn correction_stats(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<CorrectionStats, CoreError>> + Send;
}
