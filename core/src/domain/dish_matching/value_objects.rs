use serde::{Deserialize, Serialize};

use crate::domain::dish_matching::entities::MatchResult;

/// One classifier prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedLabel {
    pub label: String,
    pub probability: f64,
}

impl RankedLabel {
    pub fn new(label: impl Into<String>, probability: f64) -> Self {
        Self {
            label: label.into(),
            probability,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecognizeDishInput {
    pub image_data: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct CorrectMatchInput {
    pub match_result: MatchResult,
    pub dish_name: String,
    /// The photo the correction refers to; only its SHA-256 digest is kept.
    pub image_data: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionStat {
    pub original_prediction: String,
    pub corrected_dish: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CorrectionStats {
    pub total_corrections: usize,
    pub most_common: Vec<CorrectionStat>,
}
