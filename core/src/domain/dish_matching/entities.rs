use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    common::generate_uuid_v7,
    dish_catalog::entities::{DishEntry, Nutrition},
    dish_matching::value_objects::{CorrectionStat, CorrectionStats},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchReason {
    SignatureMatch,
    KeywordMatch,
    GenericMapping,
    NoMatch,
    UserCorrected,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchDetails {
    pub keyword_matches: u32,
    pub signature_match: bool,
    pub generic_match: bool,
    pub weighted_score: u32,
}

/// Outcome of resolving one set of classifier labels against the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Raw top-1 label, as the classifier produced it.
    pub original_prediction: String,
    pub matched_dish: Option<DishEntry>,
    pub confidence: f64,
    pub match_reason: MatchReason,
    pub match_details: Option<MatchDetails>,
}

impl MatchResult {
    pub fn no_match(original_prediction: impl Into<String>, confidence: f64) -> Self {
        Self {
            original_prediction: original_prediction.into(),
            matched_dish: None,
            confidence,
            match_reason: MatchReason::NoMatch,
            match_details: None,
        }
    }

    pub fn is_match(&self) -> bool {
        self.matched_dish.is_some()
    }

    pub fn nutrition(&self) -> Option<Nutrition> {
        self.matched_dish.as_ref().map(|dish| dish.nutrition)
    }

    /// Name to show for the meal: the dish, or the raw label when nothing matched.
    pub fn display_name(&self) -> &str {
        self.matched_dish
            .as_ref()
            .map(|dish| dish.name.as_str())
            .unwrap_or(&self.original_prediction)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    pub id: Uuid,
    pub original_prediction: String,
    pub corrected_dish: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_hash: Option<String>,
    pub corrected_at: DateTime<Utc>,
}

impl Correction {
    pub fn new(
        original_prediction: String,
        corrected_dish: String,
        image_hash: Option<String>,
        corrected_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: generate_uuid_v7(),
            original_prediction,
            corrected_dish,
            image_hash,
            corrected_at,
        }
    }
}

/// Append-only correction history, bounded by dropping the oldest entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrectionLog {
    entries: VecDeque<Correction>,
}

impl CorrectionLog {
    pub fn push(&mut self, correction: Correction, capacity: usize) {
        self.entries.push_back(correction);
        while self.entries.len() > capacity.max(1) {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Correction> {
        self.entries.iter()
    }

    /// Most frequent `original -> corrected` pairs, highest count first.
    /// Equal counts keep first-seen order.
    pub fn stats(&self, limit: usize) -> CorrectionStats {
        let mut positions: HashMap<(&str, &str), usize> = HashMap::new();
        let mut pairs: Vec<CorrectionStat> = Vec::new();

        for correction in &self.entries {
            let key = (
                correction.original_prediction.as_str(),
                correction.corrected_dish.as_str(),
            );
            match positions.get(&key) {
                Some(&index) => pairs[index].count += 1,
                None => {
                    positions.insert(key, pairs.len());
                    pairs.push(CorrectionStat {
                        original_prediction: correction.original_prediction.clone(),
                        corrected_dish: correction.corrected_dish.clone(),
                        count: 1,
                    });
                }
            }
        }

        pairs.sort_by(|a, b| b.count.cmp(&a.count));
        pairs.truncate(limit);

        CorrectionStats {
            total_corrections: self.entries.len(),
            most_common: pairs,
        }
    }
}
