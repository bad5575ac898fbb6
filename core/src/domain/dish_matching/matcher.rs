use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    common::{MatchingConfig, entities::app_errors::CoreError},
    dish_catalog::{DishCatalog, DishEntry},
    dish_matching::{
        entities::{MatchDetails, MatchReason, MatchResult},
        fallback::FamilyFallback,
        text_matcher::{SubstringMatcher, TextMatcher},
        value_objects::RankedLabel,
    },
};

/// Dish-name fragments that identify a dish on their own, whatever their length.
const CORE_IDENTITY_TOKENS: &[&str] = &[
    "laksa", "prata", "nasi", "lemak", "goreng", "char", "kway", "hokkien", "mee", "rebus",
    "siam", "wanton",
];

const SIGNATURE_SET_WEIGHT: u32 = 100;
const NEAR_SIGNATURE_WEIGHT: u32 = 50;
const IDENTITY_BONUS: u32 = 20;
const STRONG_GENERIC_BONUS: u32 = 40;
const WEAK_GENERIC_BONUS: u32 = 20;
const STRONG_PROBABILITY: f64 = 0.7;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct EntryScore {
    total: u32,
    keyword_matches: u32,
    signature_match: bool,
    generic_match: bool,
}

impl EntryScore {
    fn reason(&self) -> MatchReason {
        if self.signature_match {
            MatchReason::SignatureMatch
        } else if self.keyword_matches >= 2 {
            MatchReason::KeywordMatch
        } else {
            MatchReason::GenericMapping
        }
    }

    fn confidence(&self, p: f64) -> f64 {
        if self.signature_match {
            (p * 1.5).min(0.98)
        } else if self.keyword_matches >= 3 {
            (p * 1.3).min(0.95)
        } else if self.generic_match && p > STRONG_PROBABILITY {
            (p * 1.2).min(0.90)
        } else if self.keyword_matches >= 2 {
            (p * 1.1).min(0.85)
        } else {
            (p * 0.9).min(0.75)
        }
    }

    fn details(&self) -> MatchDetails {
        MatchDetails {
            keyword_matches: self.keyword_matches,
            signature_match: self.signature_match,
            generic_match: self.generic_match,
            weighted_score: self.total,
        }
    }
}

/// Resolves classifier labels to a catalog dish.
///
/// Matching is pure: the same labels against the same catalog always produce
/// the same [`MatchResult`].
#[derive(Clone)]
pub struct DishMatcher {
    catalog: Arc<DishCatalog>,
    text_matcher: Arc<dyn TextMatcher>,
    fallback: Option<FamilyFallback>,
}

impl DishMatcher {
    pub fn new(catalog: DishCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            text_matcher: Arc::new(SubstringMatcher),
            fallback: None,
        }
    }

    pub fn with_text_matcher(mut self, text_matcher: impl TextMatcher + 'static) -> Self {
        self.text_matcher = Arc::new(text_matcher);
        self
    }

    pub fn with_fallback(mut self, config: &MatchingConfig) -> Self {
        self.fallback = FamilyFallback::from_config(config);
        self
    }

    pub fn catalog(&self) -> &DishCatalog {
        &self.catalog
    }

    pub fn match_labels(&self, labels: &[RankedLabel]) -> Result<MatchResult, CoreError> {
        let top = labels
            .first()
            .ok_or_else(|| CoreError::Invalid("at least one ranked label is required".into()))?;
        let p = clamp_probability(top.probability);

        let search_text = labels
            .iter()
            .map(|l| l.label.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");

        let mut best: Option<(&DishEntry, EntryScore)> = None;
        for dish in self.catalog.entries() {
            let score = self.score_entry(dish, &search_text, p);
            if score.total == 0 {
                continue;
            }
            if best.is_none_or(|(_, current)| score.total > current.total) {
                best = Some((dish, score));
            }
        }

        if let Some((dish, score)) = best {
            debug!(
                dish = %dish.name,
                score = score.total,
                keyword_matches = score.keyword_matches,
                "Resolved labels to catalog dish"
            );
            return Ok(MatchResult {
                original_prediction: top.label.clone(),
                matched_dish: Some(dish.clone()),
                confidence: score.confidence(p),
                match_reason: score.reason(),
                match_details: Some(score.details()),
            });
        }

        let fallback = self.fallback.and_then(|fallback| {
            fallback.resolve(&self.catalog, self.text_matcher.as_ref(), &search_text, p)
        });

        Ok(match fallback {
            Some((dish, confidence)) => {
                debug!(dish = %dish.name, "Resolved labels through family fallback");
                MatchResult {
                    original_prediction: top.label.clone(),
                    matched_dish: Some(dish.clone()),
                    confidence,
                    match_reason: MatchReason::GenericMapping,
                    match_details: None,
                }
            }
            None => MatchResult::no_match(top.label.clone(), p),
        })
    }

    /// Substitutes the named dish into `result`. Nothing is re-scored.
    pub fn correct(&self, result: &MatchResult, dish_name: &str) -> Result<MatchResult, CoreError> {
        let dish = self
            .catalog
            .find_by_name(dish_name)
            .ok_or_else(|| CoreError::UnknownDish(dish_name.to_string()))?;

        Ok(MatchResult {
            matched_dish: Some(dish.clone()),
            match_reason: MatchReason::UserCorrected,
            ..result.clone()
        })
    }

    fn score_entry(&self, dish: &DishEntry, text: &str, p: f64) -> EntryScore {
        let mut score = EntryScore::default();
        let mut signature_score = 0;

        for set in &dish.signature_combinations {
            let size = set.len() as u32;
            let present = set
                .iter()
                .filter(|term| self.text_matcher.matches(text, term))
                .count() as u32;

            if size > 0 && present == size {
                score.signature_match = true;
                signature_score += SIGNATURE_SET_WEIGHT * size;
                score.keyword_matches += size;
            } else if size >= 2 && present == size - 1 {
                signature_score += NEAR_SIGNATURE_WEIGHT * present;
                score.keyword_matches += present;
            }
        }

        let mut keyword_score = 0;
        for keyword in &dish.keywords {
            if !self.text_matcher.matches(text, keyword) {
                continue;
            }
            score.keyword_matches += 1;
            keyword_score += keyword_weight(keyword);
            if CORE_IDENTITY_TOKENS.contains(&keyword.as_str()) {
                keyword_score += IDENTITY_BONUS;
            }
        }

        score.generic_match = dish
            .generic_mappings
            .iter()
            .any(|phrase| self.text_matcher.matches(text, phrase));

        let mut total = signature_score + keyword_score;
        if score.signature_match {
            total *= 2;
        }
        if score.generic_match {
            total += if p > STRONG_PROBABILITY {
                STRONG_GENERIC_BONUS
            } else {
                WEAK_GENERIC_BONUS
            };
        }
        score.total = total;

        score
    }
}

fn keyword_weight(keyword: &str) -> u32 {
    match keyword.chars().count() {
        n if n > 8 => 15,
        n if n >= 6 => 10,
        _ => 5,
    }
}

fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}
