use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

use crate::domain::dish_catalog::entities::Nutrition;

pub mod entities;
pub mod ports;
pub mod services;

#[derive(Clone, Debug, Default)]
pub struct HawkerLensConfig {
    pub classifier: ClassifierConfig,
    pub matching: MatchingConfig,
    pub storage: StorageConfig,
}

#[derive(Clone, Debug)]
pub struct ClassifierConfig {
    pub base_url: String,
    pub personal_access_token: String,
    pub user_id: String,
    pub app_id: String,
    pub model_id: String,
    /// Concepts below this value are reported as "not food".
    pub min_food_confidence: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.clarifai.com".to_string(),
            personal_access_token: String::new(),
            user_id: "clarifai".to_string(),
            app_id: "main".to_string(),
            model_id: "food-item-recognition".to_string(),
            min_food_confidence: 0.5,
        }
    }
}

#[derive(Clone, Debug)]
pub struct MatchingConfig {
    pub aggressive_fallback: bool,
    pub aggressive_fallback_threshold: f64,
    pub aggressive_fallback_factor: f64,
    /// Nutrition logged when a photo resolves to no catalog dish.
    pub fallback_nutrition: Nutrition,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            aggressive_fallback: true,
            aggressive_fallback_threshold: 0.6,
            aggressive_fallback_factor: 0.85,
            fallback_nutrition: Nutrition::generic_estimate(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub correction_log_capacity: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".hawkerlens"),
            correction_log_capacity: 500,
        }
    }
}

impl HawkerLensConfig {
    /// Reads `HAWKERLENS_*` variables, keeping defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(token) = std::env::var("HAWKERLENS_CLARIFAI_PAT") {
            config.classifier.personal_access_token = token;
        }
        if let Ok(user_id) = std::env::var("HAWKERLENS_CLARIFAI_USER_ID") {
            config.classifier.user_id = user_id;
        }
        if let Ok(app_id) = std::env::var("HAWKERLENS_CLARIFAI_APP_ID") {
            config.classifier.app_id = app_id;
        }
        if let Ok(model_id) = std::env::var("HAWKERLENS_CLARIFAI_MODEL_ID") {
            config.classifier.model_id = model_id;
        }
        if let Some(threshold) = env_f64("HAWKERLENS_MIN_FOOD_CONFIDENCE") {
            config.classifier.min_food_confidence = threshold;
        }
        if let Ok(flag) = std::env::var("HAWKERLENS_AGGRESSIVE_FALLBACK") {
            config.matching.aggressive_fallback = !matches!(flag.as_str(), "0" | "false" | "off");
        }
        if let Some(threshold) = env_f64("HAWKERLENS_FALLBACK_THRESHOLD") {
            config.matching.aggressive_fallback_threshold = threshold;
        }
        if let Ok(dir) = std::env::var("HAWKERLENS_DATA_DIR") {
            config.storage.data_dir = PathBuf::from(dir);
        }
        if let Some(capacity) = std::env::var("HAWKERLENS_CORRECTION_LOG_CAPACITY")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
        {
            config.storage.correction_log_capacity = capacity;
        }

        config
    }
}

fn env_f64(key: &str) -> Option<f64> {
    std::env::var(key).ok().and_then(|v| v.parse::<f64>().ok())
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

