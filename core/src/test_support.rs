//! Shared fixtures for service tests.

use chrono::NaiveDate;

use crate::{
    domain::{
        common::{HawkerLensConfig, entities::app_errors::CoreError, services::Service},
        dish_matching::{ports::Classifier, value_objects::RankedLabel},
        storage::ports::KeyValueStore,
        health_profile::{
            entities::{ActivityLevel, Gender, MedicalCondition},
            value_objects::SaveHealthProfileInput,
        },
    },
    infrastructure::{clock::FixedClock, storage::InMemoryKeyValueStore},
};

/// Classifier that always answers the same way.
pub struct StubClassifier {
    outcome: Result<Vec<RankedLabel>, CoreError>,
}

impl StubClassifier {
    pub fn labels(labels: Vec<RankedLabel>) -> Self {
        Self {
            outcome: Ok(labels),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            outcome: Err(CoreError::ExternalServiceError(reason.to_string())),
        }
    }
}

impl Classifier for StubClassifier {
    async fn classify(&self, _image_data: Vec<u8>) -> Result<Vec<RankedLabel>, CoreError> {
        self.outcome.clone()
    }
}

/// In-memory store whose writes to one key always fail.
pub struct FailingKeyStore {
    inner: InMemoryKeyValueStore,
    failing_key: String,
}

impl FailingKeyStore {
    pub fn on(key: &str) -> Self {
        Self {
            inner: InMemoryKeyValueStore::new(),
            failing_key: key.to_string(),
        }
    }
}

impl KeyValueStore for FailingKeyStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, CoreError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: serde_json::Value) -> Result<(), CoreError> {
        if key == self.failing_key {
            return Err(CoreError::Persistence(format!("cannot write {key}")));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), CoreError> {
        self.inner.remove(key).await
    }
}

pub type TestService = Service<InMemoryKeyValueStore, StubClassifier, FixedClock>;

/// Service on an empty in-memory store, frozen on Monday 2025-01-06.
pub fn build_service(classifier: StubClassifier) -> TestService {
    let today = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();

    Service::new(
        InMemoryKeyValueStore::new(),
        classifier,
        FixedClock::on(today),
        HawkerLensConfig::default(),
    )
}

pub fn profile_input(conditions: Vec<MedicalCondition>) -> SaveHealthProfileInput {
    SaveHealthProfileInput {
        name: "Ah Seng".to_string(),
        age: 45,
        gender: Gender::Male,
        weight_kg: 78.0,
        height_cm: 172.0,
        activity_level: ActivityLevel::Light,
        medical_conditions: conditions,
        dietary_restrictions: vec![],
    }
}

/// A photo the classifier reads as laksa.
pub fn sample_meal_labels() -> Vec<RankedLabel> {
    vec![RankedLabel::new("laksa curry noodle soup", 0.82)]
}
