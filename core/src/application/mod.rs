use crate::{
    domain::common::{HawkerLensConfig, services::Service},
    infrastructure::{
        classifier::ClarifaiClassifier, clock::SystemClock, storage::JsonFileKeyValueStore,
    },
};

pub type HawkerLensService = Service<JsonFileKeyValueStore, ClarifaiClassifier, SystemClock>;

/// Builds the production service: JSON files under `config.storage.data_dir`,
/// Clarifai for recognition and the local wall clock.
pub async fn create_service(config: HawkerLensConfig) -> Result<HawkerLensService, anyhow::Error> {
    let store = JsonFileKeyValueStore::new(config.storage.data_dir.clone()).await?;
    let classifier = ClarifaiClassifier::new(config.classifier.clone());

    tracing::info!(
        data_dir = %store.root().display(),
        model = %config.classifier.model_id,
        "HawkerLens service ready"
    );

    Ok(Service::new(store, classifier, SystemClock, config))
}
