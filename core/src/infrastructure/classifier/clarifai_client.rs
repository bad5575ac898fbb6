use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use crate::domain::{
    common::{ClassifierConfig, entities::app_errors::CoreError},
    dish_matching::{ports::Classifier, value_objects::RankedLabel},
};

const STATUS_SUCCESS: u32 = 10000;

/// Label reported when the top concept is too weak to call the photo food.
pub const UNKNOWN_DISH_LABEL: &str = "Unknown dish";

/// Clarifai food-item-recognition model behind the [`Classifier`] port.
#[derive(Debug, Clone)]
pub struct ClarifaiClassifier {
    config: ClassifierConfig,
    client: Client,
}

#[derive(Debug, Serialize)]
struct PredictRequest {
    user_app_id: UserAppId,
    inputs: Vec<Input>,
}

#[derive(Debug, Serialize)]
struct UserAppId {
    user_id: String,
    app_id: String,
}

#[derive(Debug, Serialize)]
struct Input {
    data: InputData,
}

#[derive(Debug, Serialize)]
struct InputData {
    image: Image,
}

#[derive(Debug, Serialize)]
struct Image {
    base64: String,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    outputs: Vec<Output>,
}

#[derive(Debug, Deserialize)]
struct Output {
    status: Status,
    #[serde(default)]
    data: Option<OutputData>,
}

#[derive(Debug, Deserialize)]
struct Status {
    code: u32,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct OutputData {
    #[serde(default)]
    concepts: Vec<Concept>,
}

#[derive(Debug, Deserialize)]
struct Concept {
    name: String,
    value: f64,
}

impl ClarifaiClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn outputs_url(&self) -> String {
        format!(
            "{}/v2/models/{}/{}/{}/outputs",
            self.config.base_url.trim_end_matches('/'),
            self.config.user_id,
            self.config.app_id,
            self.config.model_id
        )
    }

    /// True when the token is accepted for the configured app.
    pub async fn check_connection(&self) -> bool {
        if self.config.personal_access_token.is_empty() {
            return false;
        }

        let url = format!(
            "{}/v2/users/{}/apps/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.user_id,
            self.config.app_id
        );

        match self
            .client
            .get(&url)
            .header("Authorization", self.auth_header())
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                error!(error = %e, "Clarifai connection check failed");
                false
            }
        }
    }

    fn auth_header(&self) -> String {
        format!("Key {}", self.config.personal_access_token)
    }

    async fn call_predict(&self, request: PredictRequest) -> Result<PredictResponse, CoreError> {
        let response = self
            .client
            .post(self.outputs_url())
            .header("Authorization", self.auth_header())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Clarifai request failed");
                CoreError::ExternalServiceError(format!("classifier request failed: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(%status, body = %body, "Clarifai returned an error");
            return Err(CoreError::ExternalServiceError(format!(
                "classifier returned {status}"
            )));
        }

        response.json().await.map_err(|e| {
            error!(error = %e, "Failed to parse Clarifai response");
            CoreError::ExternalServiceError(format!("unreadable classifier response: {e}"))
        })
    }
}

/// Turns a prediction into ranked labels. A top concept under `min_confidence`
/// yields a single [`UNKNOWN_DISH_LABEL`] carrying that concept's value.
fn ranked_labels(
    response: PredictResponse,
    min_confidence: f64,
) -> Result<Vec<RankedLabel>, CoreError> {
    let output = response
        .outputs
        .into_iter()
        .next()
        .ok_or_else(|| CoreError::ClassificationFailure("no outputs returned".to_string()))?;

    if output.status.code != STATUS_SUCCESS {
        return Err(CoreError::ClassificationFailure(format!(
            "processing error: {}",
            output.status.description
        )));
    }

    let mut concepts = output.data.map(|d| d.concepts).unwrap_or_default();
    concepts.sort_by(|a, b| b.value.total_cmp(&a.value));

    let top = concepts
        .first()
        .ok_or_else(|| CoreError::ClassificationFailure("no concepts returned".to_string()))?;

    if top.value < min_confidence {
        return Ok(vec![RankedLabel::new(UNKNOWN_DISH_LABEL, top.value)]);
    }

    Ok(concepts
        .into_iter()
        .filter(|c| c.value >= min_confidence)
        .map(|c| RankedLabel::new(c.name, c.value))
        .collect())
}

impl Classifier for ClarifaiClassifier {
    #[instrument(skip(self, image_data), fields(image_bytes = image_data.len()))]
    async fn classify(&self, image_data: Vec<u8>) -> Result<Vec<RankedLabel>, CoreError> {
        if self.config.personal_access_token.is_empty() {
            return Err(CoreError::ExternalServiceError(
                "classifier access token is not configured".to_string(),
            ));
        }

        let request = PredictRequest {
            user_app_id: UserAppId {
                user_id: self.config.user_id.clone(),
                app_id: self.config.app_id.clone(),
            },
            inputs: vec![Input {
                data: InputData {
                    image: Image {
                        base64: general_purpose::STANDARD.encode(&image_data),
                    },
                },
            }],
        };

        let response = self.call_predict(request).await?;
        let labels = ranked_labels(response, self.config.min_food_confidence)?;

        if let Some(top) = labels.first() {
            debug!(
                top = %top.label,
                probability = top.probability,
                count = labels.len(),
                "Image classified"
            );
        }

        Ok(labels)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn response(value: serde_json::Value) -> PredictResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn concepts_above_threshold_become_labels() {
        let predicted = response(json!({
            "status": {"code": 10000, "description": "Ok"},
            "outputs": [{
                "status": {"code": 10000, "description": "Ok"},
                "data": {"concepts": [
                    {"id": "a", "name": "noodle soup", "value": 0.81, "app_id": "main"},
                    {"id": "b", "name": "curry", "value": 0.64, "app_id": "main"},
                    {"id": "c", "name": "bread", "value": 0.12, "app_id": "main"}
                ]}
            }]
        }));

        let labels = ranked_labels(predicted, 0.5).unwrap();

        assert_eq!(
            labels,
            vec![
                RankedLabel::new("noodle soup", 0.81),
                RankedLabel::new("curry", 0.64)
            ]
        );
    }

    #[test]
    fn weak_top_concept_is_unknown_dish() {
        let predicted = response(json!({
            "outputs": [{
                "status": {"code": 10000},
                "data": {"concepts": [{"name": "plate", "value": 0.31}]}
            }]
        }));

        let labels = ranked_labels(predicted, 0.5).unwrap();

        assert_eq!(labels, vec![RankedLabel::new(UNKNOWN_DISH_LABEL, 0.31)]);
    }

    #[test]
    fn failed_status_or_empty_output_is_a_classification_failure() {
        let failed = response(json!({
            "outputs": [{"status": {"code": 21200, "description": "Model does not exist"}}]
        }));
        assert!(matches!(
            ranked_labels(failed, 0.5),
            Err(CoreError::ClassificationFailure(reason)) if reason.contains("Model does not exist")
        ));

        let empty = response(json!({
            "outputs": [{"status": {"code": 10000}, "data": {"concepts": []}}]
        }));
        assert!(matches!(
            ranked_labels(empty, 0.5),
            Err(CoreError::ClassificationFailure(_))
        ));

        assert!(matches!(
            ranked_labels(response(json!({})), 0.5),
            Err(CoreError::ClassificationFailure(_))
        ));
    }

    #[test]
    fn request_targets_the_configured_model() {
        let classifier = ClarifaiClassifier::new(ClassifierConfig {
            base_url: "https://api.clarifai.com/".to_string(),
            ..ClassifierConfig::default()
        });

        assert_eq!(
            classifier.outputs_url(),
            "https://api.clarifai.com/v2/models/clarifai/main/food-item-recognition/outputs"
        );
    }

    #[tokio::test]
    async fn missing_token_fails_without_a_request() {
        let classifier = ClarifaiClassifier::new(ClassifierConfig::default());

        let err = classifier.classify(vec![1, 2, 3]).await.unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(_)));
        assert!(!classifier.check_connection().await);
    }
}
