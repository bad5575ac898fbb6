use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("could not recognize food, please retry: {0}")]
    ClassificationFailure(String),

    #[error("invalid profile field `{field}`: {reason}")]
    InvalidProfile { field: String, reason: String },

    #[error("no health profile has been set up")]
    ProfileNotFound,

    #[error("dish not found in catalog: {0}")]
    UnknownDish(String),

    #[error("persistence failure: {0}")]
    Persistence(String),

    #[error("serialization failure: {0}")]
    Serialization(String),

    #[error("external service error: {0}")]
    ExternalServiceError(String),

    #[error("invalid input: {0}")]
    Invalid(String),
}

impl CoreError {
    pub fn invalid_profile(field: &str, reason: impl Into<String>) -> Self {
        CoreError::InvalidProfile {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(error: serde_json::Error) -> Self {
        CoreError::Serialization(error.to_string())
    }
}
