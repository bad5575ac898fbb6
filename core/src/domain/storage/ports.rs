use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// JSON key-value persistence. Every piece of user state (profile, daily intake,
/// rewards, correction log, dismissed alerts) lives behind this port.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<serde_json::Value>, CoreError>> + Send;

    fn set(
        &self,
        key: &str,
        value: serde_json::Value,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn remove(&self, key: &str) -> impl Future<Output = Result<(), CoreError>> + Send;
}
