use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, rewards::entities::RewardsState};

pub trait RewardsService: Send + Sync {
    /// Current points, streaks and badge progress. Unreadable state reads as a fresh start.
    fn get_rewards(&self) -> impl Future<Output = Result<RewardsState, CoreError>> + Send;

    fn reset_rewards(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}
