pub mod entities;
pub mod ports;
pub mod scoring;
pub mod services;

pub use scoring::{points_reason, score_meal};
