pub mod classifier;
pub mod clock;
pub mod storage;
