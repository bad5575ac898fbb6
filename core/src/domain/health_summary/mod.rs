pub mod entities;
pub mod generator;

pub use generator::summarize;
