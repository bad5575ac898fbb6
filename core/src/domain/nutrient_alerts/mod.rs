pub mod engine;
pub mod entities;
pub mod messages;
pub mod ports;
pub mod services;
