pub mod helpers;
pub mod ports;
pub mod value_objects;

pub use ports::KeyValueStore;
