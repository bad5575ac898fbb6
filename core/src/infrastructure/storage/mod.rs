pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryKeyValueStore;
pub use json_file::JsonFileKeyValueStore;
