pub mod entities;
pub mod fallback;
pub mod helpers;
pub mod matcher;
pub mod ports;
pub mod services;
pub mod text_matcher;
pub mod value_objects;
