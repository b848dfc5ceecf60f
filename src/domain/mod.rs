//! Domain layer: entities and value objects, free of I/O concerns.

pub mod entities;
pub mod value_objects;
