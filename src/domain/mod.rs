//! Calendar domain: value objects, almanac rules and lunar conversion
pub mod almanac;
pub mod conversion;
pub mod value_objects;
