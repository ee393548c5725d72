//! Almanac rules layered on top of a converted lunar date
pub mod holidays;
pub mod julian;
pub mod quality;
pub mod sexagenary;
pub mod suggestions;

pub use holidays::{Holiday, HolidayRegistry};
pub use julian::jdn;
pub use quality::classify;
pub use suggestions::suggest;
