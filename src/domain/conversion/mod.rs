//! Solar to lunar conversion seam.
//!
//! The engine never computes lunar dates itself: it asks a [`LunarConverter`]
//! and, when that fails, may substitute [`approximate`].

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::domain::value_objects::LunarDate;

pub mod astronomical;

pub use astronomical::AstronomicalConverter;

pub trait LunarConverter: Send + Sync {
    fn convert(&self, date: NaiveDate) -> Result<LunarDate, ConversionFault>;
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionFault {
    #[error("year {0} is outside the supported range")]
    UnsupportedYear(i32),

    #[error("converter returned malformed lunar date {0}")]
    Malformed(LunarDate),

    #[error("{0}")]
    Other(String),
}

/// Coarse stand-in used when conversion fails. Not calendrically accurate.
pub fn approximate(date: NaiveDate) -> LunarDate {
    let day = (date.day() as i64 - 7).clamp(1, 30) as u32;
    let month = date.month().clamp(1, 12);
    LunarDate::new(day, month, date.year(), false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approximate() {
        let d = |y, m, dd| NaiveDate::from_ymd_opt(y, m, dd).unwrap();
        assert_eq!(approximate(d(2024, 3, 20)), LunarDate::new(13, 3, 2024, false));
        assert_eq!(approximate(d(2024, 3, 2)), LunarDate::new(1, 3, 2024, false));
        assert_eq!(approximate(d(2024, 12, 31)), LunarDate::new(24, 12, 2024, false));
    }
}
