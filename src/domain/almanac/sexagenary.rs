//! Can-Chi (sexagenary) labels for days, months and years.
//!
//! Each label reduces a single counter twice, once modulo 10 onto the Heavenly
//! Stems and once modulo 12 onto the Earthly Branches. Only the counter
//! differs: the Julian Day Number for days, the calendar year for years and a
//! year/month composite for months.

use chrono::NaiveDate;

use super::julian::jdn_of;
use crate::domain::value_objects::CanChi;

/// Offset added to the JDN before reducing the day counter.
///
/// Not cross-checked against a published almanac; changing it shifts every
/// day label in the cycle.
pub const DAY_CYCLE_OFFSET: i64 = 50;

/// Offset between the Gregorian year and the start of the year cycle
/// (year 4 is Giáp Tý).
pub const YEAR_CYCLE_OFFSET: i64 = 4;

pub fn day_label_for_jdn(jdn: i64) -> CanChi {
    let counter = (jdn + DAY_CYCLE_OFFSET).rem_euclid(60);
    CanChi::from_counters(counter, counter)
}

pub fn day_label(date: NaiveDate) -> CanChi { day_label_for_jdn(jdn_of(date)) }

pub fn year_label(year: i32) -> CanChi {
    let counter = year as i64 - YEAR_CYCLE_OFFSET;
    CanChi::from_counters(counter, counter)
}

pub fn month_label(year: i32, month: u32) -> CanChi {
    let year_stem = (year as i64 - YEAR_CYCLE_OFFSET).rem_euclid(10);
    let month = month as i64;
    CanChi::from_counters(year_stem * 2 + month - 1, month - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_year_labels() {
        assert_eq!(year_label(2024).to_string(), "Giáp Thìn");
        assert_eq!(year_label(2025).to_string(), "Ất Tỵ");
        assert_eq!(year_label(1984).to_string(), "Giáp Tý");
        assert_eq!(year_label(1).to_string(), "Tân Dậu");
    }

    #[test]
    fn test_month_labels() {
        assert_eq!(month_label(2024, 1).to_string(), "Giáp Tý");
        assert_eq!(month_label(2025, 3).to_string(), "Mậu Dần");
        assert_eq!(month_label(2, 12).to_string(), "Tân Hợi");
    }

    #[test]
    fn test_day_label_anchor() {
        // 2000-01-01 is JDN 2451545
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(day_label(date).to_string(), "Kỷ Mùi");
    }

    #[test]
    fn test_day_cycle_period_is_sixty() {
        let base = 2451545;
        for jdn in base..base + 240 {
            assert_eq!(day_label_for_jdn(jdn), day_label_for_jdn(jdn + 60));
        }
        let distinct: HashSet<String> = (base..base + 60).map(|j| day_label_for_jdn(j).to_string()).collect();
        assert_eq!(distinct.len(), 60);
    }

    #[test]
    fn test_day_labels_are_canonical_pairs() {
        // canonical pairs share parity between stem and branch index
        for jdn in 2415021..2415021 + 1000 {
            let label = day_label_for_jdn(jdn);
            assert_eq!(label.stem_index() % 2, label.branch_index() % 2);
        }
    }
}
