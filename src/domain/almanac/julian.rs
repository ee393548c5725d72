//! Julian Day Number for proleptic Gregorian dates

use chrono::{Datelike, NaiveDate};

/// Julian Day Number of a proleptic Gregorian date. Total for every valid date.
pub fn jdn(year: i32, month: u32, day: u32) -> i64 {
    let (year, month, day) = (year as i64, month as i64, day as i64);
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400) - 32045
}

pub fn jdn_of(date: NaiveDate) -> i64 { jdn(date.year(), date.month(), date.day()) }
