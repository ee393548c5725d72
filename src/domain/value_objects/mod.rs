//! Value Objects for the lunar calendar

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use validator::Validate;

use crate::{CalendarError, Result};

/// Sexagenary (Can-Chi) label: a Heavenly Stem paired with an Earthly Branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CanChi { stem: usize, branch: usize }

impl CanChi {
    pub const STEMS: [&'static str; 10] = ["Giáp", "Ất", "Bính", "Đinh", "Mậu", "Kỷ", "Canh", "Tân", "Nhâm", "Quý"];
    pub const BRANCHES: [&'static str; 12] = ["Tý", "Sửu", "Dần", "Mão", "Thìn", "Tỵ", "Ngọ", "Mùi", "Thân", "Dậu", "Tuất", "Hợi"];

    /// Reduces independent stem and branch counters onto the two tables.
    pub fn from_counters(stem: i64, branch: i64) -> Self {
        Self { stem: stem.rem_euclid(10) as usize, branch: branch.rem_euclid(12) as usize }
    }

    pub fn stem_index(&self) -> usize { self.stem }
    pub fn branch_index(&self) -> usize { self.branch }
    pub fn stem(&self) -> &'static str { Self::STEMS[self.stem] }
    pub fn branch(&self) -> &'static str { Self::BRANCHES[self.branch] }
}

impl fmt::Display for CanChi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{} {}", self.stem(), self.branch()) }
}

/// A date in the Vietnamese lunisolar calendar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub is_leap_month: bool,
}

impl LunarDate {
    pub fn new(day: u32, month: u32, year: i32, is_leap_month: bool) -> Self { Self { day, month, year, is_leap_month } }

    pub fn is_well_formed(&self) -> bool { (1..=30).contains(&self.day) && (1..=12).contains(&self.month) }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}{}/{}", self.day, self.month, if self.is_leap_month { "+" } else { "" }, self.year)
    }
}

/// A validated Gregorian (year, month) pair. Years 1-9999 are accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Validate)]
pub struct YearMonth {
    #[validate(range(min = 1, max = 9999))]
    year: i32,
    #[validate(range(min = 1, max = 12))]
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let ym = Self { year, month };
        ym.validate().map_err(|_| CalendarError::invalid_year_or_month())?;
        Ok(ym)
    }

    pub fn year(&self) -> i32 { self.year }
    pub fn month(&self) -> u32 { self.month }

    /// The following calendar month, rolling into January of the next year.
    /// `None` past December 9999.
    pub fn next(&self) -> Option<Self> {
        let (year, month) = if self.month == 12 { (self.year + 1, 1) } else { (self.year, self.month + 1) };
        Self::new(year, month).ok()
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn days_in_month(&self) -> u32 {
        match self.month {
            2 if is_leap_year(self.year) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Every Gregorian day of the month, ascending.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.first_day().iter_days().take(self.days_in_month() as usize)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}-{}", self.year, self.month) }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> { serializer.collect_str(self) }
}

pub fn is_leap_year(year: i32) -> bool { (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 }
