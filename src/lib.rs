//! OpenSASE Lunar Calendar
//!
//! Vietnamese lunisolar calendar engine for the commerce admin.
//!
//! ## Features
//! - Gregorian to lunar date conversion
//! - Can-Chi labels for day, month and year
//! - Traditional holidays and day quality
//! - Seasonal product suggestions
//! - Day, month, bulk and search views

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

pub mod api;
pub mod config;
pub mod domain;
pub mod service;

pub use config::{Config, FallbackPolicy};
pub use domain::value_objects::{CanChi, LunarDate, YearMonth};
pub use service::CalendarQueryService;

// =============================================================================
// Core Types
// =============================================================================

/// One Gregorian day seen through the lunar calendar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarDay {
    pub solar_date: NaiveDate,
    pub lunar_date: u32,
    pub lunar_month: u32,
    pub lunar_year: i32,
    pub is_leap_month: bool,
    pub can_chi: String,
    pub is_good_day: bool,
    pub is_holiday: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday_name: Option<String>,
    pub is_today: bool,
    pub day_quality: DayQuality,
    pub product_suggestions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarMonthData {
    pub days: Vec<LunarDay>,
    pub month_info: MonthInfo,
}

/// Header of a month view. `lunar_month` and `lunar_year` echo the requested
/// Gregorian month and year.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthInfo {
    pub lunar_month: u32,
    pub lunar_year: i32,
    pub can_chi_month: String,
    pub season_context: Season,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayQuality {
    Good,
    Normal,
    Bad,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    /// Three-month buckets: 1-3 spring, 4-6 summer, 7-9 autumn, 10-12 winter.
    pub fn from_month(month: u32) -> Self {
        match month {
            0..=3 => Season::Spring,
            4..=6 => Season::Summer,
            7..=9 => Season::Autumn,
            _ => Season::Winter,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchFilter {
    Good,
    Bad,
    Holiday,
}

impl SearchFilter {
    pub fn matches(&self, day: &LunarDay) -> bool {
        match self {
            SearchFilter::Good => day.day_quality == DayQuality::Good,
            SearchFilter::Bad => day.day_quality == DayQuality::Bad,
            SearchFilter::Holiday => day.is_holiday,
        }
    }
}

impl std::str::FromStr for SearchFilter {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "good" => Ok(SearchFilter::Good),
            "bad" => Ok(SearchFilter::Bad),
            "holiday" => Ok(SearchFilter::Holiday),
            _ => Err(CalendarError::Validation("Invalid filter".to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub results: Vec<LunarDay>,
    pub total: usize,
    pub year: i32,
    pub month: u32,
}

/// Consecutive month views keyed by `"year-month"`, in calendar order.
pub type BulkMonths = BTreeMap<YearMonth, LunarMonthData>;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("{0}")]
    Validation(String),

    #[error("Lunar conversion failed for {date}: {reason}")]
    Conversion { date: NaiveDate, reason: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CalendarError {
    pub fn invalid_year_or_month() -> Self {
        CalendarError::Validation("Invalid year or month".to_string())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, CalendarError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, CalendarError>;
