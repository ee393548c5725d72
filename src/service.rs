//! Calendar query service
//!
//! Orchestrates conversion and the almanac rules into the four query shapes:
//! a single day, a month grid, a run of months and a filtered month search.

use chrono::{Datelike, FixedOffset, NaiveDate, Offset, Utc};
use std::sync::Arc;

use crate::config::{Config, FallbackPolicy};
use crate::domain::almanac::{classify, sexagenary, suggest, HolidayRegistry};
use crate::domain::conversion::{approximate, AstronomicalConverter, ConversionFault, LunarConverter};
use crate::domain::value_objects::{LunarDate, YearMonth};
use crate::{BulkMonths, CalendarError, DayQuality, LunarDay, LunarMonthData, MonthInfo, Result, SearchFilter, SearchResults, Season};

/// Most months a single bulk request computes.
pub const MAX_BULK_MONTHS: i64 = 12;

/// Source of the caller's current date.
#[derive(Clone, Copy, Debug)]
pub enum Clock {
    System(FixedOffset),
    Fixed(NaiveDate),
}

impl Clock {
    pub fn utc_offset_hours(hours: i32) -> Self {
        Clock::System(FixedOffset::east_opt(hours * 3600).unwrap_or_else(|| Utc.fix()))
    }

    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System(offset) => Utc::now().with_timezone(offset).date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

#[derive(Clone)]
pub struct CalendarQueryService {
    converter: Arc<dyn LunarConverter>,
    policy: FallbackPolicy,
    clock: Clock,
}

impl CalendarQueryService {
    pub fn new(converter: Arc<dyn LunarConverter>, policy: FallbackPolicy, clock: Clock) -> Self {
        Self { converter, policy, clock }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(AstronomicalConverter::vietnamese()), config.fallback, Clock::utc_offset_hours(config.today_utc_offset))
    }

    pub fn today(&self) -> NaiveDate { self.clock.today() }

    pub fn day(&self, date: NaiveDate) -> Result<LunarDay> {
        YearMonth::new(date.year(), date.month())?;
        self.build_day(date, self.today())
    }

    pub fn today_day(&self) -> Result<LunarDay> { self.day(self.today()) }

    pub fn month(&self, year: i32, month: u32) -> Result<LunarMonthData> {
        let ym = YearMonth::new(year, month)?;
        self.month_data(ym, self.today())
    }

    /// `months` is clamped to 1..=12; the year rolls over after December.
    /// A run reaching past December 9999 stops there.
    pub fn bulk_months(&self, start_year: i32, start_month: u32, months: i64) -> Result<BulkMonths> {
        let start = YearMonth::new(start_year, start_month)?;
        let count = months.clamp(1, MAX_BULK_MONTHS);
        let today = self.today();
        let mut result = BulkMonths::new();
        let mut next = Some(start);
        for _ in 0..count {
            let Some(ym) = next else { break };
            result.insert(ym, self.month_data(ym, today)?);
            next = ym.next();
        }
        tracing::debug!(start = %start, months = count, "computed bulk lunar months");
        Ok(result)
    }

    /// Case-insensitive substring search over Can-Chi, holiday name and suggestions.
    pub fn search(&self, query: &str, year: i32, month: u32, filter: Option<SearchFilter>) -> Result<SearchResults> {
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return Err(CalendarError::Validation("Search query is required".to_string()));
        }
        let ym = YearMonth::new(year, month)?;
        let results: Vec<LunarDay> = self
            .month_data(ym, self.today())?
            .days
            .into_iter()
            .filter(|day| matches_query(day, &needle))
            .filter(|day| filter.map_or(true, |f| f.matches(day)))
            .collect();
        Ok(SearchResults { query: needle, total: results.len(), results, year, month })
    }

    fn month_data(&self, ym: YearMonth, today: NaiveDate) -> Result<LunarMonthData> {
        let days = ym.days().map(|date| self.build_day(date, today)).collect::<Result<Vec<_>>>()?;
        Ok(LunarMonthData {
            days,
            month_info: MonthInfo {
                lunar_month: ym.month(),
                lunar_year: ym.year(),
                can_chi_month: sexagenary::month_label(ym.year(), ym.month()).to_string(),
                season_context: Season::from_month(ym.month()),
            },
        })
    }

    fn build_day(&self, date: NaiveDate, today: NaiveDate) -> Result<LunarDay> {
        let lunar = self.lunar_date(date)?;
        let holiday = HolidayRegistry::lookup(lunar.month, lunar.day);
        let quality = classify(lunar.day);
        Ok(LunarDay {
            solar_date: date,
            lunar_date: lunar.day,
            lunar_month: lunar.month,
            lunar_year: lunar.year,
            is_leap_month: lunar.is_leap_month,
            can_chi: sexagenary::day_label(date).to_string(),
            is_good_day: quality == DayQuality::Good,
            is_holiday: holiday.is_some(),
            holiday_name: holiday.map(|h| h.name.to_string()),
            is_today: date == today,
            day_quality: quality,
            product_suggestions: suggest(lunar.day, lunar.month, quality, holiday.is_some()),
        })
    }

    fn lunar_date(&self, date: NaiveDate) -> Result<LunarDate> {
        let fault = match self.converter.convert(date) {
            Ok(lunar) if lunar.is_well_formed() => return Ok(lunar),
            Ok(lunar) => ConversionFault::Malformed(lunar),
            Err(fault) => fault,
        };
        match self.policy {
            FallbackPolicy::Approximate => {
                tracing::warn!(%date, error = %fault, "lunar conversion failed, using approximation");
                Ok(approximate(date))
            }
            FallbackPolicy::FailFast => Err(CalendarError::Conversion { date, reason: fault.to_string() }),
        }
    }
}

fn matches_query(day: &LunarDay, needle: &str) -> bool {
    day.can_chi.to_lowercase().contains(needle)
        || day.holiday_name.as_deref().is_some_and(|name| name.to_lowercase().contains(needle))
        || day.product_suggestions.iter().any(|s| s.to_lowercase().contains(needle))
}
