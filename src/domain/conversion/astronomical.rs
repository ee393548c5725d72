//! Native Vietnamese lunisolar conversion.
//!
//! Months start on the local day of the astronomical new moon. The eleventh
//! month is the one containing the winter solstice, and in a year with
//! thirteen months the first month without a major solar term is the leap
//! month. New moons use the mean lunation with periodic corrections; solar
//! longitude uses a low-order apparent longitude series. Both are accurate to
//! well within a day over the supported years.

use chrono::{Datelike, NaiveDate};
use std::f64::consts::PI;

use super::{ConversionFault, LunarConverter};
use crate::domain::almanac::julian::jdn;
use crate::domain::value_objects::LunarDate;

const SYNODIC_MONTH: f64 = 29.530588853;
/// JD of the new moon of 1900-01-01, the origin of the lunation index.
const LUNATION_EPOCH: f64 = 2415021.076998695;
const DEGREE: f64 = PI / 180.0;

/// Converter for a fixed local time zone; UTC+7 for the Vietnamese calendar.
#[derive(Clone, Debug)]
pub struct AstronomicalConverter {
    time_zone: f64,
}

impl AstronomicalConverter {
    pub const MIN_YEAR: i32 = 1800;
    pub const MAX_YEAR: i32 = 2199;

    pub fn vietnamese() -> Self { Self::with_time_zone(7.0) }

    pub fn with_time_zone(hours_east: f64) -> Self { Self { time_zone: hours_east } }

    pub fn supports(year: i32) -> bool { (Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) }

    /// Local day number of the `k`-th new moon after the epoch.
    fn new_moon_day(&self, k: i64) -> i64 { (new_moon(k as f64) + 0.5 + self.time_zone / 24.0).floor() as i64 }

    /// Solar longitude at local midnight starting `day`, as one of twelve 30° sectors.
    fn sun_sector(&self, day: i64) -> i64 {
        (sun_longitude(day as f64 - 0.5 - self.time_zone / 24.0) / PI * 6.0).floor() as i64
    }

    /// Start of the lunar month containing the winter solstice that precedes the end of `year`.
    fn month_11_start(&self, year: i32) -> i64 {
        let off = jdn(year, 12, 31) as f64 - 2415021.0;
        let k = (off / SYNODIC_MONTH).floor() as i64;
        let nm = self.new_moon_day(k);
        if self.sun_sector(nm) >= 9 { self.new_moon_day(k - 1) } else { nm }
    }

    /// Months after month 11 until the first month with no sector change.
    fn leap_month_offset(&self, a11: i64) -> i64 {
        let k = ((a11 as f64 - LUNATION_EPOCH) / SYNODIC_MONTH + 0.5).floor() as i64;
        let mut i = 1;
        let mut arc = self.sun_sector(self.new_moon_day(k + i));
        loop {
            let last = arc;
            i += 1;
            arc = self.sun_sector(self.new_moon_day(k + i));
            if arc == last || i >= 14 {
                break;
            }
        }
        i - 1
    }
}

impl LunarConverter for AstronomicalConverter {
    fn convert(&self, date: NaiveDate) -> Result<LunarDate, ConversionFault> {
        let year = date.year();
        if !Self::supports(year) {
            return Err(ConversionFault::UnsupportedYear(year));
        }
        let day_number = jdn(year, date.month(), date.day());
        let mut k = ((day_number as f64 - LUNATION_EPOCH) / SYNODIC_MONTH).floor() as i64 + 1;
        let mut month_start = self.new_moon_day(k);
        // the corrected new moon can land after the mean estimate
        while month_start > day_number {
            k -= 1;
            month_start = self.new_moon_day(k);
        }

        let mut a11 = self.month_11_start(year);
        let mut b11 = a11;
        let mut lunar_year;
        if a11 >= month_start {
            lunar_year = year;
            a11 = self.month_11_start(year - 1);
        } else {
            lunar_year = year + 1;
            b11 = self.month_11_start(year + 1);
        }

        let lunar_day = day_number - month_start + 1;
        let diff = (month_start - a11).div_euclid(29);
        let mut is_leap = false;
        let mut lunar_month = diff + 11;
        if b11 - a11 > 365 {
            let leap_diff = self.leap_month_offset(a11);
            if diff >= leap_diff {
                lunar_month = diff + 10;
                is_leap = diff == leap_diff;
            }
        }
        if lunar_month > 12 {
            lunar_month -= 12;
        }
        if lunar_month >= 11 && diff < 4 {
            lunar_year -= 1;
        }

        Ok(LunarDate::new(lunar_day as u32, lunar_month as u32, lunar_year, is_leap))
    }
}

/// Julian day (TT, fractional) of the `k`-th new moon after 1900-01-01.
fn new_moon(k: f64) -> f64 {
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let mut jd = 2415020.75933 + 29.53058868 * k + 0.0001178 * t2 - 0.000000155 * t3;
    jd += 0.00033 * ((166.56 + 132.87 * t - 0.009173 * t2) * DEGREE).sin();
    let m = 359.2242 + 29.10535608 * k - 0.0000333 * t2 - 0.00000347 * t3;
    let mpr = 306.0253 + 385.81691806 * k + 0.0107306 * t2 + 0.00001236 * t3;
    let f = 21.2964 + 390.67050646 * k - 0.0016528 * t2 - 0.00000239 * t3;
    let s = |x: f64| (x * DEGREE).sin();
    let c1 = (0.1734 - 0.000393 * t) * s(m) + 0.0021 * s(2.0 * m) - 0.4068 * s(mpr) + 0.0161 * s(2.0 * mpr)
        - 0.0004 * s(3.0 * mpr)
        + 0.0104 * s(2.0 * f)
        - 0.0051 * s(m + mpr)
        - 0.0074 * s(m - mpr)
        + 0.0004 * s(2.0 * f + m)
        - 0.0004 * s(2.0 * f - m)
        - 0.0006 * s(2.0 * f + mpr)
        + 0.0010 * s(2.0 * f - mpr)
        + 0.0005 * s(2.0 * mpr + m);
    let delta_t = if t < -11.0 {
        0.001 + 0.000839 * t + 0.0002261 * t2 - 0.00000845 * t3 - 0.000000081 * t * t3
    } else {
        -0.000278 + 0.000265 * t + 0.000262 * t2
    };
    jd + c1 - delta_t
}

/// Apparent solar longitude in radians, normalised to [0, 2π).
fn sun_longitude(jd: f64) -> f64 {
    let t = (jd - 2451545.0) / 36525.0;
    let t2 = t * t;
    let m = 357.52910 + 35999.05030 * t - 0.0001559 * t2 - 0.00000048 * t * t2;
    let l0 = 280.46645 + 36000.76983 * t + 0.0003032 * t2;
    let dl = (1.914600 - 0.004817 * t - 0.000014 * t2) * (DEGREE * m).sin()
        + (0.019993 - 0.000101 * t) * (DEGREE * 2.0 * m).sin()
        + 0.000290 * (DEGREE * 3.0 * m).sin();
    let l = (l0 + dl) * DEGREE;
    l - 2.0 * PI * (l / (2.0 * PI)).floor()
}
