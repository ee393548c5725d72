//! Day quality from the lunar day-of-month

use crate::DayQuality;

pub const GOOD_LUNAR_DAYS: [u32; 12] = [1, 3, 5, 9, 10, 13, 15, 16, 21, 23, 27, 28];
pub const BAD_LUNAR_DAYS: [u32; 5] = [4, 7, 14, 18, 22];

pub fn classify(lunar_day: u32) -> DayQuality {
    if GOOD_LUNAR_DAYS.contains(&lunar_day) {
        DayQuality::Good
    } else if BAD_LUNAR_DAYS.contains(&lunar_day) {
        DayQuality::Bad
    } else {
        DayQuality::Normal
    }
}
