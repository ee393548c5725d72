//! Product suggestions from season, holiday and day quality.
//!
//! The result is always the three base items followed by at most three
//! contextual items, taken in the order the rules below add them.

use crate::{DayQuality, Season};

const BASE: [&str; 3] = ["Rau xanh hữu cơ tươi ngon", "Trái cây theo mùa tự nhiên", "Gạo hữu cơ sạch"];

const TET: [&str; 3] = ["Bánh chưng hữu cơ", "Mứt Tết từ trái cây tự nhiên", "Hoa quả ngũ quả"];
const VU_LAN: [&str; 3] = ["Hoa sen tươi", "Trái cây cúng dường", "Nước mắm hữu cơ"];
const TRUNG_THU: [&str; 3] = ["Bánh trung thu chay", "Grapefruit hữu cơ", "Trà hoa cúc"];

const PREMIUM: [&str; 3] = ["Thực phẩm bổ dưỡng cao cấp", "Yến sào hữu cơ", "Nấm linh chi tự nhiên"];

const SPRING: [&str; 3] = ["Rau má tươi", "Măng tre non", "Trà xanh Thái Nguyên"];
const SUMMER: [&str; 3] = ["Dưa hấu hữu cơ", "Nước dừa tươi", "Rau muống sạch"];
const AUTUMN: [&str; 3] = ["Hồng xiêm Đà Lạt", "Khoai lang tím", "Chè đậu xanh"];
const WINTER: [&str; 3] = ["Củ đậu hữu cơ", "Gừng tươi", "Nước mắm truyền thống"];

pub const MAX_CONTEXTUAL: usize = 3;

fn holiday_items(lunar_month: u32) -> &'static [&'static str] {
    match lunar_month {
        1 => &TET,
        7 => &VU_LAN,
        8 => &TRUNG_THU,
        _ => &[],
    }
}

fn seasonal_items(season: Season) -> &'static [&'static str] {
    match season {
        Season::Spring => &SPRING,
        Season::Summer => &SUMMER,
        Season::Autumn => &AUTUMN,
        Season::Winter => &WINTER,
    }
}

/// `_lunar_day` is accepted for parity with the other almanac rules; no rule
/// keys on it yet.
pub fn suggest(_lunar_day: u32, lunar_month: u32, quality: DayQuality, is_holiday: bool) -> Vec<String> {
    let mut contextual: Vec<&str> = Vec::new();
    if is_holiday {
        contextual.extend(holiday_items(lunar_month));
    }
    if quality == DayQuality::Good {
        contextual.extend(PREMIUM);
    }
    contextual.extend(seasonal_items(Season::from_month(lunar_month)));

    BASE.iter()
        .chain(contextual.iter().take(MAX_CONTEXTUAL))
        .map(|s| s.to_string())
        .collect()
}
