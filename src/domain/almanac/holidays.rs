//! Traditional Vietnamese lunar holidays

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub lunar_month: u32,
    pub lunar_day: u32,
    pub name: &'static str,
    pub description: &'static str,
}

const fn holiday(lunar_month: u32, lunar_day: u32, name: &'static str, description: &'static str) -> Holiday {
    Holiday { lunar_month, lunar_day, name, description }
}

/// Ordered by (month, day).
const HOLIDAYS: [Holiday; 11] = [
    holiday(1, 1, "Tết Nguyên Đán", "Năm mới âm lịch"),
    holiday(1, 15, "Tết Nguyên Tiêu", "Lễ hội đèn lồng"),
    holiday(3, 3, "Tết Hàn Thực", "Lễ tảo mộ"),
    holiday(4, 8, "Phật Đản", "Sinh nhật Phật Thích Ca"),
    holiday(5, 5, "Tết Đoan Ngọ", "Diệt sâu bọ"),
    holiday(7, 7, "Thất Tịch", "Lễ tình nhân Á Đông"),
    holiday(7, 15, "Vu Lan", "Báo hiếu cha mẹ"),
    holiday(8, 15, "Tết Trung Thu", "Lễ hội trăng rằm"),
    holiday(9, 9, "Tết Trùng Cửu", "Lên cao"),
    holiday(10, 10, "Tết Thượng Cung", "Lễ cúng tổ tiên"),
    holiday(12, 23, "Ông Táo", "Cúng ông Táo về trời"),
];

pub struct HolidayRegistry;

impl HolidayRegistry {
    pub fn lookup(lunar_month: u32, lunar_day: u32) -> Option<&'static Holiday> {
        HOLIDAYS.iter().find(|h| h.lunar_month == lunar_month && h.lunar_day == lunar_day)
    }

    pub fn all() -> &'static [Holiday] { &HOLIDAYS }
}
