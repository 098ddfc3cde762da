use serde::{Deserialize, Serialize};

/// A calendar day as written on the form: year, 1-based month and day.
///
/// The cascade rules never read the clock themselves; callers pass today's
/// date in (the frontend from `js_sys::Date`, the backend from the system clock).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    /// 1-based month.
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Decimal strings for the year, month and day fields, without padding.
    pub fn to_field_values(self) -> [String; 3] {
        [
            self.year.to_string(),
            self.month.to_string(),
            self.day.to_string(),
        ]
    }
}
