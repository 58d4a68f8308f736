use crate::time::calendardate::CalendarDate;
use crate::time::mondayshift::shift_to_monday;
use crate::time::utility::days_of_month;

use super::holidayrule::RuleError;
use super::recurringholiday::RecurringHoliday;

/// Same month and day every year, optionally moved to the next Monday.
#[derive(Debug, Clone)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32,
    monday_shift: bool
}

impl FixedDateHoliday {
    /// Rejects a month/day that exists in no year. February 29 is accepted.
    pub fn new(month: i64, day: i64, monday_shift: bool) -> Result<FixedDateHoliday, RuleError> {
        if !(1..=12).contains(&month) {
            return Err(RuleError::InvalidMonthDay { month, day });
        }
        // 2000 is a leap year
        let longest = days_of_month(2000, month as u32) as i64;
        if !(1..=longest).contains(&day) {
            return Err(RuleError::InvalidMonthDay { month, day });
        }
        Ok(FixedDateHoliday {
            month: month as u32,
            day: day as u32,
            monday_shift
        })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn monday_shift(&self) -> bool {
        self.monday_shift
    }

    /// Whether `(month, day)` is this holiday's nominal day, in any year.
    pub fn matches_month_day(&self, month: u32, day: u32) -> bool {
        self.month == month && self.day == day
    }

    pub fn nominal_date(&self, year: i32) -> Result<CalendarDate, RuleError> {
        CalendarDate::new(year, self.month, self.day).map_err(|_| RuleError::InvalidDate {
            year,
            month: self.month,
            day: self.day
        })
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn get_holiday(&self, year: i32) -> Result<CalendarDate, RuleError> {
        let nominal = self.nominal_date(year)?;
        if self.monday_shift {
            shift_to_monday(nominal).ok_or(RuleError::Overflow(year))
        } else {
            Ok(nominal)
        }
    }
}
