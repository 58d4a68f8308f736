use crate::time::calendardate::CalendarDate;
use crate::time::mondayshift::shift_to_monday;

use super::easter::easter_sunday;
use super::holidayrule::RuleError;
use super::recurringholiday::RecurringHoliday;

#[derive(Debug, Clone)]
pub struct EasterRelatedHoliday {
    shift_days: i64,
    monday_shift: bool
}

impl EasterRelatedHoliday {
    pub fn new(shift_days: i64, monday_shift: bool) -> EasterRelatedHoliday {
        EasterRelatedHoliday { shift_days, monday_shift }
    }

    pub fn shift_days(&self) -> i64 {
        self.shift_days
    }

    pub fn monday_shift(&self) -> bool {
        self.monday_shift
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn get_holiday(&self, year: i32) -> Result<CalendarDate, RuleError> {
        let d = easter_sunday(year)
            .checked_add_days(self.shift_days)
            .ok_or(RuleError::Overflow(year))?;

        if self.monday_shift && !d.is_monday() {
            shift_to_monday(d).ok_or(RuleError::Overflow(year))
        } else {
            Ok(d)
        }
    }
}
