use crate::time::calendardate::CalendarDate;

use super::holidayrule::RuleError;


/// Something that lands on exactly one day per year.
pub trait RecurringHoliday {

    fn get_holiday(&self, year: i32) -> Result<CalendarDate, RuleError>;

    fn is_holiday(&self, d: &CalendarDate) -> Result<bool, RuleError> {
        let holiday = self.get_holiday(d.year())?;
        Ok(holiday == *d)
    }
}
