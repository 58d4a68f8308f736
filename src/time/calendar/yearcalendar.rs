use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::time::calendardate::CalendarDate;
use crate::time::recurringholiday::holidayrule::{ComputationError, HolidayRule};
use crate::time::utility::{days_from_civil, days_of_year};

use super::holidayclassifier::expand;

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DayType {
    Working,
    Weekend,
    Holiday { names: Vec<String> }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayType::Working => write!(f, "working"),
            DayType::Weekend => write!(f, "weekend"),
            DayType::Holiday { names } => write!(f, "holiday ({})", names.join(", "))
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct CalendarDay {
    date: CalendarDate,
    day_type: DayType
}

impl CalendarDay {
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn day_type(&self) -> &DayType {
        &self.day_type
    }
}

/// Classifies every day of `year`. A holiday wins over a weekend.
pub fn year_calendar(year: i32, rules: &[HolidayRule]) -> Result<Vec<CalendarDay>, ComputationError> {
    let mut holiday_names: BTreeMap<CalendarDate, Vec<String>> = BTreeMap::new();
    for holiday in expand(year, rules)? {
        if holiday.date().year() == year {
            holiday_names.entry(holiday.date()).or_default().push(holiday.name().to_owned());
        }
    }

    let first = days_from_civil(year, 1, 1);
    let days = (0..days_of_year(year) as i64)
        .filter_map(|n| CalendarDate::from_day_count(first + n))
        .map(|date| {
            let day_type = match holiday_names.remove(&date) {
                Some(names) => DayType::Holiday { names },
                None if date.is_weekend() => DayType::Weekend,
                None => DayType::Working
            };
            CalendarDay { date, day_type }
        })
        .collect();
    Ok(days)
}
