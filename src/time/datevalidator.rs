use thiserror::Error;

use crate::time::calendardate::CalendarDate;

pub const DATE_SEPARATOR: char = '/';

/// Why a raw date string was refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateValidationError {
    #[error("malformed date '{0}', expected YYYY/MM/DD")]
    Malformed(String),
    #[error("date {year}/{month}/{day} does not exist")]
    OutOfRange {
        year: i64,
        month: i64,
        day: i64
    }
}

fn parse_component(component: &str, raw: &str) -> Result<i64, DateValidationError> {
    component
        .parse::<i64>()
        .map_err(|_| DateValidationError::Malformed(raw.to_owned()))
}

/// Parses `YYYY/MM/DD`. Zero padding is optional.
pub fn parse(raw: &str) -> Result<CalendarDate, DateValidationError> {
    let trimmed = raw.trim();
    let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
    if parts.len() != 3 {
        return Err(DateValidationError::Malformed(raw.to_owned()));
    }

    let year = parse_component(parts[0], raw)?;
    let month = parse_component(parts[1], raw)?;
    let day = parse_component(parts[2], raw)?;
    let out_of_range = DateValidationError::OutOfRange { year, month, day };

    let year_i32 = i32::try_from(year).map_err(|_| out_of_range.clone())?;
    let month_u32 = u32::try_from(month).map_err(|_| out_of_range.clone())?;
    let day_u32 = u32::try_from(day).map_err(|_| out_of_range.clone())?;

    CalendarDate::new(year_i32, month_u32, day_u32).map_err(|_| out_of_range)
}
