use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::time::calendardate::CalendarDate;
use crate::time::datevalidator::{self, DateValidationError};
use crate::time::recurringholiday::holidayrule::{ComputationError, HolidayRule};
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HolidayError {
    /// The caller sent a date that cannot be read or does not exist.
    #[error(transparent)]
    Validation(#[from] DateValidationError),
    /// A catalog rule could not be evaluated.
    #[error(transparent)]
    Computation(#[from] ComputationError)
}

/// Answer to "is this date a holiday?". Serializes as `{"isHoliday": ...}`.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayVerdict {
    is_holiday: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>
}

impl HolidayVerdict {
    pub fn holiday(name: &str) -> HolidayVerdict {
        HolidayVerdict { is_holiday: true, name: Some(name.to_owned()) }
    }

    pub fn not_holiday() -> HolidayVerdict {
        HolidayVerdict { is_holiday: false, name: None }
    }

    pub fn is_holiday(&self) -> bool {
        self.is_holiday
    }

    /// The first matching rule, when there is one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Parses `raw_date` (`YYYY/MM/DD`) and checks it against `rules`.
pub fn is_holiday(raw_date: &str, rules: &[HolidayRule]) -> Result<HolidayVerdict, HolidayError> {
    let d = datevalidator::parse(raw_date)?;
    Ok(check_date(&d, rules)?)
}

/// Fixed-date rules are tried first, then the Easter-relative ones, all for
/// the year of `d`. Stops at the first match.
pub fn check_date(d: &CalendarDate, rules: &[HolidayRule]) -> Result<HolidayVerdict, ComputationError> {
    let mut easter_rules: Vec<&HolidayRule> = Vec::new();

    for rule in rules {
        let holiday_type = rule.holiday_type()?;
        if holiday_type.is_easter_relative() {
            easter_rules.push(rule);
            continue;
        }

        let holiday = rule.fixed_date_holiday(holiday_type.is_monday_shifted())?;
        let matched = if holiday.monday_shift() {
            holiday.is_holiday(d).map_err(|e| rule.error(e))?
        } else {
            holiday.matches_month_day(d.month(), d.day())
        };
        if matched {
            return Ok(found(d, rule));
        }
    }

    for rule in easter_rules {
        let matched = rule.recurring_holiday()?
            .is_holiday(d)
            .map_err(|e| rule.error(e))?;
        if matched {
            return Ok(found(d, rule));
        }
    }

    debug!(date = %d, "not a holiday");
    Ok(HolidayVerdict::not_holiday())
}

fn found(d: &CalendarDate, rule: &HolidayRule) -> HolidayVerdict {
    debug!(date = %d, rule = rule.name(), "holiday matched");
    HolidayVerdict::holiday(rule.name())
}
