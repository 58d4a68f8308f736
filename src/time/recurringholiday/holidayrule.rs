use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::easterrelatedholiday::EasterRelatedHoliday;
use super::fixeddateholiday::FixedDateHoliday;
use super::recurringholiday::RecurringHoliday;

/// The four rule kinds of the Colombian holiday catalog.
///
/// Discriminants are the type codes used by the catalog records.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum HolidayType {
    Fixed = 1,
    FixedMonday = 2,
    EasterFixed = 3,
    EasterMonday = 4
}

impl HolidayType {
    pub fn code(&self) -> i64 {
        *self as i64
    }

    pub fn is_easter_relative(&self) -> bool {
        matches!(self, HolidayType::EasterFixed | HolidayType::EasterMonday)
    }

    pub fn is_monday_shifted(&self) -> bool {
        matches!(self, HolidayType::FixedMonday | HolidayType::EasterMonday)
    }
}

impl TryFrom<i64> for HolidayType {
    type Error = RuleError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(HolidayType::Fixed),
            2 => Ok(HolidayType::FixedMonday),
            3 => Ok(HolidayType::EasterFixed),
            4 => Ok(HolidayType::EasterMonday),
            _ => Err(RuleError::UnknownType(code))
        }
    }
}

impl fmt::Display for HolidayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HolidayType::Fixed => "FIXED",
            HolidayType::FixedMonday => "FIXED_MONDAY",
            HolidayType::EasterFixed => "EASTER_FIXED",
            HolidayType::EasterMonday => "EASTER_MONDAY"
        };
        f.write_str(s)
    }
}

/// A rule that cannot be turned into a date.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("unknown holiday type {0}")]
    UnknownType(i64),
    #[error("missing field '{0}'")]
    MissingField(&'static str),
    #[error("month {month} day {day} is not a calendar day")]
    InvalidMonthDay {
        month: i64,
        day: i64
    },
    #[error("{month}/{day} is not a date in {year}")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32
    },
    #[error("date arithmetic left the supported range in year {0}")]
    Overflow(i32)
}

/// A rule failure, tagged with the rule it came from.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("holiday rule '{name}': {source}")]
pub struct ComputationError {
    name: String,
    #[source]
    source: RuleError
}

impl ComputationError {
    pub fn new(name: &str, source: RuleError) -> ComputationError {
        ComputationError { name: name.to_owned(), source }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rule_error(&self) -> &RuleError {
        &self.source
    }
}

/// One catalog record, as supplied by a rule provider.
///
/// `day`/`month` only matter to the fixed kinds and `offset` only to the
/// Easter-relative kinds. The type code is kept raw so that an unknown code
/// is reported when the rule is evaluated rather than when it is loaded.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct HolidayRule {
    name: String,
    #[serde(rename = "type")]
    type_code: i64,
    #[serde(default)]
    day: i64,
    #[serde(default)]
    month: i64,
    #[serde(default)]
    offset: i64
}

impl HolidayRule {
    pub fn new(name: &str, holiday_type: HolidayType, day: i64, month: i64, offset: i64) -> HolidayRule {
        HolidayRule {
            name: name.to_owned(),
            type_code: holiday_type.code(),
            day,
            month,
            offset
        }
    }

    /// Record with an arbitrary type code, as it may arrive from storage.
    pub fn from_raw(name: &str, type_code: i64, day: i64, month: i64, offset: i64) -> HolidayRule {
        HolidayRule { name: name.to_owned(), type_code, day, month, offset }
    }

    pub fn fixed(name: &str, month: i64, day: i64) -> HolidayRule {
        HolidayRule::new(name, HolidayType::Fixed, day, month, 0)
    }

    pub fn fixed_monday(name: &str, month: i64, day: i64) -> HolidayRule {
        HolidayRule::new(name, HolidayType::FixedMonday, day, month, 0)
    }

    pub fn easter_fixed(name: &str, offset: i64) -> HolidayRule {
        HolidayRule::new(name, HolidayType::EasterFixed, 0, 0, offset)
    }

    pub fn easter_monday(name: &str, offset: i64) -> HolidayRule {
        HolidayRule::new(name, HolidayType::EasterMonday, 0, 0, offset)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_code(&self) -> i64 {
        self.type_code
    }

    pub fn day(&self) -> i64 {
        self.day
    }

    pub fn month(&self) -> i64 {
        self.month
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn holiday_type(&self) -> Result<HolidayType, ComputationError> {
        HolidayType::try_from(self.type_code).map_err(|e| self.error(e))
    }

    pub(crate) fn error(&self, source: RuleError) -> ComputationError {
        ComputationError::new(&self.name, source)
    }

    /// Builds the date generator for this record.
    pub fn recurring_holiday(&self) -> Result<Box<dyn RecurringHoliday>, ComputationError> {
        let holiday_type = self.holiday_type()?;
        let monday_shift = holiday_type.is_monday_shifted();
        if holiday_type.is_easter_relative() {
            Ok(Box::new(EasterRelatedHoliday::new(self.offset, monday_shift)))
        } else {
            Ok(Box::new(self.fixed_date_holiday(monday_shift)?))
        }
    }

    pub(crate) fn fixed_date_holiday(&self, monday_shift: bool) -> Result<FixedDateHoliday, ComputationError> {
        if self.month == 0 {
            return Err(self.error(RuleError::MissingField("month")));
        }
        if self.day == 0 {
            return Err(self.error(RuleError::MissingField("day")));
        }
        FixedDateHoliday::new(self.month, self.day, monday_shift).map_err(|e| self.error(e))
    }
}
