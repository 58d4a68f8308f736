use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{
    de,
    Deserialize,
    Deserializer,
    Serialize,
    Serializer
};

use crate::time::datevalidator::{self, DateValidationError};
use crate::time::utility::{
    civil_from_days,
    days_from_civil,
    days_of_month,
    iso_weekday_from_days
};

/// Day counts of the first and last representable days.
const MIN_DAY_COUNT: i64 = days_from_civil(i32::MIN, 1, 1);
const MAX_DAY_COUNT: i64 = days_from_civil(i32::MAX, 12, 31);

/// A validated day of the proleptic Gregorian calendar.
///
/// Field order makes the derived `Ord` chronological.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<CalendarDate, DateValidationError> {
        if !(1..=12).contains(&month) || day < 1 || day > days_of_month(year, month) {
            return Err(DateValidationError::OutOfRange {
                year: year.into(),
                month: month.into(),
                day: day.into()
            });
        }
        Ok(CalendarDate { year, month, day })
    }

    /// Caller guarantees `day` exists in `month` of `year`.
    pub(crate) const fn from_valid_parts(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate { year, month, day }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Days since 1970-01-01.
    #[inline]
    pub fn day_count(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    /// `None` outside the `i32` year range.
    pub fn from_day_count(days: i64) -> Option<CalendarDate> {
        if !(MIN_DAY_COUNT..=MAX_DAY_COUNT).contains(&days) {
            return None;
        }
        let (year, month, day) = civil_from_days(days);
        let year = i32::try_from(year).ok()?;
        Some(CalendarDate { year, month, day })
    }

    /// ISO weekday number, 1 = Monday through 7 = Sunday.
    #[inline]
    pub fn iso_weekday(&self) -> u32 {
        iso_weekday_from_days(self.day_count())
    }

    pub fn weekday(&self) -> Weekday {
        match self.iso_weekday() {
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            6 => Weekday::Sat,
            _ => Weekday::Sun
        }
    }

    #[inline]
    pub fn is_monday(&self) -> bool {
        self.iso_weekday() == 1
    }

    pub fn is_weekend(&self) -> bool {
        self.iso_weekday() >= 6
    }

    /// `None` only when the result leaves the `i32` year range.
    pub fn checked_add_days(&self, days: i64) -> Option<CalendarDate> {
        let n = self.day_count().checked_add(days)?;
        CalendarDate::from_day_count(n)
    }

    /// Day of the year, 1-based.
    pub fn ordinal(&self) -> u32 {
        (self.day_count() - days_from_civil(self.year, 1, 1)) as u32 + 1
    }

    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(d: NaiveDate) -> Self {
        CalendarDate { year: d.year(), month: d.month(), day: d.day() }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = DateValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        datevalidator::parse(s)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn rejects_impossible_days() {
        assert!(CalendarDate::new(2023, 2, 29).is_err());
        assert!(CalendarDate::new(1900, 2, 29).is_err());
        assert!(CalendarDate::new(2024, 4, 31).is_err());
        assert!(CalendarDate::new(2024, 0, 1).is_err());
        assert!(CalendarDate::new(2024, 1, 0).is_err());
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
        assert!(CalendarDate::new(2000, 2, 29).is_ok());
    }

    #[test]
    fn weekday_agrees_with_chrono() {
        let mut d = NaiveDate::from_ymd_opt(1999, 12, 20).unwrap();
        for _ in 0..800 {
            assert_eq!(CalendarDate::from(d).weekday(), d.weekday());
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn adding_days_rolls_over_month_and_year() {
        assert_eq!(date(2024, 12, 30).checked_add_days(3), Some(date(2025, 1, 2)));
        assert_eq!(date(2024, 3, 31).checked_add_days(-2), Some(date(2024, 3, 29)));
        assert_eq!(date(2024, 2, 28).checked_add_days(1), Some(date(2024, 2, 29)));
        assert_eq!(date(2023, 2, 28).checked_add_days(1), Some(date(2023, 3, 1)));
    }

    #[test]
    fn adding_days_past_the_year_range_is_none() {
        assert_eq!(date(i32::MAX, 12, 31).checked_add_days(1), None);
    }

    #[test]
    fn day_counts_beyond_the_year_range_are_none() {
        assert_eq!(CalendarDate::from_day_count(i64::MAX - 10), None);
        assert_eq!(CalendarDate::from_day_count(i64::MIN), None);
        assert_eq!(date(2024, 3, 31).checked_add_days(9_223_372_036_854_056_400), None);
        let last = date(i32::MAX, 12, 31);
        assert_eq!(CalendarDate::from_day_count(last.day_count()), Some(last));
        let first = date(i32::MIN, 1, 1);
        assert_eq!(CalendarDate::from_day_count(first.day_count()), Some(first));
    }

    #[test]
    fn naive_date_round_trip() {
        let naive = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let d = CalendarDate::from(naive);
        assert_eq!(d, date(2024, 2, 29));
        assert_eq!(d.to_naive_date(), Some(naive));
        // chrono covers a narrower year range
        assert_eq!(date(i32::MAX, 1, 1).to_naive_date(), None);
    }

    #[test]
    fn ordinal_counts_from_january_first() {
        assert_eq!(date(2024, 1, 1).ordinal(), 1);
        assert_eq!(date(2024, 12, 31).ordinal(), 366);
        assert_eq!(date(2023, 12, 31).ordinal(), 365);
    }

    #[test]
    fn ordering_is_chronological() {
        assert!(date(2024, 1, 31) < date(2024, 2, 1));
        assert!(date(2023, 12, 31) < date(2024, 1, 1));
    }

    #[test]
    fn displays_zero_padded() {
        assert_eq!(date(2024, 1, 8).to_string(), "2024/01/08");
    }

    #[test]
    fn serializes_as_string() {
        let d = date(2024, 3, 29);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2024/03/29\"");
        let back: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
        assert!(serde_json::from_str::<CalendarDate>("\"2024/02/30\"").is_err());
    }
}
