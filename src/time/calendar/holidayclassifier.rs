use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::time::calendardate::CalendarDate;
use crate::time::recurringholiday::holidayrule::{ComputationError, HolidayRule};

/// A rule's concrete occurrence in one year.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ExpandedHoliday {
    name: String,
    date: CalendarDate
}

impl ExpandedHoliday {
    pub fn new(name: &str, date: CalendarDate) -> ExpandedHoliday {
        ExpandedHoliday { name: name.to_owned(), date }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> CalendarDate {
        self.date
    }
}

pub fn expand_rule(year: i32, rule: &HolidayRule) -> Result<ExpandedHoliday, ComputationError> {
    let holiday = rule.recurring_holiday()?;
    let date = holiday.get_holiday(year).map_err(|e| rule.error(e))?;
    trace!(rule = rule.name(), %date, "expanded holiday rule");
    Ok(ExpandedHoliday::new(rule.name(), date))
}

/// One occurrence per rule, in rule order. Coinciding dates are kept.
pub fn expand(year: i32, rules: &[HolidayRule]) -> Result<Vec<ExpandedHoliday>, ComputationError> {
    rules.iter().map(|rule| expand_rule(year, rule)).collect()
}

/// [`expand`], sorted by date. Rules on the same day keep their rule order.
pub fn holidays_in_year(year: i32, rules: &[HolidayRule]) -> Result<Vec<ExpandedHoliday>, ComputationError> {
    let mut holidays = expand(year, rules)?;
    holidays.sort_by_key(|h| h.date);
    Ok(holidays)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::recurringholiday::holidayrule::RuleError;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn expands_each_kind() {
        let rules = vec![
            HolidayRule::fixed("Año nuevo", 1, 1),
            HolidayRule::fixed_monday("Santos Reyes", 1, 6),
            HolidayRule::easter_fixed("Viernes Santo", -2),
            HolidayRule::easter_monday("Corpus Christi", 61),
        ];
        let expanded = expand(2024, &rules).unwrap();
        assert_eq!(expanded, vec![
            ExpandedHoliday::new("Año nuevo", date(2024, 1, 1)),
            ExpandedHoliday::new("Santos Reyes", date(2024, 1, 8)),
            ExpandedHoliday::new("Viernes Santo", date(2024, 3, 29)),
            ExpandedHoliday::new("Corpus Christi", date(2024, 6, 3)),
        ]);
    }

    #[test]
    fn coinciding_rules_are_not_merged() {
        // Easter 2024 is March 31; +1 is Monday April 1
        let rules = vec![
            HolidayRule::easter_fixed("A", 1),
            HolidayRule::easter_monday("B", 1),
            HolidayRule::fixed("C", 4, 1),
        ];
        let expanded = expand(2024, &rules).unwrap();
        assert_eq!(expanded.len(), 3);
        assert!(expanded.iter().all(|h| h.date() == date(2024, 4, 1)));
    }

    #[test]
    fn sorted_listing_orders_by_date() {
        let rules = vec![
            HolidayRule::fixed("Navidad", 12, 25),
            HolidayRule::easter_fixed("Domingo de Pascua", 0),
            HolidayRule::fixed("Año nuevo", 1, 1),
        ];
        let names: Vec<String> = holidays_in_year(2024, &rules)
            .unwrap()
            .into_iter()
            .map(|h| h.name().to_owned())
            .collect();
        assert_eq!(names, ["Año nuevo", "Domingo de Pascua", "Navidad"]);
    }

    #[test]
    fn bad_rule_is_a_computation_error() {
        let rules = vec![
            HolidayRule::fixed("Año nuevo", 1, 1),
            HolidayRule::from_raw("Raro", 7, 1, 1, 0),
        ];
        let err = expand(2024, &rules).unwrap_err();
        assert_eq!(err.name(), "Raro");
        assert_eq!(err.rule_error(), &RuleError::UnknownType(7));
    }

    #[test]
    fn impossible_fixed_date_is_rejected_in_every_year() {
        let rules = vec![HolidayRule::fixed("Abril 31", 4, 31)];
        for year in [2023, 2024] {
            let err = expand(year, &rules).unwrap_err();
            assert_eq!(err.rule_error(), &RuleError::InvalidMonthDay { month: 4, day: 31 });
        }
    }

    #[test]
    fn huge_easter_offset_is_an_overflow() {
        let rules = vec![HolidayRule::easter_fixed("Huge", 9_223_372_036_854_056_400)];
        let err = expand(2024, &rules).unwrap_err();
        assert_eq!(err.rule_error(), &RuleError::Overflow(2024));
    }

    #[test]
    fn empty_catalog_expands_to_nothing() {
        assert!(expand(2024, &[]).unwrap().is_empty());
    }
}
