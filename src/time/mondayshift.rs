use crate::time::calendardate::CalendarDate;

/// Days to the next Monday, indexed by ISO weekday - 1 (Monday first).
/// A Monday stays where it is.
const DAYS_TO_MONDAY: [i64; 7] = [0, 6, 5, 4, 3, 2, 1];

#[inline]
pub fn days_to_monday(d: &CalendarDate) -> i64 {
    DAYS_TO_MONDAY[(d.iso_weekday() - 1) as usize]
}

/// Moves `d` forward to the first Monday on or after it (Ley de Puente).
///
/// Returns `None` only when that Monday lies beyond the last representable year.
pub fn shift_to_monday(d: CalendarDate) -> Option<CalendarDate> {
    match days_to_monday(&d) {
        0 => Some(d),
        n => d.checked_add_days(n)
    }
}


#[cfg(test)]
mod tests {
    use chrono::Weekday;
    use proptest::prelude::*;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn saturday_moves_to_following_monday() {
        assert_eq!(shift_to_monday(date(2024, 1, 6)), Some(date(2024, 1, 8)));
    }

    #[test]
    fn tuesday_crosses_month_end() {
        // 2024-04-30 is a Tuesday
        assert_eq!(shift_to_monday(date(2024, 4, 30)), Some(date(2024, 5, 6)));
    }

    #[test]
    fn crosses_year_end() {
        // 2025-12-30 is a Tuesday
        assert_eq!(shift_to_monday(date(2025, 12, 30)), Some(date(2026, 1, 5)));
    }

    #[test]
    fn monday_is_kept() {
        assert_eq!(shift_to_monday(date(2024, 1, 8)), Some(date(2024, 1, 8)));
    }

    proptest! {
        #[test]
        fn lands_on_monday_within_six_days(n in -800_000i64..800_000) {
            let d = CalendarDate::from_day_count(n).unwrap();
            let shifted = shift_to_monday(d).unwrap();
            prop_assert_eq!(shifted.weekday(), Weekday::Mon);
            prop_assert!(shifted >= d);
            prop_assert!(shifted.day_count() - d.day_count() <= 6);
        }

        #[test]
        fn is_idempotent(n in -800_000i64..800_000) {
            let d = CalendarDate::from_day_count(n).unwrap();
            let once = shift_to_monday(d).unwrap();
            prop_assert_eq!(shift_to_monday(once), Some(once));
        }
    }
}
