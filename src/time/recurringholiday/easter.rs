use crate::time::calendardate::CalendarDate;

/// Western Easter Sunday by the Gauss congruence (constants M = 24, N = 5).
///
/// Easter falls `d + e + 7` days after March 15, except that April 26 becomes
/// April 19 and, when `d = 28, e = 6`, April 25 becomes April 18. Any year is
/// accepted; the constants are exact for 1900..=2099.
pub fn easter_sunday(year: i32) -> CalendarDate {
    let a = year.rem_euclid(19);
    let b = year.rem_euclid(4);
    let c = year.rem_euclid(7);
    let d = (19 * a + 24) % 30;
    let e = (2 * b + 4 * c + 6 * d + 5) % 7;

    let shift = match (d, e) {
        (29, 6) => d + e - 7,
        (28, 6) if a > 10 => d + e - 7,
        _ => d + e
    };

    // March 22 to April 25
    let march_day = (15 + shift + 7) as u32;
    if march_day <= 31 {
        CalendarDate::from_valid_parts(year, 3, march_day)
    } else {
        CalendarDate::from_valid_parts(year, 4, march_day - 31)
    }
}
