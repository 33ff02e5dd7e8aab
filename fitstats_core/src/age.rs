//! Whole-year age calculation.

use chrono::{Datelike, NaiveDate};

/// Compute age in whole years as of a given reference date.
///
/// The reference date is injected rather than read from the system clock
/// so the computation is deterministic. Start from the calendar-year
/// difference and subtract one if the birthday has not yet occurred in the
/// reference year. A future birth date is a caller precondition violation.
pub fn age_years(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_before_birthday() {
        assert_eq!(age_years(date(2000, 6, 15), date(2024, 6, 14)), 23);
    }

    #[test]
    fn test_on_birthday() {
        assert_eq!(age_years(date(2000, 6, 15), date(2024, 6, 15)), 24);
    }

    #[test]
    fn test_day_after_birthday() {
        assert_eq!(age_years(date(2000, 6, 15), date(2024, 6, 16)), 24);
    }

    #[test]
    fn test_earlier_month() {
        assert_eq!(age_years(date(2000, 6, 15), date(2024, 2, 1)), 23);
    }

    #[test]
    fn test_leap_day_birthday() {
        // Feb 29 birthday only "occurs" on Mar 1 in common years
        assert_eq!(age_years(date(2004, 2, 29), date(2025, 2, 28)), 20);
        assert_eq!(age_years(date(2004, 2, 29), date(2025, 3, 1)), 21);
    }

    #[test]
    fn test_newborn() {
        assert_eq!(age_years(date(2024, 6, 15), date(2024, 6, 15)), 0);
    }
}
