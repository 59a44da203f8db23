//! Age calculation against the school's reference year.

use chrono::{Datelike, Local, NaiveDate};

/// Year the school calendar is pinned to when computing ages.
pub const REFERENCE_YEAR: i32 = 1992;

/// Computes a person's age for today's month and day in the reference year.
///
/// # Returns
/// - Whole years since `date_of_birth`, or `0` when it is unknown
pub fn age(date_of_birth: Option<NaiveDate>) -> i32 {
    age_on(date_of_birth, Local::now().date_naive())
}

/// Computes a person's age on `today`'s month and day in the reference year.
pub fn age_on(date_of_birth: Option<NaiveDate>, today: NaiveDate) -> i32 {
    let Some(born) = date_of_birth else {
        return 0;
    };
    // 1992 is a leap year so every month/day pair exists
    let reference = today.with_year(REFERENCE_YEAR).unwrap_or(today);

    if born <= reference {
        whole_years(born, reference)
    } else {
        -whole_years(reference, born)
    }
}

fn whole_years(from: NaiveDate, to: NaiveDate) -> i32 {
    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    years
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn unknown_birth_date_is_zero() {
        assert_eq!(age_on(None, date(2026, 1, 1)), 0);
    }

    #[test]
    fn counts_years_up_to_reference_year() {
        let harry = Some(date(1980, 7, 31));

        assert_eq!(age_on(harry, date(2026, 7, 31)), 12);
        assert_eq!(age_on(harry, date(2026, 7, 30)), 11);
        assert_eq!(age_on(harry, date(2026, 12, 24)), 12);
    }

    #[test]
    fn leap_day_today_uses_reference_leap_day() {
        assert_eq!(age_on(Some(date(1980, 2, 29)), date(2028, 2, 29)), 12);
    }

    #[test]
    fn birth_after_reference_date_is_negative() {
        assert_eq!(age_on(Some(date(1995, 1, 1)), date(2026, 6, 1)), -2);
    }
}
