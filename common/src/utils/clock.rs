use chrono::{Datelike, Local, NaiveDate};

/// Today's date in the local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whole calendar years between two dates, counted by year number only.
///
/// A phone released on 2023-12-31 is one year old on 2024-01-01.
pub fn calendar_years_between(earlier: NaiveDate, later: NaiveDate) -> i32 {
    later.year() - earlier.year()
}
