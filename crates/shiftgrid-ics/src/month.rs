use chrono::{Datelike, Days, Months, NaiveDate};

/// A target calendar month.
///
/// Construction validates the fields, so the date arithmetic below cannot
/// fail.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Build a month from a year and a 1-based month number.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("validated in Month::new")
    }

    /// Number of days in the month (28–31).
    pub fn day_count(&self) -> u32 {
        let next_month = self.first_day() + Months::new(1);
        (next_month - Days::new(1)).day()
    }
}
