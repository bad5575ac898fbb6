use chrono::{DateTime, NaiveDate, Utc};

/// Source of wall-clock time and the user's local calendar date.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Local calendar date; day boundaries follow local midnight, not UTC.
    fn today(&self) -> NaiveDate;
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
