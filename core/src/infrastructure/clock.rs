use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, Utc};

use crate::domain::common::ports::Clock;

/// Wall clock; the calendar date follows the machine's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Frozen time, for tests and replays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock {
    pub now: DateTime<Utc>,
    pub today: NaiveDate,
}

impl FixedClock {
    /// Early morning of `date`, UTC.
    pub fn on(date: NaiveDate) -> Self {
        let now = (date.and_time(NaiveTime::default()) + Duration::hours(4)).and_utc();
        Self { now, today: date }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}
