//! Wall clock used by the planner. All dates are local calendar dates.

#[cfg(test)]
use std::{cell::Cell, rc::Rc};

use chrono::{Local, NaiveDate, NaiveDateTime};
#[cfg(test)]
use chrono::{Duration, NaiveTime};

pub trait Clock {
    /// Current local date and time
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// System local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Manually driven clock for tests. Clones share the same instant, so a test can keep
/// a handle and move time after handing the clock to a planner.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Rc<Cell<NaiveDateTime>>,
}

#[cfg(test)]
impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now: Rc::new(Cell::new(now)) }
    }

    /// 09:00 on the given date
    pub fn at_date(date: NaiveDate) -> Self {
        Self::new(date.and_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN)))
    }

    pub fn set(&self, now: NaiveDateTime) {
        self.now.set(now);
    }

    pub fn advance_days(&self, days: i64) {
        self.now.set(self.now.get() + Duration::days(days));
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}
