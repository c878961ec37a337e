use std::cell::Cell;

use chrono::{Duration, Local, NaiveDate};

/// Source of "today" for the ledger. Aggregations ask the clock on every call,
/// so a ledger kept across midnight reports against the new day.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Calendar date of the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to a given date. The date can be moved with `set` and
/// `advance_days`, which lets a test observe a ledger across a day change.
#[derive(Debug, Clone)]
pub struct FixedClock {
    today: Cell<NaiveDate>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Cell::new(today),
        }
    }

    pub fn set(&self, today: NaiveDate) {
        self.today.set(today);
    }

    pub fn advance_days(&self, days: i64) {
        self.today.set(self.today.get() + Duration::days(days));
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today.get()
    }
}
