use chrono::{Duration, NaiveDate};
use tracing::debug;

use super::{Amount, Clock, Record, SystemClock};

/// Length of the trailing window reported by `Ledger::week_total`.
pub const WEEK_DAYS: i64 = 7;

/// Sum of all records dated on `day`.
pub fn day_total(records: &[Record], day: NaiveDate) -> Amount {
    records
        .iter()
        .filter(|r| r.date == day)
        .fold(0.0, |total, r| total + r.amount)
}

/// Bounds of the trailing week ending on `today`: `(start, end]`, so the start
/// date itself is outside the window and `today` is inside.
pub fn week_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today - Duration::days(WEEK_DAYS), today)
}

/// Sum of all records inside the trailing week ending on `today`.
/// Future-dated records fall outside the window.
pub fn window_total(records: &[Record], today: NaiveDate) -> Amount {
    let (start, end) = week_window(today);
    records
        .iter()
        .filter(|r| r.date > start && r.date <= end)
        .fold(0.0, |total, r| total + r.amount)
}

/// A daily limit together with the records counted against it.
/// Records are append-only; totals are recomputed on each call against the
/// clock's current date.
#[derive(Debug, Clone)]
pub struct Ledger<C = SystemClock> {
    limit: Amount,
    records: Vec<Record>,
    clock: C,
}

impl Ledger<SystemClock> {
    pub fn new(limit: Amount) -> Self {
        Self::with_clock(limit, SystemClock)
    }
}

impl<C: Clock> Ledger<C> {
    pub fn with_clock(limit: Amount, clock: C) -> Self {
        Self {
            limit,
            records: Vec::new(),
            clock,
        }
    }

    pub fn limit(&self) -> Amount {
        self.limit
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn add_record(&mut self, record: Record) {
        debug!(
            amount = record.amount,
            date = %record.date,
            comment = %record.comment,
            "record added"
        );
        self.records.push(record);
    }

    pub fn today_total(&self) -> Amount {
        let today = self.today();
        let total = day_total(&self.records, today);
        debug!(%today, total, "today total");
        total
    }

    pub fn week_total(&self) -> Amount {
        let today = self.today();
        let total = window_total(&self.records, today);
        debug!(%today, total, "week total");
        total
    }

    /// Limit minus today's total. Positive is what is left, negative is debt.
    pub fn check_limit(&self) -> Amount {
        self.limit - self.today_total()
    }
}
