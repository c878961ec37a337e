// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use chrono::NaiveDate;
use daylimit::application::{CalorieReport, CashReport};
use daylimit::domain::{Amount, FixedClock, Ledger, Record};

/// Helper to parse a date string (YYYY-MM-DD) into a NaiveDate
pub fn date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Helper to create a ledger whose "today" is pinned to `today`
pub fn ledger_on(today: &str, limit: Amount) -> Ledger<FixedClock> {
    Ledger::with_clock(limit, FixedClock::new(date(today)))
}

pub fn cash_on(today: &str, limit: Amount) -> CashReport<FixedClock> {
    CashReport::with_clock(limit, FixedClock::new(date(today)))
}

pub fn calories_on(today: &str, limit: Amount) -> CalorieReport<FixedClock> {
    CalorieReport::with_clock(limit, FixedClock::new(date(today)))
}

/// Test fixture: the sample spending used throughout the docs
pub struct SampleSpending;

impl SampleSpending {
    /// 145 and 1000 today, 3000 on 04.06.2021 and 3000 on 30.05.2021
    pub fn add_to(ledger: &mut Ledger<FixedClock>) -> anyhow::Result<()> {
        let coffee = Record::parse(145.0, "кофе", None, ledger.clock())?;
        let lunch = Record::parse(1000.0, "Серёге за обед", None, ledger.clock())?;
        let party = Record::parse(3000.0, "бар в Танин др", Some("04.06.2021"), ledger.clock())?;
        let bar = Record::parse(3000.0, "бар", Some("30.05.2021"), ledger.clock())?;

        for record in [coffee, lunch, party, bar] {
            ledger.add_record(record);
        }
        Ok(())
    }
}
